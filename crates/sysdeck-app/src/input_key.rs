//! Terminal-independent key representation.
//!
//! The TUI crate translates backend key events into these before they enter
//! the update loop, so handler tests never need a terminal.

/// A pressed key, normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Up,
    Down,
    Enter,
    Esc,
}
