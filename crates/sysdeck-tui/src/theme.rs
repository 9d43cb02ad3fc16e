//! Colors and styles for the panel

use ratatui::style::{Color, Modifier, Style};

/// Region titles and chrome
pub const BORDER: Color = Color::DarkGray;
/// Error text inside a region
pub const ERROR: Color = Color::Red;
/// Copy-feedback label
pub const SUCCESS: Color = Color::Green;
/// Placeholder text before a loader has answered
pub const PENDING: Color = Color::DarkGray;

pub fn border_style() -> Style {
    Style::new().fg(BORDER)
}

pub fn error_style() -> Style {
    Style::new().fg(ERROR)
}

pub fn pending_style() -> Style {
    Style::new().fg(PENDING).add_modifier(Modifier::ITALIC)
}

/// Resting copy control
pub fn copy_style() -> Style {
    Style::new().fg(Color::Cyan)
}

/// Copy control while its feedback window is active
pub fn copied_style() -> Style {
    Style::new().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

/// Selected env row
pub fn selection_style() -> Style {
    Style::new().add_modifier(Modifier::REVERSED)
}

/// Footer key hints
pub fn hint_style() -> Style {
    Style::new().fg(Color::DarkGray)
}
