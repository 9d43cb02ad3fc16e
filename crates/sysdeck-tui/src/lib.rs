//! sysdeck-tui - Terminal UI for Sysdeck
//!
//! The display surface: three addressable regions (`os`, `app`, `env`)
//! rendered with ratatui, plus terminal event polling and the main loop that
//! connects to the host runtime and drives the update cycle.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;

// Re-export main entry point
pub use runner::run;
