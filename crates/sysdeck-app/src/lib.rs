//! sysdeck-app - Application state and orchestration for Sysdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! panel: host lifecycle events and loader completions arrive as [`Message`]
//! values, [`handler::update`] is the single state mutator, and
//! [`actions::handle_action`] dispatches the asynchronous host calls the
//! update function asked for.

pub mod actions;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod runtime;
pub mod settings;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use runtime::{forward_host_events, process_message};
pub use settings::Settings;
pub use state::AppState;
