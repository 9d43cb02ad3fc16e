//! Handler module - TEA update function
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key-to-message translation

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Asynchronous work the event loop should dispatch after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch OS metadata and render it into the `os` region
    LoadOsInfo,

    /// Fetch the app configuration and render it into the `app` region
    LoadAppInfo,

    /// Fetch the environment map and append rows to the `env` region
    LoadEnvs,

    /// Write `text` (a row's captured value) to the system clipboard
    CopyToClipboard { row: usize, text: String },

    /// Deliver `CopyResetElapsed` for this row after the feedback delay
    ScheduleCopyReset { row: usize, generation: u64 },

    /// Ask the host to terminate the process
    RequestExit,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to dispatch
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
