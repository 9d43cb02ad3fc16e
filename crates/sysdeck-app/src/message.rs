//! Message types for the application (TEA pattern)

use sysdeck_core::{AppConfig, EnvVar, HostEvent, OsInfo};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Lifecycle event from the host runtime
    Host(HostEvent),

    /// Tick event generated while the terminal is idle
    Tick,

    /// Request to quit (keyboard path; the host's windowClose signal takes
    /// the same route through the update function)
    RequestQuit,

    // ─────────────────────────────────────────────────────────
    // Loader Completions
    // ─────────────────────────────────────────────────────────
    /// OS metadata fetch succeeded
    OsInfoLoaded { info: OsInfo },
    /// OS metadata fetch failed
    OsInfoFailed { error: String },

    /// App configuration fetch succeeded
    AppConfigLoaded { config: AppConfig },
    /// App configuration fetch failed
    AppConfigFailed { error: String },

    /// Environment fetch succeeded; entries are in host order
    EnvsLoaded { envs: Vec<EnvVar> },
    /// Environment fetch failed
    EnvsFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Environment Row Selection / Copy
    // ─────────────────────────────────────────────────────────
    /// Move the row selection up one entry
    SelectPrevRow,
    /// Move the row selection down one entry
    SelectNextRow,

    /// Activate the selected row's copy control
    CopySelected,
    /// The clipboard write for `row` succeeded
    CopySucceeded { row: usize },
    /// The clipboard write for `row` failed (log-only; no UI change)
    CopyFailed { row: usize, error: String },
    /// The copy-feedback delay for `row` elapsed. Ignored unless
    /// `generation` still matches the row's active feedback window.
    CopyResetElapsed { row: usize, generation: u64 },
}
