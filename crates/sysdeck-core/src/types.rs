//! Domain types shared across the Sysdeck crates

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Connection to the host runtime established, waiting for the ready signal
    #[default]
    Connecting,

    /// Host signalled readiness; loaders have been dispatched
    Running,

    /// Termination requested; the event loop exits on the next iteration
    Quitting,
}

impl AppPhase {
    /// Returns `true` once termination has been requested.
    pub fn is_quitting(self) -> bool {
        matches!(self, AppPhase::Quitting)
    }
}

/// Operating-system metadata reported by the host runtime
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    pub name: String,
    pub version: String,
}

/// The application's own configuration as the host runtime sees it.
///
/// The host reports more fields than these; everything beyond the
/// identifier (and version, when present) is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub application_id: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// One environment variable entry.
///
/// Entries carry no ordering key of their own: a `Vec<EnvVar>` preserves
/// whatever order the host sent, which is the order rows are rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
