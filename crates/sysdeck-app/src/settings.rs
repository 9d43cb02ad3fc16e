//! Bootstrap settings loaded from `settings.toml`
//!
//! Only ambient wiring lives here: where the host runtime listens and how
//! long copy feedback stays visible. A missing or unreadable file falls back
//! to defaults with a warning, never an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use sysdeck_core::prelude::*;

/// Host runtime endpoint used when neither flag nor file provides one
pub const DEFAULT_HOST_URL: &str = "ws://127.0.0.1:23915/rpc";

/// How long a copy control shows its feedback label
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

const SETTINGS_FILENAME: &str = "settings.toml";
const CONFIG_DIR: &str = "sysdeck";

/// User-adjustable bootstrap settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// WebSocket URL of the host runtime
    pub host_url: String,
    /// Copy-feedback delay in milliseconds
    pub copy_feedback_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host_url: DEFAULT_HOST_URL.to_string(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
        }
    }
}

impl Settings {
    /// The copy-feedback delay as a [`Duration`].
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

/// Path of the settings file, if a config directory exists on this platform.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(SETTINGS_FILENAME))
}

/// Load settings from the platform config directory, falling back to
/// defaults when absent or unparseable.
pub fn load_settings() -> Settings {
    match settings_path() {
        Some(path) => load_from(&path),
        None => Settings::default(),
    }
}

fn load_from(path: &Path) -> Settings {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        // Missing file is the common case on first run
        Err(_) => return Settings::default(),
    };

    match toml::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring malformed {}: {e}", path.display());
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.host_url, DEFAULT_HOST_URL);
        assert_eq!(settings.copy_feedback(), Duration::from_millis(2000));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(
            &path,
            "host_url = \"ws://127.0.0.1:4000/rpc\"\ncopy_feedback_ms = 500\n",
        )
        .unwrap();

        let settings = load_from(&path);
        assert_eq!(settings.host_url, "ws://127.0.0.1:4000/rpc");
        assert_eq!(settings.copy_feedback_ms, 500);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, "host_url = \"ws://127.0.0.1:4000/rpc\"\n").unwrap();

        let settings = load_from(&path);
        assert_eq!(settings.host_url, "ws://127.0.0.1:4000/rpc");
        assert_eq!(settings.copy_feedback_ms, DEFAULT_COPY_FEEDBACK_MS);
    }

    #[test]
    fn test_missing_and_malformed_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.toml");
        assert_eq!(load_from(&missing), Settings::default());

        let malformed = dir.path().join(SETTINGS_FILENAME);
        fs::write(&malformed, "host_url = [not toml").unwrap();
        assert_eq!(load_from(&malformed), Settings::default());
    }
}
