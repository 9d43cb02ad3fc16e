//! Scripted host implementation for deterministic tests.
//!
//! `FakeHost` satisfies [`HostBridge`](crate::HostBridge) without any
//! connection: each capability resolves to a scripted outcome, optionally
//! after a simulated latency (driven by tokio's clock, so paused-time tests
//! control it). Clipboard writes and exit requests are recorded for
//! assertions.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sysdeck_core::prelude::*;
use sysdeck_core::{AppConfig, EnvVar, OsInfo};

use super::bridge::HostBridge;

/// Scripted outcome of one host capability
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    /// Resolve successfully with this value
    Ok(T),
    /// Resolve with a host failure carrying this message
    Fail(String),
    /// Never resolve (a call the host silently drops)
    Never,
}

impl<T: Clone> Scripted<T> {
    async fn resolve(&self) -> Result<T> {
        match self {
            Scripted::Ok(value) => Ok(value.clone()),
            Scripted::Fail(message) => Err(Error::host(message.clone())),
            Scripted::Never => std::future::pending().await,
        }
    }
}

#[derive(Debug, Default)]
struct Recorded {
    clipboard_texts: Vec<String>,
    exit_requests: u32,
}

/// Scripted host for tests
#[derive(Clone)]
pub struct FakeHost {
    os_info: Scripted<OsInfo>,
    app_config: Scripted<AppConfig>,
    envs: Scripted<Vec<EnvVar>>,
    clipboard: Scripted<()>,
    latency: Option<Duration>,
    recorded: Arc<Mutex<Recorded>>,
}

impl FakeHost {
    /// A host where every capability succeeds with canonical sample data.
    pub fn healthy() -> Self {
        Self {
            os_info: Scripted::Ok(OsInfo {
                name: "Linux".to_string(),
                version: "6.8.0".to_string(),
            }),
            app_config: Scripted::Ok(AppConfig {
                application_id: "org.example.panel".to_string(),
                version: Some("1.0.0".to_string()),
            }),
            envs: Scripted::Ok(vec![
                EnvVar::new("HOME", "/home/user"),
                EnvVar::new("PATH", "/usr/bin"),
            ]),
            clipboard: Scripted::Ok(()),
            latency: None,
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    pub fn with_os_info(mut self, script: Scripted<OsInfo>) -> Self {
        self.os_info = script;
        self
    }

    pub fn with_app_config(mut self, script: Scripted<AppConfig>) -> Self {
        self.app_config = script;
        self
    }

    pub fn with_envs(mut self, script: Scripted<Vec<EnvVar>>) -> Self {
        self.envs = script;
        self
    }

    pub fn with_clipboard(mut self, script: Scripted<()>) -> Self {
        self.clipboard = script;
        self
    }

    /// Delay every capability by `latency` of tokio-clock time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Texts written to the clipboard so far, in call order.
    pub fn clipboard_texts(&self) -> Vec<String> {
        self.recorded.lock().unwrap().clipboard_texts.clone()
    }

    /// Number of termination requests received.
    pub fn exit_requests(&self) -> u32 {
        self.recorded.lock().unwrap().exit_requests
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl HostBridge for FakeHost {
    async fn os_info(&self) -> Result<OsInfo> {
        self.simulate_latency().await;
        self.os_info.resolve().await
    }

    async fn app_config(&self) -> Result<AppConfig> {
        self.simulate_latency().await;
        self.app_config.resolve().await
    }

    async fn envs(&self) -> Result<Vec<EnvVar>> {
        self.simulate_latency().await;
        self.envs.resolve().await
    }

    async fn clipboard_write(&self, text: String) -> Result<()> {
        self.simulate_latency().await;
        self.clipboard.resolve().await?;
        self.recorded.lock().unwrap().clipboard_texts.push(text);
        Ok(())
    }

    async fn request_exit(&self) -> Result<()> {
        self.recorded.lock().unwrap().exit_requests += 1;
        Ok(())
    }
}
