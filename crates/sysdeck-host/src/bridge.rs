//! The host capability surface consumed by the application layer.
//!
//! Production code talks to the real connection through [`HostHandle`];
//! tests inject [`crate::test_utils::FakeHost`]. Both implement the same
//! trait, so the loaders and the update loop never know which one they got.

use sysdeck_core::prelude::*;
use sysdeck_core::{AppConfig, EnvVar, OsInfo};

use super::client::HostHandle;
use super::commands::HostCommand;

/// Host operations this panel depends on
#[trait_variant::make(HostBridge: Send)]
pub trait LocalHostBridge {
    /// Fetch OS name and version
    async fn os_info(&self) -> Result<OsInfo>;

    /// Fetch the application's own configuration
    async fn app_config(&self) -> Result<AppConfig>;

    /// Fetch all environment variables, in the host's order
    async fn envs(&self) -> Result<Vec<EnvVar>>;

    /// Write `text` to the system clipboard
    async fn clipboard_write(&self, text: String) -> Result<()>;

    /// Request process termination. Fire-and-forget: the host may exit
    /// before any response could arrive.
    async fn request_exit(&self) -> Result<()>;
}

impl HostBridge for HostHandle {
    async fn os_info(&self) -> Result<OsInfo> {
        let value = self.request(HostCommand::GetOsInfo).await?.into_result()?;
        Ok(serde_json::from_value(value)?)
    }

    async fn app_config(&self) -> Result<AppConfig> {
        let value = self.request(HostCommand::GetConfig).await?.into_result()?;
        Ok(serde_json::from_value(value)?)
    }

    async fn envs(&self) -> Result<Vec<EnvVar>> {
        let value = self.request(HostCommand::GetEnvs).await?.into_result()?;
        let map = value
            .as_object()
            .ok_or_else(|| Error::protocol("os.getEnvs result is not an object"))?;

        // serde_json is built with preserve_order, so iteration here is the
        // host's own key order.
        Ok(map
            .iter()
            .map(|(key, value)| EnvVar {
                key: key.clone(),
                value: value
                    .as_str()
                    .map(str::to_owned)
                    .unwrap_or_else(|| value.to_string()),
            })
            .collect())
    }

    async fn clipboard_write(&self, text: String) -> Result<()> {
        self.request(HostCommand::ClipboardWrite { text })
            .await?
            .into_result()?;
        Ok(())
    }

    async fn request_exit(&self) -> Result<()> {
        self.fire_and_forget(HostCommand::Exit).await
    }
}
