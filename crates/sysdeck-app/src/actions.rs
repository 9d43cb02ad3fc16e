//! Action dispatcher: spawns the asynchronous host calls requested by the
//! update function.
//!
//! Every spawned task reports back by posting a message; none of them touch
//! state directly. Loader failures are converted to their failure message
//! here so the update function only ever sees strings it can render.

use std::time::Duration;

use tokio::sync::mpsc;

use sysdeck_core::prelude::*;
use sysdeck_host::HostBridge;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Dispatch one action produced by the update function.
///
/// `copy_feedback` is the delay before a copy control's label is restored.
pub fn handle_action<B>(
    action: UpdateAction,
    bridge: &B,
    msg_tx: &mpsc::Sender<Message>,
    copy_feedback: Duration,
) where
    B: HostBridge + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadOsInfo => spawn_os_info(bridge.clone(), msg_tx.clone()),
        UpdateAction::LoadAppInfo => spawn_app_info(bridge.clone(), msg_tx.clone()),
        UpdateAction::LoadEnvs => spawn_envs(bridge.clone(), msg_tx.clone()),
        UpdateAction::CopyToClipboard { row, text } => {
            spawn_copy(bridge.clone(), msg_tx.clone(), row, text)
        }
        UpdateAction::ScheduleCopyReset { row, generation } => {
            spawn_copy_reset(msg_tx.clone(), row, generation, copy_feedback)
        }
        UpdateAction::RequestExit => spawn_exit_request(bridge.clone()),
    }
}

fn spawn_os_info<B>(bridge: B, msg_tx: mpsc::Sender<Message>)
where
    B: HostBridge + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match bridge.os_info().await {
            Ok(info) => Message::OsInfoLoaded { info },
            Err(e) => Message::OsInfoFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(message).await;
    });
}

fn spawn_app_info<B>(bridge: B, msg_tx: mpsc::Sender<Message>)
where
    B: HostBridge + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match bridge.app_config().await {
            Ok(config) => Message::AppConfigLoaded { config },
            Err(e) => Message::AppConfigFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(message).await;
    });
}

fn spawn_envs<B>(bridge: B, msg_tx: mpsc::Sender<Message>)
where
    B: HostBridge + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match bridge.envs().await {
            Ok(envs) => Message::EnvsLoaded { envs },
            Err(e) => Message::EnvsFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(message).await;
    });
}

fn spawn_copy<B>(bridge: B, msg_tx: mpsc::Sender<Message>, row: usize, text: String)
where
    B: HostBridge + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match bridge.clipboard_write(text).await {
            Ok(()) => Message::CopySucceeded { row },
            Err(e) => Message::CopyFailed {
                row,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(message).await;
    });
}

/// Deliver the feedback reset after the delay. Whether it still applies is
/// decided by the update function's generation check, so an outdated reset
/// from an earlier copy is harmless.
fn spawn_copy_reset(msg_tx: mpsc::Sender<Message>, row: usize, generation: u64, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = msg_tx
            .send(Message::CopyResetElapsed { row, generation })
            .await;
    });
}

fn spawn_exit_request<B>(bridge: B)
where
    B: HostBridge + Send + Sync + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = bridge.request_exit().await {
            warn!("Exit request not delivered: {e}");
        }
    });
}
