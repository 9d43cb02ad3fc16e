//! Message processing and host event routing.
//!
//! The display loop owns [`crate::AppState`] and feeds every message through
//! [`process_message`]; host lifecycle events are forwarded into the same
//! channel by [`forward_host_events`], which is what subscribes the
//! application to the host's `ready` and `windowClose` signals.

use std::time::Duration;

use tokio::sync::mpsc;

use sysdeck_core::HostEvent;
use sysdeck_host::HostBridge;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, dispatching any
/// resulting actions and follow-up messages.
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    bridge: &B,
    msg_tx: &mpsc::Sender<Message>,
    copy_feedback: Duration,
) where
    B: HostBridge + Clone + Send + Sync + 'static,
{
    let mut next = Some(message);
    while let Some(message) = next {
        let result = handler::update(state, message);

        for action in result.actions {
            handle_action(action, bridge, msg_tx, copy_feedback);
        }

        next = result.message;
    }
}

/// Forward host lifecycle events into the message channel.
///
/// Ends when either side closes; the task holds only channel ends, so it is
/// safely abandoned at process exit.
pub fn forward_host_events(mut event_rx: mpsc::Receiver<HostEvent>, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if msg_tx.send(Message::Host(event)).await.is_err() {
                break;
            }
        }
    });
}
