//! Async WebSocket client for the host runtime.
//!
//! [`HostConnection::connect`] establishes the connection and spawns one
//! background task that owns both halves of the socket: it writes request
//! frames, routes response frames back to callers through the
//! [`RequestTracker`], and forwards lifecycle events to the application's
//! event channel. Callers hold a clonable [`HostHandle`] that talks to the
//! task over a command channel, so any number of concurrent requests share
//! the single connection.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use sysdeck_core::prelude::*;
use sysdeck_core::{HostEvent, HostMessage};

use super::commands::{next_request_id, CommandResponse, HostCommand, RequestTracker};
use super::protocol::parse_host_message;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Instruction from a [`HostHandle`] to the connection task
enum ClientCommand {
    /// Send a request and route the response to `response_tx`
    Request {
        command: HostCommand,
        response_tx: oneshot::Sender<CommandResponse>,
    },
    /// Send a request without waiting for any response
    FireAndForget { command: HostCommand },
}

/// Establishes the host runtime connection.
pub struct HostConnection;

impl HostConnection {
    /// Connect to the host runtime at `url` and spawn the connection task.
    ///
    /// Lifecycle events from the host are forwarded to `event_tx`. There is
    /// no retry: if the host is not accepting connections this returns
    /// [`Error::Connect`] and the caller treats it as fatal.
    pub async fn connect(url: &str, event_tx: mpsc::Sender<HostEvent>) -> Result<HostHandle> {
        let (ws, _response) = connect_async(url)
            .await
            .map_err(|e| Error::connect(e.to_string()))?;

        info!("Connected to host runtime at {url}");

        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        tokio::spawn(Self::connection_task(ws, cmd_rx, event_tx));

        Ok(HostHandle { cmd_tx })
    }

    /// Background task: owns the socket, correlates responses, forwards events.
    ///
    /// Ends when either every [`HostHandle`] is dropped or the host closes
    /// the connection; pending requests are then failed and a
    /// [`HostEvent::Disconnected`] is emitted.
    async fn connection_task(
        ws: WsStream,
        mut cmd_rx: mpsc::Receiver<ClientCommand>,
        event_tx: mpsc::Sender<HostEvent>,
    ) {
        let (mut sink, mut stream) = ws.split();
        let tracker = RequestTracker::new();

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => match cmd {
                    Some(ClientCommand::Request { command, response_tx }) => {
                        let (id, response_rx) = tracker.register().await;
                        debug!("Sending request #{}: {}", id, command.description());

                        let frame = command.build(id);
                        if sink.send(WsMessage::Text(frame.into())).await.is_err() {
                            tracker.fail(id, "connection closed").await;
                        }

                        // Pipe the tracked response to the caller without
                        // holding up this loop.
                        tokio::spawn(async move {
                            if let Ok(response) = response_rx.await {
                                let _ = response_tx.send(response);
                            }
                        });
                    }
                    Some(ClientCommand::FireAndForget { command }) => {
                        let id = next_request_id();
                        debug!("Sending fire-and-forget #{}: {}", id, command.description());
                        let frame = command.build(id);
                        if let Err(e) = sink.send(WsMessage::Text(frame.into())).await {
                            warn!("Fire-and-forget '{}' not sent: {e}", command.description());
                        }
                    }
                    None => {
                        debug!("All host handles dropped, closing connection");
                        break;
                    }
                },

                frame = stream.next() => match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        Self::route_frame(text.as_str(), &tracker, &event_tx).await;
                    }
                    Some(Ok(WsMessage::Close(_))) | None => {
                        info!("Host closed the connection");
                        break;
                    }
                    Some(Ok(_)) => {
                        // Binary/ping/pong frames carry nothing for us
                    }
                    Some(Err(e)) => {
                        error!("Host connection error: {e}");
                        break;
                    }
                },
            }
        }

        tracker.cancel_all().await;
        let _ = event_tx.send(HostEvent::Disconnected).await;
    }

    /// Route one parsed frame to the tracker or the event channel.
    async fn route_frame(text: &str, tracker: &RequestTracker, event_tx: &mpsc::Sender<HostEvent>) {
        match parse_host_message(text) {
            Some(HostMessage::Response { id, result, error }) => {
                if !tracker.handle_response(id, result, error).await {
                    warn!("Response #{id} matched no pending request");
                }
            }
            Some(HostMessage::Event(event)) => {
                debug!("Host event: {}", event.name());
                let _ = event_tx.send(event).await;
            }
            Some(HostMessage::UnknownEvent { event, .. }) => {
                debug!("Ignoring unhandled host event: {event}");
            }
            None => {
                warn!("Unparseable frame from host: {text}");
            }
        }
    }
}

/// A clonable handle for making requests over the host connection.
///
/// The handle becomes inoperable once the connection task exits; requests
/// then return [`Error::ChannelClosed`].
#[derive(Clone)]
pub struct HostHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl std::fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandle")
            .field("cmd_tx", &"<channel>")
            .finish()
    }
}

impl HostHandle {
    /// Send a request and wait for the host's response.
    ///
    /// No timeout is applied: a request the host never answers resolves only
    /// when the connection closes (as a cancelled-response error).
    pub async fn request(&self, command: HostCommand) -> Result<CommandResponse> {
        let (response_tx, response_rx) = oneshot::channel();

        self.cmd_tx
            .send(ClientCommand::Request {
                command,
                response_tx,
            })
            .await
            .map_err(|_| Error::ChannelClosed)?;

        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// Send a request without waiting for a response.
    pub async fn fire_and_forget(&self, command: HostCommand) -> Result<()> {
        self.cmd_tx
            .send(ClientCommand::FireAndForget { command })
            .await
            .map_err(|_| Error::channel_send("host connection"))
    }

    /// Create a `HostHandle` backed by a disconnected dummy channel.
    ///
    /// Intended for unit tests that need a handle but never touch the wire;
    /// requests on it fail with [`Error::ChannelClosed`].
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn new_disconnected() -> Self {
        let (cmd_tx, _cmd_rx) = mpsc::channel(1);
        Self { cmd_tx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disconnected_handle_fails_requests() {
        let handle = HostHandle::new_disconnected();

        let result = handle.request(HostCommand::GetOsInfo).await;
        assert!(matches!(result, Err(Error::ChannelClosed)));

        let result = handle.fire_and_forget(HostCommand::Exit).await;
        assert!(matches!(result, Err(Error::ChannelSend { .. })));
    }
}
