//! Request building and response tracking for host communication
//!
//! This module provides:
//! - Request ID tracking for matching responses
//! - Typed commands for every host capability this panel uses
//!
//! Requests carry no timeout: a host call that never resolves simply leaves
//! its pending entry in place (and its display region in the initial state)
//! until the connection closes and `cancel_all` fails it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::{oneshot, RwLock};

use sysdeck_core::prelude::*;

/// Global request ID counter
static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique request ID
pub fn next_request_id() -> u64 {
    REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A pending request awaiting response
struct PendingRequest {
    /// Channel to send the response
    response_tx: oneshot::Sender<CommandResponse>,
}

/// Response from a host request
#[derive(Debug, Clone)]
pub struct CommandResponse {
    pub id: u64,
    pub success: bool,
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn from_host_response(id: u64, result: Option<Value>, error: Option<Value>) -> Self {
        Self {
            id,
            success: error.is_none(),
            result,
            error: error.map(render_error_value),
        }
    }

    /// Create a success response
    pub fn success(id: u64, result: Option<Value>) -> Self {
        Self {
            id,
            success: true,
            result,
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }

    /// Convert into the `result` payload, or a [`Error::Host`] carrying the
    /// host's message text (or a generic fallback when the host sent none).
    pub fn into_result(self) -> Result<Value> {
        if self.success {
            Ok(self.result.unwrap_or(Value::Null))
        } else {
            let message = self
                .error
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "unknown host error".to_string());
            Err(Error::host(message))
        }
    }
}

/// Render a host error payload as text. Hosts usually send
/// `{"message": "..."}`; anything else is serialized as-is.
fn render_error_value(error: Value) -> String {
    match &error {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| error.to_string()),
        _ => error.to_string(),
    }
}

/// Tracks pending requests and matches responses
#[derive(Default)]
pub struct RequestTracker {
    /// Map of request ID to pending request
    pending: Arc<RwLock<HashMap<u64, PendingRequest>>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending request
    /// Returns (request_id, receiver for response)
    pub async fn register(&self) -> (u64, oneshot::Receiver<CommandResponse>) {
        let id = next_request_id();
        let (tx, rx) = oneshot::channel();

        self.pending
            .write()
            .await
            .insert(id, PendingRequest { response_tx: tx });

        (id, rx)
    }

    /// Handle an incoming response from the host
    /// Returns true if the response was matched to a pending request
    pub async fn handle_response(
        &self,
        id: u64,
        result: Option<Value>,
        error: Option<Value>,
    ) -> bool {
        if let Some(pending) = self.pending.write().await.remove(&id) {
            let response = CommandResponse::from_host_response(id, result, error);
            let _ = pending.response_tx.send(response);
            true
        } else {
            false
        }
    }

    /// Fail one pending request locally (e.g. the write half rejected it)
    pub async fn fail(&self, id: u64, message: impl Into<String>) {
        if let Some(pending) = self.pending.write().await.remove(&id) {
            let _ = pending.response_tx.send(CommandResponse::error(id, message));
        }
    }

    /// Cancel all pending requests (on connection close)
    pub async fn cancel_all(&self) {
        let mut pending = self.pending.write().await;
        for (id, req) in pending.drain() {
            let _ = req
                .response_tx
                .send(CommandResponse::error(id, "Request cancelled"));
        }
    }

    /// Get the number of pending requests
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }
}

/// Host request types used by this panel
#[derive(Debug, Clone)]
pub enum HostCommand {
    /// Fetch OS name and version
    GetOsInfo,
    /// Fetch the application's own configuration
    GetConfig,
    /// Fetch all environment variables visible to the host
    GetEnvs,
    /// Write text to the system clipboard
    ClipboardWrite { text: String },
    /// Request process termination
    Exit,
}

impl HostCommand {
    /// Build the request frame for this command
    pub fn build(&self, id: u64) -> String {
        let (method, params) = match self {
            HostCommand::GetOsInfo => ("computer.getOSInfo", json!({})),
            HostCommand::GetConfig => ("app.getConfig", json!({})),
            HostCommand::GetEnvs => ("os.getEnvs", json!({})),
            HostCommand::ClipboardWrite { text } => ("clipboard.writeText", json!({ "data": text })),
            HostCommand::Exit => ("app.exit", json!({})),
        };

        super::protocol::build_request(id, method, params)
    }

    /// Get a human-readable description for logging
    pub fn description(&self) -> &'static str {
        match self {
            HostCommand::GetOsInfo => "get OS info",
            HostCommand::GetConfig => "get app config",
            HostCommand::GetEnvs => "get environment",
            HostCommand::ClipboardWrite { .. } => "clipboard write",
            HostCommand::Exit => "request exit",
        }
    }
}
