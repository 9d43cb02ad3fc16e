//! Wire protocol for the host runtime connection
//!
//! The host speaks JSON text frames: requests carry `{id, method, params}`,
//! responses echo the id with either a `result` or an `error`, and
//! unsolicited lifecycle events arrive as `{event, data}`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use sysdeck_core::{HostEvent, HostMessage};

/// A raw frame from the host (before typing into [`HostMessage`])
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawFrame {
    /// A response to a request we sent
    Response {
        id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<Value>,
    },
    /// An event from the host (unsolicited)
    Event {
        event: String,
        #[serde(default)]
        data: Value,
    },
}

/// Parses one JSON text frame from the host connection.
///
/// # Returns
/// * `Some(HostMessage)` if the frame is a valid response or event
/// * `None` if parsing fails
pub fn parse_host_message(text: &str) -> Option<HostMessage> {
    let raw: RawFrame = serde_json::from_str(text).ok()?;
    match raw {
        RawFrame::Event { event, data } => Some(parse_event(&event, data)),
        RawFrame::Response { id, result, error } => {
            Some(HostMessage::Response { id, result, error })
        }
    }
}

/// Parse an event by name
fn parse_event(event: &str, data: Value) -> HostMessage {
    match event {
        "ready" => HostMessage::Event(HostEvent::Ready),
        "windowClose" => HostMessage::Event(HostEvent::WindowClose),
        _ => HostMessage::UnknownEvent {
            event: event.to_string(),
            data,
        },
    }
}

/// Build one request frame for the host.
pub(crate) fn build_request(id: u64, method: &str, params: Value) -> String {
    json!({
        "id": id,
        "method": method,
        "params": params,
    })
    .to_string()
}
