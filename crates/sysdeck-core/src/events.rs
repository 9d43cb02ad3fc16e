//! Host runtime event and message definitions

use serde_json::Value;

/// Lifecycle signal delivered by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// One-time signal: the host connection and surface are ready for use.
    Ready,

    /// The user asked the host to close the application window.
    /// May arrive at any time, including before `Ready`.
    WindowClose,

    /// The connection to the host dropped. In-flight requests have already
    /// been failed by the connection task when this is observed.
    Disconnected,
}

impl HostEvent {
    /// Wire name of the event, as the host sends it.
    pub fn name(self) -> &'static str {
        match self {
            HostEvent::Ready => "ready",
            HostEvent::WindowClose => "windowClose",
            HostEvent::Disconnected => "disconnected",
        }
    }
}

/// Fully typed frame received from the host runtime connection
#[derive(Debug, Clone)]
pub enum HostMessage {
    /// An unsolicited lifecycle event
    Event(HostEvent),

    /// A response to a request we sent
    Response {
        id: u64,
        result: Option<Value>,
        error: Option<Value>,
    },

    /// Fallback for events this client does not handle
    UnknownEvent { event: String, data: Value },
}

impl HostMessage {
    /// Get a human-readable summary of this message for logging
    pub fn summary(&self) -> String {
        match self {
            HostMessage::Event(event) => format!("Event: {}", event.name()),
            HostMessage::Response { id, error, .. } => {
                if error.is_some() {
                    format!("Response #{id}: error")
                } else {
                    format!("Response #{id}: ok")
                }
            }
            HostMessage::UnknownEvent { event, .. } => format!("Event: {event} (unhandled)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_match_wire_names() {
        assert_eq!(HostEvent::Ready.name(), "ready");
        assert_eq!(HostEvent::WindowClose.name(), "windowClose");
    }

    #[test]
    fn test_summary_distinguishes_outcomes() {
        let ok = HostMessage::Response {
            id: 7,
            result: Some(Value::Null),
            error: None,
        };
        assert_eq!(ok.summary(), "Response #7: ok");

        let failed = HostMessage::Response {
            id: 8,
            result: None,
            error: Some(Value::String("boom".into())),
        };
        assert_eq!(failed.summary(), "Response #8: error");
    }
}
