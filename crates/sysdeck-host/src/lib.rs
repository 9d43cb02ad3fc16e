//! # sysdeck-host - Host Runtime Connection
//!
//! Client side of the host runtime boundary. The host is a separate native
//! process that owns the window, the OS surface, and the clipboard; this
//! crate connects to it over a WebSocket, sends it requests, routes responses
//! back to callers, and forwards its lifecycle events.
//!
//! ## Key Components
//!
//! - [`protocol`] - wire frame parsing and request building
//! - [`HostCommand`] / [`RequestTracker`] - typed requests with id correlation
//! - [`HostConnection`] / [`HostHandle`] - the connection task and its
//!   clonable request handle
//! - [`HostBridge`] - the capability trait the app layer consumes; implemented
//!   by [`HostHandle`] in production and by [`test_utils::FakeHost`] in tests

pub mod bridge;
pub mod client;
pub mod commands;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use bridge::{HostBridge, LocalHostBridge};
pub use client::{HostConnection, HostHandle};
pub use commands::{next_request_id, CommandResponse, HostCommand, RequestTracker};
pub use protocol::parse_host_message;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_utils::{FakeHost, Scripted};
