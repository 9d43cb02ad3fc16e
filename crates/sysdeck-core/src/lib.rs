//! # sysdeck-core - Core Domain Types
//!
//! Foundation crate for Sysdeck. Provides domain types, error handling,
//! host event definitions, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppPhase`] - Application lifecycle phase (Connecting, Running, Quitting)
//! - [`OsInfo`] - Operating-system metadata reported by the host
//! - [`AppConfig`] - The application's own configuration as the host sees it
//! - [`EnvVar`] - One environment variable entry, in host order
//!
//! ### Events (`events`)
//! - [`HostMessage`] - Parsed frames from the host runtime connection
//! - [`HostEvent`] - Lifecycle signals delivered by the host
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sysdeck_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Sysdeck crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use events::{HostEvent, HostMessage};
pub use types::{AppConfig, AppPhase, EnvVar, OsInfo};
