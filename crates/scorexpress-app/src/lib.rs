//! scorexpress-app library root.
//!
//! The shell around the scoring engine: user configuration, favorites,
//! calculator sessions and tracing setup. Examples and integration tests
//! drive these directly.

pub mod config;
pub mod favorites;
pub mod session;
pub mod telemetry;
