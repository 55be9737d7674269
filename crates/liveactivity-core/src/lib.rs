//! # liveactivity-core
//!
//! Shared vocabulary for building Live Activity push payloads.
//!
//! - **Interruption levels**: [`InterruptionLevel`] string constants for `aps.interruption-level`
//! - **Errors**: [`PayloadError`] via `thiserror`, the only failure the builder reports
//! - **Logging**: `tracing` subscriber setup and in-memory capture for tests

#![deny(unsafe_code)]

pub mod errors;
pub mod interruption;
pub mod logging;

pub use errors::{ParseInterruptionLevelError, PayloadError, Result};
pub use interruption::InterruptionLevel;
