//! # liveactivity-payload
//!
//! Builds APNs Live Activity payloads and serializes them to the exact JSON
//! layout the push service expects.
//!
//! ```ignore
//! use liveactivity_payload::PayloadBuilder;
//!
//! let mut payload = PayloadBuilder::new();
//! payload
//!     .set_event("update")
//!     .set_timestamp(1_700_000_000)
//!     .set_content_state(serde_json::json!({"eta": 5}))
//!     .set_alert_title("Driver nearby")
//!     .set_alert_body("Arriving in 5 minutes");
//! let bytes = payload.serialize()?;
//! ```
//!
//! Transport, authentication and retries belong to the caller.

#![deny(unsafe_code)]

pub mod alert;
pub mod aps;
pub mod builder;
pub mod document;

pub use alert::{Alert, AlertBlock};
pub use aps::ApsBlock;
pub use builder::PayloadBuilder;
pub use document::{Document, FieldValue};
pub use liveactivity_core::{InterruptionLevel, PayloadError, Result};
