//! Settings type definitions.

use liveactivity_core::InterruptionLevel;
use serde::{Deserialize, Serialize};

/// Defaults stamped onto new payloads.
///
/// Field names are camelCase on disk; missing fields fall back to
/// [`Default`]. Example:
///
/// ```json
/// {
///   "event": "update",
///   "attributesType": "DeliveryAttributes",
///   "stampTimestamp": true,
///   "dismissalWindowSecs": 3600
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadSettings {
    /// Initial `aps.event`.
    pub event: String,
    /// Initial `aps.attributes-type`.
    pub attributes_type: String,
    /// Set `aps.timestamp` to the current time on construction.
    pub stamp_timestamp: bool,
    /// Seconds from construction until `aps.dismissal-date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissal_window_secs: Option<u32>,
    /// Initial `aps.interruption-level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interruption_level: Option<InterruptionLevel>,
    /// Minimum level for the stderr log subscriber.
    pub log_level: String,
}

impl Default for PayloadSettings {
    fn default() -> Self {
        Self {
            event: String::new(),
            attributes_type: String::new(),
            stamp_timestamp: false,
            dismissal_window_secs: None,
            interruption_level: None,
            log_level: "warn".to_string(),
        }
    }
}
