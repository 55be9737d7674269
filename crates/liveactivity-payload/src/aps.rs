//! The reserved `aps` block.

use liveactivity_core::InterruptionLevel;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::alert::Alert;
use crate::document::FieldValue;

/// Delivery and display metadata under the top-level `"aps"` key.
///
/// Omission is decided per field: `timestamp`, `event`, `content-state` and
/// `attributes-type` are always written, even at their zero values.
/// `dismissal-date` and `stale-date` are dropped at zero; everything else is
/// dropped until set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApsBlock {
    /// Alert shown alongside the update.
    #[serde(skip_serializing_if = "Alert::is_none")]
    pub alert: Alert,
    /// Unix seconds at which the update was produced.
    pub timestamp: i64,
    /// Activity event, e.g. `start`, `update` or `end`.
    pub event: String,
    /// Dynamic content for the activity; `null` until set.
    pub content_state: FieldValue,
    /// Name of the app's `ActivityAttributes` type.
    pub attributes_type: String,
    /// Static attributes, present only once installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    /// Unix seconds after which an ended activity is removed; 0 means unset.
    #[serde(skip_serializing_if = "is_zero")]
    pub dismissal_date: i64,
    /// Unix seconds after which the content is considered out of date; 0 means unset.
    #[serde(skip_serializing_if = "is_zero")]
    pub stale_date: i64,
    /// Ordering hint among several live activities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    /// How urgently the device should surface the alert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interruption_level: Option<InterruptionLevel>,
    /// Sound file name played with the alert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i64) -> bool {
    *value == 0
}
