//! Chained payload builder.
//!
//! Every setter edits the in-progress [`Document`] in place and returns
//! `&mut Self`, so calls can be chained on a `let mut` binding. Setters never
//! fail. [`PayloadBuilder::serialize`] is the only fallible operation, and it
//! only fails on values the caller supplied.

use liveactivity_core::{InterruptionLevel, PayloadError, Result};
use liveactivity_settings::PayloadSettings;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::alert::{Alert, AlertBlock};
use crate::document::{APS_KEY, Document, FieldValue};

/// Top-level key set by [`PayloadBuilder::set_mdm`].
const MDM_KEY: &str = "mdm";

/// Builds one Live Activity payload.
///
/// Not internally synchronized: share across threads only behind a lock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PayloadBuilder {
    document: Document,
}

impl PayloadBuilder {
    /// Create a payload containing only an empty `aps` block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payload pre-filled from [`PayloadSettings`].
    ///
    /// `event` and `attributes-type` are copied as-is. With
    /// `stamp_timestamp`, `timestamp` is set to now; with
    /// `dismissal_window_secs`, `dismissal-date` is set to now plus the
    /// window.
    pub fn from_settings(settings: &PayloadSettings) -> Self {
        let mut builder = Self::new();
        let _ = builder
            .set_event(settings.event.clone())
            .set_attributes_type(settings.attributes_type.clone());

        let now = chrono::Utc::now().timestamp();
        if settings.stamp_timestamp {
            let _ = builder.set_timestamp(now);
        }
        if let Some(window) = settings.dismissal_window_secs {
            let _ = builder.set_dismissal_date(now + i64::from(window));
        }
        if let Some(level) = settings.interruption_level {
            let _ = builder.set_interruption_level(level);
        }
        builder
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    // ── Top-level fields ────────────────────────────────────────────

    /// Set a custom top-level key.
    ///
    /// Overwrites any previous value for `key`. A key named `"aps"` replaces
    /// the structured block in the output; that is the caller's call to make.
    pub fn set_custom_field<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> &mut Self {
        let key = key.into();
        let value = FieldValue::encode(value);
        if key == APS_KEY {
            warn!("custom \"aps\" field replaces the structured aps block");
        }
        if let Some(reason) = value.encoding_error() {
            warn!(field = %key, reason, "custom field could not be encoded");
        }
        let _ = self.document.insert_custom(key, value);
        self
    }

    /// Set the top-level `mdm` key for Mobile Device Management payloads.
    pub fn set_mdm(&mut self, mdm: impl Into<String>) -> &mut Self {
        self.set_custom_field(MDM_KEY, mdm.into())
    }

    // ── aps block ───────────────────────────────────────────────────

    /// Set `aps.alert` to a plain string or a full [`AlertBlock`].
    pub fn set_alert(&mut self, alert: impl Into<Alert>) -> &mut Self {
        self.document.aps_mut().alert = alert.into();
        self
    }

    /// Set `aps.timestamp` (Unix seconds).
    pub fn set_timestamp(&mut self, timestamp: i64) -> &mut Self {
        self.document.aps_mut().timestamp = timestamp;
        self
    }

    /// Set `aps.timestamp` to the current time.
    pub fn set_timestamp_now(&mut self) -> &mut Self {
        self.set_timestamp(chrono::Utc::now().timestamp())
    }

    /// Set `aps.event`.
    pub fn set_event(&mut self, event: impl Into<String>) -> &mut Self {
        self.document.aps_mut().event = event.into();
        self
    }

    /// Set `aps.content-state` to any serializable value.
    pub fn set_content_state<T: Serialize>(&mut self, content_state: T) -> &mut Self {
        let value = FieldValue::encode(content_state);
        if let Some(reason) = value.encoding_error() {
            warn!(reason, "content-state could not be encoded");
        }
        self.document.aps_mut().content_state = value;
        self
    }

    /// Set `aps.attributes-type`.
    pub fn set_attributes_type(&mut self, attributes_type: impl Into<String>) -> &mut Self {
        self.document.aps_mut().attributes_type = attributes_type.into();
        self
    }

    /// Install an empty `aps.attributes` object.
    ///
    /// Forces the key into the output; it does not take attribute values.
    pub fn set_attributes(&mut self) -> &mut Self {
        self.document.aps_mut().attributes = Some(Map::<String, Value>::new());
        self
    }

    /// Set `aps.dismissal-date` (Unix seconds). Zero removes it.
    pub fn set_dismissal_date(&mut self, dismissal_date: i64) -> &mut Self {
        self.document.aps_mut().dismissal_date = dismissal_date;
        self
    }

    /// Set `aps.stale-date` (Unix seconds). Zero removes it.
    pub fn set_stale_date(&mut self, stale_date: i64) -> &mut Self {
        self.document.aps_mut().stale_date = stale_date;
        self
    }

    /// Set `aps.relevance-score`.
    ///
    /// JSON has no encoding for NaN or infinity, so a non-finite score
    /// clears the field instead.
    pub fn set_relevance_score(&mut self, score: f64) -> &mut Self {
        if !score.is_finite() {
            warn!(score, "non-finite relevance-score, leaving it unset");
        }
        self.document.aps_mut().relevance_score = score.is_finite().then_some(score);
        self
    }

    /// Set `aps.interruption-level`.
    pub fn set_interruption_level(&mut self, level: InterruptionLevel) -> &mut Self {
        self.document.aps_mut().interruption_level = Some(level);
        self
    }

    /// Set `aps.sound`.
    pub fn set_sound(&mut self, sound: impl Into<String>) -> &mut Self {
        self.document.aps_mut().sound = Some(sound.into());
        self
    }

    // ── Structured alert ────────────────────────────────────────────

    fn alert_block(&mut self) -> &mut AlertBlock {
        self.document.aps_mut().alert.structured_mut()
    }

    /// Set `aps.alert.title`.
    pub fn set_alert_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.alert_block().title = Some(title.into());
        self
    }

    /// Set `aps.alert.title-loc-key`.
    pub fn set_alert_title_localization_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.alert_block().title_loc_key = Some(key.into());
        self
    }

    /// Set `aps.alert.title-loc-args`.
    pub fn set_alert_title_localization_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alert_block().title_loc_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Set `aps.alert.subtitle`.
    pub fn set_alert_subtitle(&mut self, subtitle: impl Into<String>) -> &mut Self {
        self.alert_block().subtitle = Some(subtitle.into());
        self
    }

    /// Set `aps.alert.body`.
    pub fn set_alert_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.alert_block().body = Some(body.into());
        self
    }

    /// Set `aps.alert.launch-image`.
    pub fn set_alert_launch_image(&mut self, image: impl Into<String>) -> &mut Self {
        self.alert_block().launch_image = Some(image.into());
        self
    }

    /// Set `aps.alert.loc-args`.
    pub fn set_alert_localization_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alert_block().loc_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Set `aps.alert.loc-key`.
    pub fn set_alert_localization_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.alert_block().loc_key = Some(key.into());
        self
    }

    /// Set `aps.alert.action`.
    pub fn set_alert_action(&mut self, action: impl Into<String>) -> &mut Self {
        self.alert_block().action = Some(action.into());
        self
    }

    /// Set `aps.alert.action-loc-key`.
    pub fn set_alert_action_localization_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.alert_block().action_loc_key = Some(key.into());
        self
    }

    /// Set `aps.alert.summary-arg`.
    pub fn set_alert_summary_arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.alert_block().summary_arg = Some(arg.into());
        self
    }

    /// Set `aps.alert.summary-arg-count`.
    pub fn set_alert_summary_arg_count(&mut self, count: u32) -> &mut Self {
        self.alert_block().summary_arg_count = Some(count);
        self
    }

    // ── Serialization ───────────────────────────────────────────────

    /// Encode the payload as compact JSON bytes.
    ///
    /// Read-only: calling it twice without mutation yields identical bytes.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        self.check_encodable()?;
        let bytes = serde_json::to_vec(&self.document)
            .map_err(|e| PayloadError::encoding(APS_KEY, e))?;
        debug!(
            bytes = bytes.len(),
            custom_fields = self.document.custom_fields().count(),
            "payload serialized"
        );
        Ok(bytes)
    }

    /// Encode the payload as a [`serde_json::Value`].
    pub fn to_value(&self) -> Result<Value> {
        self.check_encodable()?;
        serde_json::to_value(&self.document).map_err(|e| PayloadError::encoding(APS_KEY, e))
    }

    fn check_encodable(&self) -> Result<()> {
        match self.document.encoding_failure() {
            Some((field, reason)) => {
                warn!(field, reason, "payload serialization failed");
                Err(PayloadError::encoding(field, reason))
            }
            None => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
