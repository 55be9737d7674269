//! The root payload document and caller-supplied values.

use std::collections::BTreeMap;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::aps::ApsBlock;

/// Reserved top-level key holding the [`ApsBlock`].
pub const APS_KEY: &str = "aps";

/// Wire key of the only caller-supplied value inside the `aps` block.
pub const CONTENT_STATE_KEY: &str = "content-state";

/// A caller-supplied value, encoded to JSON when it was handed in.
///
/// Encoding errors are kept rather than raised so that every setter stays
/// infallible; they surface when the document is serialized.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Successfully encoded value.
    Json(Value),
    /// The value's `Serialize` impl failed with this message.
    Unencodable(String),
}

impl FieldValue {
    /// Encode any serializable value.
    pub fn encode<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Self::Json(json),
            Err(e) => Self::Unencodable(e.to_string()),
        }
    }

    /// The encoded JSON, if encoding succeeded.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(json) => Some(json),
            Self::Unencodable(_) => None,
        }
    }

    /// The encoder's error message, if encoding failed.
    pub fn encoding_error(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Unencodable(reason) => Some(reason),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Json(Value::Null)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Json(json) => json.serialize(serializer),
            Self::Unencodable(reason) => Err(S::Error::custom(reason)),
        }
    }
}

/// Root of a payload: the `aps` block plus any custom top-level keys.
///
/// Serializes as one JSON object with `"aps"` first and custom keys after
/// it in ascending order. A custom entry named `"aps"` is written in place
/// of the structured block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    aps: ApsBlock,
    custom: BTreeMap<String, FieldValue>,
}

impl Document {
    /// The structured `aps` block.
    pub fn aps(&self) -> &ApsBlock {
        &self.aps
    }

    pub(crate) fn aps_mut(&mut self) -> &mut ApsBlock {
        &mut self.aps
    }

    /// A custom top-level value by key.
    pub fn custom_field(&self, key: &str) -> Option<&FieldValue> {
        self.custom.get(key)
    }

    /// Custom top-level entries in key order.
    pub fn custom_fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.custom.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert or overwrite a custom entry, returning the previous value.
    pub(crate) fn insert_custom(&mut self, key: String, value: FieldValue) -> Option<FieldValue> {
        self.custom.insert(key, value)
    }

    /// Whether a custom `"aps"` entry hides the structured block.
    pub fn is_aps_shadowed(&self) -> bool {
        self.custom.contains_key(APS_KEY)
    }

    /// First value that will fail to encode, as `(field, reason)`.
    ///
    /// Values hidden from the output (the structured `content-state` while
    /// `"aps"` is shadowed) are not checked.
    pub fn encoding_failure(&self) -> Option<(&str, &str)> {
        let content_state = (!self.is_aps_shadowed())
            .then(|| self.aps.content_state.encoding_error())
            .flatten()
            .map(|reason| (CONTENT_STATE_KEY, reason));

        content_state.or_else(|| {
            self.custom
                .iter()
                .find_map(|(key, value)| Some((key.as_str(), value.encoding_error()?)))
        })
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = self.custom.len() - usize::from(self.is_aps_shadowed());
        let mut map = serializer.serialize_map(Some(1 + extra))?;
        match self.custom.get(APS_KEY) {
            Some(custom) => map.serialize_entry(APS_KEY, custom)?,
            None => map.serialize_entry(APS_KEY, &self.aps)?,
        }
        for (key, value) in &self.custom {
            if key != APS_KEY {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    struct Refuses;

    impl Serialize for Refuses {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn field_value_keeps_encoding_error() {
        let value = FieldValue::encode(Refuses);
        assert_eq!(value.encoding_error(), Some("refused"));
        assert!(value.as_json().is_none());
    }

    #[test]
    fn field_value_default_is_null() {
        assert_eq!(FieldValue::default().as_json(), Some(&Value::Null));
    }

    #[test]
    fn custom_keys_follow_aps_in_order() {
        let mut doc = Document::default();
        let _ = doc.insert_custom("zeta".into(), FieldValue::encode(1));
        let _ = doc.insert_custom("alpha".into(), FieldValue::encode(2));
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.starts_with(r#"{"aps":{"#));
        assert!(json.ends_with(r#"},"alpha":2,"zeta":1}"#));
    }

    #[test]
    fn custom_aps_replaces_structured_block() {
        let mut doc = Document::default();
        let _ = doc.insert_custom("other".into(), FieldValue::encode(true));
        let _ = doc.insert_custom(APS_KEY.into(), FieldValue::encode("raw"));
        assert!(doc.is_aps_shadowed());
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"aps":"raw","other":true}"#
        );
    }

    #[test]
    fn encoding_failure_reports_custom_key() {
        let mut doc = Document::default();
        let _ = doc.insert_custom("good".into(), FieldValue::encode("ok"));
        let _ = doc.insert_custom("bad".into(), FieldValue::encode(Refuses));
        assert_eq!(doc.encoding_failure(), Some(("bad", "refused")));
        assert!(serde_json::to_vec(&doc).is_err());
    }

    #[test]
    fn encoding_failure_checks_content_state_first() {
        let mut doc = Document::default();
        doc.aps_mut().content_state = FieldValue::encode(Refuses);
        let _ = doc.insert_custom("bad".into(), FieldValue::encode(Refuses));
        assert_eq!(doc.encoding_failure(), Some((CONTENT_STATE_KEY, "refused")));
    }

    #[test]
    fn shadowed_content_state_is_not_checked() {
        let mut doc = Document::default();
        doc.aps_mut().content_state = FieldValue::encode(Refuses);
        let _ = doc.insert_custom(APS_KEY.into(), FieldValue::encode(serde_json::json!({})));
        assert_eq!(doc.encoding_failure(), None);
        assert!(serde_json::to_vec(&doc).is_ok());
    }
}
