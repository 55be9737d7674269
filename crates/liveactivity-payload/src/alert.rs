//! The `aps.alert` field: absent, a plain string, or a structured object.

use serde::{Deserialize, Serialize};

/// Structured alert.
///
/// A field is omitted from the JSON while unset or at its zero value (empty
/// string, empty list, zero count). Field order matches the wire layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AlertBlock {
    /// Button label key for the "View" action.
    #[serde(skip_serializing_if = "is_blank")]
    pub action: Option<String>,
    /// Localization key for the action button.
    #[serde(skip_serializing_if = "is_blank")]
    pub action_loc_key: Option<String>,
    /// Message text.
    #[serde(skip_serializing_if = "is_blank")]
    pub body: Option<String>,
    /// Launch image file name.
    #[serde(skip_serializing_if = "is_blank")]
    pub launch_image: Option<String>,
    /// Substitutions for `loc-key`.
    #[serde(skip_serializing_if = "is_empty_list")]
    pub loc_args: Option<Vec<String>>,
    /// Localization key for the body.
    #[serde(skip_serializing_if = "is_blank")]
    pub loc_key: Option<String>,
    /// Short title.
    #[serde(skip_serializing_if = "is_blank")]
    pub title: Option<String>,
    /// Secondary line under the title.
    #[serde(skip_serializing_if = "is_blank")]
    pub subtitle: Option<String>,
    /// Substitutions for `title-loc-key`.
    #[serde(skip_serializing_if = "is_empty_list")]
    pub title_loc_args: Option<Vec<String>>,
    /// Localization key for the title.
    #[serde(skip_serializing_if = "is_blank")]
    pub title_loc_key: Option<String>,
    /// Text for the grouped-notification summary.
    #[serde(skip_serializing_if = "is_blank")]
    pub summary_arg: Option<String>,
    /// Number of items this notification adds to the summary.
    #[serde(skip_serializing_if = "is_zero_count")]
    pub summary_arg_count: Option<u32>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_empty_list(value: &Option<Vec<String>>) -> bool {
    value.as_ref().is_none_or(Vec::is_empty)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_count(value: &Option<u32>) -> bool {
    value.is_none_or(|count| count == 0)
}

/// Value of `aps.alert`.
///
/// The variant decides the JSON shape: `Text` becomes a string, `Structured`
/// an object, `None` drops the key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Alert {
    /// No alert.
    #[default]
    None,
    /// Plain alert message.
    Text(String),
    /// Structured alert.
    Structured(AlertBlock),
}

impl Alert {
    /// Whether the alert is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The structured block, if this alert has one.
    pub fn as_structured(&self) -> Option<&AlertBlock> {
        match self {
            Self::Structured(block) => Some(block),
            Self::None | Self::Text(_) => None,
        }
    }

    /// The structured block, created on first use.
    ///
    /// An existing block is returned as-is. A plain-text or absent alert is
    /// replaced by an empty block.
    pub fn structured_mut(&mut self) -> &mut AlertBlock {
        match self {
            Self::Structured(block) => block,
            other => {
                *other = Self::Structured(AlertBlock::default());
                other.structured_mut()
            }
        }
    }
}

impl From<&str> for Alert {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Alert {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<AlertBlock> for Alert {
    fn from(block: AlertBlock) -> Self {
        Self::Structured(block)
    }
}
