//! Error types shared by the payload crates.

use thiserror::Error;

/// Errors produced while turning a payload into JSON.
///
/// Building a payload never fails. Encoding can, but only when a value the
/// caller handed in (custom field, content state) has a `Serialize` impl
/// that refuses to produce JSON.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// A caller-supplied value could not be represented as JSON.
    #[error("failed to encode payload field `{field}`: {reason}")]
    EncodingFailure {
        /// Name of the offending slot (`content-state`, or the custom key).
        field: String,
        /// Encoder error description.
        reason: String,
    },
}

impl PayloadError {
    /// Build an [`PayloadError::EncodingFailure`] from any displayable error.
    #[must_use]
    pub fn encoding(field: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::EncodingFailure {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// The field that failed to encode.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::EncodingFailure { field, .. } => field,
        }
    }
}

/// Result type for payload operations.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Returned when a string is not one of the four interruption levels.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown interruption level: {0}")]
pub struct ParseInterruptionLevelError(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
