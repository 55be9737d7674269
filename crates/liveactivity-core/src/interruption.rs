//! Interruption level constants.
//!
//! The receiving device uses the level to decide how loudly to surface a
//! notification. Nothing in the builder restricts a field to these values;
//! they exist so callers do not have to spell the strings by hand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseInterruptionLevelError;

/// Value for `aps.interruption-level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterruptionLevel {
    /// Delivered quietly, without lighting the screen.
    Passive,
    /// Default delivery: sound and screen on.
    Active,
    /// Breaks through Focus and scheduled summaries.
    TimeSensitive,
    /// Bypasses the mute switch. Requires an Apple-approved entitlement.
    Critical,
}

impl InterruptionLevel {
    /// All levels, quietest first.
    pub const ALL: [Self; 4] = [
        Self::Passive,
        Self::Active,
        Self::TimeSensitive,
        Self::Critical,
    ];

    /// Wire spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passive => "passive",
            Self::Active => "active",
            Self::TimeSensitive => "time-sensitive",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for InterruptionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterruptionLevel {
    type Err = ParseInterruptionLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseInterruptionLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spelling() {
        assert_eq!(InterruptionLevel::Passive.as_str(), "passive");
        assert_eq!(InterruptionLevel::Active.as_str(), "active");
        assert_eq!(InterruptionLevel::TimeSensitive.as_str(), "time-sensitive");
        assert_eq!(InterruptionLevel::Critical.as_str(), "critical");
    }

    #[test]
    fn serde_matches_as_str() {
        for level in InterruptionLevel::ALL {
            let json = serde_json::to_value(level).unwrap();
            assert_eq!(json, level.as_str());
            let back: InterruptionLevel = serde_json::from_value(json).unwrap();
            assert_eq!(back, level);
        }
    }

    #[test]
    fn parse_known_levels() {
        assert_eq!(
            "time-sensitive".parse::<InterruptionLevel>(),
            Ok(InterruptionLevel::TimeSensitive)
        );
        assert_eq!("critical".parse(), Ok(InterruptionLevel::Critical));
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "Critical".parse::<InterruptionLevel>().unwrap_err();
        assert_eq!(err.0, "Critical");
    }

    #[test]
    fn display_uses_wire_spelling() {
        assert_eq!(InterruptionLevel::TimeSensitive.to_string(), "time-sensitive");
    }
}
