//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`PayloadSettings::default()`]
//! 2. If `~/.liveactivity/settings.json` exists, deep-merge user values over defaults
//! 3. Apply `LIVEACTIVITY_*` environment variable overrides
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use liveactivity_core::InterruptionLevel;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{Result, SettingsError};
use crate::types::PayloadSettings;

/// Upper bound for `LIVEACTIVITY_DISMISSAL_WINDOW_SECS` (30 days).
const MAX_DISMISSAL_WINDOW_SECS: u32 = 30 * 24 * 60 * 60;

/// Resolve the path to the settings file (`~/.liveactivity/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".liveactivity").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<PayloadSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. Invalid JSON is an error.
pub fn load_settings_from_path(path: &Path) -> Result<PayloadSettings> {
    let mut settings = read_settings_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Load settings from a file and merge over defaults, without env overrides.
pub fn read_settings_file(path: &Path) -> Result<PayloadSettings> {
    let defaults = serde_json::to_value(PayloadSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        if !user.is_object() {
            return Err(SettingsError::InvalidValue(format!(
                "{} must contain a JSON object",
                path.display()
            )));
        }
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply process environment overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut PayloadSettings) {
    apply_overrides_from(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup` (normally the process environment).
///
/// Invalid values are logged and ignored, keeping the file/default value.
pub fn apply_overrides_from<F>(settings: &mut PayloadSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let string = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(v) = string("LIVEACTIVITY_EVENT") {
        settings.event = v;
    }
    if let Some(v) = string("LIVEACTIVITY_ATTRIBUTES_TYPE") {
        settings.attributes_type = v;
    }
    if let Some(v) = string("LIVEACTIVITY_LOG_LEVEL") {
        settings.log_level = v;
    }
    if let Some(v) = lookup("LIVEACTIVITY_STAMP_TIMESTAMP") {
        match parse_bool(&v) {
            Some(b) => settings.stamp_timestamp = b,
            None => warn!(key = "LIVEACTIVITY_STAMP_TIMESTAMP", value = %v, "invalid boolean env var, ignoring"),
        }
    }
    if let Some(v) = lookup("LIVEACTIVITY_DISMISSAL_WINDOW_SECS") {
        match parse_u32_range(&v, 1, MAX_DISMISSAL_WINDOW_SECS) {
            Some(n) => settings.dismissal_window_secs = Some(n),
            None => warn!(key = "LIVEACTIVITY_DISMISSAL_WINDOW_SECS", value = %v, "invalid u32 env var, ignoring"),
        }
    }
    if let Some(v) = lookup("LIVEACTIVITY_INTERRUPTION_LEVEL") {
        match v.parse::<InterruptionLevel>() {
            Ok(level) => settings.interruption_level = Some(level),
            Err(e) => warn!(key = "LIVEACTIVITY_INTERRUPTION_LEVEL", error = %e, "invalid env var, ignoring"),
        }
    }
}

// ── Pure parsing functions ──────────────────────────────────────────────────

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a string as a `u32` within an inclusive range.
pub fn parse_u32_range(val: &str, min: u32, max: u32) -> Option<u32> {
    let n: u32 = val.parse().ok()?;
    (min..=max).contains(&n).then_some(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
