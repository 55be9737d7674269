//! # liveactivity-settings
//!
//! Defaults applied to every payload built with
//! `PayloadBuilder::from_settings`.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`PayloadSettings::default()`]
//! 2. **User file**: `~/.liveactivity/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `LIVEACTIVITY_*` overrides (highest priority)

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::PayloadSettings;

use std::sync::OnceLock;

/// Process-wide settings, loaded on first access.
static SETTINGS: OnceLock<PayloadSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// The first call loads `~/.liveactivity/settings.json` with env overrides.
/// If loading fails, the compiled defaults are used.
pub fn get_settings() -> &'static PayloadSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            PayloadSettings::default()
        })
    })
}

/// Initialize the global settings with a specific value.
///
/// Returns the settings back if the global was already initialized.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: PayloadSettings) -> std::result::Result<(), PayloadSettings> {
    SETTINGS.set(settings)
}

/// Install the stderr tracing subscriber at the configured `logLevel`.
pub fn init_logging(settings: &PayloadSettings) {
    liveactivity_core::logging::init_subscriber(&settings.log_level);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
