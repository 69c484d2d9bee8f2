// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for SmartMedia.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level SmartMedia configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmartMediaConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// How the active plugin is selected.
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Where the settings store lives.
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Built-in default media panel.
    #[serde(default)]
    pub default_media: DefaultMediaConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Plugin selection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionConfig {
    /// Settings key holding the selected plugin id.
    #[serde(default = "default_setting_key")]
    pub setting_key: String,

    /// Plugin mounted when the selection is unset or unmatched. An empty
    /// string disables the fallback.
    #[serde(default = "default_fallback")]
    pub fallback: Option<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            setting_key: default_setting_key(),
            fallback: default_fallback(),
        }
    }
}

impl SelectionConfig {
    /// The fallback plugin id, if one is configured.
    pub fn fallback_id(&self) -> Option<&str> {
        self.fallback
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

fn default_setting_key() -> String {
    "smart_media_theme".to_string()
}

fn default_fallback() -> Option<String> {
    Some("default".to_string())
}

/// Settings store configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// Path to the TOML settings file. When unset, settings are kept in
    /// `$XDG_DATA_HOME/smartmedia/settings.toml`.
    #[serde(default)]
    pub path: Option<String>,
}

/// Default media panel configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultMediaConfig {
    /// Title shown in plugin pickers.
    #[serde(default = "default_media_title")]
    pub title: String,

    /// Corner radius for artwork and background outlines.
    #[serde(default = "default_album_art_radius")]
    pub album_art_radius: u32,

    /// Blur album artwork.
    #[serde(default)]
    pub blur: bool,

    /// Blur radius in pixels.
    #[serde(default)]
    pub blur_radius: f32,
}

impl Default for DefaultMediaConfig {
    fn default() -> Self {
        Self {
            title: default_media_title(),
            album_art_radius: default_album_art_radius(),
            blur: false,
            blur_radius: 0.0,
        }
    }
}

fn default_media_title() -> String {
    "Default".to_string()
}

fn default_album_art_radius() -> u32 {
    20
}
