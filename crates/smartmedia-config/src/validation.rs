// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks run after deserialization.

use crate::diagnostic::ConfigError;
use crate::model::SmartMediaConfig;

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Every failing check is reported; validation does not stop at the first.
pub fn validate_config(config: &SmartMediaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |key: &str, message: String| {
        errors.push(ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        });
    };

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(
            "logging.level",
            format!(
                "`{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        );
    }

    if config.selection.setting_key.trim().is_empty() {
        fail("selection.setting_key", "must not be empty".to_string());
    }

    if let Some(path) = &config.settings.path
        && path.trim().is_empty()
    {
        fail("settings.path", "must not be empty".to_string());
    }

    let radius = config.default_media.blur_radius;
    if !radius.is_finite() || radius < 0.0 {
        fail(
            "default_media.blur_radius",
            format!("must be a non-negative number, got {radius}"),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
