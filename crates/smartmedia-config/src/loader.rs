// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./smartmedia.toml` > `~/.config/smartmedia/smartmedia.toml`
//! > `/etc/smartmedia/smartmedia.toml` with environment variable overrides via
//! `SMARTMEDIA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SmartMediaConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/smartmedia/smartmedia.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "smartmedia.toml";

/// User config file under the XDG config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("smartmedia/smartmedia.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/smartmedia/smartmedia.toml` (system-wide)
/// 3. `~/.config/smartmedia/smartmedia.toml` (user XDG config)
/// 4. `./smartmedia.toml` (local directory)
/// 5. `SMARTMEDIA_*` environment variables
pub fn load_config() -> Result<SmartMediaConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults.
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SmartMediaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SmartMediaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SmartMediaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SmartMediaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the standard hierarchy, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SmartMediaConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment provider mapping `SMARTMEDIA_<SECTION>_<KEY>` to `section.key`.
///
/// Uses an explicit section map rather than splitting on `_`, because both
/// section names (`default_media`) and keys (`setting_key`) contain
/// underscores.
fn env_provider() -> Env {
    Env::prefixed("SMARTMEDIA_").map(|key| map_env_key(key.as_str()).into())
}

const SECTIONS: &[&str] = &["default_media", "selection", "settings", "logging"];

/// Map a prefix-stripped env var name to a dotted config path.
///
/// Env keys keep their original case, so matching is done on the lowercased
/// name.
pub fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("selection_setting_key"), "selection.setting_key");
        assert_eq!(map_env_key("default_media_blur_radius"), "default_media.blur_radius");
        assert_eq!(map_env_key("settings_path"), "settings.path");
        assert_eq!(map_env_key("logging_level"), "logging.level");
    }

    #[test]
    fn uppercase_env_keys_map_to_sections() {
        assert_eq!(map_env_key("SELECTION_SETTING_KEY"), "selection.setting_key");
        assert_eq!(map_env_key("DEFAULT_MEDIA_BLUR_RADIUS"), "default_media.blur_radius");
        assert_eq!(map_env_key("Logging_Level"), "logging.level");
    }

    #[test]
    fn unknown_env_keys_pass_through() {
        assert_eq!(map_env_key("bogus_key"), "bogus_key");
    }
}
