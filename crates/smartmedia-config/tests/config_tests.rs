// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for SmartMedia configuration loading.

use std::io::Write;
use std::path::Path;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment, Jail,
};
use miette::Diagnostic;
use smartmedia_config::diagnostic::ConfigError;
use smartmedia_config::model::SmartMediaConfig;
use smartmedia_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

#[test]
fn full_file_deserializes() {
    let toml = r#"
[logging]
level = "debug"

[selection]
setting_key = "lockscreen_media_theme"
fallback = "minimal"

[settings]
path = "/tmp/smartmedia/settings.toml"

[default_media]
title = "Classic"
album_art_radius = 12
blur = true
blur_radius = 8.5
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.selection.setting_key, "lockscreen_media_theme");
    assert_eq!(config.selection.fallback_id(), Some("minimal"));
    assert_eq!(config.settings.path.as_deref(), Some("/tmp/smartmedia/settings.toml"));
    assert_eq!(config.default_media.title, "Classic");
    assert_eq!(config.default_media.album_art_radius, 12);
    assert!(config.default_media.blur);
    assert_eq!(config.default_media.blur_radius, 8.5);
}

#[test]
fn empty_input_uses_defaults() {
    let config = load_config_from_str("").unwrap();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.selection.setting_key, "smart_media_theme");
    assert_eq!(config.selection.fallback_id(), Some("default"));
    assert!(config.settings.path.is_none());
    assert_eq!(config.default_media.title, "Default");
    assert_eq!(config.default_media.album_art_radius, 20);
    assert!(!config.default_media.blur);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = load_config_from_str("[default_media]\nblur = true\n").unwrap();
    assert!(config.default_media.blur);
    assert_eq!(config.default_media.album_art_radius, 20);
    assert_eq!(config.default_media.title, "Default");
}

#[test]
fn later_provider_overrides_earlier() {
    let config: SmartMediaConfig = Figment::new()
        .merge(Serialized::defaults(SmartMediaConfig::default()))
        .merge(Toml::string("[selection]\nsetting_key = \"from_file\"\n"))
        .merge(("selection.setting_key", "from_env"))
        .extract()
        .expect("should merge override");
    assert_eq!(config.selection.setting_key, "from_env");
}

#[test]
fn missing_files_are_skipped() {
    let config: SmartMediaConfig = Figment::new()
        .merge(Serialized::defaults(SmartMediaConfig::default()))
        .merge(Toml::file("/nonexistent/smartmedia/smartmedia.toml"))
        .extract()
        .unwrap();
    assert_eq!(config.selection.setting_key, "smart_media_theme");
}

#[test]
fn unknown_key_suggests_correction() {
    let errors = load_and_validate_str("[selection]\nseting_key = \"x\"\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "seting_key");
            assert_eq!(suggestion.as_deref(), Some("setting_key"));
            assert!(valid_keys.contains("fallback"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_top_level_section_rejected() {
    let errors = load_and_validate_str("[plugins]\nenabled = true\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::UnknownKey { key, .. } if key == "plugins"));
}

#[test]
fn wrong_type_reports_key_path() {
    let errors = load_and_validate_str("[default_media]\nalbum_art_radius = \"big\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { key, .. } => assert_eq!(key, "default_media.album_art_radius"),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn validation_runs_after_load() {
    let errors = load_and_validate_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
    assert!(matches!(
        &errors[0],
        ConfigError::InvalidValue { key, .. } if key == "logging.level"
    ));
}

#[test]
fn diagnostics_carry_codes() {
    let errors = load_and_validate_str("[default_media]\nblurr = true\n").unwrap_err();
    let code = errors[0].code().map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("smartmedia::config::unknown_key"));
    assert!(errors[0].help().is_some());
}

#[test]
fn diagnostic_renders_with_miette() {
    let errors = load_and_validate_str("[default_media]\ntitel = \"x\"\n").unwrap_err();
    let mut out = String::new();
    miette::GraphicalReportHandler::new()
        .render_report(&mut out, &errors[0] as &dyn Diagnostic)
        .unwrap();
    assert!(out.contains("titel"));
    assert!(out.contains("title"));
}

#[test]
fn explicit_path_loads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[selection]\nfallback = \"\"").unwrap();

    // Inside a jail so env overrides set by other tests cannot leak in.
    Jail::expect_with(|_| {
        let config = load_and_validate_path(file.path()).map_err(|e| format!("{e:?}"))?;
        assert_eq!(config.selection.fallback_id(), None);
        Ok(())
    });
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let errors = load_and_validate_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(&errors[0], ConfigError::Other(msg) if msg.contains("absent.toml")));
}

#[test]
fn defaults_serialize_to_json() {
    let json = serde_json::to_value(SmartMediaConfig::default()).unwrap();
    assert_eq!(json["selection"]["setting_key"], "smart_media_theme");
    assert_eq!(json["default_media"]["album_art_radius"], 20);
}

#[test]
fn env_vars_override_file_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "smartmedia.toml",
            "[selection]\nsetting_key = \"from_file\"\n\n[default_media]\nblur = true\n",
        )?;
        jail.set_env("SMARTMEDIA_SELECTION_SETTING_KEY", "from_env");
        jail.set_env("SMARTMEDIA_DEFAULT_MEDIA_BLUR_RADIUS", "4.5");
        jail.set_env("SMARTMEDIA_LOGGING_LEVEL", "debug");

        let config = load_and_validate_path(Path::new("smartmedia.toml"))
            .map_err(|errors| format!("{errors:?}"))?;
        assert_eq!(config.selection.setting_key, "from_env");
        assert_eq!(config.default_media.blur_radius, 4.5);
        assert!(config.default_media.blur);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn unknown_env_var_is_reported_as_unknown_key() {
    Jail::expect_with(|jail| {
        jail.create_file("smartmedia.toml", "")?;
        jail.set_env("SMARTMEDIA_SELECTION_SETING_KEY", "typo");

        let errors = load_and_validate_path(Path::new("smartmedia.toml"))
            .err()
            .ok_or("expected an unknown key error")?;
        assert!(matches!(
            &errors[0],
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "seting_key" && suggestion.as_deref() == Some("setting_key")
        ));
        Ok(())
    });
}
