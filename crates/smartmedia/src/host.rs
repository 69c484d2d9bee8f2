// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring of settings, selection, registry, and layout from configuration.

use std::path::PathBuf;
use std::sync::Arc;

use smartmedia_config::SmartMediaConfig;
use smartmedia_default::{DefaultMediaOptions, PassthroughProcessor};
use smartmedia_plugin::{register_builtins, SmartMediaLayout, SmartMediaRegistry};
use smartmedia_settings::{FileSettings, MemorySettings, SettingSelection, Settings};
use tracing::{debug, warn};

/// Everything a CLI command operates on.
pub struct Host {
    pub settings: Arc<dyn Settings>,
    pub selection: SettingSelection,
    pub registry: SmartMediaRegistry,
    pub layout: SmartMediaLayout,
}

impl Host {
    /// Build a host using the settings store named by the config.
    pub fn from_config(config: &SmartMediaConfig) -> Self {
        Self::with_settings(config, open_settings(config))
    }

    /// Build a host over an explicit settings store.
    pub fn with_settings(config: &SmartMediaConfig, settings: Arc<dyn Settings>) -> Self {
        let selection = SettingSelection::new(settings.clone(), config.selection.setting_key.clone());
        let mut registry = SmartMediaRegistry::new(Arc::new(selection.clone()));
        let _default = register_builtins(
            &mut registry,
            default_media_options(config),
            Arc::new(PassthroughProcessor),
        );

        let mut layout = match config.selection.fallback_id() {
            Some(id) => SmartMediaLayout::with_fallback(id),
            None => SmartMediaLayout::new(),
        };
        layout.attach(&registry);

        Self {
            settings,
            selection,
            registry,
            layout,
        }
    }

    /// Re-read the selection and remount the layout if the plugin changed.
    pub fn refresh(&mut self) -> bool {
        self.registry.reload();
        self.layout.attach(&self.registry)
    }
}

/// Options for the built-in panel taken from `[default_media]`.
pub fn default_media_options(config: &SmartMediaConfig) -> DefaultMediaOptions {
    let media = &config.default_media;
    DefaultMediaOptions {
        title: media.title.clone(),
        album_art_radius: media.album_art_radius,
        blur: media.blur,
        blur_radius: media.blur_radius,
    }
}

/// Location of the settings file: `[settings] path`, else the XDG data dir.
pub fn settings_path(config: &SmartMediaConfig) -> Option<PathBuf> {
    match &config.settings.path {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::data_dir().map(|d| d.join("smartmedia/settings.toml")),
    }
}

fn open_settings(config: &SmartMediaConfig) -> Arc<dyn Settings> {
    match settings_path(config) {
        Some(path) => {
            debug!(path = %path.display(), "using file settings");
            Arc::new(FileSettings::new(path))
        }
        None => {
            warn!("no data directory found; settings will not persist");
            Arc::new(MemorySettings::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use smartmedia_core::PluginId;

    use super::*;

    fn memory_host(config: &SmartMediaConfig) -> (Arc<MemorySettings>, Host) {
        let settings = Arc::new(MemorySettings::new());
        let host = Host::with_settings(config, settings.clone());
        (settings, host)
    }

    #[test]
    fn builtin_registered_and_fallback_mounted() {
        let (_, host) = memory_host(&SmartMediaConfig::default());
        assert!(host.registry.contains("default"));
        assert!(host.registry.active().is_none());
        assert_eq!(host.layout.mounted_id(), Some(&PluginId::from("default")));
    }

    #[test]
    fn empty_fallback_leaves_layout_unmounted() {
        let mut config = SmartMediaConfig::default();
        config.selection.fallback = Some(String::new());
        let (_, host) = memory_host(&config);
        assert!(host.layout.mounted_id().is_none());
    }

    #[test]
    fn configured_setting_key_drives_selection() {
        let mut config = SmartMediaConfig::default();
        config.selection.setting_key = "lockscreen_theme".to_string();
        let (settings, mut host) = memory_host(&config);

        settings.put("smart_media_theme", "default").unwrap();
        host.refresh();
        assert!(host.registry.active().is_none());

        settings.put("lockscreen_theme", "default").unwrap();
        host.refresh();
        assert_eq!(host.registry.active_id(), Some(&PluginId::from("default")));
    }

    #[test]
    fn default_media_section_reaches_plugin() {
        let mut config = SmartMediaConfig::default();
        config.default_media.title = "Classic".to_string();
        let (_, host) = memory_host(&config);
        let plugin = host.registry.get("default").unwrap();
        assert_eq!(plugin.title(), "Classic");
    }

    #[test]
    fn explicit_settings_path_wins() {
        let mut config = SmartMediaConfig::default();
        config.settings.path = Some("/tmp/sm/settings.toml".to_string());
        assert_eq!(settings_path(&config), Some(PathBuf::from("/tmp/sm/settings.toml")));
    }
}
