// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapts a settings store into a registry selection source.

use std::sync::Arc;

use smartmedia_core::{SelectionSource, SmartMediaError};

use crate::store::Settings;

/// Settings key holding the identifier of the selected media plugin.
pub const SMART_MEDIA_THEME: &str = "smart_media_theme";

/// Reads the selection key from one entry of a [`Settings`] store.
///
/// An empty stored value is treated as unset.
#[derive(Clone)]
pub struct SettingSelection {
    settings: Arc<dyn Settings>,
    key: String,
}

impl SettingSelection {
    pub fn new(settings: Arc<dyn Settings>, key: impl Into<String>) -> Self {
        Self {
            settings,
            key: key.into(),
        }
    }

    /// Selection stored under [`SMART_MEDIA_THEME`].
    pub fn smart_media_theme(settings: Arc<dyn Settings>) -> Self {
        Self::new(settings, SMART_MEDIA_THEME)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist a new selection. The caller reloads the registry afterwards.
    pub fn select(&self, id: &str) -> Result<(), SmartMediaError> {
        self.settings.put(&self.key, id)
    }

    /// Clear the selection.
    pub fn clear(&self) -> Result<(), SmartMediaError> {
        self.settings.remove(&self.key)
    }
}

impl SelectionSource for SettingSelection {
    fn selection_key(&self) -> Option<String> {
        self.settings.get(&self.key).filter(|v| !v.is_empty())
    }
}

impl std::fmt::Debug for SettingSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingSelection").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySettings;

    #[test]
    fn reads_configured_key() {
        let settings = Arc::new(MemorySettings::with_values([(SMART_MEDIA_THEME, "themed")]));
        let selection = SettingSelection::smart_media_theme(settings);
        assert_eq!(selection.selection_key().as_deref(), Some("themed"));
    }

    #[test]
    fn select_and_clear_write_through() {
        let settings = Arc::new(MemorySettings::new());
        let selection = SettingSelection::new(settings.clone(), "custom_key");

        selection.select("default").unwrap();
        assert_eq!(settings.get("custom_key").as_deref(), Some("default"));
        assert_eq!(selection.selection_key().as_deref(), Some("default"));

        selection.clear().unwrap();
        assert_eq!(selection.selection_key(), None);
    }

    #[test]
    fn empty_value_is_unset() {
        let settings = Arc::new(MemorySettings::with_values([(SMART_MEDIA_THEME, "")]));
        let selection = SettingSelection::smart_media_theme(settings);
        assert_eq!(selection.selection_key(), None);
    }
}
