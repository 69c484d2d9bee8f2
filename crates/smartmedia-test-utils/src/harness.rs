// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness wiring a registry to an in-memory settings store.
//!
//! `TestHarness` owns a `SmartMediaRegistry` whose selection key lives in a
//! `MemorySettings` store, so tests can change the selection the same way a
//! settings UI would and then reload.

use std::sync::Arc;

use smartmedia_core::{PluginId, SmartMediaError, SmartMediaPlugin};
use smartmedia_plugin::SmartMediaRegistry;
use smartmedia_settings::{MemorySettings, SettingSelection, Settings};

use crate::mock_plugin::MockPlugin;

/// Builder for creating test registries with preset plugins and selection.
pub struct TestHarnessBuilder {
    selection: Option<String>,
    plugins: Vec<Arc<dyn SmartMediaPlugin>>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            selection: None,
            plugins: Vec::new(),
        }
    }

    /// Set the initial selection key.
    pub fn with_selection(mut self, id: &str) -> Self {
        self.selection = Some(id.to_string());
        self
    }

    /// Pre-register a mock plugin with the given id.
    pub fn with_mock(mut self, id: &str) -> Self {
        self.plugins.push(Arc::new(MockPlugin::new(id)));
        self
    }

    /// Pre-register an arbitrary plugin.
    pub fn with_plugin(mut self, plugin: Arc<dyn SmartMediaPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Build the harness.
    pub fn build(self) -> Result<TestHarness, SmartMediaError> {
        let settings = Arc::new(MemorySettings::new());
        let selection = SettingSelection::smart_media_theme(settings.clone());
        if let Some(id) = &self.selection {
            selection.select(id)?;
        }

        let mut registry = SmartMediaRegistry::new(Arc::new(selection.clone()));
        for plugin in self.plugins {
            registry.add_plugin(plugin);
        }

        Ok(TestHarness {
            settings,
            selection,
            registry,
        })
    }
}

/// A registry plus the settings store backing its selection.
pub struct TestHarness {
    pub settings: Arc<MemorySettings>,
    pub selection: SettingSelection,
    pub registry: SmartMediaRegistry,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Persist a new selection and reload the registry.
    pub fn select(&mut self, id: &str) -> Result<(), SmartMediaError> {
        self.selection.select(id)?;
        self.registry.reload();
        Ok(())
    }

    /// Clear the selection and reload the registry.
    pub fn clear_selection(&mut self) -> Result<(), SmartMediaError> {
        self.selection.clear()?;
        self.registry.reload();
        Ok(())
    }

    /// Raw selection value in the settings store.
    pub fn stored_selection(&self) -> Option<String> {
        self.settings.get(self.selection.key())
    }

    pub fn active_id(&self) -> Option<PluginId> {
        self.registry.active_id().cloned()
    }
}
