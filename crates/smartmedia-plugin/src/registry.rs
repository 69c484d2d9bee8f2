// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of media plugins with a single active selection.
//!
//! The `SmartMediaRegistry` stores plugins keyed by [`PluginId`]. Which one
//! is active is decided by an external selection key, re-read from the
//! injected [`SelectionSource`] after every mutation and on every `reload`.
//! The active plugin is always a member of the registry: an unset or
//! unmatched key simply means no plugin is active.

use std::collections::HashMap;
use std::sync::Arc;

use smartmedia_core::{PluginEvent, PluginId, PluginListener, SelectionSource, SmartMediaPlugin};
use tracing::{debug, info, warn};

/// Registry of available media plugins.
///
/// Mutations take `&mut self`; the registry is owned by one component and is
/// not synchronized internally.
pub struct SmartMediaRegistry {
    plugins: HashMap<PluginId, Arc<dyn SmartMediaPlugin>>,
    selection: Arc<dyn SelectionSource>,
    active: Option<Arc<dyn SmartMediaPlugin>>,
    active_id: Option<PluginId>,
}

impl SmartMediaRegistry {
    /// Create an empty registry reading its selection from `selection`.
    pub fn new(selection: Arc<dyn SelectionSource>) -> Self {
        Self {
            plugins: HashMap::new(),
            selection,
            active: None,
            active_id: None,
        }
    }

    /// Register `plugin` under `id`, replacing any previous entry.
    ///
    /// Empty identifiers are ignored.
    pub fn register(&mut self, id: impl Into<PluginId>, plugin: Arc<dyn SmartMediaPlugin>) {
        let id = id.into();
        if id.is_empty() {
            warn!("ignoring plugin registration with empty id");
            return;
        }
        if self.plugins.insert(id.clone(), plugin).is_some() {
            debug!(plugin_id = %id, "replaced plugin");
        } else {
            debug!(plugin_id = %id, "registered plugin");
        }
        self.reload();
    }

    /// Register `plugin` under its own canonical id.
    pub fn add_plugin(&mut self, plugin: Arc<dyn SmartMediaPlugin>) {
        let id = plugin.id();
        self.register(id, plugin);
    }

    /// Construct a built-in plugin and register it under its canonical id.
    pub fn add_builtin<F>(&mut self, supplier: F)
    where
        F: FnOnce() -> Arc<dyn SmartMediaPlugin>,
    {
        self.add_plugin(supplier());
    }

    /// Remove the plugin registered under `id`. Absent ids are a no-op.
    pub fn unregister(&mut self, id: &str) {
        if self.plugins.remove(id).is_some() {
            debug!(plugin_id = id, "unregistered plugin");
        }
        self.reload();
    }

    /// The plugin whose id matches the current selection key, if any.
    pub fn active(&self) -> Option<Arc<dyn SmartMediaPlugin>> {
        self.active.clone()
    }

    /// Identifier of the active plugin, if any.
    pub fn active_id(&self) -> Option<&PluginId> {
        self.active_id.as_ref()
    }

    /// Re-read the selection key and re-derive the active plugin.
    ///
    /// Call this when the selection changes without a registry mutation.
    pub fn reload(&mut self) {
        let key = self.selection.selection_key();
        let resolved = key
            .as_deref()
            .and_then(|k| self.plugins.get_key_value(k))
            .map(|(id, plugin)| (id.clone(), plugin.clone()));

        let (active_id, active) = match resolved {
            Some((id, plugin)) => (Some(id), Some(plugin)),
            None => (None, None),
        };

        if active_id != self.active_id {
            info!(
                selection = key.as_deref().unwrap_or("<unset>"),
                active = active_id.as_ref().map(PluginId::as_str).unwrap_or("<none>"),
                "active media plugin changed"
            );
        }
        self.active_id = active_id;
        self.active = active;
    }

    /// Dispatch a lifecycle event from the host plugin loader.
    pub fn handle_event(&mut self, event: PluginEvent) {
        match event {
            PluginEvent::Connected(plugin) => self.on_plugin_connected(plugin),
            PluginEvent::Disconnected(plugin) => self.on_plugin_disconnected(plugin),
        }
    }

    /// Get a plugin by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn SmartMediaPlugin>> {
        self.plugins.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// All registered ids, sorted.
    pub fn ids(&self) -> Vec<PluginId> {
        let mut ids: Vec<PluginId> = self.plugins.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl PluginListener for SmartMediaRegistry {
    fn on_plugin_connected(&mut self, plugin: Arc<dyn SmartMediaPlugin>) {
        self.add_plugin(plugin);
    }

    fn on_plugin_disconnected(&mut self, plugin: Arc<dyn SmartMediaPlugin>) {
        let id = plugin.id();
        self.unregister(id.as_str());
    }
}

impl std::fmt::Debug for SmartMediaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartMediaRegistry")
            .field("plugins", &self.ids())
            .field("active", &self.active_id)
            .finish()
    }
}
