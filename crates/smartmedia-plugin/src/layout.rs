// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Container that hosts the active plugin's view.

use std::sync::Arc;

use smartmedia_core::{MediaView, PluginId, SmartMediaPlugin};
use tracing::{debug, info};

use crate::registry::SmartMediaRegistry;

struct Mounted {
    id: PluginId,
    plugin: Arc<dyn SmartMediaPlugin>,
}

/// Hosts the view of the registry's active plugin.
///
/// When nothing is active the layout mounts its fallback plugin, if one is
/// configured and registered. Swapping plugins destroys the outgoing view.
#[derive(Default)]
pub struct SmartMediaLayout {
    fallback: Option<PluginId>,
    mounted: Option<Mounted>,
}

impl SmartMediaLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// A layout that falls back to `fallback` when no plugin is active.
    pub fn with_fallback(fallback: impl Into<PluginId>) -> Self {
        Self {
            fallback: Some(fallback.into()),
            mounted: None,
        }
    }

    /// Sync the mounted plugin with `registry`. Returns true if it changed.
    pub fn attach(&mut self, registry: &SmartMediaRegistry) -> bool {
        // Mount under the registry key, which may differ from the plugin's own id.
        let active = registry
            .active_id()
            .cloned()
            .zip(registry.active());
        let target = active.or_else(|| {
            let id = self.fallback.as_ref()?;
            Some((id.clone(), registry.get(id.as_str())?))
        });

        match (&self.mounted, &target) {
            (Some(current), Some((_, next))) if Arc::ptr_eq(&current.plugin, next) => return false,
            (None, None) => return false,
            _ => {}
        }

        self.unmount();
        if let Some((id, plugin)) = target {
            info!(plugin_id = %id, "mounted media plugin");
            self.mounted = Some(Mounted { id, plugin });
        }
        true
    }

    /// Unmount the current plugin, destroying its view.
    pub fn detach(&mut self) {
        self.unmount();
    }

    fn unmount(&mut self) {
        if let Some(old) = self.mounted.take() {
            debug!(plugin_id = %old.id, "unmounting media plugin");
            old.plugin.on_destroy_view();
        }
    }

    pub fn mounted_id(&self) -> Option<&PluginId> {
        self.mounted.as_ref().map(|m| &m.id)
    }

    pub fn mounted(&self) -> Option<Arc<dyn SmartMediaPlugin>> {
        self.mounted.as_ref().map(|m| m.plugin.clone())
    }

    /// The mounted plugin's current view.
    pub fn view(&self) -> Option<MediaView> {
        self.mounted.as_ref().map(|m| m.plugin.media_view())
    }
}

impl std::fmt::Debug for SmartMediaLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartMediaLayout")
            .field("fallback", &self.fallback)
            .field("mounted", &self.mounted_id())
            .finish()
    }
}
