// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Callbacks delivered by the host plugin loader and the media pipeline.

use std::fmt;
use std::sync::Arc;

use crate::traits::plugin::SmartMediaPlugin;
use crate::types::MediaData;

/// Receives plugin lifecycle notifications from the host plugin loader.
pub trait PluginListener {
    fn on_plugin_connected(&mut self, plugin: Arc<dyn SmartMediaPlugin>);

    fn on_plugin_disconnected(&mut self, plugin: Arc<dyn SmartMediaPlugin>);
}

/// A plugin lifecycle event, for hosts that deliver events as values.
#[derive(Clone)]
pub enum PluginEvent {
    Connected(Arc<dyn SmartMediaPlugin>),
    Disconnected(Arc<dyn SmartMediaPlugin>),
}

impl fmt::Debug for PluginEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginEvent::Connected(p) => f.debug_tuple("Connected").field(&p.id()).finish(),
            PluginEvent::Disconnected(p) => f.debug_tuple("Disconnected").field(&p.id()).finish(),
        }
    }
}

/// Receives media metadata updates from the media pipeline.
pub trait MediaDataListener: Send + Sync {
    /// New or updated media. `old_key` is set when the entry was re-keyed.
    fn on_media_data_loaded(&self, key: &str, old_key: Option<&str>, data: &MediaData);

    fn on_media_data_removed(&self, _key: &str) {}
}
