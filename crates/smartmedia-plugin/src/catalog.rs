// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.
//!
//! Registers the plugins compiled into SmartMedia. Today that is the
//! default media panel, registered under its own id like any other plugin.

use std::sync::Arc;

use smartmedia_core::SmartMediaPlugin;
use smartmedia_default::{ArtworkProcessor, DefaultMediaOptions, DefaultSmartMedia};

use crate::registry::SmartMediaRegistry;

/// Register all built-in plugins.
///
/// Returns the default plugin so the host can feed it media updates.
pub fn register_builtins(
    registry: &mut SmartMediaRegistry,
    options: DefaultMediaOptions,
    processor: Arc<dyn ArtworkProcessor>,
) -> Arc<DefaultSmartMedia> {
    let default = Arc::new(DefaultSmartMedia::new(options, processor));
    let plugin: Arc<dyn SmartMediaPlugin> = default.clone();
    registry.add_builtin(move || plugin);
    default
}
