// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The swappable lock-screen media plugin interface.

use crate::types::{Bitmap, Callback, PluginId, Typeface};
use crate::view::MediaView;

/// A swappable implementation of the lock-screen media panel.
///
/// The required methods give identity and the rendered view. Everything else
/// is an optional capability with a no-op default, so a minimal plugin only
/// implements what it supports.
///
/// Methods take `&self`: plugins are shared as `Arc<dyn SmartMediaPlugin>`
/// between the registry and the host, and keep their own interior state.
pub trait SmartMediaPlugin: Send + Sync + 'static {
    /// Canonical identifier used as the registry key and selection value.
    fn id(&self) -> PluginId;

    /// Short machine-readable name.
    fn name(&self) -> &str;

    /// Human-readable title shown in pickers.
    fn title(&self) -> String;

    /// The current view, created on first use.
    fn media_view(&self) -> MediaView;

    /// Enable or disable binding of incoming media data.
    fn set_state(&self, state: bool);

    /// Picker thumbnail, if the plugin provides one.
    fn thumbnail(&self) -> Option<Bitmap> {
        None
    }

    /// Full preview rendered at the given size, if supported.
    fn preview(&self, _width: u32, _height: u32) -> Option<Bitmap> {
        None
    }

    fn set_has_visible_notifications(&self, _has_visible_notifications: bool) {}

    /// Release the view; a later `media_view` call recreates it.
    fn on_destroy_view(&self) {}

    fn set_show_callback(&self, _callback: Callback) {}

    fn set_hide_callback(&self, _callback: Callback) {}

    /// Callback invoked after any transport control is clicked.
    fn set_on_click_callback(&self, _callback: Callback) {}

    fn set_title_typeface(&self, _typeface: Typeface) {}

    fn set_artist_typeface(&self, _typeface: Typeface) {}

    fn set_app_typeface(&self, _typeface: Typeface) {}

    /// Ambient (always-on display) darkness in `0.0..=1.0`.
    fn set_dark_amount(&self, _dark_amount: f32) {}

    fn set_artwork_blur(&self, _blur: bool, _blur_radius: f32) {}
}
