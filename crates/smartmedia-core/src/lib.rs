// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for SmartMedia.
//!
//! This crate provides the plugin interface, the collaborator traits the
//! registry consumes, the error type, and the media and view types shared
//! by every other crate in the workspace.

pub mod error;
pub mod traits;
pub mod types;
pub mod view;

// Re-export key items at crate root for ergonomic imports.
pub use error::SmartMediaError;
pub use types::{
    Bitmap, Callback, FontWeight, Icon, MediaAction, MediaData, PluginId, SessionToken, Typeface,
};
pub use view::{ActionSlot, MediaView, Visibility, ACTION_SLOTS};

pub use traits::{MediaDataListener, PluginEvent, PluginListener, SelectionSource, SmartMediaPlugin};

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct Bare;

    impl SmartMediaPlugin for Bare {
        fn id(&self) -> PluginId {
            PluginId::from("bare")
        }

        fn name(&self) -> &str {
            "bare"
        }

        fn title(&self) -> String {
            "Bare".to_string()
        }

        fn media_view(&self) -> MediaView {
            MediaView::default()
        }

        fn set_state(&self, _state: bool) {}
    }

    #[test]
    fn optional_plugin_capabilities_default_to_noops() {
        let plugin = Bare;
        assert!(plugin.thumbnail().is_none());
        assert!(plugin.preview(100, 100).is_none());

        // None of these may panic on a plugin that does not support them.
        plugin.set_has_visible_notifications(true);
        plugin.on_destroy_view();
        plugin.set_show_callback(Arc::new(|| {}));
        plugin.set_hide_callback(Arc::new(|| {}));
        plugin.set_on_click_callback(Arc::new(|| {}));
        plugin.set_title_typeface(Typeface::new("sans", FontWeight::Bold));
        plugin.set_artist_typeface(Typeface::new("sans", FontWeight::Regular));
        plugin.set_app_typeface(Typeface::new("sans", FontWeight::Light));
        plugin.set_dark_amount(0.5);
        plugin.set_artwork_blur(true, 12.0);
    }

    #[test]
    fn plugin_id_display_and_conversions() {
        let id = PluginId::from("default");
        assert_eq!(id.to_string(), "default");
        assert_eq!(id, PluginId::new(String::from("default")));
        assert!(!id.is_empty());
        assert!(PluginId::from("").is_empty());
    }

    #[test]
    fn plugin_id_serializes_transparently() {
        let id = PluginId::from("themed");
        let json = serde_json::to_string(&id).expect("should serialize");
        assert_eq!(json, "\"themed\"");
    }

    #[test]
    fn font_weight_parses_lowercase() {
        assert_eq!(FontWeight::from_str("bold").unwrap(), FontWeight::Bold);
        assert_eq!(FontWeight::Medium.to_string(), "medium");
        assert!(FontWeight::from_str("heavy").is_err());
    }

    #[test]
    fn view_has_five_hidden_slots_by_default() {
        let view = MediaView::default();
        assert_eq!(view.actions.len(), ACTION_SLOTS);
        assert_eq!(view.visible_actions(), 0);
        assert!(!view.click(0));
        assert!(!view.click(99));
    }

    #[test]
    fn enabled_visible_slot_runs_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let mut view = MediaView::default();
        view.actions[1] = ActionSlot {
            enabled: true,
            visibility: Visibility::Visible,
            on_click: Some(Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
            ..ActionSlot::default()
        };

        assert!(view.click(1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        view.actions[1].enabled = false;
        assert!(!view.click(1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn error_variants_render() {
        let err = SmartMediaError::InvalidInput("plugin id must not be empty".into());
        assert_eq!(err.to_string(), "invalid input: plugin id must not be empty");

        let err = SmartMediaError::settings("write failed", std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "settings error: write failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
