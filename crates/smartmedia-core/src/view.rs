// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Headless view model returned by plugins.
//!
//! A `MediaView` is the toolkit-independent description of what a plugin
//! wants on screen. The host renders it; SmartMedia never touches widgets.

use std::fmt;

use strum::Display;

use crate::types::{Bitmap, Callback, Icon, Typeface};

/// Number of transport-control slots in a media view.
pub const ACTION_SLOTS: usize = 5;

/// Whether a view element takes part in layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    Visible,
    #[default]
    Gone,
}

/// One transport-control button.
#[derive(Clone, Default)]
pub struct ActionSlot {
    pub icon: Option<Icon>,
    pub content_description: Option<String>,
    pub enabled: bool,
    pub visibility: Visibility,
    pub on_click: Option<Callback>,
}

impl ActionSlot {
    /// Run the click handler. Returns `false` for disabled or hidden slots.
    pub fn click(&self) -> bool {
        if !self.enabled || self.visibility != Visibility::Visible {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

impl fmt::Debug for ActionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSlot")
            .field("icon", &self.icon)
            .field("content_description", &self.content_description)
            .field("enabled", &self.enabled)
            .field("visibility", &self.visibility)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Toolkit-independent description of a media panel.
#[derive(Debug, Clone, Default)]
pub struct MediaView {
    pub title: String,
    pub artist: String,
    pub app_name: String,
    pub app_icon: Option<Icon>,
    pub artwork: Option<Bitmap>,
    /// ARGB tint for the panel background.
    pub background_color: Option<u32>,
    /// Corner radius applied to the background and artwork outlines.
    pub corner_radius: u32,
    pub title_typeface: Option<Typeface>,
    pub artist_typeface: Option<Typeface>,
    pub app_typeface: Option<Typeface>,
    pub actions: [ActionSlot; ACTION_SLOTS],
}

impl MediaView {
    /// Click the action in `slot`. Out-of-range slots are ignored.
    pub fn click(&self, slot: usize) -> bool {
        self.actions.get(slot).is_some_and(ActionSlot::click)
    }

    pub fn visible_actions(&self) -> usize {
        self.actions.iter().filter(|a| a.is_visible()).count()
    }
}
