// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by plugins, the registry, and the media pipeline.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Stable identifier under which a plugin is registered and selected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginId(pub String);

impl PluginId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PluginId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::borrow::Borrow<str> for PluginId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A zero-argument callback supplied by the host (click, show, hide).
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Decoded image pixels. Decoding and scaling happen outside SmartMedia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }
}

/// Name of the built-in icon used when media carries no app icon.
pub const MUSIC_NOTE_ICON: &str = "ic_music_note";

/// An icon, either a named host resource or a decoded bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    Resource(String),
    Bitmap(Bitmap),
}

impl Icon {
    /// The fallback icon shown for media apps without their own icon.
    pub fn music_note() -> Self {
        Icon::Resource(MUSIC_NOTE_ICON.to_string())
    }
}

/// Font weight for [`Typeface`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

/// A font family and weight applied to a text field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Typeface {
    pub family: String,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Typeface {
    pub fn new(family: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            weight,
        }
    }
}

/// Opaque token identifying the media session that produced [`MediaData`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(pub String);

/// A transport control offered by the media session (play, pause, skip...).
#[derive(Clone, Default)]
pub struct MediaAction {
    pub icon: Option<Icon>,
    pub content_description: Option<String>,
    /// `None` means the control is present but currently unavailable.
    pub action: Option<Callback>,
}

impl MediaAction {
    pub fn new(content_description: impl Into<String>, action: Callback) -> Self {
        Self {
            icon: None,
            content_description: Some(content_description.into()),
            action: Some(action),
        }
    }

    /// A control with no callback, shown disabled.
    pub fn unavailable(content_description: impl Into<String>) -> Self {
        Self {
            icon: None,
            content_description: Some(content_description.into()),
            action: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl fmt::Debug for MediaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaAction")
            .field("icon", &self.icon)
            .field("content_description", &self.content_description)
            .field("action", &self.action.is_some())
            .finish()
    }
}

/// Metadata for the currently playing media, produced by the media pipeline.
#[derive(Debug, Clone, Default)]
pub struct MediaData {
    pub song: String,
    pub artist: String,
    pub app: String,
    pub app_icon: Option<Icon>,
    pub artwork: Option<Bitmap>,
    /// ARGB background colour extracted from the artwork.
    pub background_color: u32,
    pub token: Option<SessionToken>,
    pub actions: Vec<MediaAction>,
}
