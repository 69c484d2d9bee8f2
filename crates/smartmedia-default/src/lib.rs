// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in media panel plugin for SmartMedia.

pub mod artwork;
pub mod media;

pub use artwork::{ArtworkProcessor, PassthroughProcessor};
pub use media::{DefaultMediaOptions, DefaultSmartMedia, DEFAULT_PLUGIN_ID};
