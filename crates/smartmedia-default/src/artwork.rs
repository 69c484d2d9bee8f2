// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Artwork post-processing seam.

use smartmedia_core::Bitmap;

/// Produces the blurred rendition of album artwork.
///
/// Image processing lives with the host; the default plugin only decides
/// when to ask for it.
pub trait ArtworkProcessor: Send + Sync {
    fn process(&self, artwork: &Bitmap, blur_radius: f32) -> Bitmap;
}

/// Returns the artwork unchanged. Used when the host has no blur pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughProcessor;

impl ArtworkProcessor for PassthroughProcessor {
    fn process(&self, artwork: &Bitmap, _blur_radius: f32) -> Bitmap {
        artwork.clone()
    }
}
