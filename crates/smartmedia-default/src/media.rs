// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built-in media panel.
//!
//! `DefaultSmartMedia` binds [`MediaData`] from the media pipeline into a
//! [`MediaView`]: text fields, artwork (optionally blurred), app icon, and up
//! to five transport controls.

use std::sync::{Arc, Mutex, MutexGuard};

use smartmedia_core::{
    ActionSlot, Callback, Icon, MediaData, MediaDataListener, MediaView, PluginId, SessionToken,
    SmartMediaPlugin, Typeface, Visibility,
};
use tracing::debug;

use crate::artwork::ArtworkProcessor;

/// Canonical id of the built-in plugin.
pub const DEFAULT_PLUGIN_ID: &str = "default";

/// Construction options for [`DefaultSmartMedia`].
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultMediaOptions {
    /// Title shown in plugin pickers.
    pub title: String,
    /// Corner radius for the background and artwork outlines.
    pub album_art_radius: u32,
    pub blur: bool,
    pub blur_radius: f32,
}

impl Default for DefaultMediaOptions {
    fn default() -> Self {
        Self {
            title: "Default".to_string(),
            album_art_radius: 20,
            blur: false,
            blur_radius: 0.0,
        }
    }
}

#[derive(Default)]
struct State {
    bind_enabled: bool,
    // Cleared by `on_destroy_view`, set again when a view is requested.
    listening: bool,
    blur: bool,
    blur_radius: f32,
    view: Option<MediaView>,
    token: Option<SessionToken>,
    title_typeface: Option<Typeface>,
    artist_typeface: Option<Typeface>,
    app_typeface: Option<Typeface>,
}

/// The built-in media panel plugin.
pub struct DefaultSmartMedia {
    title: String,
    corner_radius: u32,
    processor: Arc<dyn ArtworkProcessor>,
    state: Mutex<State>,
    // Shared with click handlers so they see the callback current at click time.
    on_click: Arc<Mutex<Option<Callback>>>,
}

impl DefaultSmartMedia {
    pub fn new(options: DefaultMediaOptions, processor: Arc<dyn ArtworkProcessor>) -> Self {
        Self {
            title: options.title,
            corner_radius: options.album_art_radius,
            processor,
            state: Mutex::new(State {
                bind_enabled: true,
                listening: true,
                blur: options.blur,
                blur_radius: options.blur_radius,
                ..State::default()
            }),
            on_click: Arc::new(Mutex::new(None)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Session token of the most recently bound media, if any.
    pub fn session_token(&self) -> Option<SessionToken> {
        self.lock().token.clone()
    }

    /// Whether a view currently exists.
    pub fn has_view(&self) -> bool {
        self.lock().view.is_some()
    }

    /// Bind `data` into the view, creating the view if needed.
    pub fn bind(&self, data: &MediaData) {
        let mut guard = self.lock();
        let state = &mut *guard;

        state.token = data.token.clone();

        let artwork = data.artwork.as_ref().map(|art| {
            if state.blur {
                self.processor.process(art, state.blur_radius)
            } else {
                art.clone()
            }
        });

        let view = ensure_view(state, self.corner_radius);
        view.background_color = Some(data.background_color);
        view.artwork = artwork;
        view.app_icon = Some(data.app_icon.clone().unwrap_or_else(Icon::music_note));
        view.title = data.song.clone();
        view.app_name = data.app.clone();
        view.artist = data.artist.clone();

        for (i, slot) in view.actions.iter_mut().enumerate() {
            match data.actions.get(i) {
                Some(action) => {
                    *slot = ActionSlot {
                        icon: action.icon.clone(),
                        content_description: action.content_description.clone(),
                        ..ActionSlot::default()
                    };
                    if let Some(run) = &action.action {
                        slot.enabled = true;
                        slot.visibility = Visibility::Visible;
                        slot.on_click = Some(self.click_handler(run.clone()));
                    }
                }
                None => slot.visibility = Visibility::Gone,
            }
        }

        debug!(
            song = %data.song,
            app = %data.app,
            actions = data.actions.len(),
            "bound media data"
        );
    }

    fn click_handler(&self, run: Callback) -> Callback {
        let on_click = self.on_click.clone();
        Arc::new(move || {
            run();
            let after = on_click.lock().unwrap_or_else(|e| e.into_inner()).clone();
            if let Some(after) = after {
                after();
            }
        })
    }
}

fn ensure_view(state: &mut State, corner_radius: u32) -> &mut MediaView {
    let title_typeface = state.title_typeface.clone();
    let artist_typeface = state.artist_typeface.clone();
    let app_typeface = state.app_typeface.clone();
    state.view.get_or_insert_with(|| MediaView {
        corner_radius,
        title_typeface,
        artist_typeface,
        app_typeface,
        ..MediaView::default()
    })
}

impl SmartMediaPlugin for DefaultSmartMedia {
    fn id(&self) -> PluginId {
        PluginId::from(DEFAULT_PLUGIN_ID)
    }

    fn name(&self) -> &str {
        DEFAULT_PLUGIN_ID
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn media_view(&self) -> MediaView {
        let mut state = self.lock();
        state.listening = true;
        ensure_view(&mut state, self.corner_radius).clone()
    }

    fn set_state(&self, state: bool) {
        self.lock().bind_enabled = state;
    }

    fn on_destroy_view(&self) {
        let mut state = self.lock();
        state.view = None;
        state.listening = false;
    }

    fn set_on_click_callback(&self, callback: Callback) {
        *self.on_click.lock().unwrap_or_else(|e| e.into_inner()) = Some(callback);
    }

    fn set_title_typeface(&self, typeface: Typeface) {
        let mut state = self.lock();
        if let Some(view) = state.view.as_mut() {
            view.title_typeface = Some(typeface.clone());
        }
        state.title_typeface = Some(typeface);
    }

    fn set_artist_typeface(&self, typeface: Typeface) {
        let mut state = self.lock();
        if let Some(view) = state.view.as_mut() {
            view.artist_typeface = Some(typeface.clone());
        }
        state.artist_typeface = Some(typeface);
    }

    fn set_app_typeface(&self, typeface: Typeface) {
        let mut state = self.lock();
        if let Some(view) = state.view.as_mut() {
            view.app_typeface = Some(typeface.clone());
        }
        state.app_typeface = Some(typeface);
    }

    fn set_artwork_blur(&self, blur: bool, blur_radius: f32) {
        let mut state = self.lock();
        state.blur = blur;
        state.blur_radius = blur_radius;
    }
}

impl MediaDataListener for DefaultSmartMedia {
    fn on_media_data_loaded(&self, key: &str, _old_key: Option<&str>, data: &MediaData) {
        let (enabled, listening) = {
            let state = self.lock();
            (state.bind_enabled, state.listening)
        };
        if !listening {
            debug!(key, "view destroyed, ignoring media update");
        } else if enabled {
            self.bind(data);
        } else {
            debug!(key, "media binding disabled, dropping update");
        }
    }
}

impl std::fmt::Debug for DefaultSmartMedia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultSmartMedia")
            .field("title", &self.title)
            .field("corner_radius", &self.corner_radius)
            .field("has_view", &self.has_view())
            .finish()
    }
}
