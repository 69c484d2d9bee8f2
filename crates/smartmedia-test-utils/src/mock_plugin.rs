// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock media plugin for deterministic testing.
//!
//! `MockPlugin` implements `SmartMediaPlugin` with a configurable id and
//! records every lifecycle call for assertion in tests.

use std::sync::Mutex;

use smartmedia_core::{MediaView, PluginId, SmartMediaPlugin};

/// A mock media plugin that records the calls it receives.
pub struct MockPlugin {
    id: PluginId,
    calls: Mutex<Vec<String>>,
}

impl MockPlugin {
    /// Create a mock plugin with the given canonical id.
    pub fn new(id: &str) -> Self {
        Self {
            id: PluginId::from(id),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of times `on_destroy_view` was called.
    pub fn destroy_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.as_str() == "on_destroy_view")
            .count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call.into());
    }
}

impl SmartMediaPlugin for MockPlugin {
    fn id(&self) -> PluginId {
        self.id.clone()
    }

    fn name(&self) -> &str {
        self.id.as_str()
    }

    fn title(&self) -> String {
        format!("Mock {}", self.id)
    }

    fn media_view(&self) -> MediaView {
        self.record("media_view");
        MediaView {
            title: self.id.to_string(),
            ..MediaView::default()
        }
    }

    fn set_state(&self, state: bool) {
        self.record(format!("set_state({state})"));
    }

    fn on_destroy_view(&self) {
        self.record("on_destroy_view");
    }

    fn set_dark_amount(&self, dark_amount: f32) {
        self.record(format!("set_dark_amount({dark_amount})"));
    }
}

impl std::fmt::Debug for MockPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockPlugin").field("id", &self.id).finish()
    }
}
