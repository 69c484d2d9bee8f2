// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the seams between SmartMedia and its host.

pub mod listener;
pub mod plugin;
pub mod selection;

pub use listener::{MediaDataListener, PluginEvent, PluginListener};
pub use plugin::SmartMediaPlugin;
pub use selection::SelectionSource;
