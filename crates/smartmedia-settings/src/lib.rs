// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings storage for SmartMedia.
//!
//! Provides the key/value stores that hold the plugin selection key, the
//! adapter that exposes that key to the registry, and the ordered list of
//! secure settings included in backups.

pub mod backup;
pub mod selection;
pub mod store;

pub use backup::{backup, restore, BackupEntry, SECURE_SETTINGS_TO_BACKUP};
pub use selection::{SettingSelection, SMART_MEDIA_THEME};
pub use store::{FileSettings, MemorySettings, Settings};
