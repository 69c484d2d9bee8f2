// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value settings stores.
//!
//! `MemorySettings` keeps values in a lock-guarded map. `FileSettings` keeps
//! a flat TOML table on disk and re-reads it on every lookup, so edits made
//! by other processes are picked up by the next read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use smartmedia_core::SmartMediaError;
use tracing::{debug, warn};

/// A string key/value settings backend.
pub trait Settings: Send + Sync {
    /// Current value for `key`, or `None` if unset or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn put(&self, key: &str, value: &str) -> Result<(), SmartMediaError>;

    /// Remove `key`. Removing an unset key is not an error.
    fn remove(&self, key: &str) -> Result<(), SmartMediaError>;
}

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    pub fn with_values<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SmartMediaError> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SmartMediaError> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
        Ok(())
    }
}

/// Settings persisted as a flat TOML table.
///
/// Non-string scalar values (`doze_enabled = 1`) read back as their TOML
/// rendering (`"1"`). Writes always store strings.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole table. A missing file is an empty table.
    fn load(&self) -> Result<toml::Table, SmartMediaError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(e) => {
                return Err(SmartMediaError::settings(
                    format!("failed to read {}", self.path.display()),
                    e,
                ));
            }
        };
        toml::from_str::<toml::Table>(&content).map_err(|e| {
            SmartMediaError::settings(format!("malformed settings file {}", self.path.display()), e)
        })
    }

    fn store(&self, table: &toml::Table) -> Result<(), SmartMediaError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                SmartMediaError::settings(format!("failed to create {}", parent.display()), e)
            })?;
        }
        let content = toml::to_string(table)
            .map_err(|e| SmartMediaError::settings("failed to encode settings", e))?;
        std::fs::write(&self.path, content).map_err(|e| {
            SmartMediaError::settings(format!("failed to write {}", self.path.display()), e)
        })
    }

    fn update(&self, apply: impl FnOnce(&mut toml::Table)) -> Result<(), SmartMediaError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut table = self.load()?;
        apply(&mut table);
        self.store(&table)
    }
}

impl Settings for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        let table = match self.load() {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings unreadable, treating as unset");
                return None;
            }
        };
        match table.get(key)? {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                debug!(key, "ignoring non-scalar settings value");
                None
            }
            other => Some(other.to_string()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SmartMediaError> {
        self.update(|table| {
            table.insert(key.to_string(), toml::Value::String(value.to_string()));
        })
    }

    fn remove(&self, key: &str) -> Result<(), SmartMediaError> {
        self.update(|table| {
            table.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_put_get_remove() {
        let settings = MemorySettings::new();
        assert_eq!(settings.get("smart_media_theme"), None);

        settings.put("smart_media_theme", "default").unwrap();
        assert_eq!(settings.get("smart_media_theme").as_deref(), Some("default"));

        settings.remove("smart_media_theme").unwrap();
        settings.remove("smart_media_theme").unwrap();
        assert_eq!(settings.get("smart_media_theme"), None);
    }

    #[test]
    fn memory_with_values() {
        let settings = MemorySettings::with_values([("a", "1"), ("b", "2")]);
        assert_eq!(settings.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn file_missing_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FileSettings::new(dir.path().join("settings.toml"));
        assert_eq!(settings.get("smart_media_theme"), None);
    }

    #[test]
    fn file_put_creates_parent_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FileSettings::new(dir.path().join("nested/system/settings.toml"));

        settings.put("smart_media_theme", "themed").unwrap();
        settings.put("navigation_mode", "2").unwrap();
        assert_eq!(settings.get("smart_media_theme").as_deref(), Some("themed"));

        settings.remove("smart_media_theme").unwrap();
        assert_eq!(settings.get("smart_media_theme"), None);
        assert_eq!(settings.get("navigation_mode").as_deref(), Some("2"));
    }

    #[test]
    fn file_sees_external_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = FileSettings::new(&path);

        std::fs::write(&path, "smart_media_theme = \"default\"\ndoze_enabled = 1\n").unwrap();
        assert_eq!(settings.get("smart_media_theme").as_deref(), Some("default"));
        assert_eq!(settings.get("doze_enabled").as_deref(), Some("1"));

        std::fs::write(&path, "smart_media_theme = \"themed\"\n").unwrap();
        assert_eq!(settings.get("smart_media_theme").as_deref(), Some("themed"));
    }

    #[test]
    fn malformed_file_reads_as_unset_but_refuses_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let settings = FileSettings::new(&path);
        assert_eq!(settings.get("smart_media_theme"), None);
        assert!(settings.put("smart_media_theme", "default").is_err());
    }
}
