// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `smartmedia list`, `active`, `select`, and `backup` implementations.
//!
//! Each command computes a serializable report from the [`Host`] and then
//! prints it either as JSON or as colored text.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use smartmedia_core::SmartMediaError;
use smartmedia_settings::backup;
use tracing::info;

use crate::host::Host;

/// One registered plugin in `list` output.
#[derive(Debug, Serialize, PartialEq)]
pub struct PluginEntry {
    pub id: String,
    pub title: String,
    pub active: bool,
}

/// Output of `active`.
#[derive(Debug, Serialize, PartialEq)]
pub struct ActiveReport {
    /// Plugin chosen by the selection key, if registered.
    pub active: Option<String>,
    /// Raw value of the selection key.
    pub selection: Option<String>,
    /// Plugin the layout shows, which may be the fallback.
    pub mounted: Option<String>,
}

/// Output of `select`.
#[derive(Debug, Serialize, PartialEq)]
pub struct SelectOutcome {
    pub selected: String,
    pub resolved: bool,
    pub mounted: Option<String>,
}

pub fn list_plugins(host: &Host) -> Vec<PluginEntry> {
    let active = host.registry.active_id();
    host.registry
        .ids()
        .into_iter()
        .filter_map(|id| {
            let plugin = host.registry.get(id.as_str())?;
            Some(PluginEntry {
                active: active == Some(&id),
                title: plugin.title(),
                id: id.to_string(),
            })
        })
        .collect()
}

pub fn active_report(host: &Host) -> ActiveReport {
    ActiveReport {
        active: host.registry.active_id().map(ToString::to_string),
        selection: host.settings.get(host.selection.key()),
        mounted: host.layout.mounted_id().map(ToString::to_string),
    }
}

/// Store `id` as the selection and reload.
///
/// Surrounding whitespace is trimmed. Selecting an id nobody registered is
/// not an error: the key is written and the outcome reports it as unresolved.
pub fn select(host: &mut Host, id: &str) -> Result<SelectOutcome, SmartMediaError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(SmartMediaError::InvalidInput("plugin id must not be empty".to_string()));
    }
    host.selection.select(id)?;
    host.refresh();

    let resolved = host.registry.active_id().is_some_and(|a| a.as_str() == id);
    info!(plugin_id = %id, resolved, "selection updated");
    Ok(SelectOutcome {
        selected: id.to_string(),
        resolved,
        mounted: host.layout.mounted_id().map(ToString::to_string),
    })
}

/// Serialize the secure settings backup as JSON.
pub fn backup_json(host: &Host) -> Result<String, SmartMediaError> {
    backup::to_json(&backup::backup(host.settings.as_ref()))
}

/// Restore secure settings from a JSON backup file.
pub fn restore_from_file(host: &mut Host, path: &Path) -> Result<usize, SmartMediaError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        SmartMediaError::settings(format!("failed to read backup {}", path.display()), e)
    })?;
    let entries = backup::from_json(&json)?;
    let restored = backup::restore(host.settings.as_ref(), &entries)?;
    host.refresh();
    Ok(restored)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), SmartMediaError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_list(host: &Host, json: bool, use_color: bool) -> Result<(), SmartMediaError> {
    let entries = list_plugins(host);
    if json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("no plugins registered");
        return Ok(());
    }
    for entry in &entries {
        let marker = match (entry.active, use_color) {
            (true, true) => "*".green().bold().to_string(),
            (true, false) => "*".to_string(),
            (false, _) => " ".to_string(),
        };
        println!("{marker} {:<16} {}", entry.id, entry.title);
    }
    Ok(())
}

pub fn run_active(host: &Host, json: bool, use_color: bool) -> Result<(), SmartMediaError> {
    let report = active_report(host);
    if json {
        return print_json(&report);
    }

    match (&report.active, use_color) {
        (Some(id), true) => println!("{}", id.green()),
        (Some(id), false) => println!("{id}"),
        (None, true) => println!("{}", "none".dimmed()),
        (None, false) => println!("none"),
    }
    if report.active.is_none()
        && let Some(mounted) = &report.mounted
    {
        println!("showing fallback: {mounted}");
    }
    Ok(())
}

pub fn run_select(host: &mut Host, id: &str, use_color: bool) -> Result<(), SmartMediaError> {
    let outcome = select(host, id)?;
    if outcome.resolved {
        let id = if use_color {
            outcome.selected.green().to_string()
        } else {
            outcome.selected
        };
        println!("active plugin: {id}");
    } else {
        let note = format!("`{}` is not registered; no plugin is active", outcome.selected);
        if use_color {
            println!("{}", note.yellow());
        } else {
            println!("{note}");
        }
    }
    Ok(())
}

pub fn run_backup(host: &mut Host, restore: Option<&Path>) -> Result<(), SmartMediaError> {
    match restore {
        Some(path) => {
            let restored = restore_from_file(host, path)?;
            eprintln!("Restored {restored} settings from {}", path.display());
        }
        None => println!("{}", backup_json(host)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use smartmedia_config::SmartMediaConfig;
    use smartmedia_settings::{MemorySettings, Settings};
    use smartmedia_test_utils::MockPlugin;

    use super::*;

    fn host() -> (Arc<MemorySettings>, Host) {
        let settings = Arc::new(MemorySettings::new());
        let mut host = Host::with_settings(&SmartMediaConfig::default(), settings.clone());
        host.registry.add_plugin(Arc::new(MockPlugin::new("themed")));
        (settings, host)
    }

    #[test]
    fn list_is_sorted_and_marks_active() {
        let (_, mut host) = host();
        select(&mut host, "themed").unwrap();

        let entries = list_plugins(&host);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["default", "themed"]);
        assert!(!entries[0].active);
        assert!(entries[1].active);
        assert_eq!(entries[0].title, "Default");
    }

    #[test]
    fn active_report_shows_fallback_when_unset() {
        let (_, host) = host();
        assert_eq!(
            active_report(&host),
            ActiveReport {
                active: None,
                selection: None,
                mounted: Some("default".to_string()),
            }
        );
    }

    #[test]
    fn select_unregistered_id_is_unresolved_but_stored() {
        let (settings, mut host) = host();
        let outcome = select(&mut host, "retro").unwrap();
        assert!(!outcome.resolved);
        assert_eq!(outcome.mounted.as_deref(), Some("default"));
        assert_eq!(settings.get("smart_media_theme").as_deref(), Some("retro"));
    }

    #[test]
    fn select_registered_id_mounts_it() {
        let (_, mut host) = host();
        let outcome = select(&mut host, "themed").unwrap();
        assert!(outcome.resolved);
        assert_eq!(outcome.mounted.as_deref(), Some("themed"));
    }

    #[test]
    fn select_rejects_empty_id() {
        let (settings, mut host) = host();
        let err = select(&mut host, "  ").unwrap_err();
        assert!(matches!(err, SmartMediaError::InvalidInput(_)));
        assert_eq!(settings.get("smart_media_theme"), None);
    }

    #[test]
    fn select_trims_id_before_storing() {
        let (settings, mut host) = host();
        let outcome = select(&mut host, " themed\n").unwrap();
        assert!(outcome.resolved);
        assert_eq!(outcome.selected, "themed");
        assert_eq!(settings.get("smart_media_theme").as_deref(), Some("themed"));
    }

    #[test]
    fn backup_then_restore_through_file() {
        let (settings, mut host) = host();
        settings.put("doze_enabled", "1").unwrap();
        settings.put("smart_media_theme", "themed").unwrap();

        let json = backup_json(&host).unwrap();
        assert!(json.contains("doze_enabled"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");
        std::fs::write(&path, &json).unwrap();

        settings.remove("doze_enabled").unwrap();
        let restored = restore_from_file(&mut host, &path).unwrap();
        assert!(restored >= 1);
        assert_eq!(settings.get("doze_enabled").as_deref(), Some("1"));
    }

    #[test]
    fn restore_from_missing_file_is_a_settings_error() {
        let (_, mut host) = host();
        let err = restore_from_file(&mut host, Path::new("/nonexistent/backup.json")).unwrap_err();
        assert!(matches!(err, SmartMediaError::Settings { .. }));
    }
}
