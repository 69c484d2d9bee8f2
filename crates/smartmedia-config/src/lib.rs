// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the SmartMedia host.
//!
//! TOML files are merged over compiled defaults along the XDG hierarchy, then
//! `SMARTMEDIA_*` environment variables are applied. Unknown keys are
//! rejected and reported as miette diagnostics with typo suggestions.
//!
//! ```no_run
//! use smartmedia_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("selection key: {}", config.selection.setting_key);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    DefaultMediaConfig, LoggingConfig, SelectionConfig, SettingsConfig, SmartMediaConfig,
};

/// Load from the standard hierarchy and validate.
pub fn load_and_validate() -> Result<SmartMediaConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load from an inline TOML string and validate.
pub fn load_and_validate_str(toml_content: &str) -> Result<SmartMediaConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load from an explicit file (plus env overrides) and validate.
///
/// A missing file is an error here, unlike the optional files of the
/// standard hierarchy.
pub fn load_and_validate_path(path: &Path) -> Result<SmartMediaConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "config file `{}` does not exist",
            path.display()
        ))]);
    }
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

fn finish(
    loaded: Result<SmartMediaConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<SmartMediaConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(level = %config.logging.level, "configuration loaded");
            Ok(config)
        }
        // Sources are only read when there is something to point at.
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

fn collect_toml_sources() -> Vec<(String, String)> {
    let mut paths = vec![Path::new(loader::SYSTEM_CONFIG_PATH).to_path_buf()];
    paths.extend(loader::user_config_path());
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(loader::LOCAL_CONFIG_PATH));
    }

    paths
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
