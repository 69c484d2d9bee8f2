// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for SmartMedia.

use thiserror::Error;

/// The error type used across SmartMedia crates.
///
/// The plugin registry itself never fails; these variants cover the ambient
/// collaborators around it (settings storage, configuration, serialization).
#[derive(Debug, Error)]
pub enum SmartMediaError {
    /// Configuration errors (invalid TOML, missing fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Settings store errors (unreadable file, failed write).
    #[error("settings error: {message}")]
    Settings {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization errors for backup payloads and CLI output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller-supplied input was rejected, e.g. a blank plugin id.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SmartMediaError {
    /// Build a settings error wrapping an underlying cause.
    pub fn settings(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SmartMediaError::Settings {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
