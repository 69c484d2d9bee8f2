// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source of the externally stored selection key.

/// Synchronous read of the preference naming the desired plugin.
///
/// `None` means no preference is set. Implementations should be cheap: the
/// registry reads the key after every mutation.
pub trait SelectionSource: Send + Sync {
    fn selection_key(&self) -> Option<String>;
}

/// A fixed selection, useful for hosts without a settings backend.
impl SelectionSource for Option<String> {
    fn selection_key(&self) -> Option<String> {
        self.clone()
    }
}
