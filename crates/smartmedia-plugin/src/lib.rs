// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry, built-in catalog, and layout container.
//!
//! Media plugins are registered under stable ids. One of them is active at a
//! time, chosen by an external selection key that the registry re-reads
//! whenever its contents change or the host asks it to reload.

pub mod catalog;
pub mod layout;
pub mod registry;

pub use catalog::register_builtins;
pub use layout::SmartMediaLayout;
pub use registry::SmartMediaRegistry;
