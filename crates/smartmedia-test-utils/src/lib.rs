// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for SmartMedia integration tests.
//!
//! Provides a mock plugin and a registry harness for fast, deterministic
//! tests without a host UI.
//!
//! # Components
//!
//! - [`MockPlugin`] - Mock media plugin that records lifecycle calls
//! - [`TestHarness`] - Registry wired to an in-memory settings store

pub mod harness;
pub mod mock_plugin;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_plugin::MockPlugin;
