// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration loader.
//!
//! This module wires the parser and reader ports together behind a single entry
//! point for host applications.

pub mod loader;

// Re-export commonly used types
pub use loader::{ConfigLoader, ConfigLoaderBuilder};
