// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the parsed document model, value conversions, lookup and
//! validation rules, and option-group schemas. It does no I/O and knows nothing
//! about file formats.

pub mod config_value;
pub mod document;
pub mod errors;
pub mod lookup;
pub mod schema;

// Re-export commonly used types
pub use config_value::ConfigValue;
pub use document::{ConfigDocument, DocumentBuilder, Section};
pub use errors::{ConfigError, Result};
pub use lookup::ConfigLookup;
pub use schema::{OptionGroup, OptionKind, OptionSpec, ResolvedGroup, DEFAULT_SECTION};
