// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture loader for sectioned INI-style configuration files.
//!
//! This crate reads files of the shape used by block-storage volume services
//! (`cinder.conf` and friends), parses them into an immutable, typed document,
//! validates required keys per section and exposes typed accessors to the host.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and rules (`ConfigDocument`, `ConfigValue`,
//!   `ConfigLookup`, option groups, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`, `ContentReader`)
//! - **Adapters**: Implementations of the ports (`IniParser`, `FileReader`, `MemoryReader`)
//! - **Service**: The `ConfigLoader` that wires a reader and a parser together
//!
//! # Feature Flags
//!
//! - `cli`: Build the `sectcfg` command-line tool (default)
//!
//! # Quick Start
//!
//! ```rust
//! use sectcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let doc = ConfigLoader::new().parse(
//!     "[DEFAULT]\nverbose = True\n[lvm]\nvolume_group = cinder-volumes\n",
//! )?;
//!
//! assert_eq!(doc.get_string("lvm", "volume_group")?, "cinder-volumes");
//! assert!(doc.get("DEFAULT", "verbose")?.as_bool("DEFAULT.verbose")?);
//! doc.get_required("lvm", &["volume_group"])?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
#[cfg(feature = "cli")]
pub mod cli;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileReader, IniParser, MemoryReader};
    pub use crate::domain::{
        ConfigDocument, ConfigError, ConfigLookup, ConfigValue, DocumentBuilder, OptionGroup,
        OptionKind, OptionSpec, ResolvedGroup, Result, Section,
    };
    pub use crate::ports::{ConfigParser, ContentReader};
    pub use crate::service::{ConfigLoader, ConfigLoaderBuilder};
}
