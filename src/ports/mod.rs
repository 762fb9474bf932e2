// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that separate the loader from
//! the concrete file format and from the way raw text is obtained. These traits are
//! implemented by adapters in the adapters layer.

pub mod parser;
pub mod reader;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use reader::ContentReader;
