// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the concrete parser and readers behind the traits defined
//! in the ports layer.

pub mod file_reader;
pub mod ini;

pub use file_reader::{FileReader, MemoryReader};
pub use ini::IniParser;
