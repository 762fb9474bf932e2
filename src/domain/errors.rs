// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when reading, parsing, or
//! querying sectioned configuration documents. All errors use `thiserror` for proper
//! error handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use sectcfg::domain::errors::ConfigError;
///
/// fn backend_driver() -> Result<String, ConfigError> {
///     Err(ConfigError::MissingKey {
///         section: "lvm".to_string(),
///         key: "volume_driver".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A line of the input could not be parsed.
    #[error("Failed to parse configuration at line {line}: {message}")]
    ParseError {
        /// 1-based line number of the offending line
        line: usize,
        /// The error message
        message: String,
    },

    /// The requested section or key is not present in the document.
    #[error("Configuration key not found: [{section}] {key}")]
    MissingKey {
        /// The section that was searched
        section: String,
        /// The key that was not found
        key: String,
    },

    /// One or more required keys are absent from a section.
    #[error("Section [{section}] is missing required keys: {}", .missing.join(", "))]
    ValidationError {
        /// The section being validated
        section: String,
        /// Every missing key, in the order they were requested
        missing: Vec<String>,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred while reading configuration content.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the reader that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A document under construction was given a name or value the parser could
    /// never have produced.
    #[error("Invalid configuration document: {message}")]
    InvalidDocument {
        /// The error message
        message: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            line,
            message: message.into(),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
