// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration lookup trait definition.
//!
//! This module defines the `ConfigLookup` trait, the interface hosts use to read
//! values out of a parsed document by section and key, and its implementation for
//! [`ConfigDocument`].

use crate::domain::{ConfigDocument, ConfigError, ConfigValue, Result};

/// Section/key lookup over parsed configuration.
///
/// Only [`get`](ConfigLookup::get) must be implemented; the remaining methods are
/// derived from it.
///
/// # Examples
///
/// ```rust
/// use sectcfg::domain::{ConfigError, ConfigLookup};
/// use sectcfg::service::ConfigLoader;
///
/// # fn main() -> sectcfg::domain::Result<()> {
/// let doc = ConfigLoader::new().parse("[database]\nconnection = sqlite://\n")?;
///
/// assert_eq!(doc.get_string("database", "connection")?, "sqlite://");
/// assert!(doc.has("database", "connection"));
///
/// let err = doc.get_required("database", &["connection", "max_pool_size"]).unwrap_err();
/// assert!(matches!(err, ConfigError::ValidationError { .. }));
/// # Ok(())
/// # }
/// ```
pub trait ConfigLookup {
    /// Retrieves the value stored under `key` in `section`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if either the section or the key is absent.
    fn get(&self, section: &str, key: &str) -> Result<&ConfigValue>;

    /// Retrieves the value as a string slice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if either the section or the key is absent.
    fn get_string(&self, section: &str, key: &str) -> Result<&str> {
        self.get(section, key).map(ConfigValue::as_str)
    }

    /// Retrieves a value or falls back to `default` when it is absent.
    fn get_or_default(&self, section: &str, key: &str, default: &str) -> ConfigValue {
        self.get(section, key)
            .cloned()
            .unwrap_or_else(|_| ConfigValue::from(default))
    }

    /// Returns `true` if `key` is present in `section`.
    fn has(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_ok()
    }

    /// Checks that every key in `keys` is present in `section`.
    ///
    /// All missing keys are reported together, in the order requested and without
    /// duplicates. A missing section means every key is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if at least one key is absent.
    fn get_required(&self, section: &str, keys: &[&str]) -> Result<()> {
        let mut missing: Vec<String> = Vec::new();
        for key in keys {
            if !self.has(section, key) && !missing.iter().any(|m| m == key) {
                missing.push((*key).to_string());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                "Section [{}] is missing {} required key(s)",
                section,
                missing.len()
            );
            Err(ConfigError::ValidationError {
                section: section.to_string(),
                missing,
            })
        }
    }
}

impl ConfigLookup for ConfigDocument {
    fn get(&self, section: &str, key: &str) -> Result<&ConfigValue> {
        self.section(section)
            .and_then(|s| s.get(key))
            .ok_or_else(|| ConfigError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }
}
