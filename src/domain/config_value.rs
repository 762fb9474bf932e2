// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! Every entry of a document is stored as a [`ConfigValue`]. Values stay strings until
//! the host asks for a concrete type, so a single parse pass can serve drivers that
//! interpret the same file in different ways.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for a single configuration value.
///
/// The conversion methods take a `key` argument which is only used to give
/// conversion errors a meaningful context, conventionally `section.key`.
///
/// # Examples
///
/// ```
/// use sectcfg::domain::ConfigValue;
///
/// let value = ConfigValue::from("60");
/// assert_eq!(value.as_u32("coordination.max_reconnect_backoff").unwrap(), 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an owned copy of the value.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// # Examples
    ///
    /// ```
    /// use sectcfg::domain::ConfigValue;
    ///
    /// let value = ConfigValue::from("True");
    /// assert!(value.as_bool("DEFAULT.verbose").unwrap());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.0
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u32`.
    pub fn as_u32(&self, key: &str) -> Result<u32> {
        self.0
            .parse::<u32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sectcfg::domain::ConfigValue;
    ///
    /// let value = ConfigValue::from("0.1");
    /// assert_eq!(value.as_f64("coordination.initial_reconnect_backoff").unwrap(), 0.1);
    /// ```
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
    }

    /// Splits the value on commas into a list of trimmed, non-empty items.
    ///
    /// # Examples
    ///
    /// ```
    /// use sectcfg::domain::ConfigValue;
    ///
    /// let value = ConfigValue::from("lvm, nfs,,ceph ");
    /// assert_eq!(value.as_list(), vec!["lvm", "nfs", "ceph"]);
    /// ```
    pub fn as_list(&self) -> Vec<String> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sectcfg::domain::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("10.0.0.5");
    /// let ip: IpAddr = value.parse("DEFAULT.my_ip").unwrap();
    /// assert_eq!(ip.to_string(), "10.0.0.5");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
