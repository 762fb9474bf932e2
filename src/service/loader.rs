// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration loader.
//!
//! This module provides [`ConfigLoader`], which ties a [`ContentReader`] and a
//! [`ConfigParser`] together to turn a path or a string into a [`ConfigDocument`],
//! and exposes the section/key lookups hosts use afterwards.

use crate::adapters::{FileReader, IniParser};
use crate::domain::{ConfigDocument, ConfigError, ConfigLookup, Result};
use crate::ports::{ConfigParser, ContentReader};
use directories::ProjectDirs;
use std::fmt;
use std::path::{Path, PathBuf};

/// Loads and parses sectioned configuration files.
///
/// The default loader reads from the filesystem and parses INI-style text.
///
/// # Examples
///
/// ```rust
/// use sectcfg::service::ConfigLoader;
///
/// # fn main() -> sectcfg::domain::Result<()> {
/// let loader = ConfigLoader::new();
/// let doc = loader.parse("[DEFAULT]\nverbose = True\n[lvm]\nvolume_group = cinder-volumes\n")?;
///
/// assert_eq!(ConfigLoader::get_string(&doc, "lvm", "volume_group")?, "cinder-volumes");
/// ConfigLoader::get_required(&doc, "lvm", &["volume_group"])?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigLoader {
    parser: Box<dyn ConfigParser>,
    reader: Box<dyn ContentReader>,
}

impl ConfigLoader {
    /// Creates a loader using [`IniParser`] and [`FileReader`].
    pub fn new() -> Self {
        Self {
            parser: Box::new(IniParser::new()),
            reader: Box::new(FileReader::new()),
        }
    }

    /// Creates a loader builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sectcfg::adapters::{IniParser, MemoryReader};
    /// use sectcfg::service::ConfigLoader;
    ///
    /// # fn main() -> sectcfg::domain::Result<()> {
    /// let loader = ConfigLoader::builder()
    ///     .with_parser(Box::new(IniParser::new().strip_comments(false)))
    ///     .with_reader(Box::new(MemoryReader::new().with_file("cinder.conf", "[DEFAULT]\n")))
    ///     .build();
    ///
    /// let doc = loader.load("cinder.conf")?;
    /// assert!(doc.contains_section("DEFAULT"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ConfigLoaderBuilder {
        ConfigLoaderBuilder::new()
    }

    /// Parses configuration text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if a line is malformed or an entry appears
    /// before the first section header.
    pub fn parse(&self, text: &str) -> Result<ConfigDocument> {
        self.parser.parse(text)
    }

    /// Reads the file at `path` through the configured reader and parses it.
    ///
    /// # Errors
    ///
    /// Returns the reader's error if the content cannot be obtained, or a
    /// [`ConfigError::ParseError`] if it cannot be parsed.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ConfigDocument> {
        let path = path.as_ref();

        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            if !self.parser.supports_extension(extension) {
                tracing::debug!(
                    "Extension '{}' is not a usual extension for this parser; parsing anyway",
                    extension
                );
            }
        }

        tracing::debug!(
            "Loading configuration from {} via reader '{}'",
            path.display(),
            self.reader.name()
        );
        let content = self.reader.read(path)?;
        self.parse(&content)
    }

    /// Loads `filename` from the OS-appropriate configuration directory of an
    /// application, e.g. `~/.config/cinder/cinder.conf` on Linux.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "cinder")
    /// * `qualifier` - The organization/qualifier (e.g., "org.openstack")
    /// * `filename` - The configuration file name (e.g., "cinder.conf")
    pub fn load_default_location(
        &self,
        app_name: &str,
        qualifier: &str,
        filename: &str,
    ) -> Result<ConfigDocument> {
        let path = Self::default_config_path(app_name, qualifier, filename)?;
        self.load(path)
    }

    /// Returns the path [`load_default_location`](Self::load_default_location) reads.
    pub fn default_config_path(app_name: &str, qualifier: &str, filename: &str) -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(proj_dirs.config_dir().join(filename))
    }

    /// Returns the value of `key` in `section`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the section or the key is absent.
    pub fn get_string<'a>(doc: &'a ConfigDocument, section: &str, key: &str) -> Result<&'a str> {
        doc.get_string(section, key)
    }

    /// Checks that every key in `keys` is present in `section`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] listing every missing key.
    pub fn get_required(doc: &ConfigDocument, section: &str, keys: &[&str]) -> Result<()> {
        doc.get_required(section, keys)
    }

    /// Name of the configured reader.
    pub fn reader_name(&self) -> &str {
        self.reader.name()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("extensions", &self.parser.supported_extensions())
            .field("reader", &self.reader.name())
            .finish()
    }
}

/// Builder for constructing a [`ConfigLoader`].
///
/// Components that are not set fall back to [`IniParser`] and [`FileReader`].
#[derive(Default)]
pub struct ConfigLoaderBuilder {
    parser: Option<Box<dyn ConfigParser>>,
    reader: Option<Box<dyn ContentReader>>,
}

impl ConfigLoaderBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parser.
    pub fn with_parser(mut self, parser: Box<dyn ConfigParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Sets the content reader.
    pub fn with_reader(mut self, reader: Box<dyn ContentReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Builds the loader.
    pub fn build(self) -> ConfigLoader {
        ConfigLoader {
            parser: self.parser.unwrap_or_else(|| Box::new(IniParser::new())),
            reader: self.reader.unwrap_or_else(|| Box::new(FileReader::new())),
        }
    }
}
