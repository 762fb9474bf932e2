// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the raw text of a
//! configuration file into a [`ConfigDocument`].

use crate::domain::{ConfigDocument, Result};

/// A trait for parsing sectioned configuration text.
///
/// Implementations must uphold the document invariants: section names are unique
/// and, within a section, the last occurrence of a key wins. Parsers outside this
/// crate get both from [`ConfigDocument::builder`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a loader can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use sectcfg::domain::{ConfigDocument, ConfigError, ConfigLookup, Result};
/// use sectcfg::ports::ConfigParser;
///
/// // One `section.key: value` entry per line
/// struct DottedParser;
///
/// impl ConfigParser for DottedParser {
///     fn parse(&self, content: &str) -> Result<ConfigDocument> {
///         let mut builder = ConfigDocument::builder();
///         for (index, line) in content.lines().enumerate() {
///             let entry = line
///                 .split_once(':')
///                 .and_then(|(path, value)| path.split_once('.').map(|(s, k)| (s, k, value)));
///             let Some((section, key, value)) = entry else {
///                 return Err(ConfigError::ParseError {
///                     line: index + 1,
///                     message: "expected 'section.key: value'".to_string(),
///                 });
///             };
///             builder = builder.with_entry(section, key, value);
///         }
///         builder.build()
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["dotted"]
///     }
/// }
///
/// let doc = DottedParser.parse("lvm.volume_group: cinder-volumes").unwrap();
/// assert_eq!(doc.get_string("lvm", "volume_group").unwrap(), "cinder-volumes");
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into a document.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - The parsed document
    /// * `Err(ConfigError::ParseError)` - A line could not be parsed
    fn parse(&self, content: &str) -> Result<ConfigDocument>;

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is one of [`supported_extensions`](Self::supported_extensions),
    /// ignoring ASCII case.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}
