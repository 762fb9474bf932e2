// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content reader trait definition.
//!
//! A `ContentReader` supplies the raw text of a configuration file given its path.
//! It is the only place the loader touches the outside world.

use crate::domain::Result;
use std::path::Path;

/// A trait for obtaining configuration text.
///
/// # Examples
///
/// ```rust
/// use sectcfg::domain::Result;
/// use sectcfg::ports::ContentReader;
/// use std::path::Path;
///
/// struct FixedReader;
///
/// impl ContentReader for FixedReader {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read(&self, _path: &Path) -> Result<String> {
///         Ok("[DEFAULT]\n".to_string())
///     }
/// }
///
/// let text = FixedReader.read(Path::new("/etc/cinder/cinder.conf")).unwrap();
/// assert_eq!(text, "[DEFAULT]\n");
/// ```
pub trait ContentReader: Send + Sync {
    /// Short identifier used in logs and [`ConfigError::SourceError`](crate::domain::ConfigError::SourceError).
    fn name(&self) -> &str;

    /// Reads the full text at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The file contents
    /// * `Err(ConfigError)` - The content could not be read
    fn read(&self, path: &Path) -> Result<String>;
}
