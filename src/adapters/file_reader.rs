// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem and in-memory content readers.

use crate::domain::{ConfigError, Result};
use crate::ports::ContentReader;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads configuration text from the local filesystem.
///
/// Paths are canonicalized before reading and files larger than 10 MiB are rejected.
/// Error messages only carry the file name, never the full path.
///
/// # Examples
///
/// ```rust,no_run
/// use sectcfg::adapters::FileReader;
/// use sectcfg::ports::ContentReader;
/// use std::path::Path;
///
/// let text = FileReader::new().read(Path::new("/etc/cinder/cinder.conf")).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileReader;

impl FileReader {
    /// Creates a new filesystem reader.
    pub fn new() -> Self {
        FileReader
    }

    fn source_error(
        &self,
        message: &str,
        path: &Path,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> ConfigError {
        ConfigError::SourceError {
            source_name: self.name().to_string(),
            message: format!(
                "{}: {}",
                message,
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("<unknown>")
            ),
            source,
        }
    }
}

impl ContentReader for FileReader {
    fn name(&self) -> &str {
        "file"
    }

    fn read(&self, path: &Path) -> Result<String> {
        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = path.canonicalize().map_err(|e| {
            self.source_error("Invalid or inaccessible path", path, Some(Box::new(e)))
        })?;

        // Check file size before reading to prevent DoS via large files
        let metadata = fs::metadata(&canonical_path).map_err(|e| {
            self.source_error("Failed to read file metadata", &canonical_path, Some(Box::new(e)))
        })?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: self.name().to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path).map_err(|e| {
            self.source_error(
                "Failed to read configuration file",
                &canonical_path,
                Some(Box::new(e)),
            )
        })?;

        tracing::debug!(
            "Read {} bytes from configuration file {}",
            content.len(),
            canonical_path.display()
        );
        Ok(content)
    }
}

/// Serves configuration text from memory, keyed by path.
///
/// Useful for hosts that embed their configuration and for tests.
///
/// # Examples
///
/// ```rust
/// use sectcfg::adapters::MemoryReader;
/// use sectcfg::ports::ContentReader;
/// use std::path::Path;
///
/// let reader = MemoryReader::new().with_file("cinder.conf", "[DEFAULT]\n");
/// assert_eq!(reader.read(Path::new("cinder.conf")).unwrap(), "[DEFAULT]\n");
/// assert!(reader.read(Path::new("other.conf")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `content` under `path`, replacing any earlier content.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ContentReader for MemoryReader {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ConfigError::SourceError {
                source_name: self.name().to_string(),
                message: format!("No content registered for {}", path.display()),
                source: None,
            })
    }
}
