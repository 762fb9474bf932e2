// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI-style parser adapter.
//!
//! This module provides [`IniParser`], the [`ConfigParser`] for files such as
//! `cinder.conf`:
//!
//! ```ini
//! [DEFAULT]
//! enabled_backends = lvm
//!
//! [lvm]
//! volume_group = cinder-volumes
//! ```

use crate::domain::{ConfigDocument, ConfigError, ConfigValue, Result};
use crate::ports::ConfigParser;

const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

/// Parser for sectioned `key = value` text.
///
/// Every line is trimmed before it is classified:
///
/// - blank lines are skipped;
/// - lines whose first character is `#` or `;` are comments and are skipped,
///   unless comment stripping is turned off with [`IniParser::strip_comments`];
/// - `[name]` opens (or re-opens) the section `name`;
/// - `key = value` is split at the first `=`, both sides trimmed, and stored in the
///   current section, replacing an earlier value for the same key;
/// - any other line is ignored before the first header and rejected after it.
///
/// An entry before the first header, an empty key, an empty or bracketed section
/// name and an unterminated header are all parse errors.
///
/// # Examples
///
/// ```rust
/// use sectcfg::adapters::IniParser;
/// use sectcfg::domain::ConfigLookup;
/// use sectcfg::ports::ConfigParser;
///
/// let doc = IniParser::new()
///     .parse("[database]\nconnection = mysql+pymysql://cinder:pw@db/cinder?charset=utf8\n")
///     .unwrap();
/// assert_eq!(
///     doc.get_string("database", "connection").unwrap(),
///     "mysql+pymysql://cinder:pw@db/cinder?charset=utf8"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct IniParser {
    strip_comments: bool,
}

impl IniParser {
    /// Creates a parser that strips `#` and `;` comment lines.
    pub fn new() -> Self {
        IniParser {
            strip_comments: true,
        }
    }

    /// Sets whether `#` and `;` lines are treated as comments.
    ///
    /// When disabled, such lines are parsed like any other line.
    pub fn strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }

    fn is_comment(&self, line: &str) -> bool {
        self.strip_comments && line.starts_with(COMMENT_PREFIXES)
    }

    fn parse_header(line: &str, line_no: usize) -> Result<&str> {
        let inner = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| ConfigError::parse(line_no, "unterminated section header"))?;
        let name = inner.trim();

        if name.is_empty() {
            return Err(ConfigError::parse(line_no, "empty section name"));
        }
        if name.contains(['[', ']']) {
            return Err(ConfigError::parse(
                line_no,
                format!("section name '{}' contains a bracket", name),
            ));
        }
        Ok(name)
    }
}

impl Default for IniParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<ConfigDocument> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut doc = ConfigDocument::new();
        let mut current: Option<String> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || self.is_comment(line) {
                continue;
            }

            if line.starts_with('[') {
                let name = Self::parse_header(line, line_no)?;
                doc.section_mut_or_insert(name);
                current = Some(name.to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                if current.is_none() {
                    continue;
                }
                return Err(ConfigError::parse(
                    line_no,
                    "expected '[section]' or 'key = value'",
                ));
            };

            let key = key.trim();
            let Some(section) = current.as_deref() else {
                return Err(ConfigError::parse(
                    line_no,
                    format!("entry '{}' appears before any section header", key),
                ));
            };
            if key.is_empty() {
                return Err(ConfigError::parse(line_no, "entry has an empty key"));
            }

            let replaced = doc
                .section_mut_or_insert(section)
                .insert(key.to_string(), ConfigValue::from(value.trim()));
            if replaced.is_some() {
                tracing::debug!(
                    "Key '{}' in section [{}] redefined at line {}; last value wins",
                    key,
                    section,
                    line_no
                );
            }
        }

        tracing::debug!("Parsed configuration with {} section(s)", doc.len());
        Ok(doc)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "conf", "cfg"]
    }
}
