// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed configuration document.
//!
//! A [`ConfigDocument`] is an ordered list of uniquely named [`Section`]s. Documents are
//! built by a parser, or by a [`DocumentBuilder`] for parsers outside this crate; once
//! built they cannot be modified.

use crate::domain::{ConfigError, ConfigValue, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A named group of key-value entries.
///
/// Keys are unique within a section. Entries are kept sorted by key so that
/// serialized output is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: BTreeMap<String, ConfigValue>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Returns the section name as written between the brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Returns `true` if the section holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys of this section in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores an entry, returning the value it replaced.
    pub(crate) fn insert(&mut self, key: String, value: ConfigValue) -> Option<ConfigValue> {
        self.entries.insert(key, value)
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// An immutable, parsed configuration file.
///
/// Sections appear in the order their first header appeared in the input.
///
/// # Examples
///
/// ```rust
/// use sectcfg::adapters::IniParser;
/// use sectcfg::domain::ConfigLookup;
/// use sectcfg::ports::ConfigParser;
///
/// let text = "[DEFAULT]\nverbose = True\n[lvm]\nvolume_group = cinder-volumes\n";
/// let doc = IniParser::new().parse(text).unwrap();
///
/// assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["DEFAULT", "lvm"]);
/// assert_eq!(doc.get_string("lvm", "volume_group").unwrap(), "cinder-volumes");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for assembling a document entry by entry.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Returns the section called `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Returns `true` if a section called `name` exists.
    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// All sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the section called `name`, appending an empty one if it does not exist.
    pub(crate) fn section_mut_or_insert(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }
}

/// Builder for a [`ConfigDocument`] with the same guarantees a parsed one has.
///
/// Names, keys and values are trimmed the way the INI parser trims them. Reopening a
/// section merges into it, and a repeated key keeps the last value. `build` rejects
/// anything that would not survive printing and parsing the document again.
///
/// # Examples
///
/// ```rust
/// use sectcfg::domain::{ConfigDocument, ConfigLookup};
///
/// # fn main() -> sectcfg::domain::Result<()> {
/// let doc = ConfigDocument::builder()
///     .with_entry("DEFAULT", "verbose", "True")
///     .with_section("lvm")
///     .with_entry("lvm", "volume_group", "cinder-volumes")
///     .with_entry("DEFAULT", "verbose", "False")
///     .build()?;
///
/// assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["DEFAULT", "lvm"]);
/// assert_eq!(doc.get_string("DEFAULT", "verbose")?, "False");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: ConfigDocument,
    error: Option<ConfigError>,
}

impl DocumentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty section, or keeps the existing one.
    pub fn with_section(mut self, name: impl AsRef<str>) -> Self {
        if self.error.is_none() {
            match check_section_name(name.as_ref()) {
                Ok(name) => {
                    self.doc.section_mut_or_insert(name);
                }
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Stores `key = value` in `section`, adding the section if needed.
    pub fn with_entry(
        mut self,
        section: impl AsRef<str>,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        let checked = check_section_name(section.as_ref()).and_then(|section| {
            Ok((section, check_key(key.as_ref())?, check_value(value.as_ref())?))
        });
        match checked {
            Ok((section, key, value)) => {
                self.doc
                    .section_mut_or_insert(section)
                    .insert(key.to_string(), ConfigValue::from(value));
            }
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Finishes the document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDocument`] for the first rejected section name,
    /// key or value.
    pub fn build(self) -> Result<ConfigDocument> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.doc),
        }
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidDocument { message }
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

fn check_section_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(['[', ']']) || has_line_break(trimmed) {
        return Err(invalid(format!("invalid section name '{}'", name)));
    }
    Ok(trimmed)
}

fn check_key(key: &str) -> Result<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty()
        || trimmed.contains('=')
        || trimmed.starts_with(['[', '#', ';'])
        || has_line_break(trimmed)
    {
        return Err(invalid(format!("invalid key '{}'", key)));
    }
    Ok(trimmed)
}

fn check_value(value: &str) -> Result<&str> {
    if has_line_break(value) {
        return Err(invalid("values cannot span lines".to_string()));
    }
    Ok(value.trim())
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in section.entries() {
                writeln!(f, "{} = {}", key, value)?;
            }
        }
        Ok(())
    }
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(section.name(), section)?;
        }
        map.end()
    }
}
