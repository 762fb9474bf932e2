// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed option groups.
//!
//! An [`OptionGroup`] declares the options a host expects in one section, with their
//! kinds, defaults and whether they are required. Resolving a group against a
//! document applies defaults, expands `$name` references and type-checks every value.

use crate::domain::{ConfigDocument, ConfigError, ConfigValue, Result};
use std::collections::BTreeMap;

/// Name of the section that `$name` references fall back to.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// The type an option's value must convert to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// Any string.
    String,
    /// A signed 64-bit integer.
    Integer,
    /// A floating point number.
    Float,
    /// A boolean in any spelling accepted by [`ConfigValue::as_bool`].
    Boolean,
    /// A comma-separated list.
    List,
}

impl OptionKind {
    fn check(self, value: &ConfigValue, key: &str) -> Result<()> {
        match self {
            OptionKind::String | OptionKind::List => Ok(()),
            OptionKind::Integer => value.as_i64(key).map(|_| ()),
            OptionKind::Float => value.as_f64(key).map(|_| ()),
            OptionKind::Boolean => value.as_bool(key).map(|_| ()),
        }
    }
}

/// Declaration of a single option.
///
/// # Examples
///
/// ```
/// use sectcfg::domain::{OptionKind, OptionSpec};
///
/// let heartbeat = OptionSpec::float("heartbeat")
///     .default_value("1.0")
///     .help("Number of seconds between heartbeats for distributed coordination.");
///
/// assert_eq!(heartbeat.kind(), OptionKind::Float);
/// assert_eq!(heartbeat.default_text(), Some("1.0"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
    name: String,
    kind: OptionKind,
    default: Option<String>,
    required: bool,
    help: Option<String>,
}

impl OptionSpec {
    /// Declares an option of the given kind with no default.
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            required: false,
            help: None,
        }
    }

    /// Declares a string option.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::String)
    }

    /// Declares an integer option.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::Integer)
    }

    /// Declares a float option.
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::Float)
    }

    /// Declares a boolean option.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::Boolean)
    }

    /// Declares a list option.
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::List)
    }

    /// Sets the value used when the section does not define the option.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Marks the option as required.
    ///
    /// A required option with a default is always satisfied.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches a help text.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Option name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Option kind.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Default value, if any.
    pub fn default_text(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether the option is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Help text, if any.
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// A set of options bound to one section.
///
/// # Examples
///
/// ```
/// use sectcfg::domain::{OptionGroup, OptionSpec};
/// use sectcfg::service::ConfigLoader;
///
/// # fn main() -> sectcfg::domain::Result<()> {
/// let group = OptionGroup::new("coordination")
///     .with_option(OptionSpec::string("backend_url").default_value("file://$state_path"))
///     .with_option(OptionSpec::float("heartbeat").default_value("1.0"));
///
/// let doc = ConfigLoader::new().parse("[DEFAULT]\nstate_path = /var/lib/cinder\n")?;
/// let resolved = group.resolve(&doc)?;
///
/// assert_eq!(resolved.value("backend_url")?.as_str(), "file:///var/lib/cinder");
/// assert_eq!(resolved.value("heartbeat")?.as_f64("coordination.heartbeat")?, 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionGroup {
    name: String,
    options: Vec<OptionSpec>,
}

impl OptionGroup {
    /// Creates an empty group for the section `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option to the group. A later option with the same name replaces an
    /// earlier one.
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.retain(|o| o.name != option.name);
        self.options.push(option);
        self
    }

    /// Section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared options in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Resolves every option of the group against `doc`.
    ///
    /// Values come from the group's section, falling back to the option default.
    /// `$name` and `${name}` references are substituted from the same section, then
    /// from `[DEFAULT]`, then from the default of the group's own option called `name`.
    /// Unknown references are kept verbatim. Substituted text is not expanded again.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ValidationError`] listing every required option with no value
    /// - [`ConfigError::TypeConversionError`] for the first value that does not match
    ///   its declared kind
    pub fn resolve(&self, doc: &ConfigDocument) -> Result<ResolvedGroup> {
        let section = doc.section(&self.name);

        let mut raw_values = Vec::with_capacity(self.options.len());
        let mut missing = Vec::new();
        for option in &self.options {
            let raw = section
                .and_then(|s| s.get(&option.name))
                .map(ConfigValue::as_str)
                .or(option.default.as_deref());
            match raw {
                Some(raw) => raw_values.push((option, raw)),
                None if option.required => missing.push(option.name.clone()),
                None => {}
            }
        }

        if !missing.is_empty() {
            return Err(ConfigError::ValidationError {
                section: self.name.clone(),
                missing,
            });
        }

        let mut values = BTreeMap::new();
        for (option, raw) in raw_values {
            let value = ConfigValue::from(self.interpolate(doc, raw));
            option
                .kind
                .check(&value, &format!("{}.{}", self.name, option.name))?;
            values.insert(option.name.clone(), value);
        }

        tracing::debug!(
            "Resolved {} of {} options in group [{}]",
            values.len(),
            self.options.len(),
            self.name
        );

        Ok(ResolvedGroup {
            section: self.name.clone(),
            values,
        })
    }

    fn interpolate(&self, doc: &ConfigDocument, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            let (name, consumed) = match after.strip_prefix('{') {
                Some(braced) => match braced.find('}') {
                    Some(end) => (&braced[..end], end + 2),
                    None => ("", 0),
                },
                None => {
                    let end = after
                        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                        .unwrap_or(after.len());
                    (&after[..end], end)
                }
            };

            match self.lookup_reference(doc, name) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[consumed..];
                }
                None => {
                    out.push('$');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn lookup_reference<'a>(&'a self, doc: &'a ConfigDocument, name: &str) -> Option<&'a str> {
        if name.is_empty() {
            return None;
        }
        doc.section(&self.name)
            .and_then(|s| s.get(name))
            .or_else(|| doc.section(DEFAULT_SECTION).and_then(|s| s.get(name)))
            .map(ConfigValue::as_str)
            .or_else(|| {
                self.options
                    .iter()
                    .find(|o| o.name == name)
                    .and_then(|o| o.default.as_deref())
            })
    }
}

/// The outcome of [`OptionGroup::resolve`]: one checked value per option that has
/// either an explicit value or a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGroup {
    section: String,
    values: BTreeMap<String, ConfigValue>,
}

impl ResolvedGroup {
    /// Section the group was resolved from.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the resolved value of `name`, if it has one.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    /// Returns the resolved value of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] for options that are optional, have no
    /// default and were not set, or were never declared.
    pub fn value(&self, name: &str) -> Result<&ConfigValue> {
        self.get(name).ok_or_else(|| ConfigError::MissingKey {
            section: self.section.clone(),
            key: name.to_string(),
        })
    }

    /// Iterates over resolved `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of resolved options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no option resolved to a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
