//! Data models for parsed Idefix setup artifacts
//!
//! This module contains the structured records produced by the text parsers:
//! configuration values, preprocessor definitions, log-file reports, and
//! setup source functions. All records preserve the insertion order of the
//! underlying file so round-trips and diffs stay faithful to the source.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Parsed Values
// =============================================================================

/// A single parsed token from a configuration or definitions file
///
/// Tokens are interpreted as the most specific type they fit: boolean
/// literals, then integers, then floats, falling back to the raw string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean literal (`true`/`false`, accepting capitalized spellings)
    Bool(bool),

    /// Integer literal
    Int(i64),

    /// Floating-point literal
    Float(f64),

    /// Anything that is not a recognized literal
    Str(String),
}

impl Scalar {
    /// Get the boolean value if this is a boolean token
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value if this is an integer token
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the numeric value as a float (integers coerce)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(x) => Some(*x),
            Scalar::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get the string value if this token stayed a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

/// The value of one configuration entry
///
/// Entries with a single token parse to `Scalar`; entries with several
/// whitespace-separated tokens parse to `List`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Single-token entry
    Scalar(Scalar),

    /// Multi-token entry
    List(Vec<Scalar>),
}

impl Value {
    /// Get the scalar if this is a single-token value
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Get the token list if this is a multi-token value
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Shortcut for `as_scalar().and_then(Scalar::as_bool)`
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    /// Shortcut for `as_scalar().and_then(Scalar::as_int)`
    pub fn as_int(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_int)
    }

    /// Shortcut for `as_scalar().and_then(Scalar::as_float)`
    pub fn as_float(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_float)
    }

    /// Shortcut for `as_scalar().and_then(Scalar::as_str)`
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(items: Vec<Scalar>) -> Self {
        Value::List(items)
    }
}

// =============================================================================
// Configuration Records
// =============================================================================

/// One `[Section]` of an `idefix.ini` file with its entries in file order
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct IniSection {
    /// Sanitized section name (`.`, `-` and spaces become `_`)
    pub name: String,

    /// Entries in file order
    pub entries: Vec<(String, Value)>,
}

impl IniSection {
    /// Create an empty section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Insert an entry, replacing the value of an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate entry keys in file order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of entries in this section
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether this section has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A complete parsed `idefix.ini` configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct IniConfig {
    /// Sections in file order
    pub sections: Vec<IniSection>,
}

impl IniConfig {
    /// Look up a section by its sanitized name
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Look up an entry by section and key
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section).and_then(|section| section.get(key))
    }

    /// Iterate section names in file order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check whether the configuration has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// =============================================================================
// Preprocessor Definitions
// =============================================================================

/// The `#define` entries of a `definitions.hpp` file in file order
///
/// Bare flags (`#define MHD`) store `true`; valued defines store their
/// parsed token(s).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Definitions {
    /// Definitions in file order, names kept verbatim
    pub entries: Vec<(String, Value)>,
}

impl Definitions {
    /// Look up a definition by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Insert a definition, replacing the value of an existing name in place
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Check whether a bare flag is defined (valued defines also count)
    pub fn is_enabled(&self, name: &str) -> bool {
        match self.get(name) {
            Some(value) => value.as_bool().unwrap_or(true),
            None => false,
        }
    }

    /// Iterate definition names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no definitions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Log Report
// =============================================================================

/// Fields extracted from one Idefix log file
///
/// The log echoes the input configuration between two dashed rules and then
/// reports a handful of derived quantities; this record captures both.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogReport {
    /// Name of the input file the run was started with
    pub ini_filename: String,

    /// The echoed input-parameter block, parsed as a configuration
    pub config: IniConfig,

    /// Grid dimensionality reported by the run (1, 2 or 3)
    pub dimensions: i64,

    /// Number of vector components reported by the run
    pub components: i64,

    /// Gravitational constant, present only when gravity is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity_constant: Option<f64>,
}

// =============================================================================
// Setup Source Functions
// =============================================================================

/// Function bodies extracted from a `setup.cpp` file, in file order
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SetupFunctions {
    /// `(name, source)` pairs in file order
    pub functions: Vec<(String, String)>,
}

impl SetupFunctions {
    /// Look up a function body by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.functions
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, source)| source.as_str())
    }

    /// Insert a function body, replacing the body of an existing name in place
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        let name = name.into();
        let source = source.into();
        match self.functions.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = source,
            None => self.functions.push((name, source)),
        }
    }

    /// Iterate function names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|(name, _)| name.as_str())
    }

    /// Render a function body as a fenced C++ markdown block
    pub fn markdown(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|source| format!("```cpp\n{}\n```", source))
    }

    /// Number of extracted functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check whether no functions were extracted
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// The parsed contents of an Idefix setup directory
///
/// Each component is present only when the corresponding file exists in the
/// directory.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SetupSummary {
    /// Parsed `idefix.ini`, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ini: Option<IniConfig>,

    /// Parsed `definitions.hpp`, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Definitions>,

    /// Extracted `setup.cpp` functions, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<SetupFunctions>,
}
