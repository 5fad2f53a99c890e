//! `definitions.hpp` preprocessor definition scanning
//!
//! Idefix configures compile-time physics through `#define` lines in a
//! `definitions.hpp` file. The scanner collects those definitions and
//! ignores everything else in the file.

use crate::constants::DEFINE_DIRECTIVE;
use crate::models::{Definitions, Scalar, Value};
use crate::parsers::value::parse_scalar;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Scan a `definitions.hpp` file for `#define` entries
pub fn parse_definitions_file(path: &Path) -> Result<Definitions> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines: Vec<&str> = text.lines().collect();
    let defs = parse_definitions_lines(&lines);
    debug!("Parsed {} with {} definitions", path.display(), defs.len());
    Ok(defs)
}

/// Scan already-split source lines for `#define` entries
///
/// Lines whose first token is not `#define` are ignored, as are defines
/// without a name. A bare `#define NAME` stores `true`, one trailing token
/// stores its parsed value, and several store a list. Definition names are
/// kept verbatim.
pub fn parse_definitions_lines<S: AsRef<str>>(lines: &[S]) -> Definitions {
    let mut defs = Definitions::default();

    for line in lines {
        let mut tokens = line.as_ref().split_whitespace();
        if tokens.next() != Some(DEFINE_DIRECTIVE) {
            continue;
        }
        let Some(name) = tokens.next() else {
            continue;
        };

        let mut values: Vec<Scalar> = tokens.map(parse_scalar).collect();
        let value = match values.len() {
            0 => Value::Scalar(Scalar::Bool(true)),
            1 => Value::Scalar(values.remove(0)),
            _ => Value::List(values),
        };
        defs.insert(name, value);
    }

    defs
}
