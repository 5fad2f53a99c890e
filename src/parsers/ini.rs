//! `idefix.ini` configuration parsing
//!
//! Idefix runtime configuration files consist of `[Section]` headers
//! followed by `key value...` entries, one per line, with `#` starting a
//! comment. Section names and keys are sanitized into identifier-friendly
//! form so they stay addressable in downstream tooling.

use crate::models::{IniConfig, IniSection};
use crate::parsers::{LINES_SOURCE_NAME, value::parse_value};
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse an `idefix.ini` file
pub fn parse_ini_file(path: &Path) -> Result<IniConfig> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines: Vec<&str> = text.lines().collect();
    let config = parse_ini_lines(&lines).map_err(|e| e.in_file(path))?;
    debug!("Parsed {} with {} sections", path.display(), config.sections.len());
    Ok(config)
}

/// Parse configuration lines that have already been split
///
/// This is also the grammar applied to the parameter block embedded in log
/// files. An entry appearing before any `[Section]` header is an error. A
/// repeated `[Section]` header reopens the section: the entries of the
/// later block replace the earlier ones while the section keeps its
/// position.
pub fn parse_ini_lines<S: AsRef<str>>(lines: &[S]) -> Result<IniConfig> {
    let mut config = IniConfig::default();
    let mut current = None;

    for (index, line) in lines.iter().enumerate() {
        let line = strip_comment(line.as_ref()).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            let name = sanitize_section_name(line.trim_matches(['[', ']']));
            current = Some(open_section(&mut config, name));
            continue;
        }

        let Some(section_index) = current else {
            return Err(Error::parse(
                LINES_SOURCE_NAME,
                index + 1,
                format!("entry '{}' before any [section] header", line),
            ));
        };
        let section = &mut config.sections[section_index];

        let Some(key) = line.split_whitespace().next() else {
            continue;
        };
        let rest = &line[key.len()..];
        section.insert(sanitize_key(key), parse_value(rest));
    }

    Ok(config)
}

// A repeated header reopens its section in place: position kept, previous
// entries dropped.
fn open_section(config: &mut IniConfig, name: String) -> usize {
    match config.sections.iter().position(|section| section.name == name) {
        Some(index) => {
            config.sections[index].entries.clear();
            index
        }
        None => {
            config.sections.push(IniSection::new(name));
            config.sections.len() - 1
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

// Section names may contain characters that are awkward as identifiers;
// dots, dashes and spaces all map to underscores. Keys cannot contain
// spaces, so only dots and dashes are mapped there.
fn sanitize_section_name(name: &str) -> String {
    name.replace(['.', '-', ' '], "_")
}

fn sanitize_key(key: &str) -> String {
    key.replace(['.', '-'], "_")
}
