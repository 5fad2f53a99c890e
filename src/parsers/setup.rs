//! `setup.cpp` function extraction and setup-directory reading
//!
//! Idefix problem setups implement a handful of free functions and
//! `Setup::` methods in a single `setup.cpp`. The extractor splits the
//! source at `void ` definition heads so individual function bodies can be
//! looked up (and rendered) by name. `read_setup_dir` ties the three setup
//! files of a problem directory together into one record.

use crate::constants::{DEFINITIONS_FILENAME, INI_FILENAME, SETUP_FILENAME};
use crate::models::{SetupFunctions, SetupSummary};
use crate::parsers::{definitions::parse_definitions_file, ini::parse_ini_file};
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Extract the function bodies of a `setup.cpp` file
pub fn parse_setup_file(path: &Path) -> Result<SetupFunctions> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines: Vec<&str> = text.lines().collect();
    let functions = parse_setup_lines(&lines);
    debug!("Extracted {} functions from {}", functions.len(), path.display());
    Ok(functions)
}

/// Extract function bodies from already-split source lines
///
/// A function starts at a line whose trimmed form begins with `void ` and
/// runs to the next such line or the end of the input. The name is
/// everything between `void` and the first `(`, with whitespace removed, so
/// `void Setup::InitFlow (DataBlock &d)` yields `Setup::InitFlow`. Text
/// before the first function head is discarded; a source with no function
/// heads yields an empty record.
pub fn parse_setup_lines<S: AsRef<str>>(lines: &[S]) -> SetupFunctions {
    let mut functions = SetupFunctions::default();
    let mut i = 0;

    while i < lines.len() {
        // scan to the next function head
        while i < lines.len() && !is_function_head(lines[i].as_ref()) {
            i += 1;
        }
        if i == lines.len() {
            break;
        }

        let name = function_name(lines[i].as_ref());
        let start = i;
        i += 1;
        while i < lines.len() && !is_function_head(lines[i].as_ref()) {
            i += 1;
        }

        let source = lines[start..i]
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        functions.insert(name, source);
    }

    functions
}

/// Read whichever of `setup.cpp`, `idefix.ini` and `definitions.hpp` exist
/// in an Idefix setup directory
pub fn read_setup_dir(dir: &Path) -> Result<SetupSummary> {
    if !dir.is_dir() {
        return Err(Error::not_a_directory(dir));
    }

    let mut summary = SetupSummary::default();

    let setup_path = dir.join(SETUP_FILENAME);
    if setup_path.is_file() {
        info!("Reading {}", setup_path.display());
        summary.functions = Some(parse_setup_file(&setup_path)?);
    }

    let ini_path = dir.join(INI_FILENAME);
    if ini_path.is_file() {
        info!("Reading {}", ini_path.display());
        summary.ini = Some(parse_ini_file(&ini_path)?);
    }

    let defs_path = dir.join(DEFINITIONS_FILENAME);
    if defs_path.is_file() {
        info!("Reading {}", defs_path.display());
        summary.definitions = Some(parse_definitions_file(&defs_path)?);
    }

    Ok(summary)
}

fn is_function_head(line: &str) -> bool {
    line.trim().starts_with("void ")
}

fn function_name(line: &str) -> String {
    let joined: String = line.trim().split_whitespace().skip(1).collect();
    match joined.find('(') {
        Some(pos) => joined[..pos].to_string(),
        None => joined,
    }
}
