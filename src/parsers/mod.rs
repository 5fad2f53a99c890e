//! Line-oriented parsers for Idefix setup artifacts
//!
//! This module turns the text files surrounding an Idefix run into the
//! structured records of [`crate::models`]:
//!
//! - [`ini`] - `idefix.ini` runtime configuration files
//! - [`definitions`] - `definitions.hpp` preprocessor definitions
//! - [`log`] - run log files (echoed configuration plus run parameters)
//! - [`setup`] - `setup.cpp` function extraction and whole-directory reads
//! - [`value`] - token-level literal interpretation shared by the above
//!
//! Every parser is a single-pass scanner over lines. File-based entry points
//! (`*_file`) attach the path to any error; the `*_lines` entry points work
//! on lines that have already been split, which is how the log parser reuses
//! the configuration grammar on the parameter block embedded in a log.

pub mod definitions;
pub mod ini;
pub mod log;
pub mod setup;
pub mod value;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use definitions::{parse_definitions_file, parse_definitions_lines};
pub use ini::{parse_ini_file, parse_ini_lines};
pub use log::{parse_log_file, parse_log_lines};
pub use setup::{parse_setup_file, parse_setup_lines, read_setup_dir};
pub use value::{parse_scalar, parse_value};

/// Source name reported in parse errors when the input is raw lines rather
/// than a file
pub const LINES_SOURCE_NAME: &str = "input lines";
