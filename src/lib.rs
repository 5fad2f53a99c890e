//! Idefix Tools Library
//!
//! A Rust library for working with setups and outputs of the Idefix
//! astrophysical fluid dynamics code.
//!
//! This library provides tools for:
//! - Parsing `idefix.ini` runtime configuration files into typed records
//! - Scanning `definitions.hpp` for preprocessor definitions
//! - Extracting the echoed configuration and run parameters from log files
//! - Splitting `setup.cpp` sources into named function bodies
//! - Writing simulation dump snapshots in Idefix's binary dump format

use std::path::{Path, PathBuf};

pub mod constants;
pub mod models;

// Text parsing modules
pub mod parsers;

// Binary dump writing modules
pub mod dump_writer;

// Re-export commonly used types
pub use dump_writer::{
    CoordinateAxis, DumpDataset, DumpSource, DumpWriter, Dtype, FieldArray, FormatVersion,
    read_header, write_dump,
};
pub use models::{
    Definitions, IniConfig, IniSection, LogReport, Scalar, SetupFunctions, SetupSummary, Value,
};
pub use parsers::{
    parse_definitions_file, parse_ini_file, parse_log_file, parse_setup_file, read_setup_dir,
};

/// Result type alias for Idefix tooling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Idefix parsing and dump-writing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Array element type the dump format cannot represent
    #[error("Unsupported data type {dtype} for field '{field}'")]
    UnsupportedDtype { field: String, dtype: Dtype },

    /// Dump header source missing, unreadable, or too short
    #[error("Cannot read dump header from '{}': {reason}", .path.display())]
    SourceRead { path: PathBuf, reason: String },

    /// I/O failure while writing a dump file
    #[error("Write error on '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading a text input file
    #[error("Cannot read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed text input
    #[error("Parse error in {source_name} at line {line}: {reason}")]
    Parse {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// Setup path that is not a directory
    #[error("Not a directory: '{}'", .path.display())]
    NotADirectory { path: PathBuf },
}

impl Error {
    /// Create an unsupported-dtype error for a named field
    pub fn unsupported_dtype(field: impl Into<String>, dtype: Dtype) -> Self {
        Self::UnsupportedDtype {
            field: field.into(),
            dtype,
        }
    }

    /// Create a header-source read error
    pub fn source_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SourceRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a dump write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a text-input read error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error; `line` is 1-based
    pub fn parse(source_name: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Attach a file path as the source context of a parse error;
    /// other error kinds pass through unchanged
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            Error::Parse { line, reason, .. } => Error::Parse {
                source_name: path.display().to_string(),
                line,
                reason,
            },
            other => other,
        }
    }
}
