//! Format constants for Idefix tooling
//!
//! This module contains the binary dump layout constants, the coordinate
//! field ordering, and the text markers recognized by the setup and log
//! parsers.

// =============================================================================
// Binary Dump Layout
// =============================================================================

/// Byte length of the opaque dump header block
pub const HEADER_SIZE: usize = 128;

/// Byte width of a field-name slot in a dump record
pub const NAME_SIZE: usize = 16;

/// On-disk size of a float64 element in bytes
pub const DOUBLE_SIZE: usize = 8;

/// On-disk size of a float32 element in bytes
pub const FLOAT_SIZE: usize = 4;

/// On-disk size of an int32 element in bytes (also the width of the
/// dtype tag, dimension count, and each dimension length)
pub const INT_SIZE: usize = 4;

/// On-disk size of a bool element in bytes
pub const BOOL_SIZE: usize = 1;

/// In-memory size of an int64 element in bytes; int64 arrays can be held
/// but have no on-disk representation
pub const LONG_SIZE: usize = 8;

/// Wire tags identifying the element type of a dump field
pub mod dtype_tags {
    /// 64-bit IEEE float
    pub const FLOAT64: i32 = 0;

    /// 32-bit IEEE float
    pub const FLOAT32: i32 = 1;

    /// 32-bit signed integer
    pub const INT32: i32 = 2;

    /// Single-byte boolean
    pub const BOOL: i32 = 3;
}

/// The nine coordinate fields of a dump, in the order they are written
/// immediately after the header
pub const COORDINATE_FIELDS: &[&str] = &[
    "x1", "x1l", "x1r", "x2", "x2l", "x2r", "x3", "x3l", "x3r",
];

/// Name of the terminating sentinel field appended to every dump
pub const EOF_FIELD_NAME: &str = "eof";

// =============================================================================
// Setup Directory Files
// =============================================================================

/// Runtime configuration file in an Idefix setup directory
pub const INI_FILENAME: &str = "idefix.ini";

/// Compile-time definitions file in an Idefix setup directory
pub const DEFINITIONS_FILENAME: &str = "definitions.hpp";

/// Problem setup source file in an Idefix setup directory
pub const SETUP_FILENAME: &str = "setup.cpp";

/// Directive recognized by the definitions scanner
pub const DEFINE_DIRECTIVE: &str = "#define";

// =============================================================================
// Log File Markers
// =============================================================================

/// Banner opening the echoed input-parameter block in an Idefix log
pub const LOG_INPUT_PARAMS_MARKER: &str = "Input Parameters using input file";

/// Minimum number of leading dashes for a line to count as a section rule
pub const LOG_RULE_MIN_DASHES: usize = 77;

/// Prefix of the grid dimensionality line in an Idefix log
pub const LOG_DIMENSIONS_MARKER: &str = "Input: DIMENSIONS=";

/// Prefix of the vector-component count line in an Idefix log
pub const LOG_COMPONENTS_MARKER: &str = "Input: COMPONENTS=";

/// Prefix of the gravitational-constant line in an Idefix log
pub const LOG_GRAVITY_MARKER: &str = "Gravity: G=";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a line is a log section rule (a run of at least
/// [`LOG_RULE_MIN_DASHES`] dashes)
pub fn is_rule_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= LOG_RULE_MIN_DASHES
        && trimmed.chars().take(LOG_RULE_MIN_DASHES).all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_field_order() {
        assert_eq!(COORDINATE_FIELDS.len(), 9);
        assert_eq!(COORDINATE_FIELDS[0], "x1");
        assert_eq!(COORDINATE_FIELDS[8], "x3r");

        // Names must all fit a name slot with room for the terminator
        for name in COORDINATE_FIELDS {
            assert!(name.len() < NAME_SIZE);
        }
    }

    #[test]
    fn test_rule_line_detection() {
        assert!(is_rule_line(&"-".repeat(77)));
        assert!(is_rule_line(&"-".repeat(100)));
        assert!(is_rule_line(&format!("  {}  ", "-".repeat(80))));

        assert!(!is_rule_line(&"-".repeat(76)));
        assert!(!is_rule_line("----"));
        assert!(!is_rule_line(""));
        assert!(!is_rule_line("Input Parameters using input file idefix.ini:"));
    }

    #[test]
    fn test_dtype_tags_are_distinct() {
        let tags = [
            dtype_tags::FLOAT64,
            dtype_tags::FLOAT32,
            dtype_tags::INT32,
            dtype_tags::BOOL,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
