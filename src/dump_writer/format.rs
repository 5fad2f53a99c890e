//! Dump format revisions
//!
//! Two revisions of the field-record layout exist in the wild and the
//! format carries no version marker of its own, so the revision a target
//! reader expects must be stated explicitly by the caller. The two differ
//! only in how name slots are padded and in which order dimension lengths
//! are written; element data bytes are identical.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::NAME_SIZE;
use crate::{Error, Result};

/// Revision of the on-disk field-record layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatVersion {
    /// Name slots null-terminated then space-padded; shape written in the
    /// array's native axis order
    V1,
    /// Name slots null-terminated then null-padded; shape written
    /// reversed, outermost dimension last
    V2,
}

impl FormatVersion {
    /// Byte used to fill a name slot after the terminating null
    pub fn pad_byte(&self) -> u8 {
        match self {
            FormatVersion::V1 => b' ',
            FormatVersion::V2 => 0,
        }
    }

    /// Whether dimension lengths are written outermost-last
    pub fn shape_reversed(&self) -> bool {
        matches!(self, FormatVersion::V2)
    }

    /// Render a field name into its fixed-width slot: the name bytes, a
    /// terminating null, then padding to fill the slot exactly
    ///
    /// Names longer than `NAME_SIZE - 1` bytes are truncated so the
    /// terminator always fits.
    pub fn name_slot(&self, name: &str) -> [u8; NAME_SIZE] {
        let bytes = name.as_bytes();
        let keep = bytes.len().min(NAME_SIZE - 1);
        if keep < bytes.len() {
            warn!("Field name '{}' exceeds {} bytes, truncating", name, NAME_SIZE - 1);
        }

        let mut slot = [self.pad_byte(); NAME_SIZE];
        slot[..keep].copy_from_slice(&bytes[..keep]);
        slot[keep] = 0;
        slot
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatVersion::V1 => write!(f, "v1"),
            FormatVersion::V2 => write!(f, "v2"),
        }
    }
}

impl FromStr for FormatVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(FormatVersion::V1),
            "v2" | "2" => Ok(FormatVersion::V2),
            other => Err(Error::parse(
                "format version",
                1,
                format!("unknown revision '{}', expected 'v1' or 'v2'", other),
            )),
        }
    }
}
