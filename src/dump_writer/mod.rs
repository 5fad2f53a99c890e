//! Idefix binary dump writing
//!
//! This module produces simulation snapshot files in Idefix's dump format:
//! an opaque fixed-size header copied from an existing dump, a sequence of
//! self-describing field records (name slot, dtype tag, shape, packed
//! element data) and a terminating `eof` record. Grid coordinates always
//! come first, in a fixed order, followed by the data fields in the order
//! the source presents them.
//!
//! - [`field`] - field arrays and their element types
//! - [`dataset`] - the [`DumpSource`] collaborator trait and the in-memory
//!   [`DumpDataset`]
//! - [`format`] - the two on-disk layout revisions
//! - [`writer`] - header reading, record encoding and the [`write_dump`]
//!   entry point
//!
//! Two layout revisions exist in the wild and the format has no version
//! marker, so [`FormatVersion`] is a required argument everywhere; there is
//! no default.
//!
//! # Example
//!
//! ```rust
//! use idefix_tools::{CoordinateAxis, DumpDataset, FormatVersion, write_dump};
//! use ndarray::Array2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let header_source = dir.path().join("restart.dmp");
//! std::fs::write(&header_source, [0u8; 128])?;
//!
//! let dataset = DumpDataset::new()
//!     .with_coordinate(CoordinateAxis::X1, vec![0.0, 0.5, 1.0])
//!     .with_field("RHO", Array2::from_shape_vec((3, 1), vec![1.0, 2.0, 3.0])?);
//!
//! let output = dir.path().join("data.0001.dmp");
//! write_dump(&dataset, &header_source, &output, FormatVersion::V2)?;
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod field;
pub mod format;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for convenient access
pub use dataset::{CoordinateAxis, DumpDataset, DumpSource};
pub use field::{Dtype, FieldArray};
pub use format::FormatVersion;
pub use writer::{DumpWriter, read_header, write_dump};
