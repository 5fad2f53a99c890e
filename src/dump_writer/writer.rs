//! Core dump writer
//!
//! Produces one dump file: an opaque header copied from an existing dump,
//! the nine coordinate fields in their fixed order, the data fields in
//! source order, and the `eof` terminator. All multi-byte values are
//! little-endian; element data is packed in column-major order.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::{debug, info};

use crate::constants::{EOF_FIELD_NAME, HEADER_SIZE};
use crate::dump_writer::dataset::{CoordinateAxis, DumpSource};
use crate::dump_writer::field::FieldArray;
use crate::dump_writer::format::FormatVersion;
use crate::{Error, Result};

/// Read the opaque header block from an existing dump file
///
/// The header is copied verbatim into new dumps and never interpreted. A
/// missing, unreadable or too-short source yields [`Error::SourceRead`].
pub fn read_header(path: &Path) -> Result<[u8; HEADER_SIZE]> {
    let mut file = File::open(path).map_err(|e| Error::source_read(path, e.to_string()))?;
    let mut header = [0u8; HEADER_SIZE];
    file.read_exact(&mut header).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::source_read(
                path,
                format!("file is shorter than the {}-byte header", HEADER_SIZE),
            )
        } else {
            Error::source_read(path, e.to_string())
        }
    })?;
    Ok(header)
}

/// Streaming writer for one dump file
///
/// The writer owns the output file handle for the duration of one write
/// operation; [`finish`](DumpWriter::finish) consumes it after the `eof`
/// terminator. On error paths the handle is released on drop and any
/// partially written output is left on disk for the caller to discard.
#[derive(Debug)]
pub struct DumpWriter {
    /// Buffered output file
    out: BufWriter<File>,
    /// Output path, kept for error context
    path: PathBuf,
    /// Layout revision for name slots and shape order
    version: FormatVersion,
}

impl DumpWriter {
    /// Create the output file and a writer over it
    pub fn create(path: &Path, version: FormatVersion) -> Result<Self> {
        debug!("Creating dump file {} ({})", path.display(), version);
        let file = File::create(path).map_err(|e| Error::write(path, e))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            version,
        })
    }

    /// Write the opaque header block
    pub fn write_header(&mut self, header: &[u8; HEADER_SIZE]) -> Result<()> {
        self.out
            .write_all(header)
            .map_err(|e| Error::write(&self.path, e))
    }

    /// Write one field record: name slot, dtype tag, dimension count,
    /// dimension lengths, then the packed element data
    pub fn write_field(&mut self, name: &str, array: &FieldArray) -> Result<()> {
        let Some(tag) = array.dtype().wire_tag() else {
            return Err(Error::unsupported_dtype(name, array.dtype()));
        };

        let slot = self.version.name_slot(name);
        self.out
            .write_all(&slot)
            .map_err(|e| Error::write(&self.path, e))?;
        self.out
            .write_i32::<LittleEndian>(tag)
            .map_err(|e| Error::write(&self.path, e))?;
        self.out
            .write_i32::<LittleEndian>(array.ndim() as i32)
            .map_err(|e| Error::write(&self.path, e))?;

        let shape = array.shape();
        let dims: Vec<usize> = if self.version.shape_reversed() {
            shape.iter().rev().copied().collect()
        } else {
            shape.to_vec()
        };
        for dim in dims {
            self.out
                .write_i32::<LittleEndian>(dim as i32)
                .map_err(|e| Error::write(&self.path, e))?;
        }

        self.out
            .write_all(&array.packed_data())
            .map_err(|e| Error::write(&self.path, e))?;

        debug!("Wrote field '{}' ({}, {} elements)", name, array.dtype(), array.len());
        Ok(())
    }

    /// Write the `eof` terminator and flush the output
    pub fn finish(mut self) -> Result<()> {
        let terminator = FieldArray::from(vec![0i32]);
        self.write_field(EOF_FIELD_NAME, &terminator)?;
        self.out.flush().map_err(|e| Error::write(&self.path, e))
    }
}

/// Write a complete dump file
///
/// Reads the opaque header from `header_source` first, so a bad source
/// fails before any output is created, then writes the header, the nine
/// coordinate fields in their fixed order, the dataset's data fields in
/// source order, and the `eof` terminator.
pub fn write_dump<D>(
    dataset: &D,
    header_source: &Path,
    output: &Path,
    version: FormatVersion,
) -> Result<()>
where
    D: DumpSource + ?Sized,
{
    info!(
        "Writing dump to {} (header from {}, format {})",
        output.display(),
        header_source.display(),
        version
    );

    let header = read_header(header_source)?;

    let mut writer = DumpWriter::create(output, version)?;
    writer.write_header(&header)?;
    for axis in CoordinateAxis::ALL {
        let coordinates = dataset.coordinate(axis).to_vec();
        writer.write_field(axis.name(), &FieldArray::from(coordinates))?;
    }
    for (name, array) in dataset.fields() {
        writer.write_field(name, array)?;
    }
    writer.finish()
}
