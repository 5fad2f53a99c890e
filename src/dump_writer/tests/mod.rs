//! Unit tests for the dump writer modules
//!
//! Organized by module, with shared fixtures and byte-level decoding
//! helpers for checking record layout against the wire format.

use ndarray::Array2;

use crate::constants::{HEADER_SIZE, NAME_SIZE};
use crate::dump_writer::field::FieldArray;

pub mod dataset_tests;
pub mod format_tests;

/// A recognizable header block: bytes counting up from zero
pub fn sample_header() -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    for (i, byte) in header.iter_mut().enumerate() {
        *byte = i as u8;
    }
    header
}

/// The 2x2 density array `[[1, 2], [3, 4]]` used across the writer tests
pub fn rho_2x2() -> FieldArray {
    FieldArray::from(Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap())
}

/// Text of a name slot up to its null terminator
pub fn slot_name(slot: &[u8]) -> String {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
    String::from_utf8_lossy(&slot[..end]).into_owned()
}

/// Field names of consecutive records in `bytes`, which must start at the
/// first record after the header block
pub fn field_names(mut bytes: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    while !bytes.is_empty() {
        names.push(slot_name(&bytes[..NAME_SIZE]));
        let tag = i32::from_le_bytes(bytes[NAME_SIZE..NAME_SIZE + 4].try_into().unwrap());
        let ndim =
            i32::from_le_bytes(bytes[NAME_SIZE + 4..NAME_SIZE + 8].try_into().unwrap()) as usize;
        let mut count = 1usize;
        for dim in 0..ndim {
            let at = NAME_SIZE + 8 + 4 * dim;
            count *= i32::from_le_bytes(bytes[at..at + 4].try_into().unwrap()) as usize;
        }
        let element_size = match tag {
            0 => 8,
            1 | 2 => 4,
            3 => 1,
            other => panic!("unknown dtype tag {}", other),
        };
        bytes = &bytes[NAME_SIZE + 8 + 4 * ndim + count * element_size..];
    }
    names
}

/// Decode little-endian float64 values from packed bytes
pub fn unpack_f64(bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

/// Decode one little-endian int32 at the given byte offset
pub fn i32_at(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}
