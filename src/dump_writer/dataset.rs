//! Simulation data as seen by the dump writer
//!
//! The writer never owns simulation state. It pulls everything through the
//! read-only [`DumpSource`] trait: the nine grid coordinate arrays and the
//! named data fields in the order they should appear on disk.
//! [`DumpDataset`] is the crate's own in-memory implementor for callers
//! assembling a dump from scratch.

use serde::{Deserialize, Serialize};

use crate::constants::COORDINATE_FIELDS;
use crate::dump_writer::field::FieldArray;

/// One of the nine coordinate arrays of a dump
///
/// `X1` holds cell centers along the first axis, `X1L`/`X1R` the left and
/// right cell interfaces, and likewise for the other two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateAxis {
    X1,
    X1L,
    X1R,
    X2,
    X2L,
    X2R,
    X3,
    X3L,
    X3R,
}

impl CoordinateAxis {
    /// All axes, in the order their fields appear in a dump
    pub const ALL: [CoordinateAxis; 9] = [
        CoordinateAxis::X1,
        CoordinateAxis::X1L,
        CoordinateAxis::X1R,
        CoordinateAxis::X2,
        CoordinateAxis::X2L,
        CoordinateAxis::X2R,
        CoordinateAxis::X3,
        CoordinateAxis::X3L,
        CoordinateAxis::X3R,
    ];

    /// On-disk field name of this coordinate
    ///
    /// Variant declaration order matches [`COORDINATE_FIELDS`].
    pub fn name(&self) -> &'static str {
        COORDINATE_FIELDS[*self as usize]
    }
}

/// Read-only view of simulation data for the dump writer
///
/// Implementors expose grid coordinates per axis and the named data
/// fields. Field iteration order is the order the fields are written to
/// the dump, so it must be stable.
pub trait DumpSource {
    /// Coordinate values along the given axis
    fn coordinate(&self, axis: CoordinateAxis) -> &[f64];

    /// Named data fields, in dump order
    fn fields<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a FieldArray)> + 'a>;
}

/// In-memory simulation dataset
///
/// Coordinates default to empty arrays; data fields keep their insertion
/// order, which is the order they are written to a dump.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DumpDataset {
    /// Coordinate arrays, indexed in [`CoordinateAxis::ALL`] order
    coordinates: [Vec<f64>; 9],
    /// Data fields in insertion order
    fields: Vec<(String, FieldArray)>,
}

impl DumpDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a coordinate array, builder style
    pub fn with_coordinate(mut self, axis: CoordinateAxis, values: Vec<f64>) -> Self {
        self.set_coordinate(axis, values);
        self
    }

    /// Add a data field, builder style
    pub fn with_field(mut self, name: impl Into<String>, array: impl Into<FieldArray>) -> Self {
        self.insert_field(name, array);
        self
    }

    /// Replace the coordinate array for one axis
    pub fn set_coordinate(&mut self, axis: CoordinateAxis, values: Vec<f64>) {
        self.coordinates[axis as usize] = values;
    }

    /// Add a data field; inserting under an existing name replaces the
    /// array but keeps the field's position
    pub fn insert_field(&mut self, name: impl Into<String>, array: impl Into<FieldArray>) {
        let name = name.into();
        let array = array.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = array,
            None => self.fields.push((name, array)),
        }
    }

    /// Look up a data field by name
    pub fn field(&self, name: &str) -> Option<&FieldArray> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, array)| array)
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of data fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl DumpSource for DumpDataset {
    fn coordinate(&self, axis: CoordinateAxis) -> &[f64] {
        &self.coordinates[axis as usize]
    }

    fn fields<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a FieldArray)> + 'a> {
        Box::new(
            self.fields
                .iter()
                .map(|(name, array)| (name.as_str(), array)),
        )
    }
}
