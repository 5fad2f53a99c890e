//! Field arrays and their element types
//!
//! A dump field is an n-dimensional array of one of the element types the
//! binary format can carry. Arrays are stored as dynamic-dimension
//! [`ndarray`] arrays so callers can hand over data of any rank.

use std::fmt;

use ndarray::{Array, Array1, ArrayD, Dimension};
use serde::{Deserialize, Serialize};

use crate::constants::{BOOL_SIZE, DOUBLE_SIZE, FLOAT_SIZE, INT_SIZE, LONG_SIZE, dtype_tags};

/// Element type of a field array
///
/// `Int64` can be held in memory (it is what integer parsing naturally
/// produces) but has no wire tag, so writing an int64 field fails with
/// [`Error::UnsupportedDtype`](crate::Error::UnsupportedDtype).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    Float64,
    Float32,
    Int64,
    Int32,
    Bool,
}

impl Dtype {
    /// Lower-case type name, as used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Dtype::Float64 => "float64",
            Dtype::Float32 => "float32",
            Dtype::Int64 => "int64",
            Dtype::Int32 => "int32",
            Dtype::Bool => "bool",
        }
    }

    /// Byte width of one element
    pub fn element_size(&self) -> usize {
        match self {
            Dtype::Float64 => DOUBLE_SIZE,
            Dtype::Float32 => FLOAT_SIZE,
            Dtype::Int64 => LONG_SIZE,
            Dtype::Int32 => INT_SIZE,
            Dtype::Bool => BOOL_SIZE,
        }
    }

    /// Tag written ahead of the field data, if the format supports this
    /// element type
    pub fn wire_tag(&self) -> Option<i32> {
        match self {
            Dtype::Float64 => Some(dtype_tags::FLOAT64),
            Dtype::Float32 => Some(dtype_tags::FLOAT32),
            Dtype::Int32 => Some(dtype_tags::INT32),
            Dtype::Bool => Some(dtype_tags::BOOL),
            Dtype::Int64 => None,
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One array of simulation data, ready to be written as a dump field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldArray {
    Float64(ArrayD<f64>),
    Float32(ArrayD<f32>),
    Int64(ArrayD<i64>),
    Int32(ArrayD<i32>),
    Bool(ArrayD<bool>),
}

impl FieldArray {
    /// Element type of this array
    pub fn dtype(&self) -> Dtype {
        match self {
            FieldArray::Float64(_) => Dtype::Float64,
            FieldArray::Float32(_) => Dtype::Float32,
            FieldArray::Int64(_) => Dtype::Int64,
            FieldArray::Int32(_) => Dtype::Int32,
            FieldArray::Bool(_) => Dtype::Bool,
        }
    }

    /// Shape in native axis order
    pub fn shape(&self) -> &[usize] {
        match self {
            FieldArray::Float64(a) => a.shape(),
            FieldArray::Float32(a) => a.shape(),
            FieldArray::Int64(a) => a.shape(),
            FieldArray::Int32(a) => a.shape(),
            FieldArray::Bool(a) => a.shape(),
        }
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total element count
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element bytes in on-disk order: column-major traversal of the
    /// array (the transposed view walked in row-major order), each
    /// element encoded little-endian, bools as one `0`/`1` byte
    pub fn packed_data(&self) -> Vec<u8> {
        match self {
            FieldArray::Float64(a) => {
                let mut buf = Vec::with_capacity(a.len() * DOUBLE_SIZE);
                for &x in a.t().iter() {
                    buf.extend_from_slice(&x.to_le_bytes());
                }
                buf
            }
            FieldArray::Float32(a) => {
                let mut buf = Vec::with_capacity(a.len() * FLOAT_SIZE);
                for &x in a.t().iter() {
                    buf.extend_from_slice(&x.to_le_bytes());
                }
                buf
            }
            FieldArray::Int64(a) => {
                let mut buf = Vec::with_capacity(a.len() * LONG_SIZE);
                for &x in a.t().iter() {
                    buf.extend_from_slice(&x.to_le_bytes());
                }
                buf
            }
            FieldArray::Int32(a) => {
                let mut buf = Vec::with_capacity(a.len() * INT_SIZE);
                for &x in a.t().iter() {
                    buf.extend_from_slice(&x.to_le_bytes());
                }
                buf
            }
            FieldArray::Bool(a) => a.t().iter().map(|&x| x as u8).collect(),
        }
    }
}

impl<D: Dimension> From<Array<f64, D>> for FieldArray {
    fn from(array: Array<f64, D>) -> Self {
        FieldArray::Float64(array.into_dyn())
    }
}

impl<D: Dimension> From<Array<f32, D>> for FieldArray {
    fn from(array: Array<f32, D>) -> Self {
        FieldArray::Float32(array.into_dyn())
    }
}

impl<D: Dimension> From<Array<i64, D>> for FieldArray {
    fn from(array: Array<i64, D>) -> Self {
        FieldArray::Int64(array.into_dyn())
    }
}

impl<D: Dimension> From<Array<i32, D>> for FieldArray {
    fn from(array: Array<i32, D>) -> Self {
        FieldArray::Int32(array.into_dyn())
    }
}

impl<D: Dimension> From<Array<bool, D>> for FieldArray {
    fn from(array: Array<bool, D>) -> Self {
        FieldArray::Bool(array.into_dyn())
    }
}

impl From<Vec<f64>> for FieldArray {
    fn from(values: Vec<f64>) -> Self {
        FieldArray::Float64(Array1::from_vec(values).into_dyn())
    }
}

impl From<Vec<f32>> for FieldArray {
    fn from(values: Vec<f32>) -> Self {
        FieldArray::Float32(Array1::from_vec(values).into_dyn())
    }
}

impl From<Vec<i64>> for FieldArray {
    fn from(values: Vec<i64>) -> Self {
        FieldArray::Int64(Array1::from_vec(values).into_dyn())
    }
}

impl From<Vec<i32>> for FieldArray {
    fn from(values: Vec<i32>) -> Self {
        FieldArray::Int32(Array1::from_vec(values).into_dyn())
    }
}

impl From<Vec<bool>> for FieldArray {
    fn from(values: Vec<bool>) -> Self {
        FieldArray::Bool(Array1::from_vec(values).into_dyn())
    }
}
