use std::fmt;

use thiserror::Error;

/// Which index space an out-of-range access was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
    Element,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
            Axis::Element => f.write_str("element"),
        }
    }
}

/// `rows x cols` of a matrix operand, as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("Incompatible matrix dimensions [{left}] vs [{right}]")]
    DimensionMismatch { left: Shape, right: Shape },

    #[error("Incompatible vector sizes {right} and {left}")]
    VectorSizeMismatch { left: usize, right: usize },

    #[error("{axis} index {index} out of bounds for length {len}")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },

    #[error("Ragged input: row {row} has {found} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),
}

impl LinalgError {
    /// True for both the matrix and the vector flavour of a shape mismatch.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            LinalgError::DimensionMismatch { .. } | LinalgError::VectorSizeMismatch { .. }
        )
    }

    pub(crate) fn out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        LinalgError::IndexOutOfBounds { axis, index, len }
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = LinalgError::DimensionMismatch {
            left: (2, 3).into(),
            right: (2, 2).into(),
        };
        assert_eq!(
            err.to_string(),
            "Incompatible matrix dimensions [2 x 3] vs [2 x 2]"
        );
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn test_index_message() {
        let err = LinalgError::out_of_bounds(Axis::Row, 5, 2);
        assert_eq!(err.to_string(), "row index 5 out of bounds for length 2");
        assert!(!err.is_dimension_mismatch());
    }
}
