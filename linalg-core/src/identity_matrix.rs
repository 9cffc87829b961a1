use std::marker::PhantomData;

use crate::any_matrix::AnyMatrix;
use crate::dense_matrix::DenseMatrix;
use crate::error::{Axis, LinalgError, Result};
use crate::traits::{Element, Matrix, MatrixKind};
use crate::vector::DenseVector;

fn basis_vector<T: Element>(dimension: usize, index: usize, axis: Axis) -> Result<DenseVector<T>> {
    if index >= dimension {
        return Err(LinalgError::out_of_bounds(axis, index, dimension));
    }
    DenseVector::unit(dimension, index)
}

/// Identity matrix with its full `n x n` grid materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityMatrix<T> {
    grid: DenseMatrix<T>,
}

impl<T: Element> IdentityMatrix<T> {
    pub fn new(dimension: usize) -> Self {
        Self {
            grid: DenseMatrix::eye(dimension),
        }
    }

    pub fn dimension(&self) -> usize {
        self.grid.rows()
    }

    /// The materialized grid as a plain dense matrix.
    pub fn as_dense(&self) -> &DenseMatrix<T> {
        &self.grid
    }
}

impl<T: Element> Matrix for IdentityMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        self.grid.dims()
    }

    fn kind(&self) -> MatrixKind<'_, T> {
        MatrixKind::Identity {
            dimension: self.dimension(),
        }
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.grid.get(row, col)
    }

    fn row(&self, row: usize) -> Result<DenseVector<T>> {
        basis_vector(self.dimension(), row, Axis::Row)
    }

    fn col(&self, col: usize) -> Result<DenseVector<T>> {
        basis_vector(self.dimension(), col, Axis::Column)
    }

    fn transpose(&self) -> AnyMatrix<T> {
        AnyMatrix::Identity(self.clone())
    }

    fn to_array(&self) -> Vec<Vec<T>> {
        self.grid.to_array()
    }

    fn to_any(&self) -> AnyMatrix<T> {
        AnyMatrix::Identity(self.clone())
    }
}

/// Identity matrix that stores only its dimension.
///
/// Behaves exactly like [`IdentityMatrix`]; elements are computed on demand and
/// the `n x n` grid is only built when a caller asks for it through `to_array`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseIdentityMatrix<T> {
    dimension: usize,
    _element: PhantomData<T>,
}

impl<T: Element> SparseIdentityMatrix<T> {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            _element: PhantomData,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Builds the equivalent materialized identity. O(n²) memory.
    pub fn materialize(&self) -> IdentityMatrix<T> {
        log::debug!(
            "materializing {0} x {0} identity grid",
            self.dimension
        );
        IdentityMatrix::new(self.dimension)
    }
}

impl<T: Element> Matrix for SparseIdentityMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.dimension, self.dimension)
    }

    fn kind(&self) -> MatrixKind<'_, T> {
        MatrixKind::Identity {
            dimension: self.dimension,
        }
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.dimension {
            return Err(LinalgError::out_of_bounds(Axis::Row, row, self.dimension));
        }
        if col >= self.dimension {
            return Err(LinalgError::out_of_bounds(Axis::Column, col, self.dimension));
        }
        Ok(if row == col { T::one() } else { T::zero() })
    }

    fn row(&self, row: usize) -> Result<DenseVector<T>> {
        basis_vector(self.dimension, row, Axis::Row)
    }

    fn col(&self, col: usize) -> Result<DenseVector<T>> {
        basis_vector(self.dimension, col, Axis::Column)
    }

    fn transpose(&self) -> AnyMatrix<T> {
        AnyMatrix::SparseIdentity(*self)
    }

    fn to_array(&self) -> Vec<Vec<T>> {
        self.materialize().to_array()
    }

    fn to_any(&self) -> AnyMatrix<T> {
        AnyMatrix::SparseIdentity(*self)
    }
}
