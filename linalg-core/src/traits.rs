use std::fmt::{Debug, Display};

use num_traits::{Float, Zero};

use crate::any_matrix::{self, AnyMatrix};
use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};
use crate::vector::DenseVector;

/// Numeric element stored in vectors and matrices (`f32`, `f64`).
pub trait Element: Float + Debug + Display + Default + Send + Sync + 'static {}

impl<T> Element for T where T: Float + Debug + Display + Default + Send + Sync + 'static {}

/// Generic trait representing a vector.
pub trait Vector: Debug {
    /// The underlying numeric type of the vector elements (e.g., f32, f64).
    type Value: Element;

    /// Returns the number of elements in the vector.
    fn len(&self) -> usize;

    /// Checks if the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `IndexOutOfBounds` past the end.
    fn get(&self, index: usize) -> Result<Self::Value>;

    /// Inner product `Σ self[i] * other[i]`.
    ///
    /// # Errors
    /// `VectorSizeMismatch` when the lengths differ.
    fn dot<V>(&self, other: &V) -> Result<Self::Value>
    where
        Self: Sized,
        V: Vector<Value = Self::Value> + ?Sized,
    {
        if self.len() != other.len() {
            return Err(LinalgError::VectorSizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let mut acc = <Self::Value as Zero>::zero();
        for i in 0..self.len() {
            acc = acc + self.get(i)? * other.get(i)?;
        }
        Ok(acc)
    }
}

/// Borrowed view of which storage strategy backs a matrix.
///
/// Multiplication dispatches on this tag instead of on concrete types, so the
/// dense kernel only ever sees `Dense` operands and both identity strategies
/// collapse into one `Identity` case.
#[derive(Debug, Clone, Copy)]
pub enum MatrixKind<'a, T: Element> {
    Dense(&'a DenseMatrix<T>),
    Identity { dimension: usize },
}

/// Generic trait representing a matrix.
/// Implementations can be dense, materialized identity or dimension-only identity.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f32, f64).
    type Value: Element;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    fn kind(&self) -> MatrixKind<'_, Self::Value>;

    /// Whether this matrix is semantically an identity, whatever its storage.
    fn is_identity(&self) -> bool {
        matches!(self.kind(), MatrixKind::Identity { .. })
    }

    /// Element at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> Result<Self::Value>;

    /// Copy of row `row` as a vector of length `cols()`.
    fn row(&self, row: usize) -> Result<DenseVector<Self::Value>>;

    /// Copy of column `col` as a vector of length `rows()`.
    fn col(&self, col: usize) -> Result<DenseVector<Self::Value>>;

    fn transpose(&self) -> AnyMatrix<Self::Value>;

    /// Independent copy of the full grid, one `Vec` per row.
    fn to_array(&self) -> Vec<Vec<Self::Value>>;

    /// Owned copy of this matrix, keeping its variant.
    fn to_any(&self) -> AnyMatrix<Self::Value>;

    /// Matrix product `self · other`.
    ///
    /// An identity on either side returns the other operand unchanged, without
    /// touching its elements.
    ///
    /// # Errors
    /// `DimensionMismatch` when `self.cols() != other.rows()`.
    fn matmul<M>(&self, other: &M) -> Result<AnyMatrix<Self::Value>>
    where
        Self: Sized,
        M: Matrix<Value = Self::Value> + ?Sized,
    {
        any_matrix::multiply(self, other)
    }
}
