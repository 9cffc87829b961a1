use crate::any_matrix::AnyMatrix;
use crate::error::{Axis, LinalgError, Result};
use crate::traits::{Element, Matrix, MatrixKind};
use crate::vector::{dot_slices, DenseVector};

/// Represents a dense matrix stored in row-major order on the CPU.
///
/// The matrix owns its storage and exposes no mutating methods, so it is
/// immutable once built; every accessor hands out copies or shared borrows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawDenseMatrix<T>",
        bound(deserialize = "T: Element + serde::Deserialize<'de>")
    )
)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

impl<T: Element> DenseMatrix<T> {
    /// Creates a new DenseMatrix from raw data, dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let Some(len) = rows.checked_mul(cols) else {
            return Err(LinalgError::InvalidDimensions(format!(
                "Dimensions ({}x{}) overflow the addressable element count",
                rows, cols
            )));
        };
        if data.len() != len {
            return Err(LinalgError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a DenseMatrix by copying nested rows.
    ///
    /// The column count is taken from the first row; an empty input gives a `0 x 0`
    /// matrix.
    ///
    /// # Errors
    /// Returns `RaggedRow` if any row length differs from the first.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;
        for (r, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(LinalgError::RaggedRow {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
            count += 1;
        }
        Ok(Self {
            rows: count,
            cols: cols.unwrap_or(0),
            data,
        })
    }

    /// Creates a new DenseMatrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// `n x n` grid with ones on the diagonal.
    pub(crate) fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Returns a slice view of the underlying row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrows row `row` straight out of the storage.
    pub fn row_slice(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(LinalgError::out_of_bounds(Axis::Row, row, self.rows));
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// New `cols x rows` matrix with `result[j][i] = self[i][j]`.
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// General dense product without any identity elision.
    ///
    /// `other` is transposed once so each output cell is a dot product of two
    /// contiguous rows rather than a row and a gathered column.
    pub fn multiply_dense(&self, other: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        if self.cols != other.rows {
            return Err(LinalgError::DimensionMismatch {
                left: self.dims().into(),
                right: other.dims().into(),
            });
        }
        log::trace!(
            "dense multiply [{} x {}] * [{} x {}]",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let trans = other.transposed();
        let mut result = Self::zeros(self.rows, other.cols);
        for row in 0..self.rows {
            let r = self.row_slice(row)?;
            for col in 0..other.cols {
                result.data[row * other.cols + col] = dot_slices(r, trans.row_slice(col)?)?;
            }
        }
        Ok(result)
    }
}

impl<T: Element> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn kind(&self) -> MatrixKind<'_, T> {
        MatrixKind::Dense(self)
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        if col >= self.cols {
            return Err(LinalgError::out_of_bounds(Axis::Column, col, self.cols));
        }
        Ok(self.row_slice(row)?[col])
    }

    fn row(&self, row: usize) -> Result<DenseVector<T>> {
        self.row_slice(row).map(DenseVector::from_slice)
    }

    fn col(&self, col: usize) -> Result<DenseVector<T>> {
        if col >= self.cols {
            return Err(LinalgError::out_of_bounds(Axis::Column, col, self.cols));
        }
        let data = (0..self.rows)
            .map(|row| self.data[row * self.cols + col])
            .collect();
        Ok(DenseVector::from_vec(data))
    }

    fn transpose(&self) -> AnyMatrix<T> {
        AnyMatrix::Dense(self.transposed())
    }

    fn to_array(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|row| self.data[row * self.cols..(row + 1) * self.cols].to_vec())
            .collect()
    }

    fn to_any(&self) -> AnyMatrix<T> {
        AnyMatrix::Dense(self.clone())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Element> TryFrom<RawDenseMatrix<T>> for DenseMatrix<T> {
    type Error = LinalgError;

    fn try_from(raw: RawDenseMatrix<T>) -> Result<Self> {
        DenseMatrix::new(raw.rows, raw.cols, raw.data)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Axis, LinalgError};
    use crate::{DenseMatrix, Matrix};

    fn m2x3() -> DenseMatrix<f64> {
        DenseMatrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_dense_matrix_new() {
        let m = DenseMatrix::new(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.dims(), (2, 2));
        assert!(m.is_square());
        assert!(!m.is_identity());
    }

    #[test]
    fn test_dense_matrix_new_invalid_length() {
        match DenseMatrix::new(2, 3, vec![1.0_f64; 5]) {
            Err(LinalgError::InvalidDimensions(msg)) => assert!(msg.contains("Data length (5)")),
            other => panic!("Expected InvalidDimensions error, got {:?}", other),
        }
    }

    #[test]
    fn test_dense_matrix_new_overflowing_dims() {
        let rows = 1usize << (usize::BITS - 1);
        match DenseMatrix::<f64>::new(rows, 2, Vec::new()) {
            Err(LinalgError::InvalidDimensions(msg)) => assert!(msg.contains("overflow")),
            other => panic!("Expected InvalidDimensions error, got {:?}", other),
        }
        assert!(DenseMatrix::<f64>::new(usize::MAX, usize::MAX, Vec::new()).is_err());
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = DenseMatrix::from_rows(vec![vec![1.0_f64, 2.0], vec![3.0]]);
        assert_eq!(
            result.unwrap_err(),
            LinalgError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let m = DenseMatrix::<f64>::from_rows(Vec::<Vec<f64>>::new()).unwrap();
        assert_eq!(m.dims(), (0, 0));
        assert!(m.to_array().is_empty());
    }

    #[test]
    fn test_get() {
        let m = m2x3();
        assert_eq!(m.get(0, 0), Ok(1.0));
        assert_eq!(m.get(1, 2), Ok(6.0));
        assert!(matches!(
            m.get(2, 0),
            Err(LinalgError::IndexOutOfBounds { axis: Axis::Row, .. })
        ));
        assert!(matches!(
            m.get(0, 3),
            Err(LinalgError::IndexOutOfBounds {
                axis: Axis::Column,
                ..
            })
        ));
    }

    #[test]
    fn test_row_and_col() {
        let m = m2x3();
        assert_eq!(m.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.col(1).unwrap().as_slice(), &[2.0, 5.0]);
        assert_eq!(
            m.row(5).unwrap_err(),
            LinalgError::IndexOutOfBounds {
                axis: Axis::Row,
                index: 5,
                len: 2
            }
        );
        assert!(m.col(3).is_err());
    }

    #[test]
    fn test_transpose() {
        let t = m2x3().transposed();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(
            t.to_array(),
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );
        assert_eq!(t.transposed(), m2x3());
    }

    #[test]
    fn test_multiply_dense() {
        let a = DenseMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let product = a.multiply_dense(&m2x3()).unwrap();
        assert_eq!(
            product.to_array(),
            vec![vec![9.0, 12.0, 15.0], vec![19.0, 26.0, 33.0]]
        );
    }

    #[test]
    fn test_multiply_dense_mismatch() {
        let a = DenseMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let err = m2x3().multiply_dense(&a).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                left: (2, 3).into(),
                right: (2, 2).into()
            }
        );
    }

    #[test]
    fn test_to_array_is_a_copy() {
        let m = m2x3();
        let mut grid = m.to_array();
        grid[0][0] = 100.0;
        assert_eq!(m.get(0, 0), Ok(1.0));
    }

    #[test]
    fn test_zero_width_rows() {
        let m = DenseMatrix::<f32>::new(3, 0, Vec::new()).unwrap();
        assert_eq!(m.to_array(), vec![Vec::<f32>::new(); 3]);
        assert_eq!(m.row(2).unwrap().size(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_shape() {
        let ok: DenseMatrix<f64> =
            serde_json::from_str(r#"{"rows":1,"cols":2,"data":[1.0,2.0]}"#).unwrap();
        assert_eq!(ok.to_array(), vec![vec![1.0, 2.0]]);

        let bad = serde_json::from_str::<DenseMatrix<f64>>(r#"{"rows":2,"cols":2,"data":[1.0]}"#);
        assert!(bad.is_err());

        let json = format!(r#"{{"rows":{},"cols":2,"data":[]}}"#, usize::MAX);
        let overflowing = serde_json::from_str::<DenseMatrix<f64>>(&json);
        assert!(overflowing.unwrap_err().to_string().contains("overflow"));
    }
}
