//! Human-readable renderings used for diagnostic printing.
//!
//! Vectors print as `Vector[n] => [e0,e1,...]` with each element in a
//! 10-wide, 4-decimal field; vectors longer than 8 keep only three elements
//! from each end. Matrices print a `Name[r x c]` header followed by one
//! indexed line per row, keeping two rows from each end when there are more
//! than 6.

use std::fmt::{self, Display};

use crate::any_matrix::AnyMatrix;
use crate::dense_matrix::DenseMatrix;
use crate::identity_matrix::{IdentityMatrix, SparseIdentityMatrix};
use crate::traits::{Element, Matrix};
use crate::vector::DenseVector;

const VECTOR_EDGE: usize = 3;
const VECTOR_MAX_FULL: usize = 8;
const MATRIX_EDGE: usize = 2;
const MATRIX_MAX_FULL: usize = 6;

impl<T: Element> Display for DenseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |x: &T| format!("{:10.4}", x);
        let data = self.as_slice();
        let cells: Vec<String> = if data.len() > VECTOR_MAX_FULL {
            let tail = &data[data.len() - VECTOR_EDGE..];
            data[..VECTOR_EDGE]
                .iter()
                .map(cell)
                .chain(std::iter::once("...".to_string()))
                .chain(tail.iter().map(cell))
                .collect()
        } else {
            data.iter().map(cell).collect()
        };
        write!(f, "Vector[{}] => [{}]", data.len(), cells.join(","))
    }
}

fn fmt_matrix<M: Matrix + ?Sized>(f: &mut fmt::Formatter<'_>, name: &str, m: &M) -> fmt::Result {
    let (rows, cols) = m.dims();
    write!(f, "{}[{} x {}]\n  [\n", name, rows, cols)?;
    let mut lines = Vec::new();
    // zero-width rows are not listed
    if cols > 0 {
        for r in 0..rows {
            if rows > MATRIX_MAX_FULL && r == MATRIX_EDGE {
                lines.push("       ... ".to_string());
            }
            if rows > MATRIX_MAX_FULL && r >= MATRIX_EDGE && r < rows - MATRIX_EDGE {
                continue;
            }
            let v = m.row(r).map_err(|_| fmt::Error)?;
            lines.push(format!("{:6}: {}", r, v));
        }
    }
    write!(f, "{}\n  ]", lines.join(",\n"))
}

impl<T: Element> Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, "Matrix", self)
    }
}

impl<T: Element> Display for IdentityMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, "IdentityMatrix", self)
    }
}

impl<T: Element> Display for SparseIdentityMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, "SparseIdentityMatrix", self)
    }
}

impl<T: Element> Display for AnyMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, self.type_name(), self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AnyMatrix, DenseMatrix, DenseVector, SparseIdentityMatrix};

    #[test]
    fn test_short_vector() {
        let v = DenseVector::from_vec(vec![1.0_f64, -2.5]);
        assert_eq!(v.to_string(), "Vector[2] => [    1.0000,   -2.5000]");
    }

    #[test]
    fn test_long_vector_is_truncated() {
        let v = DenseVector::from_vec((0..10).map(f64::from).collect());
        assert_eq!(
            v.to_string(),
            "Vector[10] => [    0.0000,    1.0000,    2.0000,...,    7.0000,    8.0000,    9.0000]"
        );
    }

    #[test]
    fn test_matrix_rendering() {
        let m = DenseMatrix::from_rows([[9.0_f64, 12.0], [19.0, 26.0]]).unwrap();
        let expected = "Matrix[2 x 2]\n  [\n     0: Vector[2] => [    9.0000,   12.0000],\n     1: Vector[2] => [   19.0000,   26.0000]\n  ]";
        assert_eq!(m.to_string(), expected);
        assert_eq!(AnyMatrix::Dense(m).to_string(), expected);
    }

    #[test]
    fn test_tall_matrix_is_truncated() {
        let s = SparseIdentityMatrix::<f64>::new(7).to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "SparseIdentityMatrix[7 x 7]");
        assert_eq!(lines[1], "  [");
        assert!(lines[2].starts_with("     0: Vector[7] => ["));
        assert!(lines[3].starts_with("     1: "));
        assert_eq!(lines[4], "       ... ,");
        assert!(lines[5].starts_with("     5: "));
        assert!(lines[6].starts_with("     6: "));
        assert_eq!(lines[7], "  ]");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_zero_width_matrix() {
        let m = DenseMatrix::<f64>::new(2, 0, Vec::new()).unwrap();
        assert_eq!(m.to_string(), "Matrix[2 x 0]\n  [\n\n  ]");
    }
}
