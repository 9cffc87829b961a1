//! # Linear Algebra Core Library
//!
//! Provides dense matrices and vectors together with identity representations
//! that turn multiplication into a no-op.
//!
//! All matrix types implement [`Matrix`], and every product is returned as an
//! [`AnyMatrix`], so products can be chained across representations:
//!
//! ```
//! use linalg_core::{AnyMatrix, Matrix};
//!
//! let a = AnyMatrix::<f64>::from_rows([[1.0, 2.0], [3.0, 4.0]])?;
//! let b = AnyMatrix::<f64>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
//! let product = a.matmul(&AnyMatrix::<f64>::identity(2))?.matmul(&b)?;
//! assert_eq!(product.to_array(), vec![vec![9.0, 12.0, 15.0], vec![19.0, 26.0, 33.0]]);
//! # Ok::<(), linalg_core::LinalgError>(())
//! ```

// Declare modules
pub mod any_matrix;
pub mod dense_matrix;
pub mod display;
pub mod error;
pub mod identity_matrix;
pub mod traits;
pub mod vector;

// Re-export public types
pub use any_matrix::{approx_eq, AnyMatrix};
pub use dense_matrix::DenseMatrix;
pub use error::{Axis, LinalgError, Result, Shape};
pub use identity_matrix::{IdentityMatrix, SparseIdentityMatrix};
pub use traits::{Element, Matrix, MatrixKind, Vector};
pub use vector::DenseVector;
