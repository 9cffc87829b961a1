use num_traits::Float;

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};
use crate::identity_matrix::{IdentityMatrix, SparseIdentityMatrix};
use crate::traits::{Element, Matrix, MatrixKind};
use crate::vector::DenseVector;

/// Closed set of matrix representations.
///
/// This is what every `matmul` returns, so calls can be chained without the
/// caller knowing which storage strategy each intermediate result uses.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMatrix<T> {
    Dense(DenseMatrix<T>),
    Identity(IdentityMatrix<T>),
    SparseIdentity(SparseIdentityMatrix<T>),
}

macro_rules! each_variant {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyMatrix::Dense($m) => $body,
            AnyMatrix::Identity($m) => $body,
            AnyMatrix::SparseIdentity($m) => $body,
        }
    };
}

impl<T: Element> AnyMatrix<T> {
    /// The preferred identity representation: dimension-only, O(1) memory.
    pub fn identity(dimension: usize) -> Self {
        AnyMatrix::SparseIdentity(SparseIdentityMatrix::new(dimension))
    }

    /// Dense matrix copied from nested rows.
    ///
    /// # Errors
    /// `RaggedRow` if the rows do not all have the same length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        DenseMatrix::from_rows(rows).map(AnyMatrix::Dense)
    }

    pub fn as_dense(&self) -> Option<&DenseMatrix<T>> {
        match self {
            AnyMatrix::Dense(m) => Some(m),
            _ => None,
        }
    }

    /// Converts to a dense matrix, materializing identity grids as needed.
    pub fn into_dense(self) -> DenseMatrix<T> {
        match self {
            AnyMatrix::Dense(m) => m,
            AnyMatrix::Identity(m) => m.as_dense().clone(),
            AnyMatrix::SparseIdentity(m) => m.materialize().as_dense().clone(),
        }
    }

    /// Short type name used in diagnostic renderings.
    pub fn type_name(&self) -> &'static str {
        match self {
            AnyMatrix::Dense(_) => "Matrix",
            AnyMatrix::Identity(_) => "IdentityMatrix",
            AnyMatrix::SparseIdentity(_) => "SparseIdentityMatrix",
        }
    }
}

impl<T: Element> Matrix for AnyMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        each_variant!(self, m => m.dims())
    }

    fn kind(&self) -> MatrixKind<'_, T> {
        each_variant!(self, m => m.kind())
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        each_variant!(self, m => m.get(row, col))
    }

    fn row(&self, row: usize) -> Result<DenseVector<T>> {
        each_variant!(self, m => m.row(row))
    }

    fn col(&self, col: usize) -> Result<DenseVector<T>> {
        each_variant!(self, m => m.col(col))
    }

    fn transpose(&self) -> AnyMatrix<T> {
        each_variant!(self, m => m.transpose())
    }

    fn to_array(&self) -> Vec<Vec<T>> {
        each_variant!(self, m => m.to_array())
    }

    fn to_any(&self) -> AnyMatrix<T> {
        self.clone()
    }
}

impl<T: Element> From<DenseMatrix<T>> for AnyMatrix<T> {
    fn from(m: DenseMatrix<T>) -> Self {
        AnyMatrix::Dense(m)
    }
}

impl<T: Element> From<IdentityMatrix<T>> for AnyMatrix<T> {
    fn from(m: IdentityMatrix<T>) -> Self {
        AnyMatrix::Identity(m)
    }
}

impl<T: Element> From<SparseIdentityMatrix<T>> for AnyMatrix<T> {
    fn from(m: SparseIdentityMatrix<T>) -> Self {
        AnyMatrix::SparseIdentity(m)
    }
}

/// `left · right`, dispatching on the storage tag of each operand.
///
/// Shapes are checked first for every combination, identities included. An
/// identity operand then returns the other operand as-is; only dense-by-dense
/// products do any arithmetic.
pub(crate) fn multiply<L, R>(left: &L, right: &R) -> Result<AnyMatrix<L::Value>>
where
    L: Matrix + ?Sized,
    R: Matrix<Value = L::Value> + ?Sized,
{
    if left.cols() != right.rows() {
        return Err(LinalgError::DimensionMismatch {
            left: left.dims().into(),
            right: right.dims().into(),
        });
    }
    match (left.kind(), right.kind()) {
        (MatrixKind::Identity { dimension }, _) => {
            log::debug!(
                "left operand is a {0} x {0} identity, skipping multiply",
                dimension
            );
            Ok(right.to_any())
        }
        (_, MatrixKind::Identity { dimension }) => {
            log::debug!(
                "right operand is a {0} x {0} identity, skipping multiply",
                dimension
            );
            Ok(left.to_any())
        }
        (MatrixKind::Dense(a), MatrixKind::Dense(b)) => a.multiply_dense(b).map(AnyMatrix::Dense),
    }
}

/// Element-wise comparison of two matrices of any variant.
///
/// Returns false when the shapes differ.
pub fn approx_eq<A, B>(a: &A, b: &B, tolerance: A::Value) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix<Value = A::Value> + ?Sized,
{
    if a.dims() != b.dims() {
        return false;
    }
    let (rows, cols) = a.dims();
    (0..rows).all(|r| {
        (0..cols).all(|c| match (a.get(r, c), b.get(r, c)) {
            (Ok(x), Ok(y)) => (x - y).abs() <= tolerance,
            _ => false,
        })
    })
}
