use crate::error::{Axis, LinalgError, Result};
use crate::traits::{Element, Vector};

/// Fixed-length vector of elements, owned and never resized after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T: Element> DenseVector<T> {
    /// Takes ownership of `data` as the vector contents.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Copies `data` into a new vector.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
        }
    }

    /// Standard basis vector: all zero except a `1` at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index >= size`.
    pub fn unit(size: usize, index: usize) -> Result<Self> {
        if index >= size {
            return Err(LinalgError::out_of_bounds(Axis::Element, index, size));
        }
        let mut data = vec![T::zero(); size];
        data[index] = T::one();
        Ok(Self { data })
    }

    /// Returns the number of elements the vector holds.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Element> Vector for DenseVector<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.size()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| LinalgError::out_of_bounds(Axis::Element, index, self.data.len()))
    }
}

impl<T: Element> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

/// Dot product over two equally sized slices; the dense multiply kernel works on
/// borrowed rows through this instead of copying them into vectors.
pub(crate) fn dot_slices<T: Element>(left: &[T], right: &[T]) -> Result<T> {
    if left.len() != right.len() {
        return Err(LinalgError::VectorSizeMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left
        .iter()
        .zip(right)
        .fold(T::zero(), |acc, (&l, &r)| acc + l * r))
}
