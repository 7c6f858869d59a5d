use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native tensor (`B::Tensor1D`) and carries the backend as
/// a phantom type, so tensors of different backends cannot be mixed by
/// accident. All operations delegate to the backend and return new tensors.
///
/// # Example
/// ```
/// use carprice_rs::backend::{CpuBackend, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(x.len(), 3);
/// assert_eq!(x.sum(), 6.0);
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    /// Creates a tensor from owned values.
    pub fn new(data: Vec<f64>) -> Self {
        Self::from_raw(B::from_vec_1d(data))
    }

    /// Creates a tensor by copying a slice.
    pub fn from_slice(data: &[f64]) -> Self {
        Self::new(data.to_vec())
    }

    /// Creates a tensor filled with zeros.
    pub fn zeros(len: usize) -> Self {
        Self::from_raw(B::zeros_1d(len))
    }

    fn from_raw(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element-wise `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_raw(B::sub_1d(&self.data, &other.data))
    }

    /// Multiplies every element by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_raw(B::mul_scalar_1d(&self.data, factor))
    }

    /// Adds `value` to every element.
    pub fn add_scalar(&self, value: f64) -> Self {
        Self::from_raw(B::add_scalar_1d(&self.data, value))
    }

    /// Divides every element by `divisor`.
    pub fn div_scalar(&self, divisor: f64) -> Self {
        Self::from_raw(B::div_scalar_1d(&self.data, divisor))
    }

    /// Inner product `Σ self[i] * other[i]`.
    pub fn dot(&self, other: &Self) -> f64 {
        B::sum_all_1d(&B::mul_1d(&self.data, &other.data))
    }

    pub fn sum(&self) -> f64 {
        B::sum_all_1d(&self.data)
    }

    pub fn min(&self) -> Option<f64> {
        B::min_all_1d(&self.data)
    }

    pub fn max(&self) -> Option<f64> {
        B::max_all_1d(&self.data)
    }

    /// Copies the tensor into a host vector.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }
}

impl<B: Backend> std::fmt::Debug for Tensor1D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tensor1D").field(&self.to_vec()).finish()
    }
}
