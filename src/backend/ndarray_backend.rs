use ndarray::Array1;

use super::Backend;

/// CPU backend built on `ndarray::Array1<f64>`.
///
/// Numerically interchangeable with [`super::CpuBackend`]; useful when the
/// surrounding application already holds its columns as `ndarray` arrays.
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

impl Backend for NdarrayBackend {
    type Tensor1D = Array1<f64>;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Tensor length mismatch");
        a - b
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Tensor length mismatch");
        a * b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t * s
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t + s
    }

    fn div_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t / s
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> f64 {
        t.sum()
    }

    fn min_all_1d(t: &Self::Tensor1D) -> Option<f64> {
        t.iter().copied().reduce(f64::min)
    }

    fn max_all_1d(t: &Self::Tensor1D) -> Option<f64> {
        t.iter().copied().reduce(f64::max)
    }
}
