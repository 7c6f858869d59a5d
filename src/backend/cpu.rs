use super::Backend;

/// Reference backend storing tensors as plain `Vec<f64>`.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

impl Backend for CpuBackend {
    type Tensor1D = Vec<f64>;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.; len]
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Tensor length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Tensor length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a * b).collect()
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t.iter().map(|x| x + s).collect()
    }

    fn div_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t.iter().map(|x| x / s).collect()
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> f64 {
        t.iter().sum()
    }

    fn min_all_1d(t: &Self::Tensor1D) -> Option<f64> {
        t.iter().copied().reduce(f64::min)
    }

    fn max_all_1d(t: &Self::Tensor1D) -> Option<f64> {
        t.iter().copied().reduce(f64::max)
    }
}
