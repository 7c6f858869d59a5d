//! # Backend Abstraction
//!
//! Every array operation of the training loop and of batch prediction goes
//! through the [`Backend`] trait, so the numeric code in `model`, `loss` and
//! `preprocessing` is written once and runs on any storage type.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Storage              |
//! |------------------|-----------|----------------------|
//! | `CpuBackend`     | `cpu`     | `Vec<f64>` (default) |
//! | `NdarrayBackend` | `ndarray` | `ndarray::Array1`    |
//!
//! ## Example
//!
//! ```rust
//! use carprice_rs::backend::{CpuBackend, Tensor1D};
//!
//! let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
//! let y = x.scale(2.0).add_scalar(1.0);
//! assert_eq!(y.to_vec(), vec![3.0, 5.0, 7.0]);
//! ```
//!
//! The model only ever needs one feature, so the surface is restricted to
//! one-dimensional tensors with `f64` scalars.

#[cfg(feature = "cpu")]
pub mod cpu;
#[cfg(feature = "cpu")]
/// Pure-Rust CPU backend implementation with zero external dependencies.
pub use cpu::CpuBackend;

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend backed by the `ndarray` crate for ecosystem interoperability.
pub use ndarray_backend::NdarrayBackend;

/// One-dimensional tensor abstraction.
pub mod tensor1d;

pub use tensor1d::Tensor1D;

/// Abstraction over the storage and arithmetic of 1-D `f64` tensors.
///
/// Element-wise binary operations require operands of equal length;
/// implementations panic on mismatch. Reductions over an empty tensor follow
/// the conventions documented on each method.
pub trait Backend: Clone + Copy + 'static {
    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    // --- Data access ---

    /// Copies the tensor into a host `Vec<f64>`.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Returns the number of elements.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    // --- Element-wise operations ---

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D;

    /// Adds a scalar to each element.
    fn add_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D;

    /// Divides each element by a scalar.
    ///
    /// No zero check is done here: callers guard degenerate divisors.
    fn div_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D;

    // --- Reductions ---

    /// Sum of all elements; `0.0` for an empty tensor.
    fn sum_all_1d(t: &Self::Tensor1D) -> f64;

    /// Smallest element, or `None` for an empty tensor.
    fn min_all_1d(t: &Self::Tensor1D) -> Option<f64>;

    /// Largest element, or `None` for an empty tensor.
    fn max_all_1d(t: &Self::Tensor1D) -> Option<f64>;
}
