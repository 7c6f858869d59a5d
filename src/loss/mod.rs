//! Differentiable loss functions.

use crate::backend::{Backend, Tensor1D};

/// A differentiable loss used during training.
///
/// Implementors define the scalar value (for logging and convergence checks)
/// and the gradient w.r.t. the predictions, which is handed to the model's
/// `backward()`.
pub trait Loss<B: Backend> {
    /// Scalar loss value.
    fn loss(&self, prediction: &Tensor1D<B>, target: &Tensor1D<B>) -> f64;

    /// Gradient of the loss w.r.t. the prediction: `∂L/∂pred`.
    fn grad_wrt_prediction(&self, prediction: &Tensor1D<B>, target: &Tensor1D<B>) -> Tensor1D<B>;
}

/// Half mean squared error: `J = (1/(2m)) * Σ(pred_i - target_i)^2`.
///
/// Gradient w.r.t. prediction: `∂J/∂pred = (pred - target) / m`. Fed through
/// the linear model's backward pass this yields
/// `∂J/∂theta0 = (1/m) Σ(pred - target)` and
/// `∂J/∂theta1 = (1/m) Σ(pred - target) * x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfMseLoss;

impl<B: Backend> Loss<B> for HalfMseLoss {
    fn loss(&self, pred: &Tensor1D<B>, target: &Tensor1D<B>) -> f64 {
        let diff = pred.sub(target);
        diff.dot(&diff) / (2.0 * pred.len() as f64)
    }

    fn grad_wrt_prediction(&self, pred: &Tensor1D<B>, target: &Tensor1D<B>) -> Tensor1D<B> {
        pred.sub(target).div_scalar(pred.len() as f64)
    }
}
