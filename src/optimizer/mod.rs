//! Parameter update rules.

use crate::model::ParamOps;

/// Trait for gradient-based optimizers.
///
/// Training logic (`Trainer`) is decoupled from the parameter update rule.
/// `step` receives gradients computed entirely from the current parameters
/// and returns new parameters, so every coefficient is updated
/// simultaneously.
pub trait Optimizer<P> {
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Batch gradient descent with a fixed learning rate:
/// ```text
/// θ ← θ - η · ∇J(θ)
/// ```
///
/// # Example
/// ```rust
/// use carprice_rs::model::LinearParams;
/// use carprice_rs::optimizer::{GradientDescent, Optimizer};
///
/// let gd = GradientDescent::new(0.5);
/// let next = gd.step(&LinearParams::new(0.0, 0.0), &LinearParams::new(-0.5, -0.25));
/// assert_eq!(next, LinearParams::new(0.25, 0.125));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl<P: ParamOps> Optimizer<P> for GradientDescent {
    fn step(&self, params: &P, grads: &P) -> P {
        params.add(&grads.scale(-self.learning_rate))
    }
}
