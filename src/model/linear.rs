//! Univariate linear model `price = theta0 + theta1 * mileage`.
//!
//! - [`LinearRegression`] = `LinearModel<Unfitted>`, used during training.
//! - `LinearModel<Fitted>`, inference only.
//!
//! Both operate in whatever space they are fed; the trainer feeds normalized
//! columns, so the coefficients it produces live in normalized space.

use crate::backend::{Backend, Tensor1D};
pub use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use std::marker::PhantomData;

/// Intercept and slope of the model.
///
/// Also used as the gradient type: `theta0` then holds `∂J/∂theta0` and
/// `theta1` holds `∂J/∂theta1`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearParams {
    pub theta0: f64,
    pub theta1: f64,
}

impl LinearParams {
    pub fn new(theta0: f64, theta1: f64) -> Self {
        Self { theta0, theta1 }
    }

    pub fn is_finite(&self) -> bool {
        self.theta0.is_finite() && self.theta1.is_finite()
    }
}

impl ParamOps for LinearParams {
    fn add(&self, other: &Self) -> Self {
        Self {
            theta0: self.theta0 + other.theta0,
            theta1: self.theta1 + other.theta1,
        }
    }

    fn scale(&self, factor: f64) -> Self {
        Self {
            theta0: self.theta0 * factor,
            theta1: self.theta1 * factor,
        }
    }
}

/// A linear model with its training state encoded at the type level.
///
/// You cannot call `predict()` on an `Unfitted` model, nor update the
/// parameters of a `Fitted` one.
#[derive(Clone, Debug)]
pub struct LinearModel<B: Backend, S> {
    params: LinearParams,
    _state: PhantomData<(B, S)>,
}

impl<B: Backend> LinearModel<B, Fitted> {
    /// Creates a fitted model from known coefficients.
    pub fn new(params: LinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> LinearParams {
        self.params
    }
}

/// Inference: `y = theta0 + theta1 * x`.
impl<B: Backend> InferenceModel<B> for LinearModel<B, Fitted> {
    type InputSingle = f64;
    type OutputSingle = f64;
    type InputBatch = Tensor1D<B>;
    type OutputBatch = Tensor1D<B>;

    fn predict(&self, input: &f64) -> f64 {
        self.params.theta0 + self.params.theta1 * input
    }

    fn predict_batch(&self, input: &Tensor1D<B>) -> Tensor1D<B> {
        input
            .scale(self.params.theta1)
            .add_scalar(self.params.theta0)
    }
}

/// Training interface.
///
/// Forward pass: `x * theta1 + theta0` over the whole batch.
/// Backward pass: `∇theta0 = Σ grad`, `∇theta1 = Σ grad * x`.
impl<B: Backend> TrainableModel<B> for LinearModel<B, Unfitted> {
    type Input = Tensor1D<B>;
    type Prediction = Tensor1D<B>;
    type Params = LinearParams;
    type Gradients = LinearParams;
    type Output = LinearModel<B, Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.scale(self.params.theta1).add_scalar(self.params.theta0)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        LinearParams {
            theta0: grad_output.sum(),
            theta1: grad_output.dot(x),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = *params;
    }

    fn into_fitted(self) -> LinearModel<B, Fitted> {
        LinearModel::<B, Fitted>::new(self.params)
    }
}

/// Alias for an **unfitted** linear regression model.
pub type LinearRegression<B> = LinearModel<B, Unfitted>;

impl<B: Backend> LinearRegression<B> {
    /// Creates a model with `theta0 = theta1 = 0`.
    pub fn zeros() -> Self {
        Self::from_params(LinearParams::default())
    }

    /// Constructs a model from explicit parameters (e.g. a warm start).
    pub fn from_params(params: LinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

impl<B: Backend> Default for LinearRegression<B> {
    fn default() -> Self {
        Self::zeros()
    }
}
