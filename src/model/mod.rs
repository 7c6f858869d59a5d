//! Linear model with compile-time training state, and the persisted
//! [`ModelRecord`] that carries it to prediction time.

pub mod linear;
pub mod record;
pub mod state;

pub use linear::{LinearModel, LinearParams, LinearRegression};
pub use record::ModelRecord;
pub use state::{Fitted, Unfitted};

use crate::backend::Backend;

/// Training-side interface of a model.
///
/// `forward` produces predictions for a batch, `backward` turns the gradient
/// of the loss w.r.t. those predictions into parameter gradients.
pub trait TrainableModel<B: Backend> {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    fn forward(&self, input: &Self::Input) -> Self::Prediction;
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;
    fn params(&self) -> &Self::Params;
    fn update_params(&mut self, new_params: &Self::Params);

    /// Drops training capabilities and returns the inference model.
    fn into_fitted(self) -> Self::Output;
}

/// Arithmetic on parameter sets, as needed by optimizers.
pub trait ParamOps: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, factor: f64) -> Self;
}

/// Inference-side interface of a trained model.
pub trait InferenceModel<B: Backend> {
    type InputSingle;
    type OutputSingle;
    type InputBatch;
    type OutputBatch;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle;
    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;
}
