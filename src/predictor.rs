//! Price estimation from a persisted [`ModelRecord`].

use crate::{
    backend::{Backend, Tensor1D},
    error::{ModelLoadError, RegressionError, Result},
    model::{Fitted, InferenceModel, LinearModel, ModelRecord},
    preprocessing::{denormalize, FittedMinMaxScaler, FittedTransformer},
};
use std::path::Path;
use tracing::warn;

/// Applies a trained model to raw mileages.
///
/// A mileage is mapped into normalized space with the stored mileage bounds
/// (left as is when those bounds coincide), run through the linear model and
/// mapped back with the stored price bounds. Results are not clamped, so
/// mileages outside the training range extrapolate along the line.
///
/// # Example
/// ```rust
/// use carprice_rs::backend::CpuBackend;
/// use carprice_rs::model::ModelRecord;
/// use carprice_rs::predictor::Predictor;
///
/// let predictor = Predictor::<CpuBackend>::new(ModelRecord::default());
/// assert_eq!(predictor.predict(42_000.0), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Predictor<B: Backend> {
    record: ModelRecord,
    model: LinearModel<B, Fitted>,
    mileage_scaler: FittedMinMaxScaler<B>,
}

impl<B: Backend> Predictor<B> {
    pub fn new(record: ModelRecord) -> Self {
        Self {
            model: LinearModel::<B, Fitted>::new(record.params()),
            mileage_scaler: FittedMinMaxScaler::from_bounds(record.mileage_bounds()),
            record,
        }
    }

    pub fn record(&self) -> &ModelRecord {
        &self.record
    }

    /// Loads the record stored at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        ModelRecord::load(path).map(Self::new)
    }

    /// Loads the record at `path`, falling back to [`ModelRecord::default`]
    /// when no path is given or loading fails.
    ///
    /// The load failure, if any, is logged and handed back so the caller can
    /// report it; prediction can proceed either way.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> (Self, Option<ModelLoadError>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load(path.as_ref()) {
            Ok(predictor) => (predictor, None),
            Err(err) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "could not load model record, using default coefficients"
                );
                (Self::default(), Some(err))
            }
        }
    }

    /// Estimated price for one raw mileage.
    pub fn predict(&self, mileage: f64) -> f64 {
        let mileage_n = self.record.mileage_bounds().normalize_value(mileage);
        let price_n = self.model.predict(&mileage_n);
        let price = self.record.price_bounds();
        denormalize(price_n, price.min, price.max)
    }

    /// Estimated prices for a batch of raw mileages.
    pub fn predict_batch(&self, mileages: &[f64]) -> Vec<f64> {
        let mileage_n = self
            .mileage_scaler
            .transform(&Tensor1D::<B>::from_slice(mileages));
        let price = self.record.price_bounds();
        self.model
            .predict_batch(&mileage_n)
            .scale(price.range())
            .add_scalar(price.min)
            .to_vec()
    }

    /// Parses a user-supplied mileage and predicts its price.
    ///
    /// Surrounding whitespace is ignored. Text that is not a finite number
    /// yields [`RegressionError::NumericInput`] and no prediction.
    pub fn predict_input(&self, input: &str) -> Result<f64> {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(mileage) if mileage.is_finite() => Ok(self.predict(mileage)),
            _ => {
                warn!(input = trimmed, "rejected non-numeric mileage");
                Err(RegressionError::NumericInput(trimmed.to_string()))
            }
        }
    }
}

impl<B: Backend> Default for Predictor<B> {
    fn default() -> Self {
        Self::new(ModelRecord::default())
    }
}
