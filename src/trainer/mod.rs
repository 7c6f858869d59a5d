//! Batch gradient descent training of the mileage → price model.
//!
//! Both columns are min-max normalized once, then the linear model is fitted
//! in normalized space for a fixed number of iterations. The result carries
//! the coefficients together with the raw-space bounds needed to undo the
//! normalization at prediction time.

use crate::{
    backend::Backend,
    dataset::SampleSet,
    error::{RegressionError, Result},
    loss::{HalfMseLoss, Loss},
    metrics::Metrics,
    model::{LinearRegression, ModelRecord, TrainableModel},
    optimizer::{GradientDescent, Optimizer},
    preprocessing::{MinMaxScaler, Transformer},
};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, info, warn};

/// Upper bound accepted for [`TrainerConfig::iterations`].
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Hyperparameters of a training run.
///
/// Deserializable from JSON; absent fields take their defaults:
/// ```rust
/// use carprice_rs::trainer::TrainerConfig;
///
/// let config = TrainerConfig::from_json_str(r#"{ "iterations": 200 }"#).unwrap();
/// assert_eq!(config.iterations, 200);
/// assert_eq!(config.learning_rate, 0.5);
/// assert_eq!(config.tolerance, None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Fixed step size of gradient descent.
    pub learning_rate: f64,
    /// Number of gradient descent iterations, at most [`MAX_ITERATIONS`].
    pub iterations: usize,
    /// Opt-in early stop: end the run once the cost changes by less than
    /// this between two iterations. `None` always runs `iterations` steps.
    pub tolerance: Option<f64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            iterations: 1000,
            tolerance: None,
        }
    }
}

impl TrainerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks that the learning rate is finite and positive, that the
    /// iteration count does not exceed [`MAX_ITERATIONS`] and that the
    /// tolerance, if any, is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(RegressionError::InvalidParameter(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if self.iterations > MAX_ITERATIONS {
            return Err(RegressionError::InvalidParameter(format!(
                "iterations must be at most {MAX_ITERATIONS}, got {}",
                self.iterations
            )));
        }
        if let Some(tol) = self.tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(RegressionError::InvalidParameter(format!(
                    "tolerance must be finite and non-negative, got {tol}"
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of a training run.
#[derive(Clone, Debug)]
pub struct TrainingReport {
    /// Coefficients and bounds to persist.
    pub record: ModelRecord,
    /// R² of the last iteration's predictions, as a percentage.
    pub precision: f64,
    /// Cost before each update, one entry per iteration run.
    pub cost_history: Vec<f64>,
}

impl TrainingReport {
    pub fn iterations_run(&self) -> usize {
        self.cost_history.len()
    }

    pub fn initial_cost(&self) -> Option<f64> {
        self.cost_history.first().copied()
    }

    pub fn final_cost(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }
}

/// Fits a [`ModelRecord`] on a [`SampleSet`].
///
/// Immutable once built and reusable across sample sets.
///
/// # Example
/// ```rust
/// use carprice_rs::backend::CpuBackend;
/// use carprice_rs::dataset::SampleSet;
/// use carprice_rs::trainer::Trainer;
///
/// let samples = SampleSet::from_pairs([(0.0, 100.0), (50_000.0, 50.0), (100_000.0, 0.0)]).unwrap();
/// let trainer = Trainer::<CpuBackend>::builder().iterations(1000).build().unwrap();
/// let report = trainer.fit(&samples).unwrap();
/// assert!(report.precision > 99.0);
/// ```
#[derive(Clone, Debug)]
pub struct Trainer<B: Backend> {
    config: TrainerConfig,
    loss_fn: HalfMseLoss,
    optimizer: GradientDescent,
    _backend: PhantomData<B>,
}

/// Fluent builder for a [`Trainer`].
///
/// Defaults:
/// - `learning_rate`: 0.5
/// - `iterations`: 1000
/// - `tolerance`: none
#[derive(Clone, Debug)]
pub struct TrainerBuilder<B: Backend> {
    config: TrainerConfig,
    _backend: PhantomData<B>,
}

impl<B: Backend> Default for TrainerBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> TrainerBuilder<B> {
    pub fn new() -> Self {
        Self {
            config: TrainerConfig::default(),
            _backend: PhantomData,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Enables the early stop on cost change below `tolerance`.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = Some(tolerance);
        self
    }

    /// Validates the configuration and builds the trainer.
    pub fn build(self) -> Result<Trainer<B>> {
        Trainer::from_config(self.config)
    }
}

impl<B: Backend> Default for Trainer<B> {
    fn default() -> Self {
        let config = TrainerConfig::default();
        Self {
            optimizer: GradientDescent::new(config.learning_rate),
            config,
            loss_fn: HalfMseLoss,
            _backend: PhantomData,
        }
    }
}

impl<B: Backend> Trainer<B> {
    pub fn builder() -> TrainerBuilder<B> {
        TrainerBuilder::new()
    }

    pub fn from_config(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            optimizer: GradientDescent::new(config.learning_rate),
            config,
            loss_fn: HalfMseLoss,
            _backend: PhantomData,
        })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Trains on `samples`.
    ///
    /// Mileage and price are normalized independently; a column with a
    /// single distinct value is left unscaled. The coefficients start at
    /// zero and every iteration applies one simultaneous update computed
    /// from the whole sample set.
    ///
    /// # Errors
    /// - [`RegressionError::InvalidInput`] if `samples` is empty, before any
    ///   computation.
    /// - [`RegressionError::Diverged`] if a coefficient ends up non-finite.
    pub fn fit(&self, samples: &SampleSet) -> Result<TrainingReport> {
        if samples.is_empty() {
            return Err(RegressionError::InvalidInput(
                "cannot train on an empty sample set".to_string(),
            ));
        }

        let (km, price) = samples.tensors::<B>();
        let scaler = MinMaxScaler::<B>::new();
        let (km_scaler, km_n) = scaler.fit_transform(&km)?;
        let (price_scaler, price_n) = scaler.fit_transform(&price)?;
        if km_scaler.bounds().is_degenerate() {
            warn!(
                mileage = km_scaler.bounds().min,
                "all samples share one mileage, training on raw mileage"
            );
        }
        if price_scaler.bounds().is_degenerate() {
            warn!(
                price = price_scaler.bounds().min,
                "all samples share one price, training on raw price"
            );
        }

        let mut model = LinearRegression::<B>::zeros();
        let mut predictions = model.forward(&km_n);
        let mut cost_history: Vec<f64> = Vec::new();

        for iteration in 1..=self.config.iterations {
            predictions = model.forward(&km_n);
            let cost = Loss::<B>::loss(&self.loss_fn, &predictions, &price_n);
            debug!(iteration, cost, "gradient descent step");

            let grad_preds = Loss::<B>::grad_wrt_prediction(&self.loss_fn, &predictions, &price_n);
            let grads = model.backward(&km_n, &grad_preds);
            let new_params = self.optimizer.step(model.params(), &grads);
            model.update_params(&new_params);

            let converged = match (self.config.tolerance, cost_history.last()) {
                (Some(tol), Some(&previous)) => (previous - cost).abs() < tol,
                _ => false,
            };
            cost_history.push(cost);
            if converged {
                debug!(iteration, "cost change below tolerance, stopping early");
                break;
            }
        }

        let params = *model.params();
        if !params.is_finite() {
            return Err(RegressionError::Diverged {
                theta0: params.theta0,
                theta1: params.theta1,
            });
        }

        let precision = Metrics::precision(&price_n.to_vec(), &predictions.to_vec());
        let fitted = model.into_fitted();
        let record = ModelRecord::new(fitted.params(), km_scaler.bounds(), price_scaler.bounds());

        info!(
            iterations = cost_history.len(),
            final_cost = cost_history.last().copied().unwrap_or(f64::NAN),
            precision,
            theta0 = record.theta0,
            theta1 = record.theta1,
            "training finished"
        );

        Ok(TrainingReport {
            record,
            precision,
            cost_history,
        })
    }

    /// Trains on `samples` and overwrites the record file at `path`.
    ///
    /// Nothing is written if training fails.
    pub fn fit_to_file<P: AsRef<Path>>(&self, samples: &SampleSet, path: P) -> Result<TrainingReport> {
        let report = self.fit(samples)?;
        report.record.save(path)?;
        Ok(report)
    }
}
