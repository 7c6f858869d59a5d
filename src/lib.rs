//! # carprice-rs
//!
//! Estimates the price of a car from its mileage with a univariate linear
//! model fitted by batch gradient descent on min-max normalized data.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: the linear model carries its training state in
//!   the type system (`Unfitted` vs `Fitted`), so an unfitted model cannot
//!   predict and a fitted one cannot be updated.
//! - **Training/Inference Separation**: training produces a small
//!   [`ModelRecord`] (coefficients plus normalization bounds); prediction only
//!   needs that record.
//! - **Backend Agnosticism**: all array math goes through the
//!   [`Backend`](backend::Backend) trait, with a pure-Rust CPU backend by
//!   default and an `ndarray` backend behind a feature flag.
//!
//! ## Quick Start
//!
//! ```rust
//! use carprice_rs::backend::CpuBackend;
//! use carprice_rs::dataset::SampleSet;
//! use carprice_rs::predictor::Predictor;
//! use carprice_rs::trainer::Trainer;
//!
//! let samples = SampleSet::from_csv_reader(
//!     "km,price\n0,100\n50000,50\n100000,0\n".as_bytes(),
//! ).unwrap();
//!
//! let trainer = Trainer::<CpuBackend>::builder()
//!     .learning_rate(0.5)
//!     .iterations(1000)
//!     .build()
//!     .unwrap();
//! let report = trainer.fit(&samples).unwrap();
//! assert!(report.precision > 99.0);
//!
//! let predictor = Predictor::<CpuBackend>::new(report.record);
//! assert!((predictor.predict(0.0) - 100.0).abs() < 2.0);
//! ```
//!
//! ## Module Structure
//!
//! - `backend`: tensor abstraction and computation primitives (`Tensor1D`)
//! - `dataset`: training samples and their CSV loader
//! - `preprocessing`: min-max normalization
//! - `model`: the linear model and its persisted record
//! - `loss`: half mean squared error
//! - `optimizer`: fixed-rate gradient descent
//! - `metrics`: R² and the precision percentage
//! - `trainer`: the training loop and its configuration
//! - `predictor`: price estimation from a saved record
//! - `error`: error types shared by all of the above

pub mod backend;

/// Training samples and CSV loading.
pub mod dataset;

pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Evaluation metrics.
pub mod metrics;

/// Linear model with compile-time state safety and its persisted record.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

pub mod predictor;

/// Column normalization.
pub mod preprocessing;

/// Training loop orchestration.
pub mod trainer;

pub use dataset::SampleSet;
pub use error::{ModelLoadError, RegressionError, Result};
pub use model::ModelRecord;
pub use predictor::Predictor;
pub use trainer::{Trainer, TrainerBuilder, TrainerConfig, TrainingReport};
