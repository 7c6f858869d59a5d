//! Error types for training and prediction.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = RegressionError> = std::result::Result<T, E>;

/// Errors raised while loading data, training, or handling prediction input.
#[derive(Debug, Error)]
pub enum RegressionError {
    /// Empty, misaligned, or otherwise unusable sample data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required column(s) absent from the training data.
    #[error("Missing column(s): {}", .0.join(", "))]
    MissingColumn(Vec<String>),

    /// A training data cell that is not a number.
    #[error("Invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Gradient descent produced non-finite coefficients.
    #[error("Gradient descent diverged (theta0 = {theta0}, theta1 = {theta1})")]
    Diverged { theta0: f64, theta1: f64 },

    /// Mileage supplied at prediction time is not a number.
    #[error("Invalid mileage {0:?}: expected a numeric value")]
    NumericInput(String),

    #[error(transparent)]
    ModelLoad(#[from] ModelLoadError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reasons a persisted model record could not be used.
///
/// Recoverable at prediction time: see
/// [`Predictor::load_or_default`](crate::predictor::Predictor::load_or_default).
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("Model file contains no data row")]
    Empty,

    #[error("Model file is missing the required field '{0}'")]
    MissingField(String),

    #[error("Field '{field}' is not a valid number: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
