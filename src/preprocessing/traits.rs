//! Core traits for preprocessing transformers.
//!
//! - [`Transformer`]: unfitted; learns its parameters from a column.
//! - [`FittedTransformer`]: holds the learned parameters and maps data in
//!   both directions.

use crate::backend::{Backend, Tensor1D};
use crate::error::Result;

/// Trait for unfitted transformers.
pub trait Transformer<B: Backend>: Clone {
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<B>;

    /// Learns parameters from the training column.
    ///
    /// # Errors
    /// Returns [`RegressionError::InvalidInput`](crate::error::RegressionError::InvalidInput)
    /// when the column is empty or contains non-finite values.
    fn fit(&self, data: &Tensor1D<B>) -> Result<Self::Fitted>;

    /// Fits on `data` and returns both the fitted transformer and the
    /// transformed column.
    fn fit_transform(&self, data: &Tensor1D<B>) -> Result<(Self::Fitted, Tensor1D<B>)> {
        let fitted = self.fit(data)?;
        let transformed = fitted.transform(data);
        Ok((fitted, transformed))
    }
}

/// Trait for fitted transformers.
///
/// `inverse_transform(transform(x)) == x` up to floating-point rounding.
pub trait FittedTransformer<B: Backend>: Clone {
    /// Maps raw values into the transformed space.
    fn transform(&self, data: &Tensor1D<B>) -> Tensor1D<B>;

    /// Maps transformed values back into the raw space.
    fn inverse_transform(&self, data: &Tensor1D<B>) -> Tensor1D<B>;
}
