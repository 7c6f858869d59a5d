/// Marker type for a model that is **not yet trained**.
///
/// Training methods require an `Unfitted` model; `predict` is only available
/// once the model has been converted to [`Fitted`].
#[derive(Clone, Copy, Debug)]
pub struct Unfitted;

/// Marker type for a **trained** model.
///
/// A `Fitted` model carries only its coefficients: no optimizer state, loss
/// function or hyperparameters.
#[derive(Clone, Copy, Debug)]
pub struct Fitted;
