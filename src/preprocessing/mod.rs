//! Data preprocessing for the regression pipeline.
//!
//! Mileage and price are rescaled to `[0, 1]` before gradient descent so a
//! single fixed learning rate works regardless of the raw units. The two
//! columns are handled by two instances of the same [`MinMaxScaler`].
//!
//! # Example
//! ```
//! use carprice_rs::backend::{CpuBackend, Tensor1D};
//! use carprice_rs::preprocessing::{FittedTransformer, MinMaxScaler, Transformer};
//!
//! let km = Tensor1D::<CpuBackend>::new(vec![0.0, 50_000.0, 100_000.0]);
//! let fitted = MinMaxScaler::<CpuBackend>::new().fit(&km).unwrap();
//! assert_eq!(fitted.transform(&km).to_vec(), vec![0.0, 0.5, 1.0]);
//! ```

pub mod minmax;
pub mod traits;

pub use minmax::{denormalize, normalize, FittedMinMaxScaler, MinMaxBounds, MinMaxScaler};
pub use traits::{FittedTransformer, Transformer};
