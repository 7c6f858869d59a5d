//! Min-Max normalization.
//!
//! Rescales a column to `[0, 1]`:
//! ```text
//! x_scaled = (x - x_min) / (x_max - x_min)
//! x        = x_scaled * (x_max - x_min) + x_min
//! ```
//!
//! A column with a single distinct value (`x_min == x_max`) cannot be
//! rescaled. In that case the identity mapping is used instead, and no
//! division is ever performed.

use crate::backend::{Backend, Tensor1D};
use crate::error::{RegressionError, Result};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use std::marker::PhantomData;

/// Normalizes `values` with the given bounds.
///
/// Returns the values unchanged when `max == min`.
///
/// # Example
/// ```
/// use carprice_rs::preprocessing::normalize;
///
/// assert_eq!(normalize(&[10.0, 15.0, 20.0], 10.0, 20.0), vec![0.0, 0.5, 1.0]);
/// assert_eq!(normalize(&[7.0], 7.0, 7.0), vec![7.0]);
/// ```
pub fn normalize(values: &[f64], min: f64, max: f64) -> Vec<f64> {
    if max == min {
        return values.to_vec();
    }
    let range = max - min;
    values.iter().map(|&v| (v - min) / range).collect()
}

/// Maps a normalized value back to the raw scale: `value * (max - min) + min`.
///
/// Exact inverse of [`normalize`] whenever `max != min`. With `max == min`
/// this collapses to `min`.
pub fn denormalize(value: f64, min: f64, max: f64) -> f64 {
    value * (max - min) + min
}

/// Observed `(min, max)` of a column.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MinMaxBounds {
    pub min: f64,
    pub max: f64,
}

impl MinMaxBounds {
    /// Creates bounds, rejecting `min > max` and NaN.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(RegressionError::InvalidParameter(format!(
                "bounds must satisfy min <= max, got min = {min}, max = {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Computes the bounds of a backend tensor.
    pub fn of_tensor<B: Backend>(values: &Tensor1D<B>) -> Result<Self> {
        match (values.min(), values.max()) {
            (Some(min), Some(max)) if min.is_finite() && max.is_finite() => Self::new(min, max),
            (Some(_), Some(_)) => Err(RegressionError::InvalidInput(
                "cannot compute bounds of non-finite values".to_string(),
            )),
            _ => Err(RegressionError::InvalidInput(
                "cannot compute bounds of an empty column".to_string(),
            )),
        }
    }

    /// `true` when the column had a single distinct value.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Normalizes one value; identity when degenerate.
    pub fn normalize_value(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            value
        } else {
            (value - self.min) / self.range()
        }
    }

    /// Inverse of [`normalize_value`](Self::normalize_value); identity when
    /// degenerate.
    pub fn denormalize_value(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            value
        } else {
            denormalize(value, self.min, self.max)
        }
    }
}

/// MinMaxScaler transformer (unfitted).
#[derive(Clone, Debug)]
pub struct MinMaxScaler<B: Backend> {
    _backend: PhantomData<B>,
}

impl<B: Backend> Default for MinMaxScaler<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> MinMaxScaler<B> {
    pub fn new() -> Self {
        Self {
            _backend: PhantomData,
        }
    }
}

impl<B: Backend> Transformer<B> for MinMaxScaler<B> {
    type Fitted = FittedMinMaxScaler<B>;

    fn fit(&self, data: &Tensor1D<B>) -> Result<Self::Fitted> {
        let bounds = MinMaxBounds::of_tensor(data)?;
        Ok(FittedMinMaxScaler::from_bounds(bounds))
    }
}

/// Fitted MinMaxScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedMinMaxScaler<B: Backend> {
    bounds: MinMaxBounds,
    _backend: PhantomData<B>,
}

impl<B: Backend> FittedMinMaxScaler<B> {
    /// Rebuilds a fitted scaler from known bounds, e.g. from a model record.
    pub fn from_bounds(bounds: MinMaxBounds) -> Self {
        Self {
            bounds,
            _backend: PhantomData,
        }
    }

    pub fn bounds(&self) -> MinMaxBounds {
        self.bounds
    }
}

impl<B: Backend> FittedTransformer<B> for FittedMinMaxScaler<B> {
    fn transform(&self, data: &Tensor1D<B>) -> Tensor1D<B> {
        if self.bounds.is_degenerate() {
            return data.clone();
        }
        data.add_scalar(-self.bounds.min)
            .div_scalar(self.bounds.range())
    }

    fn inverse_transform(&self, data: &Tensor1D<B>) -> Tensor1D<B> {
        if self.bounds.is_degenerate() {
            return data.clone();
        }
        data.scale(self.bounds.range()).add_scalar(self.bounds.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    fn assert_close(a: f64, b: f64) {
        let tol = 1e-9 * b.abs().max(1.0);
        assert!((a - b).abs() <= tol, "Expected {}, got {}", b, a);
    }

    #[test]
    fn test_normalize_maps_bounds_to_unit_interval() {
        let values = normalize(&[240_000.0, 139_800.0, 22_899.0], 22_899.0, 240_000.0);
        assert_close(values[0], 1.0);
        assert!(values[1] > 0.0 && values[1] < 1.0);
        assert_close(values[2], 0.0);
    }

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let (min, max) = (-3.5, 1_250.0);
        for &v in &[-3.5, 0.0, 1.0, 617.25, 1_250.0, 99_999.0, -10_000.0] {
            let n = normalize(&[v], min, max)[0];
            assert_close(denormalize(n, min, max), v);
        }
    }

    #[test]
    fn test_normalize_degenerate_is_identity() {
        let values = normalize(&[42.0, 42.0], 42.0, 42.0);
        assert_eq!(values, vec![42.0, 42.0]);
        assert!(values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_denormalize_degenerate_is_finite() {
        assert_eq!(denormalize(0.3, 5.0, 5.0), 5.0);
    }

    #[test]
    fn test_bounds_of_values() {
        let values = Tensor1D::<CpuBackend>::new(vec![3.0, -1.0, 7.0]);
        let bounds = MinMaxBounds::of_tensor(&values).unwrap();
        assert_eq!(bounds, MinMaxBounds { min: -1.0, max: 7.0 });
        assert_eq!(bounds.range(), 8.0);
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn test_bounds_of_empty_fails() {
        let result = MinMaxBounds::of_tensor(&Tensor1D::<CpuBackend>::zeros(0));
        assert!(matches!(result, Err(RegressionError::InvalidInput(_))));
    }

    #[test]
    fn test_bounds_of_non_finite_fails() {
        let values = Tensor1D::<CpuBackend>::new(vec![1.0, f64::INFINITY]);
        let result = MinMaxBounds::of_tensor(&values);
        assert!(matches!(result, Err(RegressionError::InvalidInput(_))));
    }

    #[test]
    fn test_bounds_new_rejects_inverted() {
        assert!(MinMaxBounds::new(2.0, 1.0).is_err());
        assert!(MinMaxBounds::new(f64::NAN, 1.0).is_err());
        assert!(MinMaxBounds::new(1.0, 1.0).unwrap().is_degenerate());
    }

    #[test]
    fn test_bounds_value_roundtrip() {
        let bounds = MinMaxBounds::new(1_000.0, 9_000.0).unwrap();
        assert_close(bounds.normalize_value(5_000.0), 0.5);
        assert_close(bounds.denormalize_value(bounds.normalize_value(7_321.0)), 7_321.0);

        let flat = MinMaxBounds::new(4.0, 4.0).unwrap();
        assert_eq!(flat.normalize_value(10.0), 10.0);
        assert_eq!(flat.denormalize_value(10.0), 10.0);
    }

    #[test]
    fn test_minmax_scaler_transform() {
        let data = Tensor1D::<CpuBackend>::new(vec![2.0, 4.0, 6.0, 10.0]);
        let (fitted, transformed) = MinMaxScaler::<CpuBackend>::new().fit_transform(&data).unwrap();

        assert_eq!(fitted.bounds(), MinMaxBounds { min: 2.0, max: 10.0 });
        assert_eq!(transformed.to_vec(), vec![0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_minmax_scaler_matches_free_function() {
        let raw = vec![22_899.0, 48_235.0, 84_000.0, 240_000.0];
        let data = Tensor1D::<CpuBackend>::new(raw.clone());
        let fitted = MinMaxScaler::<CpuBackend>::new().fit(&data).unwrap();

        let expected = normalize(&raw, 22_899.0, 240_000.0);
        for (a, b) in fitted.transform(&data).to_vec().iter().zip(expected.iter()) {
            assert_close(*a, *b);
        }
    }

    #[test]
    fn test_minmax_scaler_inverse_transform() {
        let data = Tensor1D::<CpuBackend>::new(vec![3_650.0, 6_200.0, 8_290.0]);
        let fitted = MinMaxScaler::<CpuBackend>::new().fit(&data).unwrap();

        let recovered = fitted.inverse_transform(&fitted.transform(&data));
        for (o, r) in data.to_vec().iter().zip(recovered.to_vec().iter()) {
            assert_close(*r, *o);
        }
    }

    #[test]
    fn test_minmax_scaler_zero_range() {
        let data = Tensor1D::<CpuBackend>::new(vec![5.0, 5.0, 5.0]);
        let fitted = MinMaxScaler::<CpuBackend>::new().fit(&data).unwrap();

        assert!(fitted.bounds().is_degenerate());
        assert_eq!(fitted.transform(&data).to_vec(), vec![5.0, 5.0, 5.0]);
        assert_eq!(fitted.inverse_transform(&data).to_vec(), vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_minmax_scaler_empty_data() {
        let data = Tensor1D::<CpuBackend>::zeros(0);
        assert!(MinMaxScaler::<CpuBackend>::new().fit(&data).is_err());
    }

    #[test]
    fn test_bounds_serde_roundtrip() {
        let bounds = MinMaxBounds::new(0.0, 240_000.0).unwrap();
        let json = serde_json::to_string(&bounds).unwrap();
        let restored: MinMaxBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(bounds, restored);
    }
}
