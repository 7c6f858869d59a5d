//! Goodness-of-fit measures reported after training.

/// Metrics for evaluating the fitted regression.
pub struct Metrics;

impl Metrics {
    /// Coefficient of determination `R² = 1 - SS_res / SS_tot`, where
    /// `SS_res = Σ(y_true - y_pred)^2` and `SS_tot = Σ(y_true - mean)^2`.
    ///
    /// Returns `0.0` when `SS_tot == 0` (constant target) or when the input
    /// is empty. Can be negative for a model worse than the mean.
    ///
    /// # Panics
    /// If the slices have different lengths.
    pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> f64 {
        assert_eq!(y_true.len(), y_pred.len(), "Arrays must have the same length");
        if y_true.is_empty() {
            return 0.0;
        }

        let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
        let ss_tot: f64 = y_true.iter().map(|&t| (t - mean).powi(2)).sum();
        if ss_tot == 0.0 {
            return 0.0;
        }

        1.0 - Self::ss_res(y_true, y_pred) / ss_tot
    }

    /// R² expressed as a percentage, the "precision" reported after training.
    pub fn precision(y_true: &[f64], y_pred: &[f64]) -> f64 {
        Self::r_squared(y_true, y_pred) * 100.0
    }

    fn ss_res(y_true: &[f64], y_pred: &[f64]) -> f64 {
        y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_squared_perfect() {
        let y = [1.0, 0.5, 0.0];
        assert_eq!(Metrics::r_squared(&y, &y), 1.0);
        assert_eq!(Metrics::precision(&y, &y), 100.0);
    }

    #[test]
    fn test_r_squared_mean_predictor_is_zero() {
        let y = [1.0, 2.0, 3.0];
        assert_eq!(Metrics::r_squared(&y, &[2.0, 2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_r_squared_can_be_negative() {
        let y = [1.0, 2.0, 3.0];
        assert!(Metrics::r_squared(&y, &[3.0, 2.0, 1.0]) < 0.0);
    }

    #[test]
    fn test_precision_constant_target_is_zero() {
        let p = Metrics::precision(&[100.0, 100.0, 100.0], &[99.0, 100.0, 101.0]);
        assert_eq!(p, 0.0);
        assert!(!p.is_nan());
    }

    #[test]
    fn test_precision_empty() {
        assert_eq!(Metrics::precision(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "Arrays must have the same length")]
    fn test_length_mismatch_panics() {
        Metrics::r_squared(&[1.0], &[1.0, 2.0]);
    }
}
