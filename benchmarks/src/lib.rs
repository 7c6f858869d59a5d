//! Shared fixtures for the carprice-rs benchmarks.

use carprice_rs::{dataset::SampleSet, Result};

/// Deterministic synthetic listings: price falls linearly with mileage,
/// with a bounded periodic wobble standing in for noise.
pub fn synthetic_samples(n: usize) -> Result<SampleSet> {
    let pairs = (0..n).map(|i| {
        let km = 250_000.0 * i as f64 / n.max(1) as f64;
        let wobble = 400.0 * (i as f64 * 0.7).sin();
        (km, 8_500.0 - 0.02 * km + wobble)
    });
    SampleSet::from_pairs(pairs)
}

/// Evenly spaced mileages for prediction benchmarks.
pub fn mileage_grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1_000.0 * i as f64).collect()
}
