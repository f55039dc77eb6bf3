//! Statistical utility functions.

use statrs::distribution::{ContinuousCDF, Normal};
use statrs::statistics::Statistics;

/// Two-sided 95% normal quantile, used when the quantile cannot be computed.
pub const Z_95: f64 = 1.959_963_984_540_054;

/// Two-sided z-score for a confidence level.
///
/// # Example
/// ```
/// use inventory_forecast::utils::z_score;
///
/// // 95% confidence level -> z ≈ 1.96
/// let z = z_score(0.95);
/// assert!((z - 1.96).abs() < 0.001);
/// ```
pub fn z_score(level: f64) -> f64 {
    if !(level > 0.0 && level < 1.0) {
        return Z_95;
    }
    match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.inverse_cdf((1.0 + level) / 2.0),
        Err(_) => Z_95,
    }
}

/// Mean of a slice. Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.mean()
}

/// Population standard deviation (n denominator).
///
/// Empty input has no spread, so this returns 0.0 rather than NaN.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sd = values.population_std_dev();
    if sd.is_finite() {
        sd
    } else {
        0.0
    }
}

/// Round to a fixed number of decimal places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
