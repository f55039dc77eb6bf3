//! Ordinary Least Squares (OLS) for a single regressor.
//!
//! Fits `y = intercept + slope * x` in closed form and keeps the sufficient
//! statistics needed for prediction intervals.

use crate::error::{ForecastError, Result};

/// Simple linear regression fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OLSResult {
    /// Regression slope.
    pub slope: f64,
    /// Intercept term.
    pub intercept: f64,
    /// Number of observations.
    pub n: usize,
    /// Mean of the regressor.
    pub x_mean: f64,
    /// Sum of squared deviations of the regressor, Σ(xᵢ − x̄)².
    pub sxx: f64,
    /// Root-mean-square residual.
    pub rmse: f64,
}

impl OLSResult {
    /// Predict the response at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Leverage-inflated standard error for a new observation at `x0`.
    ///
    /// `rmse * sqrt(1 + 1/n + (x0 - x̄)² / Sxx)`
    pub fn prediction_std_error(&self, x0: f64) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let leverage = if self.sxx > 0.0 {
            (x0 - self.x_mean).powi(2) / self.sxx
        } else {
            0.0
        };
        self.rmse * (1.0 + 1.0 / self.n as f64 + leverage).sqrt()
    }
}

/// Fit OLS regression of `y` on `x`.
///
/// # Arguments
/// * `x` - Regressor values (length n)
/// * `y` - Target values (length n)
///
/// A regressor with no spread yields a zero slope and the mean as intercept.
pub fn ols_fit(x: &[f64], y: &[f64]) -> Result<OLSResult> {
    let n = y.len();

    if n == 0 {
        return Err(ForecastError::EmptyData);
    }
    if x.len() != n {
        return Err(ForecastError::DimensionMismatch {
            expected: n,
            got: x.len(),
        });
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        sxx += dx * dx;
        sxy += dx * (yi - y_mean);
    }

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = y_mean - slope * x_mean;

    let sse: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (yi - (intercept + slope * xi)).powi(2))
        .sum();

    Ok(OLSResult {
        slope,
        intercept,
        n,
        x_mean,
        sxx,
        rmse: (sse / nf).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ols_recovers_exact_line() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|xi| 2.0 * xi + 5.0).collect();

        let fit = ols_fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 5.0, epsilon = 1e-10);
        assert_relative_eq!(fit.rmse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(fit.predict(10.0), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn ols_known_noisy_fit() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 2.0, 4.0];
        // x̄ = 1.5, ȳ = 2.5, Sxx = 5, Sxy = 4
        let fit = ols_fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 0.8, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 1.3, epsilon = 1e-10);
        assert_relative_eq!(fit.sxx, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn prediction_error_grows_away_from_center() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 2.0, 4.0];
        let fit = ols_fit(&x, &y).unwrap();

        let near = fit.prediction_std_error(1.5);
        let far = fit.prediction_std_error(10.0);
        assert!(far > near);
        assert_relative_eq!(near, fit.rmse * (1.25_f64).sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn ols_constant_regressor() {
        let fit = ols_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(fit.slope, 0.0);
        assert_relative_eq!(fit.intercept, 2.0);
    }

    #[test]
    fn ols_rejects_bad_input() {
        assert!(matches!(ols_fit(&[], &[]), Err(ForecastError::EmptyData)));
        assert!(matches!(ols_fit(&[1.0], &[]), Err(ForecastError::EmptyData)));
        assert!(matches!(
            ols_fit(&[1.0], &[1.0, 2.0]),
            Err(ForecastError::DimensionMismatch { .. })
        ));
    }
}
