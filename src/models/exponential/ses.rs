//! Simple Exponential Smoothing (SES) forecasting model.
//!
//! SES is suitable for forecasting data with no clear trend or seasonality.

use crate::core::{step_offset, Forecast, ModelKind, ModelParams, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::stats::{population_std_dev, z_score};

/// Simple Exponential Smoothing forecaster.
///
/// The model equation is:
/// `level_t = α × y_t + (1-α) × level_{t-1}`
///
/// where α (alpha) is the smoothing parameter (0 < α < 1). Forecasts are flat
/// at the final level for every horizon.
///
/// # Example
/// ```
/// use inventory_forecast::core::MonthlySeries;
/// use inventory_forecast::models::exponential::SimpleExponentialSmoothing;
/// use inventory_forecast::models::Forecaster;
///
/// let series = MonthlySeries::from_counts(vec![10, 12, 11, 13, 12, 14]);
///
/// let mut model = SimpleExponentialSmoothing::new(0.3);
/// model.fit(&series).unwrap();
///
/// let forecast = model.predict(3).unwrap();
/// assert_eq!(forecast.horizon(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter (0 < alpha < 1).
    alpha: f64,
    /// Current level state.
    level: Option<f64>,
    /// Fitted values.
    fitted: Option<Vec<f64>>,
    /// Standard deviation of one-step residuals.
    residual_std: Option<f64>,
}

impl SimpleExponentialSmoothing {
    /// Create a new SES model with a fixed smoothing parameter.
    ///
    /// # Arguments
    /// * `alpha` - Smoothing parameter (0 < alpha < 1)
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0001, 0.9999),
            level: None,
            fitted: None,
            residual_std: None,
        }
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the current level.
    pub fn level(&self) -> Option<f64> {
        self.level
    }
}

impl Default for SimpleExponentialSmoothing {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let values = series.values();
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }

        let alpha = self.alpha;
        let mut level = values[0];
        let mut fitted = Vec::with_capacity(values.len());
        let mut residuals = Vec::with_capacity(values.len() - 1);

        // No prior level to predict the first observation
        fitted.push(f64::NAN);

        for &y in &values[1..] {
            fitted.push(level);
            residuals.push(y - level);
            level = alpha * y + (1.0 - alpha) * level;
        }

        self.level = Some(level);
        self.residual_std = Some(population_std_dev(&residuals));
        self.fitted = Some(fitted);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let level = self.level.ok_or(ForecastError::FitRequired)?;
        Ok(Forecast::from_values(vec![level; horizon]))
    }

    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast> {
        let current_level = self.level.ok_or(ForecastError::FitRequired)?;
        let sigma = self.residual_std.unwrap_or(0.0);
        Ok(Forecast::with_symmetric_interval(
            vec![current_level; horizon],
            z_score(level) * sigma,
        ))
    }

    fn predict_step(&self, step: usize, level: f64) -> Result<(f64, f64, f64)> {
        step_offset(step)?;
        let current_level = self.level.ok_or(ForecastError::FitRequired)?;
        let sigma = self.residual_std.unwrap_or(0.0);
        Ok(Forecast::symmetric_step(current_level, z_score(level) * sigma))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn params(&self) -> Option<ModelParams> {
        Some(ModelParams::ExponentialSmoothing {
            alpha: self.alpha,
            level: self.level?,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::ExponentialSmoothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ses_with_fixed_alpha() {
        let series = MonthlySeries::from_counts(vec![10, 12, 11, 13, 12, 14, 13, 15, 14, 16]);

        let mut model = SimpleExponentialSmoothing::new(0.3);
        model.fit(&series).unwrap();

        assert_relative_eq!(model.alpha(), 0.3, epsilon = 1e-10);
        assert!(model.level().is_some());

        let forecast = model.predict(3).unwrap();
        assert_eq!(forecast.horizon(), 3);

        // All forecasts should be equal (flat)
        let preds = forecast.primary();
        assert_relative_eq!(preds[0], preds[1], epsilon = 1e-10);
        assert_relative_eq!(preds[1], preds[2], epsilon = 1e-10);
    }

    #[test]
    fn ses_constant_series() {
        let series = MonthlySeries::from_counts(vec![5; 10]);

        let mut model = SimpleExponentialSmoothing::new(0.5);
        model.fit(&series).unwrap();

        let forecast = model.predict_with_intervals(3, 0.95).unwrap();
        for step in 1..=3 {
            let (point, lower, upper) = forecast.at_step(step).unwrap();
            assert_relative_eq!(point, 5.0, epsilon = 1e-10);
            assert_relative_eq!(lower, 5.0, epsilon = 1e-10);
            assert_relative_eq!(upper, 5.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn ses_known_calculation() {
        let series = MonthlySeries::from_counts(vec![10, 12, 14, 13]);

        let mut model = SimpleExponentialSmoothing::new(0.5);
        model.fit(&series).unwrap();

        // Level calculation:
        // l_0 = 10
        // l_1 = 0.5*12 + 0.5*10 = 11
        // l_2 = 0.5*14 + 0.5*11 = 12.5
        // l_3 = 0.5*13 + 0.5*12.5 = 12.75
        assert_relative_eq!(model.level().unwrap(), 12.75, epsilon = 1e-10);

        // Fitted values are the previous levels
        let fitted = model.fitted_values().unwrap();
        assert!(fitted[0].is_nan());
        assert_relative_eq!(fitted[1], 10.0, epsilon = 1e-10);
        assert_relative_eq!(fitted[2], 11.0, epsilon = 1e-10);
        assert_relative_eq!(fitted[3], 12.5, epsilon = 1e-10);
    }

    #[test]
    fn ses_interval_from_residual_spread() {
        let series = MonthlySeries::from_counts(vec![10, 12, 14, 13]);

        let mut model = SimpleExponentialSmoothing::new(0.5);
        model.fit(&series).unwrap();

        // Residuals: 2, 3, 0.5
        let expected_sd = population_std_dev(&[2.0, 3.0, 0.5]);
        let (point, lower, upper) = model
            .predict_with_intervals(1, 0.95)
            .unwrap()
            .at_step(1)
            .unwrap();
        assert_relative_eq!(point - lower, z_score(0.95) * expected_sd, epsilon = 1e-10);
        assert_relative_eq!(upper - point, z_score(0.95) * expected_sd, epsilon = 1e-10);
    }

    #[test]
    fn ses_single_step_matches_path() {
        let series = MonthlySeries::from_counts(vec![10, 12, 11, 13, 14]);

        let mut model = SimpleExponentialSmoothing::new(0.3);
        model.fit(&series).unwrap();

        let path = model.predict_with_intervals(5, 0.9).unwrap();
        for step in 1..=5 {
            assert_eq!(model.predict_step(step, 0.9).unwrap(), path.at_step(step).unwrap());
        }
        assert_eq!(
            model.predict_step(1_000_000_000, 0.9).unwrap(),
            path.at_step(1).unwrap()
        );
        assert!(matches!(
            SimpleExponentialSmoothing::new(0.3).predict_step(1, 0.9),
            Err(ForecastError::FitRequired)
        ));
    }

    #[test]
    fn ses_requires_two_points() {
        let mut model = SimpleExponentialSmoothing::new(0.3);
        assert!(matches!(
            model.fit(&MonthlySeries::from_counts(vec![3])),
            Err(ForecastError::InsufficientData { needed: 2, got: 1 })
        ));
        assert!(model.fit(&MonthlySeries::new()).is_err());
    }

    #[test]
    fn ses_alpha_is_clamped() {
        assert_relative_eq!(SimpleExponentialSmoothing::new(1.5).alpha(), 0.9999);
        assert_relative_eq!(SimpleExponentialSmoothing::new(-0.1).alpha(), 0.0001);
    }
}
