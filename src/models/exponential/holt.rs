//! Holt's Linear Trend forecasting model.
//!
//! Also known as double exponential smoothing, this model is suitable for
//! data with a linear trend but no seasonality.

use crate::core::{step_offset, Forecast, ModelKind, ModelParams, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::stats::{population_std_dev, z_score};

/// Holt's Linear Trend forecaster.
///
/// The model equations are:
/// - Level: `l_t = α × y_t + (1-α) × (l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β × (l_t - l_{t-1}) + (1-β) × b_{t-1}`
/// - Forecast: `ŷ_{t+h} = l_t + h × b_t`
///
/// The state starts from `l_0 = y_0` and `b_0 = y_1 - y_0`.
#[derive(Debug, Clone)]
pub struct HoltLinearTrend {
    /// Level smoothing parameter (0 < alpha < 1).
    alpha: f64,
    /// Trend smoothing parameter (0 < beta < 1).
    beta: f64,
    /// Current level state.
    level: Option<f64>,
    /// Current trend state.
    trend: Option<f64>,
    /// Fitted values.
    fitted: Option<Vec<f64>>,
    /// Standard deviation of one-step residuals.
    residual_std: Option<f64>,
}

impl HoltLinearTrend {
    /// Create a new Holt model with fixed parameters.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing parameter (0 < alpha < 1)
    /// * `beta` - Trend smoothing parameter (0 < beta < 1)
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0001, 0.9999),
            beta: beta.clamp(0.0001, 0.9999),
            level: None,
            trend: None,
            fitted: None,
            residual_std: None,
        }
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Get the current level.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Get the current trend.
    pub fn trend(&self) -> Option<f64> {
        self.trend
    }

    fn point(&self, h: usize) -> Result<f64> {
        let level = self.level.ok_or(ForecastError::FitRequired)?;
        let trend = self.trend.ok_or(ForecastError::FitRequired)?;
        Ok(level + h as f64 * trend)
    }
}

impl Default for HoltLinearTrend {
    fn default() -> Self {
        Self::new(0.3, 0.1)
    }
}

impl Forecaster for HoltLinearTrend {
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let values = series.values();
        if values.len() < 3 {
            return Err(ForecastError::InsufficientData {
                needed: 3,
                got: values.len(),
            });
        }

        let (alpha, beta) = (self.alpha, self.beta);
        let mut level = values[0];
        let mut trend = values[1] - values[0];

        let mut fitted = Vec::with_capacity(values.len());
        let mut residuals = Vec::with_capacity(values.len() - 1);
        fitted.push(f64::NAN);

        for &y in &values[1..] {
            let forecast = level + trend;
            fitted.push(forecast);
            residuals.push(y - forecast);

            let level_prev = level;
            level = alpha * y + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
        }

        self.level = Some(level);
        self.trend = Some(trend);
        self.residual_std = Some(population_std_dev(&residuals));
        self.fitted = Some(fitted);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let predictions = (1..=horizon)
            .map(|h| self.point(h))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Forecast::from_values(predictions))
    }

    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast> {
        let sigma = self.residual_std.ok_or(ForecastError::FitRequired)?;
        let predictions = self.predict(horizon)?.primary().to_vec();
        Ok(Forecast::with_symmetric_interval(
            predictions,
            z_score(level) * sigma,
        ))
    }

    fn predict_step(&self, step: usize, level: f64) -> Result<(f64, f64, f64)> {
        step_offset(step)?;
        let sigma = self.residual_std.ok_or(ForecastError::FitRequired)?;
        Ok(Forecast::symmetric_step(self.point(step)?, z_score(level) * sigma))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn params(&self) -> Option<ModelParams> {
        Some(ModelParams::HoltsMethod {
            alpha: self.alpha,
            beta: self.beta,
            level: self.level?,
            trend: self.trend?,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::HoltsMethod
    }
}
