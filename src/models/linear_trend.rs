//! Linear regression on the time index.
//!
//! Fits `y = intercept + slope * t` by ordinary least squares and extrapolates
//! the line. Prediction intervals widen with distance from the center of the
//! observed indices.

use crate::core::{step_offset, Forecast, ModelKind, ModelParams, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::ols::{ols_fit, OLSResult};
use crate::utils::stats::z_score;

/// Linear trend forecaster.
///
/// # Example
/// ```
/// use inventory_forecast::core::MonthlySeries;
/// use inventory_forecast::models::{Forecaster, LinearRegression};
///
/// let series = MonthlySeries::from_counts((0..10).map(|i| 2 * i + 5));
/// let mut model = LinearRegression::new();
/// model.fit(&series).unwrap();
///
/// let forecast = model.predict(1).unwrap();
/// assert!((forecast.primary()[0] - 25.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    ols: Option<OLSResult>,
    last_index: usize,
    fitted: Option<Vec<f64>>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slope(&self) -> Option<f64> {
        self.ols.map(|o| o.slope)
    }

    pub fn intercept(&self) -> Option<f64> {
        self.ols.map(|o| o.intercept)
    }

    /// Time index `step` periods past the last observation.
    fn step_index(&self, step: usize) -> Result<f64> {
        step_offset(step)?;
        Ok(match self.last_index.checked_add(step) {
            Some(index) => index as f64,
            None => self.last_index as f64 + step as f64,
        })
    }

    fn estimate(ols: &OLSResult, x0: f64, z: f64) -> (f64, f64, f64) {
        let pred = ols.predict(x0);
        let se = ols.prediction_std_error(x0);
        let half = if se.is_finite() { z * se } else { 0.0 };
        (pred, pred - half, pred + half)
    }
}

impl Forecaster for LinearRegression {
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let values = series.values();
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }

        let x: Vec<f64> = series.points().iter().map(|p| p.index as f64).collect();
        let ols = ols_fit(&x, values)?;

        self.last_index = series.last_index().unwrap_or(0);
        self.fitted = Some(x.iter().map(|&xi| ols.predict(xi)).collect());
        self.ols = Some(ols);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let ols = self.ols.ok_or(ForecastError::FitRequired)?;
        let predictions = (1..=horizon)
            .map(|h| Ok(ols.predict(self.step_index(h)?)))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Forecast::from_values(predictions))
    }

    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast> {
        let ols = self.ols.ok_or(ForecastError::FitRequired)?;
        let z = z_score(level);

        let mut predictions = Vec::with_capacity(horizon);
        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);

        for h in 1..=horizon {
            let (pred, lo, hi) = Self::estimate(&ols, self.step_index(h)?, z);
            predictions.push(pred);
            lower.push(lo);
            upper.push(hi);
        }

        Ok(Forecast::from_values_with_intervals(
            predictions,
            lower,
            upper,
        ))
    }

    fn predict_step(&self, step: usize, level: f64) -> Result<(f64, f64, f64)> {
        let ols = self.ols.ok_or(ForecastError::FitRequired)?;
        Ok(Self::estimate(&ols, self.step_index(step)?, z_score(level)))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn params(&self) -> Option<ModelParams> {
        let ols = self.ols?;
        Some(ModelParams::LinearRegression {
            slope: ols.slope,
            intercept: ols.intercept,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::LinearRegression
    }
}
