//! Simple Moving Average forecasting model.
//!
//! Forecasts the mean of the last `window` observations for every future
//! period. The prediction interval uses the spread of that same window.

use crate::core::{step_offset, Forecast, ModelKind, ModelParams, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::stats::{mean, population_std_dev, z_score};

/// Simple Moving Average forecaster.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    window: usize,
    last_mean: Option<f64>,
    /// Population standard deviation of the final window.
    window_std: Option<f64>,
    fitted: Option<Vec<f64>>,
}

impl SimpleMovingAverage {
    /// Create a new SMA with the given window size.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            last_mean: None,
            window_std: None,
            fitted: None,
        }
    }

    /// Size the window for a series of `len` points: `min(max_window, len / 2)`.
    ///
    /// Series shorter than two points get a zero window and will not fit.
    pub fn for_length(len: usize, max_window: usize) -> Self {
        Self::new(max_window.min(len / 2))
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Forecaster for SimpleMovingAverage {
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let values = series.values();
        let n = values.len();

        if self.window == 0 {
            return Err(ForecastError::InsufficientData { needed: 2, got: n });
        }
        if n < self.window {
            return Err(ForecastError::InsufficientData {
                needed: self.window,
                got: n,
            });
        }

        let w = self.window;
        let tail = &values[n - w..];
        self.last_mean = Some(mean(tail));
        self.window_std = Some(population_std_dev(tail));

        // One-step fits: mean of the `w` observations before t
        let fitted = (0..n)
            .map(|t| if t < w { f64::NAN } else { mean(&values[t - w..t]) })
            .collect();
        self.fitted = Some(fitted);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let last = self.last_mean.ok_or(ForecastError::FitRequired)?;
        Ok(Forecast::from_values(vec![last; horizon]))
    }

    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast> {
        let last = self.last_mean.ok_or(ForecastError::FitRequired)?;
        let sigma = self.window_std.unwrap_or(0.0);
        Ok(Forecast::with_symmetric_interval(
            vec![last; horizon],
            z_score(level) * sigma,
        ))
    }

    fn predict_step(&self, step: usize, level: f64) -> Result<(f64, f64, f64)> {
        step_offset(step)?;
        let last = self.last_mean.ok_or(ForecastError::FitRequired)?;
        let sigma = self.window_std.unwrap_or(0.0);
        Ok(Forecast::symmetric_step(last, z_score(level) * sigma))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn params(&self) -> Option<ModelParams> {
        self.last_mean?;
        Some(ModelParams::MovingAverage {
            window: self.window,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::MovingAverage
    }
}
