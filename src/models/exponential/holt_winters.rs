//! Holt-Winters forecasting model.
//!
//! Also known as triple exponential smoothing, this model handles
//! data with both trend and seasonality.

use crate::core::{step_offset, Forecast, ModelKind, ModelParams, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::stats::{mean, population_std_dev, z_score};

/// Additive Holt-Winters forecaster.
///
/// The model equations:
/// - Level: `l_t = α(y_t - s_{t-m}) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_t = γ(y_t - l_t) + (1-γ)s_{t-m}`
/// - Forecast: `ŷ_{n+h} = l_n + h*b_n + s_{(n+h-1) mod m}`
///
/// Fitting requires at least two full seasons: the first initializes the
/// level and seasonal indices, the first two together the trend.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    /// Level smoothing parameter (0 < alpha < 1).
    alpha: f64,
    /// Trend smoothing parameter (0 < beta < 1).
    beta: f64,
    /// Seasonal smoothing parameter (0 < gamma < 1).
    gamma: f64,
    /// Seasonal period.
    seasonal_period: usize,
    /// Current level state.
    level: Option<f64>,
    /// Current trend state.
    trend: Option<f64>,
    /// Seasonal indices, by position mod period.
    seasonals: Option<Vec<f64>>,
    /// Fitted values.
    fitted: Option<Vec<f64>>,
    /// Standard deviation of residuals after the first season.
    residual_std: Option<f64>,
    /// Original series length.
    n: usize,
}

impl HoltWinters {
    /// Create a new additive Holt-Winters model with fixed parameters.
    pub fn additive(alpha: f64, beta: f64, gamma: f64, seasonal_period: usize) -> Self {
        Self {
            alpha: alpha.clamp(0.0001, 0.9999),
            beta: beta.clamp(0.0001, 0.9999),
            gamma: gamma.clamp(0.0001, 0.9999),
            seasonal_period,
            level: None,
            trend: None,
            seasonals: None,
            fitted: None,
            residual_std: None,
            n: 0,
        }
    }

    /// Get the smoothing parameters.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Get the seasonal period.
    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }

    /// Get the current level.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Get the current trend.
    pub fn trend(&self) -> Option<f64> {
        self.trend
    }

    /// Get the seasonal indices.
    pub fn seasonals(&self) -> Option<&[f64]> {
        self.seasonals.as_deref()
    }

    /// Initialize state from the first two seasons.
    fn initialize_state(values: &[f64], period: usize) -> (f64, f64, Vec<f64>) {
        let first_season = &values[..period];
        let second_season = &values[period..2 * period];

        let level = mean(first_season);
        let trend = (mean(second_season) - level) / period as f64;
        let seasonals = first_season.iter().map(|y| y - level).collect();

        (level, trend, seasonals)
    }

    /// Point forecast `step` periods past the end of the fitted series.
    fn point(&self, step: usize) -> Result<f64> {
        let level = self.level.ok_or(ForecastError::FitRequired)?;
        let trend = self.trend.ok_or(ForecastError::FitRequired)?;
        let seasonals = self.seasonals.as_ref().ok_or(ForecastError::FitRequired)?;
        let period = self.seasonal_period;

        // (n + step - 1) mod m without overflowing for large steps
        let season_idx = (self.n % period + step_offset(step)? % period) % period;
        Ok(level + step as f64 * trend + seasonals[season_idx])
    }
}

impl Default for HoltWinters {
    fn default() -> Self {
        Self::additive(0.4, 0.3, 0.3, 12)
    }
}

impl Forecaster for HoltWinters {
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let period = self.seasonal_period;
        if period == 0 {
            return Err(ForecastError::InvalidParameter(
                "seasonal period must be positive".to_string(),
            ));
        }

        let values = series.values();
        if values.len() < 2 * period {
            return Err(ForecastError::InsufficientData {
                needed: 2 * period,
                got: values.len(),
            });
        }

        let (alpha, beta, gamma) = (self.alpha, self.beta, self.gamma);
        let (mut level, mut trend, mut seasonals) = Self::initialize_state(values, period);

        let n = values.len();
        let mut fitted = Vec::with_capacity(n);
        let mut residuals = Vec::with_capacity(n - period);

        // First season is consumed by initialization
        fitted.resize(period, f64::NAN);

        for (t, &y) in values.iter().enumerate().skip(period) {
            let season_idx = t % period;
            let s = seasonals[season_idx];

            let forecast = level + trend + s;
            fitted.push(forecast);
            residuals.push(y - forecast);

            let level_prev = level;
            level = alpha * (y - s) + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
            seasonals[season_idx] = gamma * (y - level) + (1.0 - gamma) * s;
        }

        self.n = n;
        self.level = Some(level);
        self.trend = Some(trend);
        self.seasonals = Some(seasonals);
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
        let sigma = self.residual_std.ok_or(ForecastError::FitRequired)?;
        Ok(Forecast::symmetric_step(self.point(step)?, z_score(level) * sigma))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn params(&self) -> Option<ModelParams> {
        Some(ModelParams::HoltWintersAdditive {
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            season_length: self.seasonal_period,
            level: self.level?,
            trend: self.trend?,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::HoltWintersAdditive
    }
}
