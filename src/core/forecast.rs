//! Forecast result structure for holding predictions.

use crate::error::{ForecastError, Result};

/// Point predictions with optional prediction intervals, one entry per step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    point: Vec<f64>,
    lower: Option<Vec<f64>>,
    upper: Option<Vec<f64>>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from point predictions.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            point: values,
            lower: None,
            upper: None,
        }
    }

    /// Create a forecast with prediction intervals.
    pub fn from_values_with_intervals(
        values: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
    ) -> Self {
        Self {
            point: values,
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Build a forecast with a constant interval half-width around each point.
    pub fn with_symmetric_interval(values: Vec<f64>, half_width: f64) -> Self {
        let half_width = finite_half_width(half_width);
        let lower = values.iter().map(|v| v - half_width).collect();
        let upper = values.iter().map(|v| v + half_width).collect();
        Self::from_values_with_intervals(values, lower, upper)
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Get the point predictions.
    pub fn primary(&self) -> &[f64] {
        &self.point
    }

    pub fn has_lower(&self) -> bool {
        self.lower.is_some()
    }

    pub fn has_upper(&self) -> bool {
        self.upper.is_some()
    }

    pub fn lower(&self) -> Option<&[f64]> {
        self.lower.as_deref()
    }

    pub fn upper(&self) -> Option<&[f64]> {
        self.upper.as_deref()
    }

    /// Point, lower and upper values `step` periods ahead (1-based).
    ///
    /// Missing intervals collapse onto the point prediction.
    pub fn at_step(&self, step: usize) -> Result<(f64, f64, f64)> {
        let idx = step_offset(step)?;
        let point = *self.point.get(idx).ok_or(ForecastError::DimensionMismatch {
            expected: step,
            got: self.point.len(),
        })?;
        let lower = self
            .lower
            .as_ref()
            .and_then(|l| l.get(idx).copied())
            .unwrap_or(point);
        let upper = self
            .upper
            .as_ref()
            .and_then(|u| u.get(idx).copied())
            .unwrap_or(point);
        Ok((point, lower, upper))
    }

    /// Point, lower and upper values for a single step with a constant
    /// interval half-width, matching [`Forecast::with_symmetric_interval`].
    pub fn symmetric_step(point: f64, half_width: f64) -> (f64, f64, f64) {
        let half_width = finite_half_width(half_width);
        (point, point - half_width, point + half_width)
    }
}

/// Zero-based offset of a 1-based forecast step.
pub(crate) fn step_offset(step: usize) -> Result<usize> {
    step.checked_sub(1)
        .ok_or_else(|| ForecastError::InvalidParameter("forecast steps are 1-based".to_string()))
}

fn finite_half_width(half_width: f64) -> f64 {
    if half_width.is_finite() {
        half_width.abs()
    } else {
        0.0
    }
}
