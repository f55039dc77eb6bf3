//! Per-model forecast summaries.

use crate::utils::Accuracy;
use serde::Serialize;
use std::fmt;

/// The forecasting strategy that produced a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    MovingAverage,
    ExponentialSmoothing,
    HoltsMethod,
    LinearRegression,
    HoltWintersAdditive,
    Naive,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::MovingAverage => "moving-average",
            ModelKind::ExponentialSmoothing => "exponential-smoothing",
            ModelKind::HoltsMethod => "holts-method",
            ModelKind::LinearRegression => "linear-regression",
            ModelKind::HoltWintersAdditive => "holt-winters-additive",
            ModelKind::Naive => "naive",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model-specific state reported alongside a fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelParams {
    MovingAverage {
        window: usize,
    },
    ExponentialSmoothing {
        alpha: f64,
        level: f64,
    },
    HoltsMethod {
        alpha: f64,
        beta: f64,
        level: f64,
        trend: f64,
    },
    LinearRegression {
        slope: f64,
        intercept: f64,
    },
    HoltWintersAdditive {
        alpha: f64,
        beta: f64,
        gamma: f64,
        #[serde(rename = "seasonLength")]
        season_length: usize,
        level: f64,
        trend: f64,
    },
    Naive,
}

/// Coarse, human-readable reading of a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Bucket a confidence in [0, 100].
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 75.0 {
            ConfidenceLevel::High
        } else if confidence >= 50.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        };
        f.write_str(s)
    }
}

/// A model's forecast for one horizon, rounded to whole counts.
///
/// Always satisfies `lower_bound <= next_value <= upper_bound`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFit {
    pub name: ModelKind,
    /// Months ahead of the last observation.
    pub horizon: usize,
    pub next_value: u64,
    pub lower_bound: u64,
    pub upper_bound: u64,
    /// In-sample accuracy, absent when no fitted values could be scored.
    pub accuracy: Option<Accuracy>,
    /// Selection score, `100 - MAPE`. Higher is better.
    pub score: f64,
    /// Score clamped to [0, 100].
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    #[serde(rename = "extraParams")]
    pub params: ModelParams,
}

impl ModelFit {
    /// Round a raw forecast and interval into a fit.
    pub fn from_estimate(
        name: ModelKind,
        horizon: usize,
        (point, lower, upper): (f64, f64, f64),
        accuracy: Option<Accuracy>,
        params: ModelParams,
    ) -> Self {
        let next_value = to_count(point);
        let lower_bound = to_count(lower).min(next_value);
        let upper_bound = to_count(upper).max(next_value);

        let score = accuracy.map(|a| a.score()).unwrap_or(0.0);
        let score = if score.is_finite() { score } else { 0.0 };
        let confidence = score.clamp(0.0, 100.0);

        Self {
            name,
            horizon,
            next_value,
            lower_bound,
            upper_bound,
            accuracy,
            score,
            confidence,
            confidence_level: ConfidenceLevel::from_confidence(confidence),
            params,
        }
    }

    /// Last-value fallback used when no model can be fitted.
    pub fn naive(last_value: Option<u64>, horizon: usize) -> Self {
        let value = last_value.unwrap_or(0);
        Self {
            name: ModelKind::Naive,
            horizon,
            next_value: value,
            lower_bound: value,
            upper_bound: value,
            accuracy: None,
            score: 0.0,
            confidence: 0.0,
            confidence_level: ConfidenceLevel::Low,
            params: ModelParams::Naive,
        }
    }

    pub fn is_naive(&self) -> bool {
        self.name == ModelKind::Naive
    }
}

/// Counts cannot be negative; non-finite estimates collapse to zero.
fn to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
