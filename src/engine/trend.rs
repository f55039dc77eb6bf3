//! Average month-over-month trend of a series.

use crate::core::MonthlySeries;
use crate::utils::stats::round_to;
use serde::Serialize;
use std::fmt;

/// Sign of a trend slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Direction of an unrounded slope. Non-finite slopes are stable.
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            TrendDirection::Increasing
        } else if slope < 0.0 {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// `(last - first) / len`, or 0 for an empty series.
///
/// This divides by the number of observations, not the number of steps
/// between them, so a series rising by one per month reports slightly less
/// than one.
pub fn slope_per_month(series: &MonthlySeries) -> f64 {
    match (series.first_value(), series.last_value()) {
        (Some(first), Some(last)) => (last as f64 - first as f64) / series.len() as f64,
        _ => 0.0,
    }
}

/// Trend report for both series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    /// Rounded to two decimals.
    pub items_slope_per_month: f64,
    /// Rounded to two decimals.
    pub maintenance_slope_per_month: f64,
    pub items_direction: TrendDirection,
    pub maintenance_direction: TrendDirection,
}

impl TrendSummary {
    pub fn from_series(items: &MonthlySeries, maintenance: &MonthlySeries) -> Self {
        let items_slope = slope_per_month(items);
        let maintenance_slope = slope_per_month(maintenance);

        Self {
            items_slope_per_month: round_to(items_slope, 2),
            maintenance_slope_per_month: round_to(maintenance_slope, 2),
            items_direction: TrendDirection::from_slope(items_slope),
            maintenance_direction: TrendDirection::from_slope(maintenance_slope),
        }
    }
}
