//! Exponential smoothing models.
//!
//! This module provides exponential smoothing forecasting methods:
//! - Simple Exponential Smoothing (SES)
//! - Holt's Linear Trend
//! - Holt-Winters with additive seasonality

mod holt;
mod holt_winters;
mod ses;

pub use holt::HoltLinearTrend;
pub use holt_winters::HoltWinters;
pub use ses::SimpleExponentialSmoothing;
