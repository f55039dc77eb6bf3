//! # inventory-forecast
//!
//! Forecasting engine for monthly inventory and maintenance counts.
//!
//! Given two chronologically ordered monthly series, the engine fits a small
//! set of univariate models (moving average, simple exponential smoothing,
//! Holt's linear trend, linear regression and additive Holt-Winters), picks
//! one by in-sample accuracy, and reports point forecasts with prediction
//! intervals over several horizons together with a trend summary.
//!
//! ```
//! use inventory_forecast::prelude::*;
//!
//! let items = MonthlySeries::from_counts(vec![5, 7, 6, 9, 11, 10]);
//! let maintenance = MonthlySeries::from_counts(vec![1, 0, 2, 1, 1, 3]);
//!
//! let result = ForecastEngine::default()
//!     .forecast(&items, &maintenance, &[1, 3])
//!     .unwrap();
//! let next = &result.multi_horizon.items[0];
//! assert!(next.lower <= next.forecast && next.forecast <= next.upper);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod cache;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod models;
pub mod selection;
pub mod source;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::config::ForecastConfig;
    pub use crate::core::{Forecast, ModelFit, ModelKind, MonthlyCount, MonthlySeries};
    pub use crate::engine::{ForecastEngine, ForecastResult, TrendDirection};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::Forecaster;
    pub use crate::selection::{select_best_model, ModelSelector, SeasonalGate};
    pub use crate::source::{CachedSource, MonthlySource, SeriesKind};
}
