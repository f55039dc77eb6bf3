//! Forecast orchestration for the items and maintenance series.

mod orchestrator;
mod trend;

pub use orchestrator::{ForecastEngine, ForecastResult, HorizonForecast, HorizonSet, SeriesFits};
pub use trend::{slope_per_month, TrendDirection, TrendSummary};
