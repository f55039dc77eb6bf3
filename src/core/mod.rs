//! Core data structures for monthly count forecasting.

mod fit;
mod forecast;
mod time_series;

pub use fit::{ConfidenceLevel, ModelFit, ModelKind, ModelParams};
pub use forecast::Forecast;
pub(crate) use forecast::step_offset;
pub use time_series::{parse_period_label, MonthlyCount, MonthlySeries, TimeSeriesPoint};
