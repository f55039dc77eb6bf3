//! Forecasting models.

mod traits;

pub mod baseline;
pub mod exponential;
mod linear_trend;

pub use linear_trend::LinearRegression;
pub use traits::{BoxedForecaster, Forecaster, ModelRegistry, ModelSpec};
