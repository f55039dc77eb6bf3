//! Utility functions for forecasting models.

pub mod metrics;
pub mod ols;
pub mod stats;

pub use metrics::{accuracy, in_sample_accuracy, Accuracy};
pub use ols::{ols_fit, OLSResult};
pub use stats::{population_std_dev, z_score};
