//! Error types for the inventory-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// A period label is not a `YYYY-MM` month.
    #[error("invalid period label: {0:?} (expected YYYY-MM)")]
    InvalidPeriodLabel(String),

    /// Period labels are not strictly ascending.
    #[error("periods out of order at index {index}: {current} does not follow {previous}")]
    UnorderedPeriods {
        index: usize,
        previous: String,
        current: String,
    },

    /// The upstream series source failed.
    #[error("series source error: {0}")]
    Source(String),
}
