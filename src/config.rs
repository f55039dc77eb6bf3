//! Engine configuration.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Tunables for the candidate models and the orchestrator.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use inventory_forecast::config::ForecastConfig;
///
/// let config = ForecastConfig::from_json_str(r#"{"season_length": 4}"#).unwrap();
/// assert_eq!(config.season_length, 4);
/// assert_eq!(config.default_horizons, vec![1, 3, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default = "default_season_length")]
    pub season_length: usize,
    /// Horizons used when the caller requests none.
    #[serde(default = "default_horizons")]
    pub default_horizons: Vec<usize>,
    /// Two-sided prediction interval coverage.
    #[serde(default = "default_interval_level")]
    pub interval_level: f64,
    /// Upper bound on the moving average window.
    #[serde(default = "default_moving_average_max_window")]
    pub moving_average_max_window: usize,
    #[serde(default = "default_ses_alpha")]
    pub ses_alpha: f64,
    #[serde(default = "default_holt_alpha")]
    pub holt_alpha: f64,
    #[serde(default = "default_holt_beta")]
    pub holt_beta: f64,
    #[serde(default = "default_holt_winters_alpha")]
    pub holt_winters_alpha: f64,
    #[serde(default = "default_holt_winters_beta")]
    pub holt_winters_beta: f64,
    #[serde(default = "default_holt_winters_gamma")]
    pub holt_winters_gamma: f64,
}

fn default_season_length() -> usize {
    12
}

fn default_horizons() -> Vec<usize> {
    vec![1, 3, 6]
}

fn default_interval_level() -> f64 {
    0.95
}

fn default_moving_average_max_window() -> usize {
    3
}

fn default_ses_alpha() -> f64 {
    0.3
}

fn default_holt_alpha() -> f64 {
    0.3
}

fn default_holt_beta() -> f64 {
    0.1
}

fn default_holt_winters_alpha() -> f64 {
    0.4
}

fn default_holt_winters_beta() -> f64 {
    0.3
}

fn default_holt_winters_gamma() -> f64 {
    0.3
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            season_length: default_season_length(),
            default_horizons: default_horizons(),
            interval_level: default_interval_level(),
            moving_average_max_window: default_moving_average_max_window(),
            ses_alpha: default_ses_alpha(),
            holt_alpha: default_holt_alpha(),
            holt_beta: default_holt_beta(),
            holt_winters_alpha: default_holt_winters_alpha(),
            holt_winters_beta: default_holt_winters_beta(),
            holt_winters_gamma: default_holt_winters_gamma(),
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ForecastError::InvalidParameter(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the seasonal period in months.
    pub fn with_season_length(mut self, season_length: usize) -> Self {
        self.season_length = season_length;
        self
    }

    /// Set the fallback horizons.
    pub fn with_default_horizons(mut self, horizons: Vec<usize>) -> Self {
        self.default_horizons = horizons;
        self
    }

    /// Set the prediction interval coverage.
    pub fn with_interval_level(mut self, level: f64) -> Self {
        self.interval_level = level;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.season_length < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "season_length must be at least 2, got {}",
                self.season_length
            )));
        }
        if self.moving_average_max_window == 0 {
            return Err(ForecastError::InvalidParameter(
                "moving_average_max_window must be positive".to_string(),
            ));
        }
        if self.default_horizons.is_empty() || self.default_horizons.contains(&0) {
            return Err(ForecastError::InvalidParameter(
                "default_horizons must be a non-empty list of positive months".to_string(),
            ));
        }

        let unit = [
            ("interval_level", self.interval_level),
            ("ses_alpha", self.ses_alpha),
            ("holt_alpha", self.holt_alpha),
            ("holt_beta", self.holt_beta),
            ("holt_winters_alpha", self.holt_winters_alpha),
            ("holt_winters_beta", self.holt_winters_beta),
            ("holt_winters_gamma", self.holt_winters_gamma),
        ];
        for (name, value) in unit {
            if !(value > 0.0 && value < 1.0) {
                return Err(ForecastError::InvalidParameter(format!(
                    "{name} must be in (0, 1), got {value}"
                )));
            }
        }

        Ok(())
    }
}
