//! Seasonal-first model choice.

use crate::config::ForecastConfig;
use crate::core::{ModelFit, ModelKind, MonthlySeries};
use crate::models::exponential::HoltWinters;
use crate::models::ModelSpec;
use crate::selection::ModelSelector;
use tracing::debug;

/// Prefers additive Holt-Winters once two full seasons are available, and
/// defers to a [`ModelSelector`] otherwise.
///
/// The seasonal fit is accepted as soon as it can be produced. It is not
/// compared against the non-seasonal candidates.
pub struct SeasonalGate {
    season_length: usize,
    interval_level: f64,
    seasonal: ModelSpec,
    fallback: ModelSelector,
}

impl SeasonalGate {
    pub fn new(config: &ForecastConfig) -> Self {
        let (alpha, beta, gamma) = (
            config.holt_winters_alpha,
            config.holt_winters_beta,
            config.holt_winters_gamma,
        );
        let season_length = config.season_length;
        let seasonal = ModelSpec::new(ModelKind::HoltWintersAdditive, move |_| {
            Box::new(HoltWinters::additive(alpha, beta, gamma, season_length))
        });

        Self {
            season_length,
            interval_level: config.interval_level,
            seasonal,
            fallback: ModelSelector::from_config(config),
        }
    }

    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// Additive Holt-Winters fit, or `None` when the series holds fewer than
    /// two full seasons.
    pub fn holt_winters(&self, series: &MonthlySeries, horizon: usize) -> Option<ModelFit> {
        if self.season_length == 0 || series.len() < 2 * self.season_length {
            return None;
        }
        self.seasonal.evaluate(series, horizon, self.interval_level)
    }

    /// Fit to report for `series` at `horizon`.
    pub fn choose(&self, series: &MonthlySeries, horizon: usize) -> ModelFit {
        match self.holt_winters(series, horizon) {
            Some(fit) => {
                debug!(points = series.len(), horizon, "seasonal model accepted");
                fit
            }
            None => self.fallback.select(series, horizon),
        }
    }
}

impl Default for SeasonalGate {
    fn default() -> Self {
        Self::new(&ForecastConfig::default())
    }
}
