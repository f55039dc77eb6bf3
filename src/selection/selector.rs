//! Accuracy-based selection among the non-seasonal candidates.

use crate::config::ForecastConfig;
use crate::core::{ModelFit, ModelKind, MonthlySeries};
use crate::models::baseline::SimpleMovingAverage;
use crate::models::exponential::{HoltLinearTrend, SimpleExponentialSmoothing};
use crate::models::{LinearRegression, ModelRegistry, ModelSpec};
use tracing::debug;

/// The chosen fit together with every candidate that could be fitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub best: ModelFit,
    /// Fitted candidates in evaluation order. Empty when the naive fallback was used.
    pub candidates: Vec<ModelFit>,
}

/// Registry of the non-seasonal candidates in tie-break order:
/// Holt, linear regression, exponential smoothing, moving average.
pub fn non_seasonal_registry(config: &ForecastConfig) -> ModelRegistry {
    let (holt_alpha, holt_beta) = (config.holt_alpha, config.holt_beta);
    let ses_alpha = config.ses_alpha;
    let max_window = config.moving_average_max_window;

    let mut registry = ModelRegistry::new();
    registry.register(ModelSpec::new(ModelKind::HoltsMethod, move |_| {
        Box::new(HoltLinearTrend::new(holt_alpha, holt_beta))
    }));
    registry.register(ModelSpec::new(ModelKind::LinearRegression, |_| {
        Box::new(LinearRegression::new())
    }));
    registry.register(ModelSpec::new(ModelKind::ExponentialSmoothing, move |_| {
        Box::new(SimpleExponentialSmoothing::new(ses_alpha))
    }));
    registry.register(ModelSpec::new(ModelKind::MovingAverage, move |series| {
        Box::new(SimpleMovingAverage::for_length(series.len(), max_window))
    }));
    registry
}

/// Picks the candidate with the best in-sample score.
///
/// # Example
/// ```
/// use inventory_forecast::core::{ModelKind, MonthlySeries};
/// use inventory_forecast::selection::ModelSelector;
///
/// let selector = ModelSelector::default();
///
/// let fit = selector.select(&MonthlySeries::from_counts(vec![5, 7, 6, 9, 11, 10]), 1);
/// assert_ne!(fit.name, ModelKind::Naive);
///
/// // Too short for any candidate
/// let fit = selector.select(&MonthlySeries::from_counts(vec![4]), 1);
/// assert_eq!(fit.name, ModelKind::Naive);
/// assert_eq!(fit.next_value, 4);
/// ```
pub struct ModelSelector {
    registry: ModelRegistry,
    interval_level: f64,
}

impl ModelSelector {
    pub fn new(registry: ModelRegistry, interval_level: f64) -> Self {
        Self {
            registry,
            interval_level,
        }
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        Self::new(non_seasonal_registry(config), config.interval_level)
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Evaluate every candidate and pick the best.
    ///
    /// Ties keep the earlier registry entry. If no candidate fits, the result
    /// is the naive last-value forecast.
    pub fn evaluate(&self, series: &MonthlySeries, horizon: usize) -> Selection {
        let candidates = self
            .registry
            .evaluate_all(series, horizon, self.interval_level);

        let mut best: Option<&ModelFit> = None;
        for fit in &candidates {
            debug!(model = %fit.name, horizon, score = fit.score, "candidate scored");
            if best.map_or(true, |b| fit.score > b.score) {
                best = Some(fit);
            }
        }

        let best = match best {
            Some(fit) => fit.clone(),
            None => {
                debug!(points = series.len(), "no candidate fits, using naive forecast");
                ModelFit::naive(series.last_value(), horizon)
            }
        };
        debug!(model = %best.name, horizon, score = best.score, "model selected");

        Selection { best, candidates }
    }

    /// Best fit for `series` at `horizon`. Never fails.
    pub fn select(&self, series: &MonthlySeries, horizon: usize) -> ModelFit {
        self.evaluate(series, horizon).best
    }
}

impl Default for ModelSelector {
    fn default() -> Self {
        Self::from_config(&ForecastConfig::default())
    }
}

/// Select the best non-seasonal model using the default configuration.
pub fn select_best_model(series: &MonthlySeries, horizon: usize) -> ModelFit {
    ModelSelector::default().select(series, horizon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfidenceLevel, Forecast, ModelParams};
    use crate::error::Result;
    use crate::models::Forecaster;

    #[test]
    fn selector_evaluates_all_four_candidates() {
        let series = MonthlySeries::from_counts(vec![5, 7, 6, 9, 11, 10]);
        let selection = ModelSelector::default().evaluate(&series, 1);

        let kinds: Vec<_> = selection.candidates.iter().map(|f| f.name).collect();
        assert_eq!(
            kinds,
            vec![
                ModelKind::HoltsMethod,
                ModelKind::LinearRegression,
                ModelKind::ExponentialSmoothing,
                ModelKind::MovingAverage
            ]
        );

        let top = selection
            .candidates
            .iter()
            .map(|f| f.score)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(selection.best.score, top);
    }

    #[test]
    fn exact_line_is_forecast_by_a_trend_model() {
        let series = MonthlySeries::from_counts((0..10).map(|i| 2 * i + 5));
        let selection = ModelSelector::default().evaluate(&series, 1);

        assert!(matches!(
            selection.best.name,
            ModelKind::HoltsMethod | ModelKind::LinearRegression
        ));
        assert_eq!(selection.best.next_value, 25);
        assert!(selection.best.score > 99.99);
        assert_eq!(selection.best.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn selector_with_two_points_skips_holt() {
        let series = MonthlySeries::from_counts(vec![4, 8]);
        let selection = ModelSelector::default().evaluate(&series, 1);
        assert_eq!(selection.candidates.len(), 3);
        assert!(selection
            .candidates
            .iter()
            .all(|f| f.name != ModelKind::HoltsMethod));
    }

    #[test]
    fn short_series_fall_back_to_naive() {
        let fit = select_best_model(&MonthlySeries::from_counts(vec![9]), 3);
        assert_eq!(fit.name, ModelKind::Naive);
        assert_eq!((fit.lower_bound, fit.next_value, fit.upper_bound), (9, 9, 9));

        let fit = select_best_model(&MonthlySeries::new(), 1);
        assert_eq!(fit.name, ModelKind::Naive);
        assert_eq!(fit.next_value, 0);
        assert_eq!(fit.confidence, 0.0);
    }

    #[test]
    fn all_zero_series_is_scored_zero_but_selected() {
        let series = MonthlySeries::from_counts(vec![0; 6]);
        let selection = ModelSelector::default().evaluate(&series, 1);

        assert_eq!(selection.candidates.len(), 4);
        assert!(selection.candidates.iter().all(|f| f.score == 0.0));
        assert_eq!(selection.best.name, ModelKind::HoltsMethod);
        assert_eq!(selection.best.next_value, 0);
    }

    #[derive(Default)]
    struct Fixed {
        value: Option<f64>,
    }

    impl Forecaster for Fixed {
        fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
            self.value = Some(series.values().iter().sum());
            Ok(())
        }

        fn predict(&self, horizon: usize) -> Result<Forecast> {
            Ok(Forecast::from_values(vec![self.value.unwrap_or(0.0); horizon]))
        }

        fn predict_with_intervals(&self, horizon: usize, _level: f64) -> Result<Forecast> {
            self.predict(horizon)
        }

        fn predict_step(&self, _step: usize, _level: f64) -> Result<(f64, f64, f64)> {
            let value = self.value.unwrap_or(0.0);
            Ok((value, value, value))
        }

        fn fitted_values(&self) -> Option<&[f64]> {
            None
        }

        fn params(&self) -> Option<ModelParams> {
            None
        }

        fn kind(&self) -> ModelKind {
            ModelKind::Naive
        }
    }

    #[test]
    fn registering_a_model_adds_a_candidate() {
        let mut registry = non_seasonal_registry(&ForecastConfig::default());
        registry.register(ModelSpec::new(ModelKind::Naive, |_| Box::new(Fixed::default())));
        let selector = ModelSelector::new(registry, 0.95);

        let selection = selector.evaluate(&MonthlySeries::from_counts(vec![1, 2, 3]), 1);
        assert_eq!(selection.candidates.len(), 5);
        let extra = selection.candidates.last().unwrap();
        assert_eq!(extra.next_value, 6);
        assert!(extra.accuracy.is_none());
    }
}
