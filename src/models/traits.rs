//! Forecaster trait and the candidate strategy registry.

use crate::core::{Forecast, ModelFit, ModelKind, ModelParams, MonthlySeries};
use crate::error::Result;
use crate::utils::in_sample_accuracy;
use tracing::trace;

/// Common interface for all forecasting models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to the series.
    ///
    /// Returns `ForecastError::InsufficientData` when the series is too short.
    fn fit(&mut self, series: &MonthlySeries) -> Result<()>;

    /// Generate point predictions for steps `1..=horizon`.
    fn predict(&self, horizon: usize) -> Result<Forecast>;

    /// Generate predictions with two-sided normal prediction intervals.
    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast>;

    /// Point, lower and upper values `step` periods ahead (1-based).
    ///
    /// Agrees with `predict_with_intervals(step, level).at_step(step)` but
    /// runs in constant time and memory regardless of `step`.
    fn predict_step(&self, step: usize, level: f64) -> Result<(f64, f64, f64)>;

    /// One-step-ahead in-sample predictions, aligned with the series.
    ///
    /// Periods the model cannot predict are NaN.
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Fitted state to report alongside the forecast.
    fn params(&self) -> Option<ModelParams>;

    fn kind(&self) -> ModelKind;

    /// Get the model name.
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.fitted_values().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use inventory_forecast::models::{BoxedForecaster, Forecaster};
/// use inventory_forecast::models::exponential::SimpleExponentialSmoothing;
///
/// let model: BoxedForecaster = Box::new(SimpleExponentialSmoothing::new(0.3));
/// assert_eq!(model.name(), "exponential-smoothing");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;

type Factory = Box<dyn Fn(&MonthlySeries) -> BoxedForecaster + Send + Sync>;

/// A candidate strategy: a named model factory with a uniform
/// `(series, horizon) -> Option<ModelFit>` evaluation.
///
/// The factory sees the series so models can size themselves to it, such as
/// a moving average window.
///
/// # Example
///
/// ```
/// use inventory_forecast::core::{ModelKind, MonthlySeries};
/// use inventory_forecast::models::ModelSpec;
/// use inventory_forecast::models::exponential::SimpleExponentialSmoothing;
///
/// let spec = ModelSpec::new(ModelKind::ExponentialSmoothing, |_| {
///     Box::new(SimpleExponentialSmoothing::new(0.3))
/// });
///
/// let series = MonthlySeries::from_counts(vec![4, 6, 5, 7]);
/// let fit = spec.evaluate(&series, 1, 0.95).unwrap();
/// assert!(fit.lower_bound <= fit.next_value && fit.next_value <= fit.upper_bound);
///
/// // Too short for any smoothing
/// assert!(spec.evaluate(&MonthlySeries::from_counts(vec![4]), 1, 0.95).is_none());
/// ```
pub struct ModelSpec {
    /// The strategy this spec produces.
    pub kind: ModelKind,
    factory: Factory,
}

impl ModelSpec {
    pub fn new<F>(kind: ModelKind, factory: F) -> Self
    where
        F: Fn(&MonthlySeries) -> BoxedForecaster + Send + Sync + 'static,
    {
        Self {
            kind,
            factory: Box::new(factory),
        }
    }

    /// Create a new, unfitted model instance for `series`.
    pub fn create(&self, series: &MonthlySeries) -> BoxedForecaster {
        (self.factory)(series)
    }

    /// Fit a fresh model and summarize its forecast `horizon` months ahead.
    ///
    /// Returns `None` when the model cannot be fitted to this series.
    pub fn evaluate(&self, series: &MonthlySeries, horizon: usize, level: f64) -> Option<ModelFit> {
        let mut model = self.create(series);
        if let Err(err) = model.fit(series) {
            trace!(model = %self.kind, points = series.len(), %err, "candidate skipped");
            return None;
        }

        let estimate = model.predict_step(horizon, level).ok()?;
        let accuracy = model
            .fitted_values()
            .and_then(|fitted| in_sample_accuracy(series.values(), fitted));
        let params = model.params().unwrap_or(ModelParams::Naive);

        Some(ModelFit::from_estimate(
            self.kind, horizon, estimate, accuracy, params,
        ))
    }
}

/// Ordered collection of candidate strategies.
///
/// Order is significant: selection breaks ties in favor of earlier entries.
pub struct ModelRegistry {
    models: Vec<ModelSpec>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Register a model specification at the end of the list.
    pub fn register(&mut self, spec: ModelSpec) {
        self.models.push(spec);
    }

    /// Get the number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate over model specifications in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelSpec> {
        self.models.iter()
    }

    /// Evaluate every strategy, keeping the ones that could be fitted.
    pub fn evaluate_all(&self, series: &MonthlySeries, horizon: usize, level: f64) -> Vec<ModelFit> {
        self.models
            .iter()
            .filter_map(|spec| spec.evaluate(series, horizon, level))
            .collect()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::baseline::SimpleMovingAverage;
    use crate::models::exponential::{HoltLinearTrend, SimpleExponentialSmoothing};

    fn registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register(ModelSpec::new(ModelKind::HoltsMethod, |_| {
            Box::new(HoltLinearTrend::new(0.3, 0.1))
        }));
        registry.register(ModelSpec::new(ModelKind::ExponentialSmoothing, |_| {
            Box::new(SimpleExponentialSmoothing::new(0.3))
        }));
        registry.register(ModelSpec::new(ModelKind::MovingAverage, |s| {
            Box::new(SimpleMovingAverage::for_length(s.len(), 3))
        }));
        registry
    }

    #[test]
    fn test_boxed_forecaster() {
        let model: BoxedForecaster = Box::new(SimpleExponentialSmoothing::new(0.3));
        assert_eq!(model.name(), "exponential-smoothing");
        assert_eq!(model.kind(), ModelKind::ExponentialSmoothing);
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_model_spec_creates_independent_instances() {
        let spec = ModelSpec::new(ModelKind::ExponentialSmoothing, |_| {
            Box::new(SimpleExponentialSmoothing::new(0.3))
        });
        let series = MonthlySeries::from_counts(vec![1, 2, 3]);

        let mut model1 = spec.create(&series);
        let model2 = spec.create(&series);
        model1.fit(&series).unwrap();

        assert!(model1.is_fitted());
        assert!(!model2.is_fitted());
    }

    #[test]
    fn test_model_spec_evaluate_scores_fit() {
        let spec = ModelSpec::new(ModelKind::HoltsMethod, |_| {
            Box::new(HoltLinearTrend::new(0.3, 0.1))
        });
        let series = MonthlySeries::from_counts(vec![10, 12, 14, 16, 18]);

        let fit = spec.evaluate(&series, 2, 0.95).unwrap();
        assert_eq!(fit.name, ModelKind::HoltsMethod);
        assert_eq!(fit.horizon, 2);
        assert!(fit.accuracy.is_some());
        assert!(matches!(fit.params, ModelParams::HoltsMethod { .. }));
    }

    #[test]
    fn test_model_spec_evaluate_zero_horizon_is_none() {
        let spec = ModelSpec::new(ModelKind::ExponentialSmoothing, |_| {
            Box::new(SimpleExponentialSmoothing::new(0.3))
        });
        let series = MonthlySeries::from_counts(vec![1, 2, 3]);
        assert!(spec.evaluate(&series, 0, 0.95).is_none());
    }

    #[test]
    fn test_model_spec_evaluate_far_horizon() {
        let series = MonthlySeries::from_counts(vec![5, 7, 6, 9, 11, 10]);
        for spec in registry().iter() {
            let fit = spec.evaluate(&series, usize::MAX, 0.95).unwrap();
            assert_eq!(fit.horizon, usize::MAX);
            assert!(fit.lower_bound <= fit.next_value && fit.next_value <= fit.upper_bound);
        }
    }

    #[test]
    fn test_model_registry() {
        let registry = registry();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());

        let kinds: Vec<_> = registry.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ModelKind::HoltsMethod,
                ModelKind::ExponentialSmoothing,
                ModelKind::MovingAverage
            ]
        );
    }

    #[test]
    fn test_registry_skips_unfittable_models() {
        let registry = registry();

        // Two points: Holt needs three, the others qualify
        let fits = registry.evaluate_all(&MonthlySeries::from_counts(vec![3, 5]), 1, 0.95);
        let kinds: Vec<_> = fits.iter().map(|f| f.name).collect();
        assert_eq!(
            kinds,
            vec![ModelKind::ExponentialSmoothing, ModelKind::MovingAverage]
        );

        let fits = registry.evaluate_all(&MonthlySeries::new(), 1, 0.95);
        assert!(fits.is_empty());
    }

    #[test]
    fn test_model_registry_default() {
        let registry = ModelRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
