//! Two-series, multi-horizon forecasting.

use crate::config::ForecastConfig;
use crate::core::{ModelFit, ModelKind, MonthlySeries};
use crate::engine::trend::TrendSummary;
use crate::error::{ForecastError, Result};
use crate::selection::SeasonalGate;
use crate::source::{MonthlySource, SeriesKind};
use serde::Serialize;
use tracing::info;

/// The chosen model's forecast for one horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonForecast {
    pub horizon_months: usize,
    pub forecast: u64,
    pub lower: u64,
    pub upper: u64,
    pub model: ModelKind,
    /// Target month, present when the input series carried period labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_label: Option<String>,
}

impl HorizonForecast {
    fn from_fit(fit: &ModelFit, period_label: Option<String>) -> Self {
        Self {
            horizon_months: fit.horizon,
            forecast: fit.next_value,
            lower: fit.lower_bound,
            upper: fit.upper_bound,
            model: fit.name,
            period_label,
        }
    }
}

/// Headline fit per series, taken at the longest requested horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesFits {
    pub items: ModelFit,
    pub maintenance: ModelFit,
}

/// Per-horizon forecasts per series, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonSet {
    pub items: Vec<HorizonForecast>,
    pub maintenance: Vec<HorizonForecast>,
}

/// Complete forecast for the items and maintenance series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub per_series: SeriesFits,
    pub multi_horizon: HorizonSet,
    pub trend: TrendSummary,
}

/// Runs model selection for both series over every requested horizon.
///
/// The engine holds only configuration and is safe to share across threads.
///
/// # Example
/// ```
/// use inventory_forecast::core::MonthlySeries;
/// use inventory_forecast::engine::{ForecastEngine, TrendDirection};
///
/// let engine = ForecastEngine::default();
/// let items = MonthlySeries::from_counts(vec![5, 7, 6, 9, 11, 10]);
/// let maintenance = MonthlySeries::from_counts(vec![2, 2, 3, 2]);
///
/// let result = engine.forecast(&items, &maintenance, &[1, 3]).unwrap();
/// assert_eq!(result.multi_horizon.items.len(), 2);
/// assert_eq!(result.per_series.items.horizon, 3);
/// assert_eq!(result.trend.items_direction, TrendDirection::Increasing);
/// ```
pub struct ForecastEngine {
    config: ForecastConfig,
    gate: SeasonalGate,
}

impl ForecastEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let gate = SeasonalGate::new(&config);
        Ok(Self { config, gate })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast both series at each horizon.
    ///
    /// An empty `horizons` slice uses the configured defaults. A zero horizon
    /// is rejected.
    pub fn forecast(
        &self,
        items: &MonthlySeries,
        maintenance: &MonthlySeries,
        horizons: &[usize],
    ) -> Result<ForecastResult> {
        let horizons = self.resolve_horizons(horizons)?;

        let (items_fit, items_horizons) = self.forecast_series(SeriesKind::Items, items, horizons)?;
        let (maintenance_fit, maintenance_horizons) =
            self.forecast_series(SeriesKind::Maintenance, maintenance, horizons)?;

        Ok(ForecastResult {
            per_series: SeriesFits {
                items: items_fit,
                maintenance: maintenance_fit,
            },
            multi_horizon: HorizonSet {
                items: items_horizons,
                maintenance: maintenance_horizons,
            },
            trend: TrendSummary::from_series(items, maintenance),
        })
    }

    /// Fetch both series for `scope` and forecast them.
    pub fn forecast_from_source<S>(
        &self,
        source: &S,
        scope: &str,
        horizons: &[usize],
    ) -> Result<ForecastResult>
    where
        S: MonthlySource + ?Sized,
    {
        let items = MonthlySeries::from_monthly(&source.monthly_counts(scope, SeriesKind::Items)?)?;
        let maintenance =
            MonthlySeries::from_monthly(&source.monthly_counts(scope, SeriesKind::Maintenance)?)?;
        self.forecast(&items, &maintenance, horizons)
    }

    fn resolve_horizons<'a>(&'a self, horizons: &'a [usize]) -> Result<&'a [usize]> {
        let horizons = if horizons.is_empty() {
            self.config.default_horizons.as_slice()
        } else {
            horizons
        };
        if let Some(index) = horizons.iter().position(|&h| h == 0) {
            return Err(ForecastError::InvalidParameter(format!(
                "horizon at position {index} must be at least one month"
            )));
        }
        Ok(horizons)
    }

    fn forecast_series(
        &self,
        kind: SeriesKind,
        series: &MonthlySeries,
        horizons: &[usize],
    ) -> Result<(ModelFit, Vec<HorizonForecast>)> {
        let longest = horizons.iter().copied().max().ok_or_else(|| {
            ForecastError::InvalidParameter("at least one horizon is required".to_string())
        })?;

        let fits: Vec<ModelFit> = horizons
            .iter()
            .map(|&h| self.gate.choose(series, h))
            .collect();
        let multi_horizon = fits
            .iter()
            .map(|fit| HorizonForecast::from_fit(fit, series.period_label_after(fit.horizon)))
            .collect();

        // Selection is deterministic, so the fit already computed at the
        // longest horizon is the headline.
        let headline = match fits.iter().find(|fit| fit.horizon == longest) {
            Some(fit) => fit.clone(),
            None => self.gate.choose(series, longest),
        };

        info!(
            series = %kind,
            points = series.len(),
            model = %headline.name,
            horizon = longest,
            next_value = headline.next_value,
            "series forecast"
        );

        Ok((headline, multi_horizon))
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        let config = ForecastConfig::default();
        let gate = SeasonalGate::new(&config);
        Self { config, gate }
    }
}
