//! Monthly count series and the aggregator input records they are built from.

use crate::error::{ForecastError, Result};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// One aggregated month as delivered by the series aggregator.
///
/// `count` is deserialized leniently: missing, null, negative or non-numeric
/// values become 0, fractional values are truncated and numeric strings are
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// Calendar month as `YYYY-MM`.
    pub period_label: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

impl MonthlyCount {
    pub fn new(period_label: impl Into<String>, count: u64) -> Self {
        Self {
            period_label: period_label.into(),
            count,
        }
    }
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_count).unwrap_or(0))
}

fn coerce_count(value: &serde_json::Value) -> u64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(float_count))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().map(float_count).unwrap_or(0),
        _ => 0,
    }
}

fn float_count(f: f64) -> u64 {
    if f.is_finite() && f > 0.0 {
        f.trunc() as u64
    } else {
        0
    }
}

/// A single observation at an ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// 0-based sequence position.
    pub index: usize,
    /// Observed count.
    pub value: u64,
}

/// A chronologically ordered series with one count per month.
///
/// Indices are assigned densely at construction, so `points()[i].index == i`.
/// Calendar gaps in the source data are not filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    points: Vec<TimeSeriesPoint>,
    values: Vec<f64>,
    periods: Option<Vec<NaiveDate>>,
}

impl MonthlySeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from counts that are already in chronological order.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let points: Vec<TimeSeriesPoint> = counts
            .into_iter()
            .enumerate()
            .map(|(index, value)| TimeSeriesPoint { index, value })
            .collect();
        let values = points.iter().map(|p| p.value as f64).collect();
        Self {
            points,
            values,
            periods: None,
        }
    }

    /// Build a series from aggregator records.
    ///
    /// Labels must be `YYYY-MM` and strictly ascending.
    pub fn from_monthly(records: &[MonthlyCount]) -> Result<Self> {
        let mut periods = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let period = parse_period_label(&record.period_label)?;
            if let Some(&previous) = periods.last() {
                if period <= previous {
                    return Err(ForecastError::UnorderedPeriods {
                        index,
                        previous: format_period(previous),
                        current: record.period_label.clone(),
                    });
                }
            }
            periods.push(period);
        }

        let mut series = Self::from_counts(records.iter().map(|r| r.count));
        series.periods = Some(periods);
        Ok(series)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the indexed points.
    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    /// Get the counts as floating point values for model fitting.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn first_value(&self) -> Option<u64> {
        self.points.first().map(|p| p.value)
    }

    pub fn last_value(&self) -> Option<u64> {
        self.points.last().map(|p| p.value)
    }

    /// Index of the most recent observation.
    pub fn last_index(&self) -> Option<usize> {
        self.points.last().map(|p| p.index)
    }

    /// Calendar months of each observation, when built from labelled records.
    pub fn periods(&self) -> Option<&[NaiveDate]> {
        self.periods.as_deref()
    }

    /// The `YYYY-MM` label `horizon` months after the last observation.
    ///
    /// Returns `None` for unlabelled or empty series.
    pub fn period_label_after(&self, horizon: usize) -> Option<String> {
        let last = *self.periods.as_ref()?.last()?;
        let months = u32::try_from(horizon).ok()?;
        last.checked_add_months(Months::new(months))
            .map(format_period)
    }
}

/// Parse a `YYYY-MM` label into the first day of that month.
pub fn parse_period_label(label: &str) -> Result<NaiveDate> {
    let bytes = label.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return Err(ForecastError::InvalidPeriodLabel(label.to_string()));
    }
    NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidPeriodLabel(label.to_string()))
}

fn format_period(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
