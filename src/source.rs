//! Boundary to the storage layer that aggregates raw records into months.

use crate::cache::TtlCache;
use crate::core::MonthlyCount;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::trace;

/// Which of the two event series to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// New inventory items created per month.
    Items,
    /// Maintenance tasks logged per month.
    Maintenance,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Items => f.write_str("items"),
            SeriesKind::Maintenance => f.write_str("maintenance"),
        }
    }
}

/// Supplier of chronologically ordered monthly counts.
///
/// `scope` identifies whose records to aggregate, such as an account or site.
/// Implementations report storage failures as `ForecastError::Source`.
pub trait MonthlySource {
    fn monthly_counts(&self, scope: &str, kind: SeriesKind) -> Result<Vec<MonthlyCount>>;
}

impl<S: MonthlySource + ?Sized> MonthlySource for &S {
    fn monthly_counts(&self, scope: &str, kind: SeriesKind) -> Result<Vec<MonthlyCount>> {
        (**self).monthly_counts(scope, kind)
    }
}

type CacheKey = (String, SeriesKind);

/// Memoizes another source per `(scope, kind)`.
///
/// Errors are not cached.
pub struct CachedSource<S> {
    inner: S,
    cache: TtlCache<CacheKey, Vec<MonthlyCount>>,
}

impl<S: MonthlySource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self::with_cache(inner, TtlCache::new(ttl))
    }

    pub fn with_cache(inner: S, cache: TtlCache<CacheKey, Vec<MonthlyCount>>) -> Self {
        Self { inner, cache }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn cache(&self) -> &TtlCache<CacheKey, Vec<MonthlyCount>> {
        &self.cache
    }

    /// Forget cached counts so the next request refetches them.
    pub fn invalidate(&self, scope: &str, kind: SeriesKind) -> bool {
        self.cache.invalidate(&(scope.to_string(), kind))
    }
}

impl<S: MonthlySource> MonthlySource for CachedSource<S> {
    fn monthly_counts(&self, scope: &str, kind: SeriesKind) -> Result<Vec<MonthlyCount>> {
        let key = (scope.to_string(), kind);
        if let Some(counts) = self.cache.get(&key) {
            trace!(scope, %kind, "series cache hit");
            return Ok(counts);
        }

        trace!(scope, %kind, "series cache miss");
        let counts = self.inner.monthly_counts(scope, kind)?;
        self.cache.insert(key, counts.clone());
        Ok(counts)
    }
}
