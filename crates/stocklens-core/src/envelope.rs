use serde::{Deserialize, Serialize};

use crate::domain::{PriceSeries, Symbol};
use crate::freshness::freshness_text;
use crate::metrics::MetricsBundle;
use crate::quote::Quote;
use crate::source::DataSource;
use crate::ValidationError;

/// History payload as exposed to consumers.
///
/// This is the external JSON contract:
/// `{symbol, series, source, fetchedAt, metrics}`, camelCase, with
/// `fetchedAt` present exactly when `source` is `"cache"` and `metrics`
/// absent when the series is too short to compute them. Payloads without a
/// `source` field (raw provider output) deserialize as live data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawHistoryEnvelope")]
pub struct HistoryEnvelope {
    pub symbol: Symbol,
    pub series: PriceSeries,
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsBundle>,
}

impl HistoryEnvelope {
    pub fn new(
        symbol: Symbol,
        series: PriceSeries,
        source: DataSource,
        fetched_at: Option<i64>,
    ) -> Result<Self, ValidationError> {
        match (source, fetched_at) {
            (DataSource::Cache, None) => Err(ValidationError::MissingFetchedAt),
            (DataSource::Live | DataSource::Demo, Some(_)) => {
                Err(ValidationError::UnexpectedFetchedAt)
            }
            _ => Ok(Self {
                symbol,
                series,
                source,
                fetched_at,
                metrics: None,
            }),
        }
    }

    /// Payload fetched from the provider during this request.
    pub fn live(symbol: Symbol, series: PriceSeries) -> Self {
        Self {
            symbol,
            series,
            source: DataSource::Live,
            fetched_at: None,
            metrics: None,
        }
    }

    /// Payload served from the cache, stamped with its original fetch time.
    pub fn cached(symbol: Symbol, series: PriceSeries, fetched_at: i64) -> Self {
        Self {
            symbol,
            series,
            source: DataSource::Cache,
            fetched_at: Some(fetched_at),
            metrics: None,
        }
    }

    /// Built-in fallback payload.
    pub fn demo(symbol: Symbol, series: PriceSeries) -> Self {
        Self {
            symbol,
            series,
            source: DataSource::Demo,
            fetched_at: None,
            metrics: None,
        }
    }

    /// Compute and attach the metrics bundle for the current series.
    ///
    /// Leaves `metrics` absent when the series has fewer than 2 points.
    pub fn with_metrics(mut self) -> Self {
        self.metrics = MetricsBundle::from_series(&self.series);
        self
    }

    /// Keep only the `count` most recent observations, dropping any
    /// previously attached metrics so they cannot go stale.
    pub fn most_recent(mut self, count: usize) -> Self {
        self.series = self.series.most_recent(count);
        self.metrics = None;
        self
    }

    /// Quote derived from the two most recent observations.
    pub fn quote(&self) -> Option<Quote> {
        Quote::from_series(self.symbol.clone(), &self.series)
    }

    /// Relative-age label, present for cached payloads only.
    pub fn freshness(&self, now: i64) -> Option<String> {
        freshness_text(self.source, self.fetched_at, now)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHistoryEnvelope {
    symbol: Symbol,
    series: PriceSeries,
    source: Option<DataSource>,
    fetched_at: Option<i64>,
    metrics: Option<MetricsBundle>,
}

impl TryFrom<RawHistoryEnvelope> for HistoryEnvelope {
    type Error = ValidationError;

    fn try_from(raw: RawHistoryEnvelope) -> Result<Self, Self::Error> {
        let source = raw.source.unwrap_or(DataSource::Live);
        let mut envelope = Self::new(raw.symbol, raw.series, source, raw.fetched_at)?;
        envelope.metrics = raw.metrics;
        Ok(envelope)
    }
}
