//! History resolution: provider, cache and demo fallback.

use std::sync::RwLock;

use crate::cache::{CacheConfig, HistoryCache};
use crate::demo::demo_history;
use crate::domain::Symbol;
use crate::envelope::HistoryEnvelope;
use crate::provider::HistoryProvider;
use crate::quote::Quote;

/// Resolves history requests against a provider with cache and demo fallback.
///
/// Resolution order: fresh cache entry, then a live provider fetch (stored on
/// success), then a stale cache entry, then the built-in demo data. The
/// returned envelope is tagged with the source that actually served it and
/// always carries metrics when the series allows them. `now` is unix seconds,
/// passed in by the caller.
pub struct HistoryService<P> {
    provider: P,
    cache: RwLock<HistoryCache>,
}

impl<P: HistoryProvider> HistoryService<P> {
    pub fn new(provider: P, config: CacheConfig) -> Self {
        Self {
            provider,
            cache: RwLock::new(HistoryCache::new(config)),
        }
    }

    /// Resolve the full history for `symbol`.
    pub fn get_history(&self, symbol: &Symbol, now: i64) -> HistoryEnvelope {
        self.resolve(symbol, now).with_metrics()
    }

    /// Resolve history limited to the `days` most recent observations.
    pub fn get_history_days(&self, symbol: &Symbol, days: usize, now: i64) -> HistoryEnvelope {
        self.resolve(symbol, now).most_recent(days).with_metrics()
    }

    /// Quote for `symbol`, derived from the resolved history.
    ///
    /// `None` when even the fallback series has fewer than 2 points.
    pub fn get_quote(&self, symbol: &Symbol, now: i64) -> Option<Quote> {
        self.resolve(symbol, now).quote()
    }

    fn resolve(&self, symbol: &Symbol, now: i64) -> HistoryEnvelope {
        {
            let cache = self.cache.read().expect("history cache lock poisoned");
            if let Some(hit) = cache.get(symbol, now) {
                return HistoryEnvelope::cached(symbol.clone(), hit.series, hit.fetched_at);
            }
        }

        match self.provider.daily_history(symbol) {
            Ok(series) => {
                let mut cache = self.cache.write().expect("history cache lock poisoned");
                cache.put(symbol.clone(), series.clone(), now);
                HistoryEnvelope::live(symbol.clone(), series)
            }
            Err(_) => {
                let cache = self.cache.read().expect("history cache lock poisoned");
                match cache.get_stale(symbol) {
                    Some(stale) => {
                        HistoryEnvelope::cached(symbol.clone(), stale.series, stale.fetched_at)
                    }
                    None => demo_history(symbol.clone()),
                }
            }
        }
    }
}
