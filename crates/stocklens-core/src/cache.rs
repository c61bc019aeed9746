//! In-memory caching for fetched history series.

use serde::{Deserialize, Serialize};

use crate::domain::{PriceSeries, Symbol};

/// Cache sizing and expiry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Absolute TTL per entry, in seconds.
    pub ttl_seconds: i64,
    /// Maximum number of symbols held at once.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        // Daily data: one refresh per day is enough.
        Self {
            ttl_seconds: 60 * 60 * 24,
            max_entries: 16,
        }
    }
}

/// Series plus the time it was originally fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedHistory {
    pub series: PriceSeries,
    pub fetched_at: i64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    symbol: Symbol,
    series: PriceSeries,
    fetched_at: i64,
}

/// Fixed-capacity, absolute-TTL cache of history series keyed by symbol.
///
/// Policy: exact symbol match; an entry is fresh while `now - fetched_at`
/// is under the TTL; inserts replace the same symbol, then fill free
/// capacity, then reuse an expired slot, then evict the oldest entry.
/// Callers pass `now` (unix seconds) explicitly, so expiry is fully
/// deterministic under test.
#[derive(Debug)]
pub struct HistoryCache {
    entries: Vec<CacheEntry>,
    config: CacheConfig,
}

impl HistoryCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Fresh entry for `symbol`, if any.
    pub fn get(&self, symbol: &Symbol, now: i64) -> Option<CachedHistory> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == *symbol && self.is_fresh(entry, now))
            .map(Self::to_cached)
    }

    /// Entry for `symbol` regardless of age. Used as a fallback when the
    /// provider is unavailable.
    pub fn get_stale(&self, symbol: &Symbol) -> Option<CachedHistory> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == *symbol)
            .map(Self::to_cached)
    }

    pub fn put(&mut self, symbol: Symbol, series: PriceSeries, now: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.symbol == symbol) {
            entry.series = series;
            entry.fetched_at = now;
            return;
        }

        let entry = CacheEntry {
            symbol,
            series,
            fetched_at: now,
        };

        if self.entries.len() < self.config.max_entries {
            self.entries.push(entry);
            return;
        }

        let slot = self
            .entries
            .iter()
            .position(|existing| !self.is_fresh(existing, now))
            .or_else(|| {
                self.entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, existing)| existing.fetched_at)
                    .map(|(index, _)| index)
            });

        if let Some(index) = slot {
            self.entries[index] = entry;
        }
    }

    /// Drop every expired entry.
    pub fn clear_expired(&mut self, now: i64) {
        let ttl = self.config.ttl_seconds;
        self.entries
            .retain(|entry| now - entry.fetched_at < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &CacheEntry, now: i64) -> bool {
        now - entry.fetched_at < self.config.ttl_seconds
    }

    fn to_cached(entry: &CacheEntry) -> CachedHistory {
        CachedHistory {
            series: entry.series.clone(),
            fetched_at: entry.fetched_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MarketDate, PricePoint};

    const NOW: i64 = 1_770_000_000;

    fn symbol(name: &str) -> Symbol {
        Symbol::parse(name).expect("symbol")
    }

    fn series(price: f64) -> PriceSeries {
        let point = PricePoint::new(MarketDate::parse("2026-02-02").expect("date"), price)
            .expect("point");
        PriceSeries::reverse_chronological(vec![point]).expect("series")
    }

    fn config(ttl_seconds: i64, max_entries: usize) -> CacheConfig {
        CacheConfig {
            ttl_seconds,
            max_entries,
        }
    }

    #[test]
    fn serves_fresh_entries_only() {
        let mut cache = HistoryCache::new(config(100, 4));
        cache.put(symbol("AAPL"), series(1.0), NOW);

        assert!(cache.get(&symbol("AAPL"), NOW + 99).is_some());
        assert!(cache.get(&symbol("AAPL"), NOW + 100).is_none());
        assert!(cache.get(&symbol("MSFT"), NOW).is_none());
    }

    #[test]
    fn stale_entries_remain_reachable_as_fallback() {
        let mut cache = HistoryCache::new(config(100, 4));
        cache.put(symbol("AAPL"), series(1.0), NOW);

        let stale = cache.get_stale(&symbol("AAPL")).expect("stale entry");
        assert_eq!(stale.fetched_at, NOW);
    }

    #[test]
    fn put_refreshes_existing_symbol() {
        let mut cache = HistoryCache::new(config(100, 4));
        cache.put(symbol("AAPL"), series(1.0), NOW);
        cache.put(symbol("AAPL"), series(2.0), NOW + 50);

        assert_eq!(cache.len(), 1);
        let entry = cache.get(&symbol("AAPL"), NOW + 50).expect("entry");
        assert_eq!(entry.fetched_at, NOW + 50);
        assert_eq!(entry.series.latest().expect("latest").price, 2.0);
    }

    #[test]
    fn full_cache_reuses_expired_slot_first() {
        let mut cache = HistoryCache::new(config(100, 2));
        cache.put(symbol("AAPL"), series(1.0), NOW - 500);
        cache.put(symbol("MSFT"), series(2.0), NOW);

        cache.put(symbol("TSLA"), series(3.0), NOW);

        assert_eq!(cache.len(), 2);
        assert!(cache.get_stale(&symbol("AAPL")).is_none());
        assert!(cache.get(&symbol("MSFT"), NOW).is_some());
        assert!(cache.get(&symbol("TSLA"), NOW).is_some());
    }

    #[test]
    fn full_cache_evicts_oldest_when_nothing_expired() {
        let mut cache = HistoryCache::new(config(1_000, 2));
        cache.put(symbol("AAPL"), series(1.0), NOW - 10);
        cache.put(symbol("MSFT"), series(2.0), NOW - 5);

        cache.put(symbol("TSLA"), series(3.0), NOW);

        assert!(cache.get_stale(&symbol("AAPL")).is_none());
        assert!(cache.get_stale(&symbol("MSFT")).is_some());
        assert!(cache.get_stale(&symbol("TSLA")).is_some());
    }

    #[test]
    fn clear_expired_drops_old_entries() {
        let mut cache = HistoryCache::new(config(100, 4));
        cache.put(symbol("AAPL"), series(1.0), NOW - 500);
        cache.put(symbol("MSFT"), series(2.0), NOW);

        cache.clear_expired(NOW);
        assert_eq!(cache.len(), 1);
        assert!(cache.get_stale(&symbol("AAPL")).is_none());
    }
}
