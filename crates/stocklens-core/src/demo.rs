//! Development fallback history, served when neither the provider nor the
//! cache can satisfy a request.

use crate::domain::{MarketDate, PricePoint, PriceSeries, Symbol};
use crate::envelope::HistoryEnvelope;

const DEMO_POINTS: [(&str, f64); 5] = [
    ("2026-02-02", 259.40),
    ("2026-01-30", 260.05),
    ("2026-01-29", 256.44),
    ("2026-01-28", 258.27),
    ("2026-01-27", 252.10),
];

/// Built-in five-day demo series, newest first.
pub fn demo_series() -> PriceSeries {
    let points = DEMO_POINTS
        .iter()
        .map(|(date, price)| {
            let date = MarketDate::parse(date).expect("demo date is valid");
            PricePoint::new(date, *price).expect("demo price is valid")
        })
        .collect();

    PriceSeries::reverse_chronological(points).expect("demo series is ordered")
}

/// Demo envelope for the requested symbol.
pub fn demo_history(symbol: Symbol) -> HistoryEnvelope {
    HistoryEnvelope::demo(symbol, demo_series())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DataSource;

    #[test]
    fn demo_series_builds_and_is_ordered() {
        let series = demo_series();
        assert_eq!(series.len(), 5);
        assert_eq!(series.latest().expect("latest").price, 259.40);
        assert_eq!(series.oldest().expect("oldest").price, 252.10);
    }

    #[test]
    fn demo_history_is_tagged_demo() {
        let envelope = demo_history(Symbol::parse("AAPL").expect("symbol"));
        assert_eq!(envelope.source, DataSource::Demo);
        assert!(envelope.fetched_at.is_none());
    }
}
