//! Risk/return metrics over a daily price series.
//!
//! All metrics are computed from chronological (oldest-first) prices in a
//! single pass each, with per-metric degeneracy: a metric that is undefined
//! for the given series is `None` and never blocks the others. Conventions:
//! population standard deviation for both Sharpe and Sortino denominators,
//! risk-free rate fixed at 0, drawdown stored as a negative fraction, and
//! CAGR years derived from the first/last calendar dates at 365.25 days/year.

use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;

/// Day-count convention for CAGR.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Risk/return metrics derived from one price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortino: Option<f64>,
    pub max_drawdown: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cagr: Option<f64>,
}

impl MetricsBundle {
    /// Compute the full bundle. `None` when the series has fewer than 2 points.
    pub fn from_series(series: &PriceSeries) -> Option<Self> {
        if series.len() < 2 {
            return None;
        }

        let prices = series.chronological_prices();
        let returns = per_period_returns(&prices);

        let sharpe = returns.as_deref().and_then(sharpe_ratio);
        let sortino = returns.as_deref().and_then(sortino_ratio);
        let max_drawdown = max_drawdown(&prices);
        let cagr = cagr(series);

        Some(Self {
            sharpe,
            sortino,
            max_drawdown,
            cagr,
        })
    }
}

/// Per-period simple returns `(p_i - p_{i-1}) / p_{i-1}`.
///
/// `None` when any divisor price is zero; return-based metrics are then
/// undefined rather than infinite.
fn per_period_returns(prices: &[f64]) -> Option<Vec<f64>> {
    prices
        .windows(2)
        .map(|pair| {
            if pair[0] == 0.0 {
                None
            } else {
                Some((pair[1] - pair[0]) / pair[0])
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_stdev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

/// Mean return over return volatility, risk-free rate 0.
fn sharpe_ratio(returns: &[f64]) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }

    let mean = mean(returns);
    let stdev = population_stdev(returns, mean);
    if stdev == 0.0 {
        return None;
    }

    Some(mean / stdev)
}

/// Mean return over downside deviation (negative returns only).
fn sortino_ratio(returns: &[f64]) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }

    let downside: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
    if downside.is_empty() {
        return None;
    }

    let downside_dev =
        (downside.iter().map(|r| r * r).sum::<f64>() / downside.len() as f64).sqrt();
    if downside_dev == 0.0 {
        return None;
    }

    Some(mean(returns) / downside_dev)
}

/// Largest peak-to-trough decline as a negative fraction; 0 when prices never
/// fall below a prior peak.
fn max_drawdown(prices: &[f64]) -> f64 {
    let mut peak = prices[0];
    let mut worst = 0.0f64;

    for &price in &prices[1..] {
        if price > peak {
            peak = price;
        }
        if peak > 0.0 {
            let drawdown = (price - peak) / peak;
            if drawdown < worst {
                worst = drawdown;
            }
        }
    }

    worst
}

/// Compound annual growth rate from the chronological endpoints of the series.
fn cagr(series: &PriceSeries) -> Option<f64> {
    let first = series.oldest()?;
    let last = series.latest()?;

    if first.price <= 0.0 || last.price <= 0.0 {
        return None;
    }

    let days = last.date.days_since(first.date);
    if days <= 0 {
        return None;
    }

    let years = days as f64 / DAYS_PER_YEAR;
    Some((last.price / first.price).powf(1.0 / years) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MarketDate, PricePoint};

    fn chrono_series(start_day: u8, prices: &[f64]) -> PriceSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(offset, price)| {
                let date = format!("2026-01-{:02}", start_day + offset as u8);
                PricePoint::new(MarketDate::parse(&date).expect("date"), *price).expect("point")
            })
            .collect();
        PriceSeries::chronological(points).expect("series")
    }

    #[test]
    fn single_point_yields_no_bundle() {
        let series = chrono_series(5, &[100.0]);
        assert!(MetricsBundle::from_series(&series).is_none());
    }

    #[test]
    fn flat_series_has_degenerate_ratios() {
        let series = chrono_series(5, &[100.0, 100.0, 100.0, 100.0]);
        let bundle = MetricsBundle::from_series(&series).expect("bundle");

        assert!(bundle.sharpe.is_none());
        assert!(bundle.sortino.is_none());
        assert_eq!(bundle.max_drawdown, 0.0);
        assert_eq!(bundle.cagr, Some(0.0));
    }

    #[test]
    fn monotonic_series_has_zero_drawdown() {
        let series = chrono_series(5, &[100.0, 101.0, 105.0, 110.0]);
        let bundle = MetricsBundle::from_series(&series).expect("bundle");

        assert_eq!(bundle.max_drawdown, 0.0);
        // All returns positive: no downside deviation to divide by.
        assert!(bundle.sortino.is_none());
    }

    #[test]
    fn drawdown_matches_known_peak_trough() {
        let series = chrono_series(5, &[100.0, 120.0, 80.0, 90.0]);
        let bundle = MetricsBundle::from_series(&series).expect("bundle");

        let expected = (80.0 - 120.0) / 120.0;
        assert!((bundle.max_drawdown - expected).abs() < 1e-12);
    }

    #[test]
    fn sharpe_and_sortino_match_hand_computation() {
        // Returns: +10%, -5%.
        let series = chrono_series(5, &[100.0, 110.0, 104.5]);
        let bundle = MetricsBundle::from_series(&series).expect("bundle");

        // mean 0.025, population stdev 0.075.
        let sharpe = bundle.sharpe.expect("sharpe");
        assert!((sharpe - 0.025 / 0.075).abs() < 1e-9);

        // downside deviation sqrt(0.05^2 / 1) = 0.05.
        let sortino = bundle.sortino.expect("sortino");
        assert!((sortino - 0.5).abs() < 1e-9);
    }

    #[test]
    fn doubling_over_a_year_is_roughly_full_cagr() {
        let points = vec![
            PricePoint::new(MarketDate::parse("2025-02-02").expect("date"), 100.0)
                .expect("point"),
            PricePoint::new(MarketDate::parse("2026-02-02").expect("date"), 200.0)
                .expect("point"),
        ];
        let series = PriceSeries::chronological(points).expect("series");
        let bundle = MetricsBundle::from_series(&series).expect("bundle");

        let cagr = bundle.cagr.expect("cagr");
        assert!((cagr - 1.0).abs() < 0.01, "cagr was {cagr}");
    }

    #[test]
    fn zero_price_disables_return_metrics_without_panic() {
        let series = chrono_series(5, &[0.0, 10.0, 5.0]);
        let bundle = MetricsBundle::from_series(&series).expect("bundle");

        assert!(bundle.sharpe.is_none());
        assert!(bundle.sortino.is_none());
        assert!(bundle.cagr.is_none());
        assert!(bundle.max_drawdown.is_finite());
    }

    #[test]
    fn bundle_is_deterministic() {
        let series = chrono_series(5, &[100.0, 120.0, 80.0, 90.0, 95.5]);
        let first = MetricsBundle::from_series(&series).expect("bundle");
        let second = MetricsBundle::from_series(&series).expect("bundle");
        assert_eq!(first, second);
    }
}
