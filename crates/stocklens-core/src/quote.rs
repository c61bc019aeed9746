use serde::{Deserialize, Serialize};

use crate::domain::{PriceSeries, Symbol};

/// Latest-price quote with delta against the previous observation.
///
/// Derived from a series on demand, never persisted. `change_percent` is
/// absent when the previous price is zero; the delta is still reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: Symbol,
    pub price: f64,
    pub change: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

impl Quote {
    /// Derive a quote from the two most recent observations.
    ///
    /// `None` when the series has fewer than 2 points.
    pub fn from_series(symbol: Symbol, series: &PriceSeries) -> Option<Self> {
        let latest = series.latest()?;
        let previous = series.previous()?;

        let change = latest.price - previous.price;
        let change_percent = if previous.price == 0.0 {
            None
        } else {
            Some(change / previous.price * 100.0)
        };

        Some(Self {
            symbol,
            price: latest.price,
            change,
            change_percent,
        })
    }
}
