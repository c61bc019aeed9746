use serde::{Deserialize, Serialize};

use crate::domain::MarketDate;
use crate::ValidationError;

/// Single daily observation of a closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPricePoint")]
pub struct PricePoint {
    pub date: MarketDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: MarketDate, price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if price < 0.0 {
            return Err(ValidationError::NegativePrice { value: price });
        }

        Ok(Self { date, price })
    }
}

#[derive(Deserialize)]
struct RawPricePoint {
    date: MarketDate,
    price: f64,
}

impl TryFrom<RawPricePoint> for PricePoint {
    type Error = ValidationError;

    fn try_from(raw: RawPricePoint) -> Result<Self, Self::Error> {
        Self::new(raw.date, raw.price)
    }
}

/// Ordered daily price series.
///
/// Ordering is part of the type: points are always stored reverse-chronological
/// (index 0 = most recent observation), and the constructors reject anything
/// else. Metric code that needs oldest-first data goes through the
/// `chronological_*` accessors instead of re-sorting ad hoc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries(Vec<PricePoint>);

impl PriceSeries {
    /// Build a series from points already ordered newest-first.
    pub fn reverse_chronological(points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].date >= pair[0].date {
                return Err(ValidationError::SeriesNotReverseChronological { index: index + 1 });
            }
        }

        Ok(Self(points))
    }

    /// Build a series from points ordered oldest-first.
    pub fn chronological(mut points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        points.reverse();
        Self::reverse_chronological(points)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Most recent observation.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.0.first()
    }

    /// Observation immediately before the most recent one.
    pub fn previous(&self) -> Option<&PricePoint> {
        self.0.get(1)
    }

    /// Oldest observation.
    pub fn oldest(&self) -> Option<&PricePoint> {
        self.0.last()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prices ordered oldest-first, as consumed by the metrics engine.
    pub fn chronological_prices(&self) -> Vec<f64> {
        self.0.iter().rev().map(|point| point.price).collect()
    }

    /// Keep only the `count` most recent observations.
    pub fn most_recent(&self, count: usize) -> Self {
        let kept = self.0.iter().take(count).copied().collect();
        // A prefix of a valid series is still valid.
        Self(kept)
    }
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = ValidationError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        Self::reverse_chronological(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.0
    }
}
