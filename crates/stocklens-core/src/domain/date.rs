use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date in `YYYY-MM-DD` form, as used by daily price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarketDate(Date);

impl MarketDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn from_date(value: Date) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// Whole calendar days from `earlier` to `self`. Negative if `self` precedes it.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).whole_days()
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("MarketDate must be formattable as YYYY-MM-DD")
    }
}

impl Display for MarketDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for MarketDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for MarketDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_date() {
        let parsed = MarketDate::parse("2026-01-27").expect("must parse");
        assert_eq!(parsed.format_iso(), "2026-01-27");
    }

    #[test]
    fn rejects_malformed_date() {
        for bad in ["2026-13-01", "01-27-2026", "2026/01/27", "not-a-date"] {
            let err = MarketDate::parse(bad).expect_err("must fail");
            assert!(matches!(err, ValidationError::InvalidDate { .. }));
        }
    }

    #[test]
    fn computes_day_spans() {
        let first = MarketDate::parse("2025-02-02").expect("date");
        let last = MarketDate::parse("2026-02-02").expect("date");
        assert_eq!(last.days_since(first), 365);
        assert_eq!(first.days_since(last), -365);
    }
}
