//! Human-readable age labels for cached history payloads.

use crate::source::DataSource;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * 60;
const DAY: i64 = 24 * 60 * 60;

/// Relative-age label for a cached payload.
///
/// Produced only when `source` is [`DataSource::Cache`] and a fetch time is
/// known; live and demo payloads carry no age. `now` and `fetched_at` are
/// unix seconds; a `fetched_at` in the future is treated as age zero.
pub fn freshness_text(source: DataSource, fetched_at: Option<i64>, now: i64) -> Option<String> {
    if source != DataSource::Cache {
        return None;
    }
    let fetched_at = fetched_at?;

    let age = (now - fetched_at).max(0);
    Some(age_label(age))
}

fn age_label(age_seconds: i64) -> String {
    if age_seconds < MINUTE {
        return String::from("just now");
    }

    let minutes = age_seconds / MINUTE;
    if minutes < 60 {
        return format!("{minutes} {} ago", pluralize(minutes, "minute"));
    }

    let hours = age_seconds / HOUR;
    if hours < 24 {
        return format!("{hours} {} ago", pluralize(hours, "hour"));
    }

    let days = age_seconds / DAY;
    format!("{days} {} ago", pluralize(days, "day"))
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_owned()
    } else {
        format!("{unit}s")
    }
}
