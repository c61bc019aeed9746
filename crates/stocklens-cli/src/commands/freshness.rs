use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};
use stocklens_core::freshness_text;

use crate::cli::FreshnessArgs;
use crate::error::CliError;

pub fn run(args: &FreshnessArgs) -> Result<Value, CliError> {
    let now = args.now.unwrap_or_else(unix_now);
    let text = freshness_text(args.source, args.fetched_at, now);

    Ok(json!({
        "source": args.source,
        "freshness": text,
    }))
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklens_core::DataSource;

    #[test]
    fn reports_cache_age() {
        let args = FreshnessArgs {
            source: DataSource::Cache,
            fetched_at: Some(1_770_000_000 - 7_200),
            now: Some(1_770_000_000),
        };

        let value = run(&args).expect("freshness");
        assert_eq!(value["freshness"], "2 hours ago");
    }

    #[test]
    fn live_source_has_null_freshness() {
        let args = FreshnessArgs {
            source: DataSource::Live,
            fetched_at: None,
            now: Some(1_770_000_000),
        };

        let value = run(&args).expect("freshness");
        assert!(value["freshness"].is_null());
    }
}
