use serde_json::Value;

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::read_envelope;

pub fn run(args: &HistoryArgs) -> Result<Value, CliError> {
    let mut envelope = read_envelope(&args.input)?;

    if let Some(days) = args.days {
        envelope = envelope.most_recent(days);
    }

    Ok(serde_json::to_value(envelope.with_metrics())?)
}
