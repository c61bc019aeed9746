use serde_json::Value;

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::read_envelope;

pub fn run(args: &QuoteArgs) -> Result<Value, CliError> {
    let envelope = read_envelope(&args.input)?;

    let quote = envelope.quote().ok_or_else(|| {
        CliError::Command(format!(
            "series for {} has fewer than 2 points, no quote can be derived",
            envelope.symbol
        ))
    })?;

    Ok(serde_json::to_value(quote)?)
}
