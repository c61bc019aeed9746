mod freshness;
mod history;
mod quote;

use std::fs;
use std::io::Read;

use serde_json::Value;
use stocklens_core::HistoryEnvelope;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<Value, CliError> {
    match &cli.command {
        Command::Quote(args) => quote::run(args),
        Command::History(args) => history::run(args),
        Command::Freshness(args) => freshness::run(args),
    }
}

/// Read a history payload from a file path, or stdin for `-`.
fn read_envelope(input: &str) -> Result<HistoryEnvelope, CliError> {
    let raw = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    Ok(serde_json::from_str(&raw)?)
}
