use clap::{Args, Parser, Subcommand};

/// Inspect stock history payloads: quotes, metrics and cache freshness.
#[derive(Debug, Parser)]
#[command(name = "stocklens", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive the latest quote from a history payload.
    Quote(QuoteArgs),
    /// Attach risk/return metrics to a history payload.
    History(HistoryArgs),
    /// Print the relative-age label for a cached payload.
    Freshness(FreshnessArgs),
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// History JSON file, or '-' for stdin.
    #[arg(long, default_value = "-")]
    pub input: String,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History JSON file, or '-' for stdin.
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Keep only the most recent N observations.
    #[arg(long)]
    pub days: Option<usize>,
}

#[derive(Debug, Args)]
pub struct FreshnessArgs {
    /// Payload source: live, cache or demo.
    #[arg(long)]
    pub source: stocklens_core::DataSource,

    /// Unix seconds the payload was fetched (cache payloads only).
    #[arg(long)]
    pub fetched_at: Option<i64>,

    /// Unix seconds to evaluate against; defaults to the system clock.
    #[arg(long)]
    pub now: Option<i64>,
}
