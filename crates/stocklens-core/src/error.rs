use thiserror::Error;

/// Validation and contract errors exposed by `stocklens-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be a calendar date in YYYY-MM-DD form: '{value}'")]
    InvalidDate { value: String },

    #[error("price must be finite")]
    NonFinitePrice,
    #[error("price must be non-negative, got {value}")]
    NegativePrice { value: f64 },

    #[error("series dates must be strictly decreasing, newest first (violation at index {index})")]
    SeriesNotReverseChronological { index: usize },

    #[error("invalid source '{value}', expected one of live, cache, demo")]
    InvalidSource { value: String },

    #[error("fetchedAt is required when source is 'cache'")]
    MissingFetchedAt,
    #[error("fetchedAt is only valid when source is 'cache'")]
    UnexpectedFetchedAt,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
