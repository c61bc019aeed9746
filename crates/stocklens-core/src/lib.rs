//! Core contracts for stocklens.
//!
//! This crate contains:
//! - Canonical domain models and validation (symbols, dates, price series)
//! - The metrics engine (quote delta, Sharpe, Sortino, max drawdown, CAGR)
//! - Freshness labels for cached payloads
//! - The history envelope contract, TTL cache and provider fallback service

pub mod cache;
pub mod demo;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod freshness;
pub mod metrics;
pub mod provider;
pub mod quote;
pub mod service;
pub mod source;

pub use cache::{CacheConfig, CachedHistory, HistoryCache};
pub use demo::{demo_history, demo_series};
pub use domain::{MarketDate, PricePoint, PriceSeries, Symbol};
pub use envelope::HistoryEnvelope;
pub use error::{CoreError, ValidationError};
pub use freshness::freshness_text;
pub use metrics::{MetricsBundle, DAYS_PER_YEAR};
pub use provider::{HistoryProvider, ProviderError, ProviderErrorKind};
pub use quote::Quote;
pub use service::HistoryService;
pub use source::DataSource;
