//! Augur orchestrates short-horizon forecasting and multi-provider metric
//! reconciliation.
//!
//! Overview
//! - Routes analysis requests to injected provider implementations of the
//!   `augur_core` contracts.
//! - Reconciles disagreeing fundamental metrics across providers, deferring
//!   to a judgment oracle only when deterministic rules cannot decide.
//! - Produces recursive windowed forecasts from provider price history.
//! - Runs reconciliation-adjacent macro lookups (inflation, policy rate,
//!   credit rating) through an ordered fallback chain with oracle estimates
//!   as the last resort.
//!
//! Key behaviors and trade-offs
//! - Fallback chains are deterministic: providers are tried in registration
//!   order, a transient rate limit earns exactly one retry after a fixed
//!   delay, and every failure is caught and aggregated rather than
//!   propagated.
//! - Reconciliation never errors: a candidate set nobody trusts produces a
//!   `ReconciledMetric` with no value and a warning flag.
//! - Forecasting is request-scoped: every call fits a fresh scaler and
//!   trains a fresh model, so concurrent requests cannot contaminate each
//!   other through shared state. The training step is CPU-bound and runs to
//!   completion inline.
//! - Oracle calls are bounded by the same per-provider timeout as data
//!   providers; a timed-out oracle counts as a failed oracle.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use augur::Augur;
//! use augur_core::types::EntityId;
//!
//! let augur = Augur::builder()
//!     .with_market_provider(history)
//!     .with_fundamentals_provider(yahoo)
//!     .with_fundamentals_provider(vantage)
//!     .with_fundamentals_provider(finnhub)
//!     .with_sentiment_source(news)
//!     .with_oracle(oracle)
//!     .build()?;
//!
//! let report = augur.analyze(&EntityId::equity("AAPL")).await;
//! println!("{:?}", report.forecast);
//! ```
//!
//! See `augur/examples/` for runnable end-to-end demonstrations against the
//! mock providers.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Augur, AugurBuilder};

pub use augur_middleware::CachedFundamentals;

// Re-export core types for convenience.
pub use augur_core::{
    AnalysisReport,
    ArbitrationContext,
    AugurConfig,
    AugurError,
    CacheConfig,
    EntityId,
    EntityKind,
    EstimateContext,
    ForecastConfig,
    ForecastOutcome,
    ForecastResult,
    // Provider contracts
    FundamentalsProvider,
    IndicatorRow,
    JudgmentOracle,
    LabeledCandidate,
    MacroCatalog,
    MacroDataProvider,
    MacroSeries,
    MarketDataProvider,
    MetricCandidate,
    MetricName,
    MetricSource,
    MetricSpec,
    Observation,
    OracleJudgment,
    OracleVerdict,
    Period,
    PricePoint,
    Provenance,
    ProviderKey,
    ReconciledMetric,
    Sentiment,
    SentimentReport,
    SentimentSource,
    Series,
    Sourced,
};
