//! augur-core
//!
//! Core types, traits, and algorithms shared across the augur ecosystem.
//!
//! - `types`: common data structures (series, candidates, reports).
//! - `provider`: collaborator traits the orchestrator consumes.
//! - `timeseries`: indicator enrichment and min/max normalization.
//! - `forecast`: the windowed, recursive forecasting engine.
//! - `reconcile`: plausibility screening and deterministic resolution.
//! - `rates`: derivations over macro series observations.
//!
//! The algorithms here are pure and hold no shared state: every forecast
//! fits a fresh scaler and trains a fresh model from the input it is given,
//! so concurrent calls from multiple request-handling workers are safe by
//! construction.
//!
//! Async runtime (Tokio)
//! ---------------------
//! The provider traits in `provider` are `async_trait` contracts intended to
//! run under a Tokio 1.x runtime; the algorithms themselves are synchronous
//! and runtime-agnostic.
#![warn(missing_docs)]

/// Unified error taxonomy.
pub mod error;
/// The windowed, recursive forecasting engine.
pub mod forecast;
/// Collaborator traits (market data, fundamentals, macro series, oracle).
pub mod provider;
/// Derivations over macro series observations.
pub mod rates;
/// Plausibility screening and deterministic candidate resolution.
pub mod reconcile;
/// Time-series utilities.
pub mod timeseries;
pub mod types;

pub use error::AugurError;
pub use forecast::{WindowModel, forecast_closes};
pub use provider::{
    FundamentalsProvider, JudgmentOracle, MacroDataProvider, MarketDataProvider, SentimentSource,
};
pub use reconcile::{Resolution, filter_plausible, is_plausible, resolve};
pub use timeseries::{SequenceScaler, enrich};
pub use types::*;

// Re-export the shared DTO vocabulary for convenience.
pub use augur_types::{
    AugurConfig, CacheConfig, EntityKind, ForecastConfig, MacroCatalog, MacroSeries, MetricName,
    MetricSpec, Period, Provenance, ProviderKey, Sentiment,
};
