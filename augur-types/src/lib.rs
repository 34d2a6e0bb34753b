//! augur-types
//!
//! Shared data transfer objects for the augur workspace: typed provider keys,
//! entity and metric labels, provenance markers, and configuration structs.
//!
//! This crate is dependency-light on purpose so that provider crates and the
//! orchestrator can agree on vocabulary without pulling in the core algorithms.
#![warn(missing_docs)]

/// Configuration types shared by the orchestrator and middleware.
pub mod config;
/// Entity, metric, and outcome labels.
pub mod labels;
/// Typed provider identity.
pub mod provider;

pub use config::{AugurConfig, CacheConfig, ForecastConfig, MacroCatalog, MacroSeries, MetricSpec};
pub use labels::{EntityKind, MetricName, Period, Provenance, Sentiment};
pub use provider::ProviderKey;
