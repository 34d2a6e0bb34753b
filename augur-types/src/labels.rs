//! Entity, metric, and outcome labels shared across the workspace.

use serde::{Deserialize, Serialize};

use crate::provider::ProviderKey;

/// Kind of entity an analysis request targets.
///
/// Routing differs per kind: only equities carry reconciled fundamentals,
/// while every kind is eligible for sentiment and forecasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EntityKind {
    /// A listed stock.
    Equity,
    /// An exchange-traded fund.
    Etf,
    /// A bond or bond-like instrument.
    Bond,
    /// A cryptocurrency.
    Crypto,
}

/// History range requested from a market data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Period {
    /// One year of history.
    Y1,
    /// Three years of history.
    Y3,
    /// Five years of history.
    Y5,
    /// An explicit number of trailing days.
    Days(u16),
}

/// Fundamental metric subject to multi-provider reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MetricName {
    /// Annual dividend yield, in percent.
    DividendYield,
    /// Trailing price/earnings ratio.
    TrailingPe,
    /// Market capitalization, in billions of the listing currency.
    MarketCap,
    /// Aggregate ESG score.
    EsgScore,
}

impl MetricName {
    /// Stable lowercase label used in cache keys and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DividendYield => "dividend_yield",
            Self::TrailingPe => "trailing_pe",
            Self::MarketCap => "market_cap",
            Self::EsgScore => "esg_score",
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Supportive of the entity.
    Positive,
    /// Against the entity.
    Negative,
    /// No clear lean, or no usable signal.
    Neutral,
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::Neutral
    }
}

/// Origin of a fallback-chain result.
///
/// Callers use this to distinguish authoritative provider data from a
/// best-effort oracle approximation produced after every provider failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    /// Value came from the named provider.
    Authoritative(ProviderKey),
    /// Value is an oracle estimate; treat with caution.
    Estimated,
}

impl Provenance {
    /// Whether the value came from a real provider rather than the oracle.
    #[must_use]
    pub const fn is_authoritative(&self) -> bool {
        matches!(self, Self::Authoritative(_))
    }
}
