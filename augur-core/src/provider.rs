//! Collaborator traits the core consumes.
//!
//! Implementations live outside this workspace (real SDK crates) or in
//! `augur-mock`; the orchestrator only sees these contracts. Every trait is
//! object-safe and `Send + Sync` so providers can be shared across
//! request-handling workers.

use async_trait::async_trait;

use crate::error::AugurError;
use crate::types::{
    ArbitrationContext, EntityId, EstimateContext, MetricCandidate, Observation, OracleJudgment,
    SentimentContext, Series,
};
use augur_types::{EntityKind, MetricName, Period, ProviderKey, Sentiment};

/// Source of OHLCV price history.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// A stable identifier for priority lists and attribution.
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Whether this provider *claims* to support a given entity kind.
    ///
    /// Default: returns `false` for all kinds. Providers must explicitly
    /// override this method to declare which kinds they serve.
    fn supports_kind(&self, kind: EntityKind) -> bool {
        let _ = kind;
        false
    }

    /// Fetch a price series for the entity over the requested period.
    async fn fetch_series(&self, entity: &EntityId, period: Period) -> Result<Series, AugurError>;
}

/// Source of point-in-time fundamental metrics.
///
/// Several independent implementations feed one reconciliation call; none of
/// them is trusted on its own.
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// A stable identifier for priority lists and attribution.
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Fetch this provider's candidate value for one metric.
    ///
    /// A provider that has no value should return a candidate with
    /// `value = None` rather than an error; errors are reserved for failed
    /// calls.
    async fn fetch_metric(
        &self,
        entity: &EntityId,
        metric: MetricName,
    ) -> Result<MetricCandidate, AugurError>;

    /// Fetch the entity's credit rating as an agency-scale string.
    ///
    /// Default: `Unsupported`. Providers with rating coverage override this
    /// method; the fallback chain skips past the rest.
    async fn fetch_credit_rating(&self, entity: &EntityId) -> Result<String, AugurError> {
        let _ = entity;
        Err(AugurError::unsupported("credit_rating"))
    }
}

/// Source of ordered macro-economic observations (CPI indices, policy
/// rates).
#[async_trait]
pub trait MacroDataProvider: Send + Sync {
    /// A stable identifier for priority lists and attribution.
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Fetch the observations of one series, oldest first.
    async fn fetch_observations(&self, series_id: &str) -> Result<Vec<Observation>, AugurError>;
}

/// One contributor to the multi-source sentiment sweep.
#[async_trait]
pub trait SentimentSource: Send + Sync {
    /// A stable identifier used as the key in sentiment reports.
    fn name(&self) -> &'static str;

    /// This source's current read on the entity.
    async fn sentiment(&self, entity: &EntityId) -> Result<Sentiment, AugurError>;
}

/// External semantic-judgment service, consulted only when deterministic
/// rules cannot resolve a disagreement or absence.
#[async_trait]
pub trait JudgmentOracle: Send + Sync {
    /// Pick the trustworthy provider (or none) among conflicting candidates.
    async fn arbitrate(&self, ctx: &ArbitrationContext) -> Result<OracleJudgment, AugurError>;

    /// Produce a best-effort textual estimate from minimal context.
    ///
    /// Used by fallback chains after every provider failed; results are
    /// always tagged `Provenance::Estimated` by the caller.
    async fn estimate(&self, ctx: &EstimateContext) -> Result<String, AugurError>;

    /// Collapse a multi-source sentiment sweep into one final label.
    async fn classify_sentiment(&self, ctx: &SentimentContext) -> Result<Sentiment, AugurError>;
}
