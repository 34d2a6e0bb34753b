//! Common data structures shared by the orchestrator, providers, and tests.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AugurError;
use augur_types::{EntityKind, MetricName, Provenance, ProviderKey, Sentiment};

/// Identity of the entity an analysis request targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId {
    /// Entity kind used for routing.
    pub kind: EntityKind,
    /// Provider-facing symbol, e.g. "AAPL" or "bitcoin".
    pub symbol: String,
    /// Optional human-readable name, forwarded to the oracle as context.
    pub name: Option<String>,
}

impl EntityId {
    /// Construct an entity id without a display name.
    pub fn new(kind: EntityKind, symbol: impl Into<String>) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
            name: None,
        }
    }

    /// Construct an entity id with a display name.
    pub fn named(kind: EntityKind, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
            name: Some(name.into()),
        }
    }

    /// Shorthand for an equity entity.
    pub fn equity(symbol: impl Into<String>) -> Self {
        Self::new(EntityKind::Equity, symbol)
    }

    /// The name to show in reports and oracle prompts: the display name when
    /// present, the symbol otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// One OHLCV observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Observation timestamp.
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume, when the provider reports one.
    pub volume: Option<u64>,
}

/// An ordered price series with strictly increasing, unique timestamps.
///
/// The invariant is enforced on construction: points are sorted by timestamp
/// and duplicates are rejected, so downstream code can index freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series(Vec<PricePoint>);

impl Series {
    /// Build a series from raw points, sorting by timestamp.
    ///
    /// # Errors
    /// Returns `InvalidArg` when two points share a timestamp.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self, AugurError> {
        points.sort_by_key(|p| p.ts);
        if let Some(w) = points.windows(2).find(|w| w[0].ts == w[1].ts) {
            return Err(AugurError::InvalidArg(format!(
                "duplicate timestamp in series: {}",
                w[0].ts
            )));
        }
        Ok(Self(points))
    }

    /// An empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// The ordered points.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    /// The closing-price column, in timestamp order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.close).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A price point enriched with trend and momentum indicators.
///
/// Only constructed once enough trailing history exists for every indicator;
/// rows with a partial window are dropped, never zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorRow {
    /// The underlying observation.
    pub point: PricePoint,
    /// 50-period simple moving average of the close.
    pub ma50: f64,
    /// 100-period simple moving average of the close.
    pub ma100: f64,
    /// 200-period simple moving average of the close.
    pub ma200: f64,
    /// 14-period relative strength index (Wilder smoothing).
    pub rsi: f64,
}

/// One observation of a macro series (e.g. a monthly CPI index level).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Observation timestamp.
    pub ts: DateTime<Utc>,
    /// Observed value.
    pub value: f64,
}

/// A raw per-provider value for one metric, before any screening.
///
/// Candidates are created per request and never persisted. A missing value
/// is an explicit `None`, never a numeric placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCandidate {
    /// Provider that reported the value.
    pub provider: ProviderKey,
    /// The reported value, absent when the provider had none.
    pub value: Option<f64>,
    /// Free-text context, e.g. the provider's error message.
    pub note: Option<String>,
}

impl MetricCandidate {
    /// A candidate carrying a value.
    #[must_use]
    pub const fn with_value(provider: ProviderKey, value: f64) -> Self {
        Self {
            provider,
            value: Some(value),
            note: None,
        }
    }

    /// A candidate without a value, annotated with the reason.
    pub fn missing(provider: ProviderKey, note: impl Into<String>) -> Self {
        Self {
            provider,
            value: None,
            note: Some(note.into()),
        }
    }
}

/// Where a reconciled value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricSource {
    /// Selected from the named provider's candidate.
    Provider(ProviderKey),
    /// Decided by the judgment oracle (including "trust nobody" outcomes).
    Oracle,
}

/// Terminal output of one reconciliation call.
///
/// Absence of trust is representable: `value = None` with `warning = true`,
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledMetric {
    /// The selected value, absent when no candidate earned trust.
    pub value: Option<f64>,
    /// Attribution for the selection.
    pub source: MetricSource,
    /// Why this value (or no value) was selected.
    pub rationale: String,
    /// Set when no reliable value could be established.
    pub warning: bool,
}

/// A fully populated forecast: one value per requested horizon step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Predicted values in original units, earliest step first.
    pub values: Vec<f64>,
}

/// Outcome of a forecast attempt: fully populated or explicitly unavailable,
/// never partial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForecastOutcome {
    /// The forecast was produced.
    Ready(ForecastResult),
    /// No forecast could be produced; `reason` says why.
    Unavailable {
        /// Human-readable explanation.
        reason: String,
    },
}

impl ForecastOutcome {
    /// Build the unavailable variant from any displayable reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether a forecast was produced.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Per-source sentiment labels plus the validated final label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    /// Final label after oracle validation.
    pub label: Sentiment,
    /// Labels reported by the individual sources that responded.
    pub by_source: BTreeMap<String, Sentiment>,
}

impl SentimentReport {
    /// A neutral report with no contributing sources.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            label: Sentiment::Neutral,
            by_source: BTreeMap::new(),
        }
    }
}

/// Structurally complete result of one `analyze` call.
///
/// Unresolved fields are explicitly marked unavailable instead of being
/// omitted; the analysis never aborts as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The analyzed entity.
    pub entity: EntityId,
    /// Reconciled fundamentals; empty for non-equity entity kinds.
    pub fundamentals: BTreeMap<MetricName, ReconciledMetric>,
    /// Multi-source sentiment with the validated final label.
    pub sentiment: SentimentReport,
    /// Forecast or the explicit unavailable outcome.
    pub forecast: ForecastOutcome,
}

/// A fallback-chain result with the identity of its origin attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    /// The looked-up value.
    pub value: T,
    /// Authoritative provider, or the oracle-estimate marker.
    pub provenance: Provenance,
}

impl<T> Sourced<T> {
    /// Tag a value as coming from a provider.
    #[must_use]
    pub const fn authoritative(value: T, provider: ProviderKey) -> Self {
        Self {
            value,
            provenance: Provenance::Authoritative(provider),
        }
    }

    /// Tag a value as an oracle estimate.
    #[must_use]
    pub const fn estimated(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Estimated,
        }
    }
}

/// A raw candidate annotated with the plausibility screen's result, as
/// presented to the oracle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledCandidate {
    /// The raw candidate, implausible ones included.
    pub candidate: MetricCandidate,
    /// Whether the candidate passed the plausibility screen.
    pub plausible: bool,
}

/// Context handed to the oracle when deterministic rules cannot decide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrationContext {
    /// The entity the metric belongs to.
    pub entity: EntityId,
    /// The contested metric.
    pub metric: MetricName,
    /// Every raw candidate, labeled plausible or implausible.
    pub candidates: Vec<LabeledCandidate>,
}

/// The oracle's fixed-label arbitration outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OracleVerdict {
    /// The named provider's candidate is trustworthy.
    Trust(ProviderKey),
    /// No candidate is trustworthy.
    NoneTrustworthy,
}

/// Verdict plus free-text rationale, as returned by the oracle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleJudgment {
    /// Which provider (if any) to trust.
    pub verdict: OracleVerdict,
    /// Free-text reasoning behind the verdict.
    pub rationale: String,
}

/// Minimal context for a best-effort oracle estimate after every provider
/// in a fallback chain failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateContext {
    /// What is being estimated, e.g. "inflation rate in percent".
    pub quantity: String,
    /// The entity or region the estimate refers to.
    pub subject: String,
}

/// Context for validating a multi-source sentiment sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentContext {
    /// The entity the sweep covered.
    pub entity: EntityId,
    /// Source name → label reported by that source.
    pub by_source: BTreeMap<String, Sentiment>,
}
