//! Mock providers and oracle for CI-safe examples and tests.
//!
//! Everything here is deterministic: series are derived from the symbol,
//! metric values come from explicit maps, and the oracle replays whatever
//! verdict it was configured with while counting how often it was consulted.
//!
//! A few magic symbols steer failure paths, mirroring how the real
//! providers misbehave:
//! - `"FAIL"` — every call errors with a provider failure.
//! - `"EMPTY"` — market data returns an empty series.
//! - `"SHORT"` — market data returns a series too short to forecast.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use augur_core::provider::{
    FundamentalsProvider, JudgmentOracle, MacroDataProvider, MarketDataProvider, SentimentSource,
};
use augur_core::types::{
    ArbitrationContext, EntityId, EstimateContext, MetricCandidate, Observation, OracleJudgment,
    OracleVerdict, SentimentContext, Series,
};
use augur_core::{AugurError, EntityKind, MetricName, Period, ProviderKey, Sentiment};

pub mod fixtures;

/// Mock market data provider serving generated daily series for any symbol.
pub struct MockMarketData;

impl Default for MockMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketData {
    /// Construct the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketData {
    fn name(&self) -> &'static str {
        "mock-market"
    }

    fn supports_kind(&self, _kind: EntityKind) -> bool {
        true
    }

    async fn fetch_series(&self, entity: &EntityId, period: Period) -> Result<Series, AugurError> {
        match entity.symbol.as_str() {
            "FAIL" => Err(AugurError::provider(self.name(), "forced failure: series")),
            "EMPTY" => Ok(Series::empty()),
            "SHORT" => Ok(fixtures::series::daily(&entity.symbol, 30)),
            _ => {
                let days = match period {
                    Period::Days(d) => usize::from(d),
                    Period::Y1 => 260,
                    Period::Y3 => 780,
                    _ => 1_300,
                };
                Ok(fixtures::series::daily(&entity.symbol, days))
            }
        }
    }
}

/// Mock fundamentals provider with explicit per-metric values.
pub struct MockFundamentals {
    name: &'static str,
    metrics: BTreeMap<MetricName, f64>,
    rating: Option<String>,
}

impl MockFundamentals {
    /// Construct a provider with no values; add them with
    /// [`with_metric`](Self::with_metric).
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            metrics: BTreeMap::new(),
            rating: None,
        }
    }

    /// Set the value this provider reports for a metric.
    #[must_use]
    pub fn with_metric(mut self, metric: MetricName, value: f64) -> Self {
        self.metrics.insert(metric, value);
        self
    }

    /// Set the credit rating this provider reports.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }
}

#[async_trait]
impl FundamentalsProvider for MockFundamentals {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_metric(
        &self,
        entity: &EntityId,
        metric: MetricName,
    ) -> Result<MetricCandidate, AugurError> {
        if entity.symbol == "FAIL" {
            return Err(AugurError::provider(self.name, "forced failure: metric"));
        }
        Ok(match self.metrics.get(&metric) {
            Some(&value) => MetricCandidate::with_value(self.key(), value),
            None => MetricCandidate::missing(self.key(), "no data"),
        })
    }

    async fn fetch_credit_rating(&self, entity: &EntityId) -> Result<String, AugurError> {
        if entity.symbol == "FAIL" {
            return Err(AugurError::provider(self.name, "forced failure: rating"));
        }
        self.rating
            .clone()
            .ok_or_else(|| AugurError::unsupported("credit_rating"))
    }
}

/// Mock macro provider with explicit per-series observations.
pub struct MockMacro {
    name: &'static str,
    series: BTreeMap<String, Vec<Observation>>,
}

impl MockMacro {
    /// Construct a provider with no series.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            series: BTreeMap::new(),
        }
    }

    /// Register monthly observations for a series id.
    #[must_use]
    pub fn with_series(mut self, series_id: impl Into<String>, values: &[f64]) -> Self {
        self.series
            .insert(series_id.into(), fixtures::series::monthly_observations(values));
        self
    }
}

#[async_trait]
impl MacroDataProvider for MockMacro {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_observations(&self, series_id: &str) -> Result<Vec<Observation>, AugurError> {
        self.series
            .get(series_id)
            .cloned()
            .ok_or_else(|| AugurError::data_unavailable(format!("series {series_id}")))
    }
}

/// Mock sentiment source reporting one fixed label.
pub struct MockSentiment {
    name: &'static str,
    label: Sentiment,
}

impl MockSentiment {
    /// Construct a source that always reports `label`.
    #[must_use]
    pub const fn new(name: &'static str, label: Sentiment) -> Self {
        Self { name, label }
    }
}

#[async_trait]
impl SentimentSource for MockSentiment {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn sentiment(&self, entity: &EntityId) -> Result<Sentiment, AugurError> {
        if entity.symbol == "FAIL" {
            return Err(AugurError::provider(self.name, "forced failure: sentiment"));
        }
        Ok(self.label)
    }
}

/// Scripted judgment oracle that counts how often it is consulted.
pub struct MockOracle {
    trust: Option<ProviderKey>,
    rationale: String,
    estimate: Option<String>,
    sentiment: Option<Sentiment>,
    arbitrations: AtomicUsize,
    estimates: AtomicUsize,
    classifications: AtomicUsize,
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MockOracle {
    /// An oracle that trusts nobody.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trust: None,
            rationale: "no candidate earned trust".to_string(),
            estimate: None,
            sentiment: None,
            arbitrations: AtomicUsize::new(0),
            estimates: AtomicUsize::new(0),
            classifications: AtomicUsize::new(0),
        }
    }

    /// An oracle that always trusts the named provider.
    #[must_use]
    pub fn trusting(provider: &'static str) -> Self {
        Self {
            trust: Some(ProviderKey::new(provider)),
            rationale: format!("{provider} matches the reference source"),
            ..Self::new()
        }
    }

    /// Set the text returned by `estimate`.
    #[must_use]
    pub fn with_estimate(mut self, text: impl Into<String>) -> Self {
        self.estimate = Some(text.into());
        self
    }

    /// Force the final sentiment label instead of the majority vote.
    #[must_use]
    pub fn with_sentiment(mut self, label: Sentiment) -> Self {
        self.sentiment = Some(label);
        self
    }

    /// Number of `arbitrate` calls so far.
    #[must_use]
    pub fn arbitrations(&self) -> usize {
        self.arbitrations.load(Ordering::SeqCst)
    }

    /// Number of `estimate` calls so far.
    #[must_use]
    pub fn estimates(&self) -> usize {
        self.estimates.load(Ordering::SeqCst)
    }

    /// Number of `classify_sentiment` calls so far.
    #[must_use]
    pub fn classifications(&self) -> usize {
        self.classifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JudgmentOracle for MockOracle {
    async fn arbitrate(&self, _ctx: &ArbitrationContext) -> Result<OracleJudgment, AugurError> {
        self.arbitrations.fetch_add(1, Ordering::SeqCst);
        Ok(OracleJudgment {
            verdict: match self.trust {
                Some(key) => OracleVerdict::Trust(key),
                None => OracleVerdict::NoneTrustworthy,
            },
            rationale: self.rationale.clone(),
        })
    }

    async fn estimate(&self, ctx: &EstimateContext) -> Result<String, AugurError> {
        self.estimates.fetch_add(1, Ordering::SeqCst);
        self.estimate
            .clone()
            .ok_or_else(|| AugurError::oracle(format!("no estimate scripted for {}", ctx.subject)))
    }

    async fn classify_sentiment(&self, ctx: &SentimentContext) -> Result<Sentiment, AugurError> {
        self.classifications.fetch_add(1, Ordering::SeqCst);
        if let Some(label) = self.sentiment {
            return Ok(label);
        }
        // Majority vote over the sweep, neutral on ties.
        let mut positive = 0_i32;
        let mut negative = 0_i32;
        for label in ctx.by_source.values() {
            match label {
                Sentiment::Positive => positive += 1,
                Sentiment::Negative => negative += 1,
                Sentiment::Neutral => {}
            }
        }
        Ok(match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        })
    }
}
