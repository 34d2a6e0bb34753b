#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use augur_core::provider::{
    FundamentalsProvider, JudgmentOracle, MacroDataProvider, MarketDataProvider, SentimentSource,
};
use augur_core::types::{
    ArbitrationContext, EntityId, EstimateContext, MetricCandidate, Observation, OracleJudgment,
    OracleVerdict, SentimentContext, Series,
};
use augur_core::{AugurError, EntityKind, MetricName, Period, ProviderKey, Sentiment};

/// Closure-driven market data provider used by integration tests.
pub struct FnMarket {
    pub name: &'static str,
    pub kind_ok: Option<EntityKind>,
    pub delay: Duration,
    calls: Arc<AtomicUsize>,
    f: Arc<dyn Fn(&EntityId, Period) -> Result<Series, AugurError> + Send + Sync>,
}

impl FnMarket {
    pub fn new(
        name: &'static str,
        f: impl Fn(&EntityId, Period) -> Result<Series, AugurError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            kind_ok: None,
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
            f: Arc::new(f),
        }
    }

    /// A provider that always returns a clone of `series`.
    pub fn fixed(name: &'static str, series: Series) -> Self {
        Self::new(name, move |_, _| Ok(series.clone()))
    }

    /// A provider that always fails with a provider error.
    pub fn failing(name: &'static str) -> Self {
        Self::new(name, move |_, _| {
            Err(AugurError::provider(name, "scripted failure"))
        })
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind_ok = Some(kind);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle on the call counter; clones survive registration.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl MarketDataProvider for FnMarket {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_kind(&self, kind: EntityKind) -> bool {
        self.kind_ok.is_none_or(|k| k == kind)
    }

    async fn fetch_series(&self, entity: &EntityId, period: Period) -> Result<Series, AugurError> {
        if self.delay > Duration::ZERO {
            sleep(self.delay).await;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.f)(entity, period)
    }
}

/// Closure-driven fundamentals provider used by integration tests.
pub struct FnFundamentals {
    pub name: &'static str,
    calls: Arc<AtomicUsize>,
    f: Arc<dyn Fn(&EntityId, MetricName) -> Result<MetricCandidate, AugurError> + Send + Sync>,
    rating: Option<Result<String, AugurError>>,
}

impl FnFundamentals {
    pub fn new(
        name: &'static str,
        f: impl Fn(&EntityId, MetricName) -> Result<MetricCandidate, AugurError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            name,
            calls: Arc::new(AtomicUsize::new(0)),
            f: Arc::new(f),
            rating: None,
        }
    }

    /// A provider reporting `value` for every metric.
    pub fn value(name: &'static str, value: f64) -> Self {
        let key = ProviderKey::new(name);
        Self::new(name, move |_, _| Ok(MetricCandidate::with_value(key, value)))
    }

    /// A provider that never has a value.
    pub fn missing(name: &'static str) -> Self {
        let key = ProviderKey::new(name);
        Self::new(name, move |_, _| Ok(MetricCandidate::missing(key, "no data")))
    }

    /// A provider whose calls fail outright.
    pub fn failing(name: &'static str) -> Self {
        Self::new(name, move |_, _| {
            Err(AugurError::provider(name, "scripted failure"))
        })
    }

    pub fn with_rating(mut self, rating: &str) -> Self {
        self.rating = Some(Ok(rating.to_string()));
        self
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl FundamentalsProvider for FnFundamentals {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_metric(
        &self,
        entity: &EntityId,
        metric: MetricName,
    ) -> Result<MetricCandidate, AugurError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.f)(entity, metric)
    }

    async fn fetch_credit_rating(&self, _entity: &EntityId) -> Result<String, AugurError> {
        match &self.rating {
            Some(r) => r.clone(),
            None => Err(AugurError::unsupported("credit_rating")),
        }
    }
}

/// Closure-driven macro provider used by integration tests.
pub struct FnMacro {
    pub name: &'static str,
    calls: Arc<AtomicUsize>,
    f: Arc<dyn Fn(&str) -> Result<Vec<Observation>, AugurError> + Send + Sync>,
}

impl FnMacro {
    pub fn new(
        name: &'static str,
        f: impl Fn(&str) -> Result<Vec<Observation>, AugurError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            calls: Arc::new(AtomicUsize::new(0)),
            f: Arc::new(f),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self::new(name, move |_| {
            Err(AugurError::provider(name, "scripted failure"))
        })
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl MacroDataProvider for FnMacro {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_observations(&self, series_id: &str) -> Result<Vec<Observation>, AugurError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.f)(series_id)
    }
}

/// Fixed-label sentiment source.
pub struct FnSentiment {
    pub name: &'static str,
    pub result: Result<Sentiment, AugurError>,
}

impl FnSentiment {
    pub fn new(name: &'static str, label: Sentiment) -> Self {
        Self {
            name,
            result: Ok(label),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            result: Err(AugurError::provider(name, "scripted failure")),
        }
    }
}

#[async_trait]
impl SentimentSource for FnSentiment {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn sentiment(&self, _entity: &EntityId) -> Result<Sentiment, AugurError> {
        self.result.clone()
    }
}

/// Scripted oracle that records the contexts it was handed.
pub struct RecordingOracle {
    trust: Option<ProviderKey>,
    rationale: String,
    estimate: Option<String>,
    sentiment: Option<Sentiment>,
    arbitrations: AtomicUsize,
    estimates: AtomicUsize,
    last_arbitration: Mutex<Option<ArbitrationContext>>,
}

impl RecordingOracle {
    /// An oracle that trusts nobody.
    pub fn none_trustworthy() -> Self {
        Self {
            trust: None,
            rationale: "every candidate looks wrong".to_string(),
            estimate: None,
            sentiment: None,
            arbitrations: AtomicUsize::new(0),
            estimates: AtomicUsize::new(0),
            last_arbitration: Mutex::new(None),
        }
    }

    /// An oracle that always trusts the named provider.
    pub fn trusting(provider: &'static str) -> Self {
        Self {
            trust: Some(ProviderKey::new(provider)),
            rationale: format!("{provider} agrees with the reference data"),
            ..Self::none_trustworthy()
        }
    }

    pub fn with_estimate(mut self, text: &str) -> Self {
        self.estimate = Some(text.to_string());
        self
    }

    pub fn with_sentiment(mut self, label: Sentiment) -> Self {
        self.sentiment = Some(label);
        self
    }

    pub fn arbitrations(&self) -> usize {
        self.arbitrations.load(Ordering::SeqCst)
    }

    pub fn estimates(&self) -> usize {
        self.estimates.load(Ordering::SeqCst)
    }

    pub fn last_arbitration(&self) -> Option<ArbitrationContext> {
        self.last_arbitration.lock().unwrap().clone()
    }
}

#[async_trait]
impl JudgmentOracle for RecordingOracle {
    async fn arbitrate(&self, ctx: &ArbitrationContext) -> Result<OracleJudgment, AugurError> {
        self.arbitrations.fetch_add(1, Ordering::SeqCst);
        *self.last_arbitration.lock().unwrap() = Some(ctx.clone());
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
        if let Some(label) = self.sentiment {
            return Ok(label);
        }
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
