use std::sync::Arc;

use augur_core::AugurError;
use augur_core::provider::{
    FundamentalsProvider, JudgmentOracle, MacroDataProvider, MarketDataProvider, SentimentSource,
};
use augur_core::types::Sourced;
use augur_types::{AugurConfig, ForecastConfig, MetricSpec, ProviderKey};

/// Orchestrator that routes analysis requests across registered providers
/// and defers contested decisions to the judgment oracle.
pub struct Augur {
    pub(crate) market: Vec<Arc<dyn MarketDataProvider>>,
    pub(crate) fundamentals: Vec<Arc<dyn FundamentalsProvider>>,
    pub(crate) macros: Vec<Arc<dyn MacroDataProvider>>,
    pub(crate) sentiment: Vec<Arc<dyn SentimentSource>>,
    pub(crate) oracle: Arc<dyn JudgmentOracle>,
    pub(crate) cfg: AugurConfig,
}

/// Builder for constructing an `Augur` orchestrator with custom configuration.
pub struct AugurBuilder {
    market: Vec<Arc<dyn MarketDataProvider>>,
    fundamentals: Vec<Arc<dyn FundamentalsProvider>>,
    macros: Vec<Arc<dyn MacroDataProvider>>,
    sentiment: Vec<Arc<dyn SentimentSource>>,
    oracle: Option<Arc<dyn JudgmentOracle>>,
    cfg: AugurConfig,
}

impl Default for AugurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AugurBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults are conservative: 5s provider timeout, 10s rate-limit retry
    /// delay, no overall deadline, and the built-in metric plausibility
    /// bounds and macro catalogs. An oracle must be supplied before `build`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            market: vec![],
            fundamentals: vec![],
            macros: vec![],
            sentiment: vec![],
            oracle: None,
            cfg: AugurConfig::default(),
        }
    }

    /// Register a price-history provider.
    ///
    /// Registration order is the fallback priority: earlier providers are
    /// tried first. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_market_provider(mut self, p: Arc<dyn MarketDataProvider>) -> Self {
        self.market.push(p);
        self
    }

    /// Register a fundamentals provider.
    ///
    /// All registered fundamentals providers are queried concurrently per
    /// reconciliation call; order decides which candidate wins when several
    /// plausible candidates agree.
    #[must_use]
    pub fn with_fundamentals_provider(mut self, p: Arc<dyn FundamentalsProvider>) -> Self {
        self.fundamentals.push(p);
        self
    }

    /// Register a macro series provider. Order is the fallback priority.
    #[must_use]
    pub fn with_macro_provider(mut self, p: Arc<dyn MacroDataProvider>) -> Self {
        self.macros.push(p);
        self
    }

    /// Register a sentiment source contributing to the multi-source sweep.
    #[must_use]
    pub fn with_sentiment_source(mut self, s: Arc<dyn SentimentSource>) -> Self {
        self.sentiment.push(s);
        self
    }

    /// Set the judgment oracle consulted when deterministic rules cannot
    /// decide. Required.
    #[must_use]
    pub fn with_oracle(mut self, oracle: Arc<dyn JudgmentOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: AugurConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-provider request timeout, applied to every provider and
    /// oracle call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the fixed pause before the single retry of a rate-limited
    /// provider.
    #[must_use]
    pub const fn retry_delay(mut self, delay: std::time::Duration) -> Self {
        self.cfg.retry_delay = delay;
        self
    }

    /// Set the forecaster hyperparameters.
    #[must_use]
    pub const fn forecast_config(mut self, cfg: ForecastConfig) -> Self {
        self.cfg.forecast = cfg;
        self
    }

    /// Replace the metric plausibility bounds.
    #[must_use]
    pub fn metric_specs(mut self, specs: Vec<MetricSpec>) -> Self {
        self.cfg.metrics = specs;
        self
    }

    /// Build the `Augur` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no oracle has been registered via
    /// [`with_oracle`](Self::with_oracle).
    pub fn build(self) -> Result<Augur, AugurError> {
        let Some(oracle) = self.oracle else {
            return Err(AugurError::InvalidArg(
                "no judgment oracle registered; add one via with_oracle(...)".to_string(),
            ));
        };
        Ok(Augur {
            market: self.market,
            fundamentals: self.fundamentals,
            macros: self.macros,
            sentiment: self.sentiment,
            oracle,
            cfg: self.cfg,
        })
    }
}

/// Internal: uniform access to a provider's static name across the
/// different provider traits, so the fallback chain can be generic.
pub(crate) trait Ident {
    fn ident(&self) -> &'static str;
}

impl Ident for dyn MarketDataProvider {
    fn ident(&self) -> &'static str {
        self.name()
    }
}

impl Ident for dyn FundamentalsProvider {
    fn ident(&self) -> &'static str {
        self.name()
    }
}

impl Ident for dyn MacroDataProvider {
    fn ident(&self) -> &'static str {
        self.name()
    }
}

/// Attach a provider name to errors that do not already carry one.
pub(crate) fn tag_err(provider: &str, e: AugurError) -> AugurError {
    match e {
        e @ (AugurError::Provider { .. }
        | AugurError::RateLimited { .. }
        | AugurError::ProviderTimeout { .. }
        | AugurError::DataUnavailable { .. }
        | AugurError::InsufficientHistory { .. }
        | AugurError::Unsupported { .. }
        | AugurError::AllProvidersFailed(_)) => e,
        other => AugurError::provider(provider, other.to_string()),
    }
}

impl Augur {
    /// Start building a new `Augur` instance.
    ///
    /// Typical usage chains provider registration, e.g.:
    ///
    /// ```rust,ignore
    /// let augur = augur::Augur::builder()
    ///     .with_market_provider(history.clone())
    ///     .with_fundamentals_provider(yahoo.clone())
    ///     .with_fundamentals_provider(vantage.clone())
    ///     .with_oracle(oracle)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> AugurBuilder {
        AugurBuilder::new()
    }

    /// Wrap a provider future with a timeout and standardized timeout error
    /// mapping. A timeout counts as a provider failure for fallback purposes.
    pub(crate) async fn call_with_timeout<T, Fut>(
        provider: &str,
        operation: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, AugurError>
    where
        Fut: core::future::Future<Output = Result<T, AugurError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(AugurError::provider_timeout(provider, operation)))
    }

    /// Generic ordered-provider lookup with retry-then-fallback semantics.
    ///
    /// Providers are tried in registration order; the first success wins and
    /// is returned with its provider's identity attached. A provider that
    /// signals a transient rate limit is retried exactly once after the
    /// configured delay before being treated as failed. Each failure is
    /// caught here and aggregated; callers decide whether to fall back to an
    /// oracle estimate.
    ///
    /// The `call` closure returns `None` for providers that do not serve the
    /// request (e.g. wrong entity kind); such providers are skipped without
    /// counting as failures.
    pub(crate) async fn chain_lookup<P, T, F, Fut>(
        &self,
        operation: &'static str,
        providers: &[Arc<P>],
        call: F,
    ) -> Result<Sourced<T>, AugurError>
    where
        P: Ident + ?Sized,
        T: Send,
        F: Fn(Arc<P>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, AugurError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<AugurError> = Vec::new();

        for p in providers {
            let Some(fut) = call(p.clone()) else {
                continue;
            };
            attempted_any = true;
            let name = p.ident();
            let timeout = self.cfg.provider_timeout;

            let first = Self::call_with_timeout(name, operation, timeout, fut).await;
            let outcome = match first {
                Err(e) if e.is_transient() => {
                    tokio::time::sleep(self.cfg.retry_delay).await;
                    match call(p.clone()) {
                        Some(retry) => Self::call_with_timeout(name, operation, timeout, retry).await,
                        None => Err(e),
                    }
                }
                other => other,
            };

            match outcome {
                Ok(v) => return Ok(Sourced::authoritative(v, ProviderKey::new(name))),
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        if !attempted_any {
            return Err(AugurError::unsupported(operation));
        }
        Err(AugurError::AllProvidersFailed(errors))
    }
}
