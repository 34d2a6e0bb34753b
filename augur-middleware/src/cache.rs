use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;

use augur_core::provider::FundamentalsProvider;
use augur_core::types::{EntityId, MetricCandidate};
use augur_core::{AugurError, EntityKind, MetricName};
use augur_types::CacheConfig;

/// Identity of a metric lookup for caching discrimination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MetricKey {
    symbol: String,
    kind: EntityKind,
    metric: MetricName,
}

impl MetricKey {
    fn new(entity: &EntityId, metric: MetricName) -> Self {
        Self {
            symbol: entity.symbol.clone(),
            kind: entity.kind,
            metric,
        }
    }
}

/// Size-bounded, single-flight cache over a fundamentals provider.
///
/// Repeated lookups of the same (entity, metric) pair within the TTL are
/// served from memory, and concurrent lookups of one key coalesce into a
/// single inner call whose result every caller receives. Errors are never
/// cached: a failed lookup propagates to all waiters and the next caller
/// retries the inner provider.
///
/// The wrapper keeps the inner provider's name, so attribution and priority
/// configuration are unaffected by caching.
pub struct CachedFundamentals {
    inner: Arc<dyn FundamentalsProvider>,
    cache: Cache<MetricKey, MetricCandidate>,
}

impl CachedFundamentals {
    /// Wrap a provider with a cache sized and aged per `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn FundamentalsProvider>, cfg: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(cfg.max_entries)
            .time_to_live(cfg.ttl)
            .build();
        Self { inner, cache }
    }

    /// Number of entries currently cached. Intended for tests and metrics.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Flush pending eviction housekeeping so `entry_count` is exact.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

#[async_trait]
impl FundamentalsProvider for CachedFundamentals {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn fetch_metric(
        &self,
        entity: &EntityId,
        metric: MetricName,
    ) -> Result<MetricCandidate, AugurError> {
        let key = MetricKey::new(entity, metric);
        let inner = self.inner.clone();
        let entity = entity.clone();
        self.cache
            .try_get_with(key, async move { inner.fetch_metric(&entity, metric).await })
            .await
            .map_err(|e: Arc<AugurError>| (*e).clone())
    }

    async fn fetch_credit_rating(&self, entity: &EntityId) -> Result<String, AugurError> {
        // Ratings are not memoized; only the per-metric lookups are hot.
        self.inner.fetch_credit_rating(entity).await
    }
}
