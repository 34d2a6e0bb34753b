//! Configuration types shared across the orchestrator and middleware.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::labels::MetricName;

/// Hyperparameters for the windowed forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of trailing observations per training window (L).
    pub lookback: usize,
    /// Number of future steps to project (H).
    pub horizon: usize,
    /// Full-batch gradient descent passes over the training set.
    pub epochs: usize,
    /// Gradient descent step size.
    pub learning_rate: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            lookback: 60,
            horizon: 30,
            epochs: 50,
            learning_rate: 0.01,
        }
    }
}

/// Plausibility bound for one reconciled metric.
///
/// A candidate value outside `[min, max]` is screened out before
/// arbitration, regardless of which provider reported it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Metric the bound applies to.
    pub name: MetricName,
    /// Smallest plausible value, inclusive.
    pub min: f64,
    /// Largest plausible value, inclusive.
    pub max: f64,
}

impl MetricSpec {
    /// Construct a bound for a metric.
    #[must_use]
    pub const fn new(name: MetricName, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }
}

/// Default plausibility bounds for the built-in metrics.
///
/// A dividend yield above 20% is treated as a data error rather than a
/// signal; the remaining bounds are similarly generous sanity rails.
#[must_use]
pub fn default_metric_specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec::new(MetricName::DividendYield, 0.0, 20.0),
        MetricSpec::new(MetricName::TrailingPe, 0.0, 1_000.0),
        MetricSpec::new(MetricName::MarketCap, 0.0, 20_000.0),
        MetricSpec::new(MetricName::EsgScore, 0.0, 100.0),
    ]
}

/// One macro series entry: provider-side series identifier plus the label
/// used when reporting the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSeries {
    /// Identifier understood by macro data providers (e.g. a FRED series id).
    pub series_id: String,
    /// Human-readable region name for reports.
    pub display_name: String,
}

impl MacroSeries {
    /// Construct a catalog entry.
    #[must_use]
    pub fn new(series_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Region catalogs for the macro lookups.
///
/// Keys are lowercase region slugs as accepted by the public lookup
/// operations; unknown regions are rejected with `InvalidArg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroCatalog {
    /// Region slug → monthly CPI index series.
    pub inflation: BTreeMap<String, MacroSeries>,
    /// Region slug → policy rate series.
    pub policy_rate: BTreeMap<String, MacroSeries>,
}

impl Default for MacroCatalog {
    fn default() -> Self {
        let mut inflation = BTreeMap::new();
        for (slug, series_id, name) in [
            ("usa", "CPIAUCSL", "USA"),
            ("eurozone", "CP0000EZ19M086NEST", "Eurozone"),
            ("germany", "DEUCPIALLMINMEI", "Germany"),
            ("uk", "GBRCPIALLMINMEI", "United Kingdom"),
            ("japan", "JPNCPIALLMINMEI", "Japan"),
            ("china", "CHNCPIALLMINMEI", "China"),
            ("brazil", "BRACPIALLMINMEI", "Brazil"),
        ] {
            inflation.insert(slug.to_string(), MacroSeries::new(series_id, name));
        }

        let mut policy_rate = BTreeMap::new();
        for (slug, series_id, name) in [
            ("usa", "FEDFUNDS", "USA"),
            ("eurozone", "ECBMRRFR", "Eurozone"),
            ("uk", "BOERUKM", "United Kingdom"),
            ("japan", "IRSTCI01JPM156N", "Japan"),
        ] {
            policy_rate.insert(slug.to_string(), MacroSeries::new(series_id, name));
        }

        Self {
            inflation,
            policy_rate,
        }
    }
}

/// Sizing and expiry for the metric lookup cache middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached (entity, metric) entries before eviction.
    pub max_entries: u64,
    /// Time a cached value stays fresh.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 512,
            ttl: Duration::from_secs(300),
        }
    }
}

/// Global configuration for the `Augur` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugurConfig {
    /// Timeout for individual provider and oracle calls.
    pub provider_timeout: Duration,
    /// Fixed pause before the single retry of a rate-limited provider.
    pub retry_delay: Duration,
    /// Optional overall deadline for fan-out aggregations.
    pub request_timeout: Option<Duration>,
    /// Forecaster hyperparameters.
    pub forecast: ForecastConfig,
    /// Plausibility bounds per reconciled metric.
    pub metrics: Vec<MetricSpec>,
    /// Region catalogs for macro lookups.
    pub macro_catalog: MacroCatalog,
}

impl Default for AugurConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            retry_delay: Duration::from_secs(10),
            request_timeout: None,
            forecast: ForecastConfig::default(),
            metrics: default_metric_specs(),
            macro_catalog: MacroCatalog::default(),
        }
    }
}

impl AugurConfig {
    /// Look up the plausibility bound configured for a metric, if any.
    #[must_use]
    pub fn metric_spec(&self, name: MetricName) -> Option<&MetricSpec> {
        self.metrics.iter().find(|s| s.name == name)
    }
}
