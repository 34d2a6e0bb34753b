use std::collections::BTreeMap;

use augur_core::reconcile::{Resolution, is_plausible, resolve};
use augur_core::types::{
    ArbitrationContext, EntityId, LabeledCandidate, MetricCandidate, MetricSource, OracleVerdict,
    ReconciledMetric,
};
use augur_core::{EntityKind, MetricName, MetricSpec, ProviderKey};

use crate::Augur;

impl Augur {
    /// Reconcile every configured metric for an equity entity.
    ///
    /// Non-equity kinds have no reconciled fundamentals and yield an empty
    /// map, mirroring the analysis report contract.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(symbol = %entity.symbol))
    )]
    pub async fn fundamentals(&self, entity: &EntityId) -> BTreeMap<MetricName, ReconciledMetric> {
        if entity.kind != EntityKind::Equity {
            return BTreeMap::new();
        }
        let metrics: Vec<MetricName> = self.cfg.metrics.iter().map(|s| s.name).collect();
        let reconciled =
            futures::future::join_all(metrics.iter().map(|&m| self.reconcile_metric(entity, m)))
                .await;
        metrics.into_iter().zip(reconciled).collect()
    }

    /// Select one trusted value for a metric from all registered
    /// fundamentals providers.
    ///
    /// Deterministic rules first: a single plausible candidate (or full
    /// agreement among the plausible ones) is selected verbatim without
    /// consulting the oracle. Disagreement, or the absence of any plausible
    /// candidate, hands every raw candidate to the oracle, implausible ones
    /// labeled as such. Absence of trust is an outcome, not an error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(symbol = %entity.symbol, metric = %metric))
    )]
    pub async fn reconcile_metric(&self, entity: &EntityId, metric: MetricName) -> ReconciledMetric {
        let spec = self
            .cfg
            .metric_spec(metric)
            .copied()
            .unwrap_or_else(|| MetricSpec::new(metric, f64::NEG_INFINITY, f64::INFINITY));

        let candidates = self.gather_candidates(entity, metric).await;
        match resolve(&spec, &candidates) {
            Resolution::Single(c) => ReconciledMetric {
                value: c.value,
                source: MetricSource::Provider(c.provider),
                rationale: "single plausible source".to_string(),
                warning: false,
            },
            Resolution::Agreement { selected, agreeing } => ReconciledMetric {
                value: selected.value,
                source: MetricSource::Provider(selected.provider),
                rationale: format!("{agreeing} plausible sources agree"),
                warning: false,
            },
            Resolution::Contested | Resolution::NonePlausible => {
                self.arbitrate(entity, metric, &spec, candidates).await
            }
        }
    }

    /// Query every fundamentals provider concurrently, converting call
    /// failures into valueless candidates so provenance is never lost.
    async fn gather_candidates(
        &self,
        entity: &EntityId,
        metric: MetricName,
    ) -> Vec<MetricCandidate> {
        let timeout = self.cfg.provider_timeout;
        let tasks = self.fundamentals.iter().map(|p| {
            let p = p.clone();
            let entity = entity.clone();
            async move {
                let key = p.key();
                let fut = p.fetch_metric(&entity, metric);
                match Self::call_with_timeout(key.as_str(), "metric", timeout, fut).await {
                    Ok(candidate) => candidate,
                    Err(e) => MetricCandidate::missing(key, e.to_string()),
                }
            }
        });
        futures::future::join_all(tasks).await
    }

    /// Hand a contested candidate set to the oracle and map its verdict.
    async fn arbitrate(
        &self,
        entity: &EntityId,
        metric: MetricName,
        spec: &MetricSpec,
        candidates: Vec<MetricCandidate>,
    ) -> ReconciledMetric {
        let any_plausible = candidates.iter().any(|c| is_plausible(spec, c));
        let ctx = ArbitrationContext {
            entity: entity.clone(),
            metric,
            candidates: candidates
                .iter()
                .map(|c| LabeledCandidate {
                    candidate: c.clone(),
                    plausible: is_plausible(spec, c),
                })
                .collect(),
        };

        let judgment = Self::call_with_timeout(
            "oracle",
            "arbitrate",
            self.cfg.provider_timeout,
            self.oracle.arbitrate(&ctx),
        )
        .await;

        match judgment {
            Ok(j) => match j.verdict {
                OracleVerdict::Trust(key) => {
                    let chosen = find_candidate(&candidates, key);
                    let chosen_plausible = chosen.is_some_and(|c| is_plausible(spec, c));
                    ReconciledMetric {
                        value: chosen.and_then(|c| c.value),
                        source: MetricSource::Provider(key),
                        rationale: j.rationale,
                        warning: !any_plausible || !chosen_plausible,
                    }
                }
                OracleVerdict::NoneTrustworthy => ReconciledMetric {
                    value: None,
                    source: MetricSource::Oracle,
                    rationale: j.rationale,
                    warning: true,
                },
            },
            Err(e) => ReconciledMetric {
                value: None,
                source: MetricSource::Oracle,
                rationale: format!("arbitration unavailable: {e}"),
                warning: true,
            },
        }
    }
}

fn find_candidate(candidates: &[MetricCandidate], key: ProviderKey) -> Option<&MetricCandidate> {
    candidates.iter().find(|c| c.provider == key)
}
