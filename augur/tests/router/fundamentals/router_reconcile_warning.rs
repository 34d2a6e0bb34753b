use std::sync::Arc;

use async_trait::async_trait;

use augur::Augur;
use augur_core::MetricName;
use augur_core::provider::JudgmentOracle;
use augur_core::types::{
    ArbitrationContext, EstimateContext, MetricSource, OracleJudgment, SentimentContext,
};
use augur_core::{AugurError, Sentiment};

use crate::helpers::{self, FnFundamentals, RecordingOracle};

#[tokio::test]
async fn all_implausible_candidates_yield_a_warning() {
    let oracle = Arc::new(RecordingOracle::none_trustworthy());
    let augur = Augur::builder()
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("yahoo", 50.0)))
        .with_fundamentals_provider(Arc::new(FnFundamentals::missing("vantage")))
        .with_fundamentals_provider(Arc::new(FnFundamentals::failing("finnhub")))
        .with_oracle(oracle.clone())
        .build()
        .unwrap();

    let entity = helpers::equity(helpers::AAPL);
    let metric = augur
        .reconcile_metric(&entity, MetricName::DividendYield)
        .await;

    assert_eq!(metric.value, None);
    assert_eq!(metric.source, MetricSource::Oracle);
    assert!(metric.warning);
    assert_eq!(oracle.arbitrations(), 1);

    let ctx = oracle.last_arbitration().unwrap();
    assert!(ctx.candidates.iter().all(|c| !c.plausible));
}

struct BrokenOracle;

#[async_trait]
impl JudgmentOracle for BrokenOracle {
    async fn arbitrate(&self, _ctx: &ArbitrationContext) -> Result<OracleJudgment, AugurError> {
        Err(AugurError::oracle("backend offline"))
    }
    async fn estimate(&self, _ctx: &EstimateContext) -> Result<String, AugurError> {
        Err(AugurError::oracle("backend offline"))
    }
    async fn classify_sentiment(&self, _ctx: &SentimentContext) -> Result<Sentiment, AugurError> {
        Err(AugurError::oracle("backend offline"))
    }
}

#[tokio::test]
async fn an_unreachable_oracle_still_produces_a_complete_result() {
    let augur = Augur::builder()
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("yahoo", 3.2)))
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("vantage", 9.9)))
        .with_oracle(Arc::new(BrokenOracle))
        .build()
        .unwrap();

    let entity = helpers::equity(helpers::AAPL);
    let metric = augur
        .reconcile_metric(&entity, MetricName::DividendYield)
        .await;

    assert_eq!(metric.value, None);
    assert!(metric.warning);
    assert!(metric.rationale.contains("arbitration unavailable"));
}
