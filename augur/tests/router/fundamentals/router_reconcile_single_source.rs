use std::sync::Arc;

use augur::Augur;
use augur_core::types::MetricSource;
use augur_core::MetricName;

use crate::helpers::{self, FnFundamentals, RecordingOracle, YAHOO};

#[tokio::test]
async fn a_single_plausible_candidate_is_selected_without_the_oracle() {
    let oracle = Arc::new(RecordingOracle::none_trustworthy());
    let augur = Augur::builder()
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("yahoo", 3.2)))
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("vantage", 95.0)))
        .with_fundamentals_provider(Arc::new(FnFundamentals::missing("finnhub")))
        .with_oracle(oracle.clone())
        .build()
        .unwrap();

    let entity = helpers::equity(helpers::AAPL);
    let metric = augur
        .reconcile_metric(&entity, MetricName::DividendYield)
        .await;

    assert_eq!(metric.value, Some(3.2));
    assert_eq!(metric.source, MetricSource::Provider(YAHOO));
    assert_eq!(metric.rationale, "single plausible source");
    assert!(!metric.warning);
    assert_eq!(oracle.arbitrations(), 0, "oracle must not be consulted");
}

#[tokio::test]
async fn provider_call_failures_become_valueless_candidates() {
    let oracle = Arc::new(RecordingOracle::none_trustworthy());
    let augur = Augur::builder()
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("yahoo", 2.1)))
        .with_fundamentals_provider(Arc::new(FnFundamentals::failing("vantage")))
        .with_oracle(oracle.clone())
        .build()
        .unwrap();

    let entity = helpers::equity(helpers::AAPL);
    let metric = augur
        .reconcile_metric(&entity, MetricName::DividendYield)
        .await;

    // The failed provider contributes nothing plausible, so the surviving
    // candidate still resolves deterministically.
    assert_eq!(metric.value, Some(2.1));
    assert!(!metric.warning);
    assert_eq!(oracle.arbitrations(), 0);
}
