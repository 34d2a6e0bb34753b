use std::sync::Arc;

use augur::Augur;
use augur_core::{Provenance, ProviderKey};

use crate::helpers::{self, FnFundamentals, RecordingOracle};

#[tokio::test]
async fn a_provider_with_rating_coverage_wins() {
    let augur = Augur::builder()
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("yahoo", 3.2)))
        .with_fundamentals_provider(Arc::new(
            FnFundamentals::value("vantage", 3.2).with_rating("AA-"),
        ))
        .with_oracle(Arc::new(RecordingOracle::none_trustworthy()))
        .build()
        .unwrap();

    let rating = augur
        .credit_rating(&helpers::equity(helpers::MSFT))
        .await
        .unwrap();
    assert_eq!(rating.value, "AA-");
    assert_eq!(
        rating.provenance,
        Provenance::Authoritative(ProviderKey::new("vantage"))
    );
}

#[tokio::test]
async fn without_coverage_the_oracle_estimate_is_tagged_as_such() {
    let oracle = Arc::new(RecordingOracle::none_trustworthy().with_estimate("BBB+"));
    let augur = Augur::builder()
        .with_fundamentals_provider(Arc::new(FnFundamentals::value("yahoo", 3.2)))
        .with_oracle(oracle.clone())
        .build()
        .unwrap();

    let rating = augur
        .credit_rating(&helpers::equity(helpers::MSFT))
        .await
        .unwrap();
    assert_eq!(rating.value, "BBB+");
    assert_eq!(rating.provenance, Provenance::Estimated);
    assert_eq!(oracle.estimates(), 1);
}
