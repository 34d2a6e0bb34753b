use std::sync::Arc;

use augur::Augur;
use augur_core::{Provenance, ProviderKey};
use augur_mock::fixtures::series::monthly_observations;

use crate::helpers::{FnMacro, RecordingOracle};

#[tokio::test]
async fn policy_rate_is_the_latest_observation() {
    let fred = FnMacro::new("fred", |series_id| {
        assert_eq!(series_id, "ECBMRRFR");
        Ok(monthly_observations(&[4.5, 4.25, 4.0, 3.65]))
    });
    let augur = Augur::builder()
        .with_macro_provider(Arc::new(fred))
        .with_oracle(Arc::new(RecordingOracle::none_trustworthy()))
        .build()
        .unwrap();

    let rate = augur.policy_rate("eurozone").await.unwrap();
    assert_eq!(rate.value, 3.65);
    assert_eq!(
        rate.provenance,
        Provenance::Authoritative(ProviderKey::new("fred"))
    );
}

#[tokio::test]
async fn region_slugs_are_case_insensitive() {
    let fred = FnMacro::new("fred", |_| Ok(monthly_observations(&[5.25])));
    let augur = Augur::builder()
        .with_macro_provider(Arc::new(fred))
        .with_oracle(Arc::new(RecordingOracle::none_trustworthy()))
        .build()
        .unwrap();

    assert_eq!(augur.policy_rate("USA").await.unwrap().value, 5.25);
}
