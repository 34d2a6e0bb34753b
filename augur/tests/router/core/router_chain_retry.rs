use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use augur::Augur;
use augur_core::{AugurError, Provenance, ProviderKey};
use augur_mock::fixtures::series::monthly_observations;

use crate::helpers::{FnMacro, RecordingOracle};

#[tokio::test]
async fn rate_limited_provider_is_retried_exactly_once() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let seen = attempts.clone();
    let throttled = FnMacro::new("throttled", move |_| {
        if seen.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(AugurError::rate_limited("throttled"))
        } else {
            Ok(monthly_observations(&[3.0, 3.25]))
        }
    });

    let augur = Augur::builder()
        .with_macro_provider(Arc::new(throttled))
        .with_oracle(Arc::new(RecordingOracle::none_trustworthy()))
        .retry_delay(Duration::from_millis(10))
        .build()
        .unwrap();

    let rate = augur.policy_rate("usa").await.unwrap();
    assert_eq!(rate.value, 3.25);
    assert_eq!(
        rate.provenance,
        Provenance::Authoritative(ProviderKey::new("throttled"))
    );
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn second_rate_limit_counts_as_failure_and_the_chain_moves_on() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let seen = attempts.clone();
    let hopeless = FnMacro::new("hopeless", move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        Err(AugurError::rate_limited("hopeless"))
    });
    let backup = FnMacro::new("backup", |_| Ok(monthly_observations(&[1.5])));

    let augur = Augur::builder()
        .with_macro_provider(Arc::new(hopeless))
        .with_macro_provider(Arc::new(backup))
        .with_oracle(Arc::new(RecordingOracle::none_trustworthy()))
        .retry_delay(Duration::from_millis(10))
        .build()
        .unwrap();

    let rate = augur.policy_rate("usa").await.unwrap();
    assert_eq!(rate.value, 1.5);
    assert_eq!(
        rate.provenance,
        Provenance::Authoritative(ProviderKey::new("backup"))
    );
    // One initial attempt plus exactly one retry, never more.
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}
