//! Macro lookups through the fallback chain, including the estimate path.
//!
//! ```sh
//! cargo run -p augur --example 02_macro_rates
//! ```

use std::sync::Arc;

use augur::{Augur, Provenance};
use augur_mock::{MockMacro, MockOracle};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), augur::AugurError> {
    // Thirteen monthly CPI levels: enough for a year-over-year change.
    let cpi = [
        304.7, 305.1, 305.7, 306.3, 306.7, 307.0, 307.6, 308.0, 308.4, 308.7, 309.1, 309.7, 310.3,
    ];
    let fred = MockMacro::new("fred")
        .with_series("CPIAUCSL", &cpi)
        .with_series("FEDFUNDS", &[5.33, 5.33, 5.25]);

    let augur = Augur::builder()
        .with_macro_provider(Arc::new(fred))
        .with_oracle(Arc::new(MockOracle::new().with_estimate("2.1")))
        .build()?;

    let inflation = augur.inflation("usa").await?;
    println!("usa inflation: {:.2}% ({:?})", inflation.value, inflation.provenance);

    let rate = augur.policy_rate("usa").await?;
    println!("usa policy rate: {:.2}% ({:?})", rate.value, rate.provenance);

    // No series is registered for the eurozone, so the oracle estimate
    // steps in and the provenance says so.
    let estimated = augur.inflation("eurozone").await?;
    assert_eq!(estimated.provenance, Provenance::Estimated);
    println!(
        "eurozone inflation: {:.2}% ({:?})",
        estimated.value, estimated.provenance
    );
    Ok(())
}
