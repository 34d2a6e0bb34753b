//! Full analysis of one equity against the mock providers.
//!
//! ```sh
//! cargo run -p augur --example 01_analyze
//! ```

use std::sync::Arc;

use augur::{Augur, EntityId, ForecastOutcome};
use augur_core::{MetricName, Sentiment};
use augur_mock::{MockFundamentals, MockMarketData, MockOracle, MockSentiment};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), augur::AugurError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let augur = Augur::builder()
        .with_market_provider(Arc::new(MockMarketData::new()))
        .with_fundamentals_provider(Arc::new(
            MockFundamentals::new("yahoo")
                .with_metric(MetricName::DividendYield, 3.2)
                .with_metric(MetricName::TrailingPe, 27.4),
        ))
        .with_fundamentals_provider(Arc::new(
            MockFundamentals::new("vantage")
                .with_metric(MetricName::DividendYield, 3.3)
                .with_metric(MetricName::MarketCap, 2_850.0),
        ))
        .with_sentiment_source(Arc::new(MockSentiment::new("news", Sentiment::Positive)))
        .with_sentiment_source(Arc::new(MockSentiment::new("social", Sentiment::Neutral)))
        .with_oracle(Arc::new(MockOracle::trusting("vantage")))
        .build()?;

    let entity = EntityId::named(augur::EntityKind::Equity, "AAPL", "Apple Inc.");
    let report = augur.analyze(&entity).await;

    println!("analysis for {}", report.entity.display_name());
    for (metric, reconciled) in &report.fundamentals {
        let value = reconciled
            .value
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        let flag = if reconciled.warning { " [warning]" } else { "" };
        println!("  {metric}: {value} ({}){flag}", reconciled.rationale);
    }
    println!("  sentiment: {:?}", report.sentiment.label);
    match report.forecast {
        ForecastOutcome::Ready(result) => {
            println!(
                "  forecast: {} steps, first {:.2}, last {:.2}",
                result.values.len(),
                result.values.first().unwrap(),
                result.values.last().unwrap()
            );
        }
        ForecastOutcome::Unavailable { reason } => println!("  forecast unavailable: {reason}"),
    }
    Ok(())
}
