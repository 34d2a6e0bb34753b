// Re-export helpers so tests can `use helpers::*;`
pub mod mock_provider;

#[allow(unused_imports)]
pub use mock_provider::{FnFundamentals, FnMacro, FnMarket, FnSentiment, RecordingOracle};

use augur_core::types::{EntityId, PricePoint, Series};
use augur_core::{EntityKind, ProviderKey};

/// Common symbol constants used across tests.
#[allow(dead_code)]
pub const AAPL: &str = "AAPL";
#[allow(dead_code)]
pub const MSFT: &str = "MSFT";

/// Provider keys used by the closure-driven mocks.
#[allow(dead_code)]
pub const YAHOO: ProviderKey = ProviderKey::new("yahoo");
#[allow(dead_code)]
pub const VANTAGE: ProviderKey = ProviderKey::new("vantage");
#[allow(dead_code)]
pub const FINNHUB: ProviderKey = ProviderKey::new("finnhub");

/// An equity entity for a symbol.
pub fn equity(symbol: &str) -> EntityId {
    EntityId::new(EntityKind::Equity, symbol)
}

/// A crypto entity for a symbol.
#[allow(dead_code)]
pub fn crypto(symbol: &str) -> EntityId {
    EntityId::new(EntityKind::Crypto, symbol)
}

/// Build a daily series from a closes column, one point per day.
pub fn daily_series(closes: &[f64]) -> Series {
    use chrono::{Duration, TimeZone, Utc};
    let start = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let points: Vec<PricePoint> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            ts: start + Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: Some(1_000),
        })
        .collect();
    Series::new(points).unwrap()
}

/// A ramp of `n` closes starting at 100.
#[allow(dead_code)]
pub fn ramp_series(n: usize) -> Series {
    let closes: Vec<f64> = (0..n).map(|i| 100.0 + 0.5 * i as f64).collect();
    daily_series(&closes)
}
