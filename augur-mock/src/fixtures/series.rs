//! Deterministic OHLCV series generation.
//!
//! The shape is derived from the symbol alone, so repeated runs (and
//! repeated providers) see identical data without any RNG.

use augur_core::types::{PricePoint, Series};
use chrono::{Duration, TimeZone, Utc};

/// Generate `days` daily points for a symbol.
///
/// The series is a gentle upward drift plus two superimposed waves, offset
/// by a per-symbol base price, so indicators and forecasts have realistic
/// texture while staying strictly positive.
#[must_use]
pub fn daily(symbol: &str, days: usize) -> Series {
    let base = 50.0 + f64::from(symbol.bytes().map(u32::from).sum::<u32>() % 200);
    let start = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();

    let points = (0..days)
        .map(|i| {
            let t = i as f64;
            let close = base + 0.05 * t + 3.0 * (t * 0.11).sin() + 1.5 * (t * 0.031).cos();
            PricePoint {
                ts: start + Duration::days(i as i64),
                open: close - 0.4,
                high: close + 1.2,
                low: close - 1.3,
                close,
                volume: Some(10_000 + (i as u64 % 7) * 1_000),
            }
        })
        .collect();

    Series::new(points).expect("generated timestamps are unique")
}

/// Monthly observations ending at a fixed anchor date, oldest first.
#[must_use]
pub fn monthly_observations(values: &[f64]) -> Vec<augur_core::types::Observation> {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| augur_core::types::Observation {
            ts: start + Duration::days(30 * i as i64),
            value,
        })
        .collect()
}
