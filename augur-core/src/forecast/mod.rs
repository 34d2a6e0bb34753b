//! Windowed, recursive forecasting over a closing-price column.
//!
//! The projection is recursive by design: each predicted value is appended to
//! the input buffer used to produce the next one, so the buffer mixes
//! observed and predicted values and prediction error compounds across the
//! horizon. This is the documented behavior of the engine, kept behind a pure
//! function boundary so it stays testable in isolation.

/// Trainable single-step window predictor.
pub mod model;

pub use model::WindowModel;

use crate::error::AugurError;
use crate::timeseries::scale::SequenceScaler;
use crate::types::{ForecastOutcome, ForecastResult};
use augur_types::ForecastConfig;

/// Produce an `H`-step forecast from a closing-price column.
///
/// Fits a fresh scaler, trains a fresh model, projects recursively, and
/// inverse-transforms back into original units. With `closes.len() <=
/// lookback` the unavailable outcome is returned without any training; every
/// failure inside training or projection is likewise converted into the
/// unavailable outcome rather than propagating.
#[must_use]
pub fn forecast_closes(closes: &[f64], cfg: &ForecastConfig) -> ForecastOutcome {
    if closes.len() <= cfg.lookback {
        return ForecastOutcome::unavailable(
            AugurError::insufficient_history(cfg.lookback + 1, closes.len()).to_string(),
        );
    }
    match project(closes, cfg) {
        Ok(result) => ForecastOutcome::Ready(result),
        Err(e) => ForecastOutcome::unavailable(e.to_string()),
    }
}

fn project(closes: &[f64], cfg: &ForecastConfig) -> Result<ForecastResult, AugurError> {
    let scaler = SequenceScaler::fit(closes)?;
    let scaled = scaler.transform_all(closes);
    let model = WindowModel::train(&scaled, cfg.lookback, cfg.epochs, cfg.learning_rate)?;

    // Seed with the last observed window; from here on the buffer mixes
    // observations and prior predictions.
    let mut buffer: Vec<f64> = scaled[scaled.len() - cfg.lookback..].to_vec();
    let mut predicted = Vec::with_capacity(cfg.horizon);
    for _ in 0..cfg.horizon {
        let next = model.predict(&buffer[buffer.len() - cfg.lookback..]);
        if !next.is_finite() {
            return Err(AugurError::data_unavailable("non-finite prediction"));
        }
        predicted.push(next);
        buffer.push(next);
    }

    Ok(ForecastResult {
        values: scaler.invert_all(&predicted),
    })
}
