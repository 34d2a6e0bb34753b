//! Derivations over macro series observations.

use crate::error::AugurError;
use crate::types::Observation;

/// Observations needed for a year-over-year change on a monthly series:
/// the latest point plus the one twelve months before it.
const YOY_MIN_OBSERVATIONS: usize = 13;

/// Year-over-year percentage change of a monthly index.
///
/// Compares the latest observation against the one twelve months earlier,
/// i.e. `(last - base) / base * 100` with `base = obs[len - 13]`.
///
/// # Errors
/// Returns `DataUnavailable` when fewer than 13 observations exist or the
/// base level is zero.
pub fn year_over_year(observations: &[Observation]) -> Result<f64, AugurError> {
    if observations.len() < YOY_MIN_OBSERVATIONS {
        return Err(AugurError::data_unavailable(format!(
            "need at least {YOY_MIN_OBSERVATIONS} observations for a year-over-year change, got {}",
            observations.len()
        )));
    }
    let last = observations[observations.len() - 1].value;
    let base = observations[observations.len() - YOY_MIN_OBSERVATIONS].value;
    if base == 0.0 {
        return Err(AugurError::data_unavailable(
            "zero base level in year-over-year change",
        ));
    }
    Ok((last - base) / base * 100.0)
}

/// The most recent observation's value.
///
/// # Errors
/// Returns `DataUnavailable` for an empty series.
pub fn latest(observations: &[Observation]) -> Result<f64, AugurError> {
    observations
        .last()
        .map(|o| o.value)
        .ok_or_else(|| AugurError::data_unavailable("empty macro series"))
}
