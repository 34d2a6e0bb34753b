//! Time-series utilities: indicator enrichment and normalization.

/// Trend and momentum indicator derivation over OHLCV series.
pub mod indicators;
/// Min/max normalization with exact affine inverse.
pub mod scale;

pub use indicators::enrich;
pub use scale::SequenceScaler;
