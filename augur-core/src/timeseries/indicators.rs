use crate::types::{IndicatorRow, Series};

/// Window lengths for the simple moving averages.
const MA_SHORT: usize = 50;
const MA_MID: usize = 100;
const MA_LONG: usize = 200;

/// RSI smoothing: exponentially weighted gains/losses with center of mass 13,
/// i.e. Wilder's 14-period smoothing.
const RSI_ALPHA: f64 = 1.0 / 14.0;

/// Derive indicator rows from a raw series.
///
/// Each output row carries the 50/100/200-period simple moving averages and
/// the 14-period RSI of the close column. A row is emitted only when every
/// indicator is defined; the first `MA_LONG - 1` points never qualify, and a
/// row whose RSI is undefined (no price movement observed yet) is dropped
/// like any other incomplete row. An empty input yields an empty output.
#[must_use]
pub fn enrich(series: &Series) -> Vec<IndicatorRow> {
    let points = series.points();
    if points.len() < MA_LONG {
        return Vec::new();
    }

    let closes: Vec<f64> = points.iter().map(|p| p.close).collect();
    let rsi = rsi_column(&closes);

    let mut rows = Vec::with_capacity(points.len() - (MA_LONG - 1));
    for i in (MA_LONG - 1)..points.len() {
        let Some(rsi_i) = rsi[i] else {
            continue;
        };
        rows.push(IndicatorRow {
            point: points[i],
            ma50: sma(&closes, i, MA_SHORT),
            ma100: sma(&closes, i, MA_MID),
            ma200: sma(&closes, i, MA_LONG),
            rsi: rsi_i,
        });
    }
    rows
}

/// Simple moving average of the `window` values ending at index `i`.
/// Caller guarantees `i + 1 >= window`.
fn sma(closes: &[f64], i: usize, window: usize) -> f64 {
    let start = i + 1 - window;
    closes[start..=i].iter().sum::<f64>() / window as f64
}

/// RSI per index, `None` where undefined.
///
/// Gains and losses from consecutive closes are smoothed with
/// `s_t = alpha * x_t + (1 - alpha) * s_{t-1}`, seeded at the first delta.
/// With zero smoothed losses the RSI saturates at 100; with neither gains
/// nor losses it is undefined.
fn rsi_column(closes: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    let mut ema_up = 0.0;
    let mut ema_down = 0.0;

    for i in 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        if i == 1 {
            ema_up = gain;
            ema_down = loss;
        } else {
            ema_up = RSI_ALPHA * gain + (1.0 - RSI_ALPHA) * ema_up;
            ema_down = RSI_ALPHA * loss + (1.0 - RSI_ALPHA) * ema_down;
        }

        out[i] = if ema_down == 0.0 && ema_up == 0.0 {
            None
        } else if ema_down == 0.0 {
            Some(100.0)
        } else {
            let rs = ema_up / ema_down;
            Some(100.0 - 100.0 / (1.0 + rs))
        };
    }
    out
}
