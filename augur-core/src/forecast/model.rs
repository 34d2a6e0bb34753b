use crate::error::AugurError;

/// Linear single-step predictor over a fixed-length window.
///
/// Maps an ordered window of `lookback` scaled values to the next value via
/// a learned affine combination, trained by full-batch gradient descent on
/// mean squared error. Initialization is deterministic (uniform weights, zero
/// bias) so repeated fits on the same data produce the same model.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowModel {
    weights: Vec<f64>,
    bias: f64,
}

impl WindowModel {
    /// Train a model on every `(window, next value)` pair derivable from
    /// `scaled`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero lookback, `InsufficientHistory` when
    /// no training pair exists, and `DataUnavailable` when the optimization
    /// produces a non-finite parameter.
    pub fn train(
        scaled: &[f64],
        lookback: usize,
        epochs: usize,
        learning_rate: f64,
    ) -> Result<Self, AugurError> {
        if lookback == 0 {
            return Err(AugurError::InvalidArg("lookback must be positive".to_string()));
        }
        if scaled.len() <= lookback {
            return Err(AugurError::insufficient_history(lookback + 1, scaled.len()));
        }

        let examples = scaled.len() - lookback;
        let mut weights = vec![1.0 / lookback as f64; lookback];
        let mut bias = 0.0_f64;

        for _ in 0..epochs {
            let mut grad_w = vec![0.0_f64; lookback];
            let mut grad_b = 0.0_f64;

            for i in lookback..scaled.len() {
                let window = &scaled[i - lookback..i];
                let residual = dot(&weights, bias, window) - scaled[i];
                for (g, x) in grad_w.iter_mut().zip(window) {
                    *g += residual * x;
                }
                grad_b += residual;
            }

            let step = learning_rate * 2.0 / examples as f64;
            for (w, g) in weights.iter_mut().zip(&grad_w) {
                *w -= step * g;
            }
            bias -= step * grad_b;

            if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
                return Err(AugurError::data_unavailable(
                    "window model training diverged",
                ));
            }
        }

        Ok(Self { weights, bias })
    }

    /// Predict the next value from the trailing window.
    ///
    /// `window` must have exactly `lookback` elements.
    #[must_use]
    pub fn predict(&self, window: &[f64]) -> f64 {
        debug_assert_eq!(window.len(), self.weights.len());
        dot(&self.weights, self.bias, window)
    }

    /// Window length the model was trained for.
    #[must_use]
    pub fn lookback(&self) -> usize {
        self.weights.len()
    }
}

fn dot(weights: &[f64], bias: f64, window: &[f64]) -> f64 {
    weights
        .iter()
        .zip(window)
        .map(|(w, x)| w * x)
        .sum::<f64>()
        + bias
}
