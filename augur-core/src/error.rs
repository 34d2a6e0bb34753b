use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the augur workspace.
///
/// This wraps insufficient-history conditions, provider-tagged failures,
/// transient rate limits, oracle failures, and an aggregate for
/// multi-provider attempts.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AugurError {
    /// The input series is shorter than the operation requires.
    #[error("insufficient history: need at least {required} points, got {actual}")]
    InsufficientHistory {
        /// Minimum number of points the operation needs.
        required: usize,
        /// Number of points actually supplied.
        actual: usize,
    },

    /// A provider returned an empty or malformed payload.
    #[error("data unavailable: {what}")]
    DataUnavailable {
        /// Description of what is missing, e.g. "series for AAPL".
        what: String,
    },

    /// A provider signaled a transient rate-limit condition.
    ///
    /// The fallback chain retries this exactly once before treating the
    /// provider as failed.
    #[error("rate limited by {provider}")]
    RateLimited {
        /// Provider name that throttled the request.
        provider: String,
    },

    /// An individual provider returned a non-transient error.
    #[error("{provider} failed: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The judgment oracle failed or returned a malformed verdict.
    #[error("oracle failed: {msg}")]
    Oracle {
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {operation} via {provider}")]
    ProviderTimeout {
        /// Provider name that timed out.
        provider: String,
        /// Operation label (e.g. "series", "metric", "observations").
        operation: String,
    },

    /// The requested operation is not supported for the target entity.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Operation label describing what was requested.
        operation: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<AugurError>),
}

impl AugurError {
    /// Helper: build a `DataUnavailable` error for a description of the
    /// missing data.
    pub fn data_unavailable(what: impl Into<String>) -> Self {
        Self::DataUnavailable { what: what.into() }
    }

    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `RateLimited` error for a provider name.
    pub fn rate_limited(provider: impl Into<String>) -> Self {
        Self::RateLimited {
            provider: provider.into(),
        }
    }

    /// Helper: build an `Oracle` error from a message.
    pub fn oracle(msg: impl Into<String>) -> Self {
        Self::Oracle { msg: msg.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
            operation: operation.into(),
        }
    }

    /// Helper: build an `Unsupported` error for an operation label.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Helper: build an `InsufficientHistory` error.
    #[must_use]
    pub const fn insufficient_history(required: usize, actual: usize) -> Self {
        Self::InsufficientHistory { required, actual }
    }

    /// Whether a retry after a short pause may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
