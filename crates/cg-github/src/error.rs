//! Gateway error types.

use thiserror::Error;

/// Errors from fetching remote content.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// File content could not be decoded to text.
    #[error("decode error: {0}")]
    Decode(String),

    /// The API quota is spent.
    #[error("rate limited (quota resets at {reset_at:?})")]
    RateLimited {
        /// Epoch seconds at which the quota resets, when reported.
        reset_at: Option<u64>,
    },

    /// The per-request call budget is spent and the cache had nothing to
    /// offer instead.
    #[error("API call budget exhausted and no cached content available")]
    BudgetExhausted,
}

impl GatewayError {
    /// Whether this error means "stop calling upstream, use the cache".
    #[must_use]
    pub const fn is_quota(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::BudgetExhausted)
    }
}
