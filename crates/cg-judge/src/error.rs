//! Judge error types. These never leave the crate's public `analyze` path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JudgeError {
    /// HTTP transport error (including timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered without any message content.
    #[error("empty response")]
    EmptyResponse,
}
