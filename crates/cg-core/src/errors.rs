//! Cross-cutting error types for codeguess.
//!
//! Domain-specific errors (`DatabaseError`, `GatewayError`, `RoundError`) are
//! defined in their respective crates. The binary converges everything into
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any codeguess crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A repository key was not of the form `owner/name`.
    #[error("Invalid repository key '{0}': expected owner/name")]
    InvalidRepoKey(String),

    /// An enum value read from storage or the wire was not recognized.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
