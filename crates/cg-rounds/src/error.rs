use cg_db::error::DatabaseError;
use cg_github::GatewayError;
use thiserror::Error;

/// Errors from producing round content.
///
/// Everything except [`RoundError::Exhausted`], [`RoundError::EmptyPool`] and
/// [`RoundError::Database`] is a per-repository failure that only advances
/// the fallback ladder.
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// No listing of the repository yielded a recognized code file.
    #[error("no code file found in {repository}")]
    NoCodeFound { repository: String },

    /// Every draw for the repository was rejected and none was kept.
    #[error("no suitable file found in {repository}")]
    NoSuitableFile { repository: String },

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// The whole ladder failed.
    #[error("failed to produce round content after {attempts} repository attempts")]
    Exhausted { attempts: usize },

    #[error("repository pool is empty")]
    EmptyPool,
}

impl RoundError {
    /// Rate limited upstream, or out of budget with nothing cached.
    #[must_use]
    pub const fn is_quota(&self) -> bool {
        match self {
            Self::Gateway(error) => error.is_quota(),
            _ => false,
        }
    }
}
