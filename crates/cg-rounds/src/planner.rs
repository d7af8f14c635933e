//! Game-level round creation on top of the selector.

use std::collections::HashSet;

use cg_core::catalog::catalog;
use cg_core::entities::{RepositoryRef, RoundFields};
use cg_github::RemoteContent;
use cg_judge::ComplexityJudge;

use crate::error::RoundError;
use crate::selector::Selector;

/// Creates rounds for a game without repeating repositories within it.
///
/// The per-game history lives in the cache database, so it survives
/// restarts and is shared by every process using the same store.
pub struct RoundPlanner<R, J> {
    selector: Selector<R, J>,
    catalog: Vec<RepositoryRef>,
}

impl<R: RemoteContent, J: ComplexityJudge> RoundPlanner<R, J> {
    pub fn new(selector: Selector<R, J>) -> Self {
        Self::with_catalog(selector, catalog())
    }

    pub const fn with_catalog(selector: Selector<R, J>, catalog: Vec<RepositoryRef>) -> Self {
        Self { selector, catalog }
    }

    pub const fn selector(&self) -> &Selector<R, J> {
        &self.selector
    }

    /// Candidate repositories for the game's next round: the catalog minus
    /// repositories already used, or the whole catalog once all are used.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Database`] if the history cannot be read.
    pub async fn pool_for_game(&self, game_id: &str) -> Result<Vec<RepositoryRef>, RoundError> {
        let used: HashSet<String> = self
            .selector
            .gateway()
            .cache()
            .repos_used_in_game(game_id)
            .await?
            .into_iter()
            .collect();
        let pool: Vec<RepositoryRef> = self
            .catalog
            .iter()
            .filter(|repo| !used.contains(&repo.key()))
            .cloned()
            .collect();
        if pool.is_empty() {
            tracing::debug!(game_id, "every repository used, reusing the full catalog");
            return Ok(self.catalog.clone());
        }
        Ok(pool)
    }

    /// Select content for round `round_number` of `total_rounds` and record
    /// the repository against the game. The history is cleared once the
    /// final round has been created.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Database`] if the history cannot be read, or the
    /// selector's error when no content could be produced.
    pub async fn create_round(
        &self,
        game_id: &str,
        round_number: u32,
        total_rounds: u32,
    ) -> Result<RoundFields, RoundError> {
        let pool = self.pool_for_game(game_id).await?;
        let min_complexity = self.selector.config().primary_min_complexity;
        let content = self.selector.select(&pool, min_complexity).await?;

        let db = self.selector.gateway().cache();
        if let Err(error) = db.record_repo_use(game_id, &content.repository).await {
            tracing::warn!(game_id, repository = %content.repository, %error, "failed to record repository use");
        }
        if round_number >= total_rounds {
            match db.clear_game_history(game_id).await {
                Ok(cleared) => tracing::debug!(game_id, cleared, "final round created, history cleared"),
                Err(error) => tracing::warn!(game_id, %error, "failed to clear game history"),
            }
        }

        Ok(content.into())
    }
}
