//! Per-game repository history.
//!
//! Replaces process memory so that history survives restarts and is shared
//! by every server instance using the same database.

use crate::GuessDb;
use crate::error::DatabaseError;
use crate::helpers::now_timestamp;

impl GuessDb {
    /// Repository keys already used in a game, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn repos_used_in_game(&self, game_id: &str) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT repo_key FROM game_repo_history
                 WHERE game_id = ?1
                 ORDER BY used_at, repo_key",
                [game_id],
            )
            .await?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next().await? {
            keys.push(row.get::<String>(0)?);
        }
        Ok(keys)
    }

    /// Record that a game used a repository. Recording the same pair twice
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn record_repo_use(&self, game_id: &str, repo_key: &str) -> Result<(), DatabaseError> {
        let now = now_timestamp();
        self.conn()
            .execute(
                "INSERT OR IGNORE INTO game_repo_history (game_id, repo_key, used_at)
                 VALUES (?1, ?2, ?3)",
                libsql::params![game_id, repo_key, now.as_str()],
            )
            .await?;
        Ok(())
    }

    /// Forget a game's history. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn clear_game_history(&self, game_id: &str) -> Result<u64, DatabaseError> {
        let removed = self
            .conn()
            .execute("DELETE FROM game_repo_history WHERE game_id = ?1", [game_id])
            .await?;
        Ok(removed)
    }
}
