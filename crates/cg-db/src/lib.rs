//! # cg-db
//!
//! libSQL storage for codeguess.
//!
//! Holds two tables:
//! - `content_cache`: raw remote content responses keyed by
//!   `(owner, repo, path, content_type)`, used to skip redundant upstream
//!   calls and as a fallback source when the upstream is rate limited.
//! - `game_repo_history`: repositories already served to each game, so a
//!   game does not see the same repository twice.
//!
//! The cache has no eviction. Growth is bounded only by the number of
//! distinct paths ever fetched; [`GuessDb::cache_stats`] exposes row counts
//! so the size can be watched.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
pub struct GuessDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl GuessDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let guess_db = Self { db, conn };
        guess_db.run_migrations().await?;
        Ok(guess_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> GuessDb {
        GuessDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        for table in ["content_cache", "game_repo_history"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            assert!(rows.next().await.unwrap().is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn open_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.db");
        let path = path.to_str().unwrap();
        {
            let db = GuessDb::open_local(path).await.unwrap();
            db.record_repo_use("game-1", "psf/requests").await.unwrap();
        }
        let db = GuessDb::open_local(path).await.unwrap();
        assert_eq!(
            db.repos_used_in_game("game-1").await.unwrap(),
            vec!["psf/requests".to_string()]
        );
    }
}
