//! Content cache: point reads, insert-or-ignore writes, and random draws.

use cg_core::entities::CacheEntry;
use cg_core::enums::ContentType;
use serde::Serialize;

use crate::GuessDb;
use crate::error::DatabaseError;
use crate::helpers::{now_timestamp, parse_datetime};

const ENTRY_COLUMNS: &str = "owner, repo, path, content_type, url, content, last_accessed_at";

/// Row count for one content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStat {
    pub content_type: ContentType,
    pub entries: u64,
    /// Total stored content, in bytes.
    pub content_bytes: u64,
}

fn row_to_entry(row: &libsql::Row) -> Result<CacheEntry, DatabaseError> {
    let content_type = row
        .get::<String>(3)?
        .parse::<ContentType>()
        .map_err(|e| DatabaseError::Query(e.to_string()))?;
    Ok(CacheEntry {
        owner: row.get(0)?,
        repo: row.get(1)?,
        path: row.get(2)?,
        content_type,
        url: row.get(4)?,
        content: row.get(5)?,
        last_accessed_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl GuessDb {
    /// Look up one cached response.
    ///
    /// A hit refreshes `last_accessed_at`. The refresh is best-effort: if it
    /// fails, the failure is logged and the entry is still returned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the lookup itself fails.
    pub async fn cache_get(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content_type: ContentType,
    ) -> Result<Option<CacheEntry>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM content_cache
                     WHERE owner = ?1 AND repo = ?2 AND path = ?3 AND content_type = ?4"
                ),
                libsql::params![owner, repo, path, content_type.as_str()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let mut entry = row_to_entry(&row)?;

        let now = now_timestamp();
        match self
            .conn()
            .execute(
                "UPDATE content_cache SET last_accessed_at = ?1
                 WHERE owner = ?2 AND repo = ?3 AND path = ?4 AND content_type = ?5",
                libsql::params![now.as_str(), owner, repo, path, content_type.as_str()],
            )
            .await
        {
            Ok(_) => {
                if let Ok(touched) = parse_datetime(&now) {
                    entry.last_accessed_at = touched;
                }
            }
            Err(error) => {
                tracing::warn!(owner, repo, path, %error, "failed to refresh cache access time");
            }
        }

        Ok(Some(entry))
    }

    /// Store a response. An existing row for the same key is kept as-is.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails for a reason other than
    /// the uniqueness conflict.
    pub async fn cache_put(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content_type: ContentType,
        url: &str,
        content: &str,
    ) -> Result<(), DatabaseError> {
        let now = now_timestamp();
        self.conn()
            .execute(
                "INSERT INTO content_cache
                 (owner, repo, path, content_type, url, content, created_at, last_accessed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
                 ON CONFLICT(owner, repo, path, content_type) DO NOTHING",
                libsql::params![owner, repo, path, content_type.as_str(), url, content, now.as_str()],
            )
            .await?;
        Ok(())
    }

    /// Draw one entry uniformly from the `limit` most recently accessed rows
    /// of `content_type`. Returns `None` when no such rows exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn cache_sample_random(
        &self,
        content_type: ContentType,
        limit: u32,
    ) -> Result<Option<CacheEntry>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM (
                         SELECT {ENTRY_COLUMNS} FROM content_cache
                         WHERE content_type = ?1
                         ORDER BY last_accessed_at DESC
                         LIMIT ?2
                     )
                     ORDER BY RANDOM()
                     LIMIT 1"
                ),
                libsql::params![content_type.as_str(), i64::from(limit)],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    /// Row counts and stored bytes per content type. Types with no rows are
    /// reported with zero counts.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the aggregate query fails.
    pub async fn cache_stats(&self) -> Result<Vec<CacheStat>, DatabaseError> {
        let mut stats = Vec::new();
        for content_type in [ContentType::Directory, ContentType::File] {
            let mut rows = self
                .conn()
                .query(
                    "SELECT COUNT(*), COALESCE(SUM(LENGTH(CAST(content AS BLOB))), 0)
                     FROM content_cache WHERE content_type = ?1",
                    [content_type.as_str()],
                )
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            let entries = u64::try_from(row.get::<i64>(0)?).unwrap_or_default();
            let content_bytes = u64::try_from(row.get::<i64>(1)?).unwrap_or_default();
            stats.push(CacheStat {
                content_type,
                entries,
                content_bytes,
            });
        }
        Ok(stats)
    }
}
