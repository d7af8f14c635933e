//! Cache-first, budget-governed access to remote content.
//!
//! Lookup order for every request:
//! 1. exact cache hit for `(owner, repo, path, type)`: returned without
//!    touching the budget;
//! 2. budget spent: a random recently-accessed cache row of the same type,
//!    or [`GatewayError::BudgetExhausted`] if there is none;
//! 3. network call (counted against the budget whatever its outcome), with
//!    the result written back to the cache.
//!
//! Cache failures never fail a request: reads degrade to a miss and writes
//! are logged and dropped.

use std::sync::Arc;

use cg_core::budget::ApiBudget;
use cg_core::entities::{CacheEntry, CodeFile, DirectoryListing};
use cg_core::enums::ContentType;
use cg_db::GuessDb;

use crate::error::GatewayError;
use crate::remote::RemoteContent;

pub struct Gateway<R> {
    remote: R,
    cache: Arc<GuessDb>,
    sample_limit: u32,
}

impl<R: RemoteContent> Gateway<R> {
    /// `sample_limit` bounds the window of most-recently-accessed rows that
    /// cache fallbacks draw from.
    pub const fn new(remote: R, cache: Arc<GuessDb>, sample_limit: u32) -> Self {
        Self {
            remote,
            cache,
            sample_limit,
        }
    }

    pub const fn remote(&self) -> &R {
        &self.remote
    }

    pub fn cache(&self) -> &GuessDb {
        &self.cache
    }

    /// List a directory of a repository.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BudgetExhausted`] when the budget is spent and
    /// no directory is cached, or any upstream error from the network call.
    pub async fn list_directory(
        &self,
        budget: &mut ApiBudget,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<DirectoryListing, GatewayError> {
        if let Some(entry) = self.lookup(owner, repo, path, ContentType::Directory).await {
            match entry.to_listing() {
                Ok(listing) => return Ok(listing),
                Err(error) => {
                    tracing::warn!(owner, repo, path, %error, "ignoring unreadable cached listing");
                }
            }
        }

        if !budget.has_remaining() {
            let entry = self
                .sample_cached(ContentType::Directory)
                .await
                .ok_or(GatewayError::BudgetExhausted)?;
            tracing::debug!(
                owner,
                repo,
                path,
                substitute = %format!("{}/{}/{}", entry.owner, entry.repo, entry.path),
                "budget spent, serving cached listing"
            );
            return entry
                .to_listing()
                .map_err(|e| GatewayError::Parse(format!("cached listing: {e}")));
        }

        budget.record_call();
        let listing = self.remote.fetch_listing(owner, repo, path).await?;
        match serde_json::to_string(&listing) {
            Ok(serialized) => {
                let url = self.remote.listing_url(owner, repo, path);
                self.store(owner, repo, path, ContentType::Directory, &url, &serialized)
                    .await;
            }
            Err(error) => tracing::warn!(owner, repo, path, %error, "failed to serialize listing"),
        }
        Ok(listing)
    }

    /// Fetch one file of a repository.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BudgetExhausted`] when the budget is spent and
    /// no file is cached, or any upstream error from the network call.
    pub async fn get_file(
        &self,
        budget: &mut ApiBudget,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<CodeFile, GatewayError> {
        if let Some(entry) = self.lookup(owner, repo, path, ContentType::File).await {
            return Ok(entry.to_code_file());
        }

        if !budget.has_remaining() {
            let entry = self
                .sample_cached(ContentType::File)
                .await
                .ok_or(GatewayError::BudgetExhausted)?;
            tracing::debug!(owner, repo, path, substitute = %entry.path, "budget spent, serving cached file");
            return Ok(entry.to_code_file());
        }

        budget.record_call();
        let file = self.remote.fetch_file(owner, repo, path).await?;
        self.store(
            owner,
            repo,
            path,
            ContentType::File,
            &file.source_url,
            &file.content,
        )
        .await;
        Ok(file)
    }

    /// A random recently-used cached file, if any.
    pub async fn sample_cached_file(&self) -> Option<CodeFile> {
        self.sample_cached(ContentType::File)
            .await
            .map(|entry| entry.to_code_file())
    }

    async fn lookup(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content_type: ContentType,
    ) -> Option<CacheEntry> {
        match self.cache.cache_get(owner, repo, path, content_type).await {
            Ok(hit) => hit,
            Err(error) => {
                tracing::warn!(owner, repo, path, %content_type, %error, "cache read failed");
                None
            }
        }
    }

    async fn sample_cached(&self, content_type: ContentType) -> Option<CacheEntry> {
        match self
            .cache
            .cache_sample_random(content_type, self.sample_limit)
            .await
        {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%content_type, %error, "cache sample failed");
                None
            }
        }
    }

    async fn store(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content_type: ContentType,
        url: &str,
        content: &str,
    ) {
        if let Err(error) = self
            .cache
            .cache_put(owner, repo, path, content_type, url, content)
            .await
        {
            tracing::warn!(owner, repo, path, %content_type, %error, "cache write failed");
        }
    }
}
