//! The seam between the gateway and the network.

use async_trait::async_trait;
use cg_core::entities::{CodeFile, DirectoryListing};

use crate::error::GatewayError;

/// A source of repository listings and file contents.
///
/// [`crate::GithubClient`] is the production implementation. The gateway
/// layers caching and the call budget on top of any implementation.
#[async_trait]
pub trait RemoteContent: Send + Sync {
    /// List the entries under `path` (empty for the repository root).
    async fn fetch_listing(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<DirectoryListing, GatewayError>;

    /// Fetch and decode one file.
    async fn fetch_file(&self, owner: &str, repo: &str, path: &str)
    -> Result<CodeFile, GatewayError>;

    /// URL recorded alongside a cached listing.
    fn listing_url(&self, owner: &str, repo: &str, path: &str) -> String;
}
