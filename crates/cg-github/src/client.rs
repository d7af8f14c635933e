//! GitHub contents API client.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use cg_config::GithubConfig;
use cg_core::entities::{CodeFile, DirectoryListing};

use crate::error::GatewayError;
use crate::http::check_response;
use crate::remote::RemoteContent;

#[derive(serde::Deserialize)]
struct FilePayload {
    path: String,
    html_url: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
    #[serde(default)]
    size: u64,
}

/// HTTP client for `GET /repos/{owner}/{repo}/contents/{path}`.
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn from_config(config: &GithubConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.has_token().then(|| config.token.clone()),
        })
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        let encoded_path = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/repos/{}/{}/contents/{encoded_path}",
            self.api_base,
            urlencoding::encode(owner),
            urlencoding::encode(repo),
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, GatewayError> {
        let mut request = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        check_response(request.send().await?).await
    }
}

/// Decode the transport encoding of a file payload.
fn decode_file(payload: FilePayload) -> Result<CodeFile, GatewayError> {
    let raw = match payload.content {
        Some(raw) if !raw.is_empty() => raw,
        _ if payload.size == 0 => String::new(),
        _ => {
            return Err(GatewayError::Parse(format!(
                "no inline content for {} ({} bytes)",
                payload.path, payload.size
            )));
        }
    };

    let content = match payload.encoding.as_deref() {
        Some("base64") => {
            let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(compact)
                .map_err(|e| GatewayError::Decode(format!("{}: {e}", payload.path)))?;
            String::from_utf8(bytes)
                .map_err(|e| GatewayError::Decode(format!("{}: {e}", payload.path)))?
        }
        Some("") | None => raw,
        Some(other) => {
            return Err(GatewayError::Decode(format!(
                "{}: unsupported encoding '{other}'",
                payload.path
            )));
        }
    };

    Ok(CodeFile {
        content,
        path: payload.path,
        source_url: payload.html_url,
    })
}

#[async_trait]
impl RemoteContent for GithubClient {
    async fn fetch_listing(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<DirectoryListing, GatewayError> {
        let url = self.contents_url(owner, repo, path);
        tracing::debug!(owner, repo, path, "listing directory");
        let resp = self.get(&url).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Parse(format!("listing {owner}/{repo}/{path}: {e}")))
    }

    async fn fetch_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<CodeFile, GatewayError> {
        let url = self.contents_url(owner, repo, path);
        tracing::debug!(owner, repo, path, "fetching file");
        let resp = self.get(&url).await?;
        let body = resp.text().await?;
        let payload: FilePayload = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Parse(format!("file {owner}/{repo}/{path}: {e}")))?;
        decode_file(payload)
    }

    fn listing_url(&self, owner: &str, repo: &str, path: &str) -> String {
        self.contents_url(owner, repo, path)
    }
}
