//! Chat-completions backed judge.

use std::time::Duration;

use async_trait::async_trait;
use cg_config::JudgeConfig;
use cg_core::entities::Analysis;
use serde::Deserialize;
use serde_json::json;

use crate::ComplexityJudge;
use crate::error::JudgeError;
use crate::parse::parse_analysis_or;
use crate::prompt::{SYSTEM_PROMPT, user_prompt};

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Judge backed by an OpenAI-compatible `/chat/completions` endpoint.
///
/// With an empty API key the judge is disabled and every call yields the
/// default analysis without touching the network.
pub struct OpenAiJudge {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    fallback: Analysis,
}

impl OpenAiJudge {
    /// # Errors
    ///
    /// Returns [`JudgeError::Http`] if the HTTP client fails to build.
    pub fn from_config(config: &JudgeConfig) -> Result<Self, JudgeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            fallback: Analysis::default(),
        })
    }

    /// Complexity reported whenever no usable judgment is available.
    #[must_use]
    pub fn with_default_complexity(mut self, complexity: u8) -> Self {
        self.fallback.complexity = complexity.clamp(1, 10);
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn request(&self, code: &str, path: &str, language: &str) -> Result<String, JudgeError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt(code, path, language) },
            ],
            "response_format": { "type": "json_object" },
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JudgeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(JudgeError::EmptyResponse)
    }
}

#[async_trait]
impl ComplexityJudge for OpenAiJudge {
    async fn analyze(&self, code: &str, path: &str, language: &str) -> Analysis {
        if !self.is_enabled() {
            tracing::debug!(path, "judge disabled, using default analysis");
            return self.fallback.clone();
        }
        match self.request(code, path, language).await {
            Ok(content) => parse_analysis_or(&content, &self.fallback),
            Err(error) => {
                tracing::warn!(path, %error, "complexity judge failed, using default analysis");
                self.fallback.clone()
            }
        }
    }
}
