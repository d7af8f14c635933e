use std::sync::Arc;

use anyhow::Context;
use cg_config::GuessConfig;
use cg_db::GuessDb;
use cg_github::{Gateway, GithubClient};
use cg_judge::OpenAiJudge;
use cg_rounds::{RoundPlanner, Selector};

/// Shared resources initialized once per invocation.
pub struct AppContext {
    pub config: GuessConfig,
    pub db: Arc<GuessDb>,
}

impl AppContext {
    /// Open (creating if needed) the cache database named by the config.
    pub async fn init(config: GuessConfig) -> anyhow::Result<Self> {
        let path = config.database.resolved_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let db = GuessDb::open_local(&path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open cache database at {}", path.display()))?;
        tracing::debug!(path = %path.display(), "cache database ready");

        Ok(Self {
            config,
            db: Arc::new(db),
        })
    }

    pub fn selector(&self) -> anyhow::Result<Selector<GithubClient, OpenAiJudge>> {
        let client = GithubClient::from_config(&self.config.github)
            .context("failed to build GitHub client")?;
        let gateway = Gateway::new(
            client,
            Arc::clone(&self.db),
            self.config.selection.cache_sample_limit,
        );
        let judge = OpenAiJudge::from_config(&self.config.judge)
            .context("failed to build complexity judge")?
            .with_default_complexity(self.config.selection.default_complexity);
        Ok(Selector::new(gateway, judge, self.config.selection.clone()))
    }

    pub fn planner(&self) -> anyhow::Result<RoundPlanner<GithubClient, OpenAiJudge>> {
        Ok(RoundPlanner::new(self.selector()?))
    }
}

/// Log hints for settings that look missing or mistyped.
pub fn warn_unconfigured(config: &GuessConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GuessConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.github.has_token() && has_single_underscore_key(&env_keys, "CODEGUESS_GITHUB") {
        warnings.push(
            "GitHub token is empty while CODEGUESS_GITHUB_* env vars exist. Use double underscores (example: CODEGUESS_GITHUB__TOKEN)."
                .to_string(),
        );
    }
    if !config.judge.is_configured() {
        if has_single_underscore_key(&env_keys, "CODEGUESS_JUDGE") {
            warnings.push(
                "Judge API key is empty while CODEGUESS_JUDGE_* env vars exist. Use double underscores (example: CODEGUESS_JUDGE__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "Complexity judge is not configured; every candidate gets the default analysis."
                    .to_string(),
            );
        }
    }
    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn env(pairs: &[&str]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn mistyped_github_key_is_flagged() {
        let mut config = GuessConfig::default();
        config.judge.api_key = "k".into();
        let warnings = collect_unconfigured_warnings(&config, env(&["CODEGUESS_GITHUB_TOKEN"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("CODEGUESS_GITHUB__TOKEN"));
    }

    #[test]
    fn correctly_named_keys_are_not_flagged() {
        let mut config = GuessConfig::default();
        config.judge.api_key = "k".into();
        let warnings = collect_unconfigured_warnings(&config, env(&["CODEGUESS_GITHUB__TOKEN"]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_judge_key_is_reported() {
        let warnings = collect_unconfigured_warnings(&GuessConfig::default(), env(&[]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("default analysis"));
    }
}
