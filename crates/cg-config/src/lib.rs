//! # cg-config
//!
//! Layered configuration loading for codeguess using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CODEGUESS_*` prefix, `__` as separator)
//! 2. Project-level `.codeguess/config.toml`
//! 3. User-level `~/.config/codeguess/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CODEGUESS_GITHUB__TOKEN` -> `github.token`,
//! `CODEGUESS_SELECTION__MAX_API_CALLS` -> `selection.max_api_calls`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cg_config::GuessConfig;
//!
//! let config = GuessConfig::load_with_dotenv().expect("config");
//!
//! if !config.judge.is_configured() {
//!     println!("judge disabled; every candidate scores {}", config.selection.default_complexity);
//! }
//! ```

mod database;
mod error;
mod github;
mod judge;
mod selection;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use github::GithubConfig;
pub use judge::JudgeConfig;
pub use selection::SelectionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GuessConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub judge: JudgeConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl GuessConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the merged
    /// values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".codeguess/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CODEGUESS_").split("__"))
    }

    /// Reject combinations the selector cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selection = &self.selection;
        if selection.min_lines > selection.max_lines {
            return Err(invalid(
                "selection.min_lines",
                format!(
                    "{} exceeds selection.max_lines ({})",
                    selection.min_lines, selection.max_lines
                ),
            ));
        }
        for (field, value) in [
            ("selection.primary_min_complexity", selection.primary_min_complexity),
            ("selection.complexity_floor", selection.complexity_floor),
            ("selection.default_complexity", selection.default_complexity),
        ] {
            if !(1..=10).contains(&value) {
                return Err(invalid(field, format!("{value} is outside 1..=10")));
            }
        }
        if selection.max_attempts == 0 {
            return Err(invalid("selection.max_attempts", "must be at least 1".into()));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("codeguess").join("config.toml"))
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}
