//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working-directory
//! manipulation.

use cg_config::{ConfigError, GuessConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[github]
token = "ghp_test"
timeout_secs = 5

[judge]
api_key = "sk-test"
model = "gpt-4o-mini"

[selection]
max_api_calls = 6
backup_repos = 2
"#,
        )?;

        let config: GuessConfig = Figment::from(Serialized::defaults(GuessConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.github.token, "ghp_test");
        assert_eq!(config.github.timeout_secs, 5);
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert!(config.judge.is_configured());
        assert_eq!(config.judge.model, "gpt-4o-mini");
        assert_eq!(config.selection.max_api_calls, 6);
        assert_eq!(config.selection.backup_repos, 2);
        assert_eq!(config.selection.max_attempts, 5);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".codeguess"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".codeguess/config.toml",
            r#"
[selection]
min_lines = 20
"#,
        )?;

        let config = GuessConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.selection.min_lines, 20);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".codeguess"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".codeguess/config.toml",
            r#"
[github]
token = "from-file"
"#,
        )?;
        jail.set_env("CODEGUESS_GITHUB__TOKEN", "from-env");
        jail.set_env("CODEGUESS_SELECTION__PRIMARY_MIN_COMPLEXITY", "6");

        let config = GuessConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.github.token, "from-env");
        assert_eq!(config.selection.primary_min_complexity, 6);
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_values() {
    Jail::expect_with(|jail| {
        jail.set_env("CODEGUESS_SELECTION__DEFAULT_COMPLEXITY", "11");

        let err = GuessConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
