//! Local libSQL database configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path. Empty means `<data_dir>/codeguess/cache.db`.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Resolve the database path, falling back to the platform data dir and
    /// then to `.codeguess/cache.db` in the working directory.
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".codeguess").join("cache.db"),
            |dir| dir.join("codeguess").join("cache.db"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = DatabaseConfig {
            path: "/tmp/cg.db".into(),
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/cg.db"));
    }

    #[test]
    fn default_path_ends_with_cache_db() {
        let path = DatabaseConfig::default().resolved_path();
        assert!(path.ends_with("codeguess/cache.db") || path.ends_with(".codeguess/cache.db"));
    }
}
