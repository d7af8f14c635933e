//! Round-content selection thresholds and fallback-ladder shape.

use serde::{Deserialize, Serialize};

const fn default_max_api_calls() -> u32 {
    3
}

const fn default_max_attempts() -> u32 {
    5
}

const fn default_min_lines() -> usize {
    10
}

const fn default_max_lines() -> usize {
    200
}

const fn default_primary_min_complexity() -> u8 {
    4
}

const fn default_backup_repos() -> usize {
    5
}

const fn default_complexity_step() -> u8 {
    1
}

const fn default_complexity_floor() -> u8 {
    1
}

const fn default_last_chance_min_lines() -> usize {
    50
}

const fn default_complexity() -> u8 {
    5
}

const fn default_cache_sample_limit() -> u32 {
    50
}

const fn default_base_time_secs() -> u32 {
    30
}

const fn default_secs_per_complexity() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Network calls allowed per repository-level attempt before the gateway
    /// switches to cache-only.
    #[serde(default = "default_max_api_calls")]
    pub max_api_calls: u32,

    /// Candidate files drawn per repository.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Effective code lines below which a candidate is too short.
    #[serde(default = "default_min_lines")]
    pub min_lines: usize,

    /// Effective code lines above which a candidate is too long.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    #[serde(default = "default_primary_min_complexity")]
    pub primary_min_complexity: u8,

    /// Backup repositories tried after the primary one fails.
    #[serde(default = "default_backup_repos")]
    pub backup_repos: usize,

    /// Amount the complexity floor drops with each backup repository.
    #[serde(default = "default_complexity_step")]
    pub complexity_step: u8,

    /// Lowest complexity floor the ladder relaxes to.
    #[serde(default = "default_complexity_floor")]
    pub complexity_floor: u8,

    /// Minimum effective code lines accepted by the last-chance tier.
    #[serde(default = "default_last_chance_min_lines")]
    pub last_chance_min_lines: usize,

    /// Complexity assumed when no judgment is available.
    #[serde(default = "default_complexity")]
    pub default_complexity: u8,

    /// How many most-recently-accessed cache rows a random cache draw
    /// chooses from.
    #[serde(default = "default_cache_sample_limit")]
    pub cache_sample_limit: u32,

    #[serde(default = "default_base_time_secs")]
    pub base_time_secs: u32,

    #[serde(default = "default_secs_per_complexity")]
    pub secs_per_complexity: u32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_api_calls: default_max_api_calls(),
            max_attempts: default_max_attempts(),
            min_lines: default_min_lines(),
            max_lines: default_max_lines(),
            primary_min_complexity: default_primary_min_complexity(),
            backup_repos: default_backup_repos(),
            complexity_step: default_complexity_step(),
            complexity_floor: default_complexity_floor(),
            last_chance_min_lines: default_last_chance_min_lines(),
            default_complexity: default_complexity(),
            cache_sample_limit: default_cache_sample_limit(),
            base_time_secs: default_base_time_secs(),
            secs_per_complexity: default_secs_per_complexity(),
        }
    }
}
