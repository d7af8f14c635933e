use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Description used when the judge gives nothing usable.
pub const DEFAULT_DESCRIPTION: &str =
    "This code implements functionality relevant to the repository.";

/// Complexity used when the judge gives nothing usable.
pub const DEFAULT_COMPLEXITY: u8 = 5;

/// Judge verdict for one candidate file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Analysis {
    pub description: String,
    /// Always within `1..=10`.
    pub complexity: u8,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            complexity: DEFAULT_COMPLEXITY,
        }
    }
}

impl Analysis {
    /// Round a raw score to the nearest integer and clamp it into `1..=10`.
    /// Non-finite input yields [`DEFAULT_COMPLEXITY`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn normalize_complexity(raw: f64) -> u8 {
        if !raw.is_finite() {
            return DEFAULT_COMPLEXITY;
        }
        raw.round().clamp(1.0, 10.0) as u8
    }
}

/// Seconds granted per round: a fixed base plus an increment per complexity point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    pub base_secs: u32,
    pub secs_per_complexity: u32,
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self {
            base_secs: 30,
            secs_per_complexity: 10,
        }
    }
}

impl TimeBudget {
    #[must_use]
    pub const fn time_limit(self, complexity: u8) -> u32 {
        self.base_secs
            .saturating_add(self.secs_per_complexity.saturating_mul(complexity as u32))
    }
}

/// Output of the selector.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoundContent {
    /// `owner/name` of the repository that produced the content.
    pub repository: String,
    /// Program text shown to players.
    pub content: String,
    pub source_url: String,
    pub path: String,
    pub description: String,
    pub complexity: u8,
    pub time_limit_secs: u32,
}

/// Persisted round fields handed to the game-state store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoundFields {
    pub program_url: String,
    pub program_code: String,
    pub program_description: String,
    pub path: String,
    pub time_limit: u32,
}

impl From<RoundContent> for RoundFields {
    fn from(round: RoundContent) -> Self {
        Self {
            program_url: round.source_url,
            program_code: round.content,
            program_description: round.description,
            path: round.path,
            time_limit: round.time_limit_secs,
        }
    }
}
