use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A candidate source-code repository, uniquely keyed by `owner/name`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
    /// Dominant language as reported by the host (display only).
    pub primary_language: String,
    pub blurb: String,
}

impl RepositoryRef {
    #[must_use]
    pub fn new(owner: &str, name: &str, primary_language: &str, blurb: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            primary_language: primary_language.to_string(),
            blurb: blurb.to_string(),
        }
    }

    /// Build a reference from an `owner/name` key with no catalog metadata.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRepoKey` unless the key has exactly one `/`
    /// with non-empty parts on both sides.
    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        match key.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self::new(owner, name, "", ""))
            }
            _ => Err(CoreError::InvalidRepoKey(key.to_string())),
        }
    }

    /// The `owner/name` key.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}
