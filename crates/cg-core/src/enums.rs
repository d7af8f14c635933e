//! Content-type and directory-entry enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Kind of payload stored in the content cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// A JSON-serialized directory listing.
    Directory,
    /// Decoded file text.
    File,
}

impl ContentType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directory" => Ok(Self::Directory),
            "file" => Ok(Self::File),
            other => Err(CoreError::UnknownVariant {
                kind: "content type",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// EntryKind
// ---------------------------------------------------------------------------

/// Type of one entry in a directory listing.
///
/// The contents API also reports `symlink` and `submodule`; those collapse
/// into `Other` and are never sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn content_type_str_roundtrip() {
        for ct in [ContentType::Directory, ContentType::File] {
            assert_eq!(ct.as_str().parse::<ContentType>().unwrap(), ct);
        }
    }

    #[test]
    fn content_type_rejects_unknown() {
        let err = "blob".parse::<ContentType>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownVariant { .. }));
    }

    #[test]
    fn entry_kind_maps_unknown_to_other() {
        let kinds: Vec<EntryKind> =
            serde_json::from_str(r#"["file", "dir", "symlink", "submodule"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![EntryKind::File, EntryKind::Dir, EntryKind::Other, EntryKind::Other]
        );
    }
}
