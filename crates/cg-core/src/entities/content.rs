use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ContentType, EntryKind};

/// One entry of a directory listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    /// Repository-relative path.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl DirEntry {
    #[must_use]
    pub fn new(name: &str, path: &str, kind: EntryKind) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind,
        }
    }
}

/// Ordered entries for one `(owner, repo, path)`.
///
/// Serializes as a bare JSON array, the same shape the contents API returns,
/// so cached listings and live listings parse identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct DirectoryListing {
    pub entries: Vec<DirEntry>,
}

impl DirectoryListing {
    #[must_use]
    pub const fn new(entries: Vec<DirEntry>) -> Self {
        Self { entries }
    }

    /// Directory entries, in listing order.
    pub fn dirs(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Dir)
    }

    /// File entries, in listing order.
    pub fn files(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }
}

/// A fetched source file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CodeFile {
    /// Decoded UTF-8 text.
    pub content: String,
    pub path: String,
    /// Canonical web URL of the file.
    pub source_url: String,
}

/// A stored gateway response.
///
/// Unique per `(owner, repo, path, content_type)`. `content` holds decoded file
/// text for `File` rows and a JSON-serialized [`DirectoryListing`] for
/// `Directory` rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntry {
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub content_type: ContentType,
    pub url: String,
    pub content: String,
    pub last_accessed_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Interpret a `File` row as a [`CodeFile`].
    #[must_use]
    pub fn to_code_file(&self) -> CodeFile {
        CodeFile {
            content: self.content.clone(),
            path: self.path.clone(),
            source_url: self.url.clone(),
        }
    }

    /// Interpret a `Directory` row as a listing.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the stored content is not a listing.
    pub fn to_listing(&self) -> Result<DirectoryListing, serde_json::Error> {
        serde_json::from_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LISTING: &str = r#"[
        {"name": "src", "path": "src", "type": "dir", "sha": "abc", "size": 0},
        {"name": "README.md", "path": "README.md", "type": "file", "size": 120},
        {"name": "vendor", "path": "vendor", "type": "submodule"},
        {"name": "main.rs", "path": "main.rs", "type": "file"}
    ]"#;

    #[test]
    fn listing_parses_api_shape_and_partitions() {
        let listing: DirectoryListing = serde_json::from_str(LISTING).unwrap();
        assert_eq!(listing.entries.len(), 4);
        let dirs: Vec<&str> = listing.dirs().map(|e| e.name.as_str()).collect();
        let files: Vec<&str> = listing.files().map(|e| e.name.as_str()).collect();
        assert_eq!(dirs, vec!["src"]);
        assert_eq!(files, vec!["README.md", "main.rs"]);
    }

    #[test]
    fn cache_entry_interprets_directory_rows() {
        let listing = DirectoryListing::new(vec![DirEntry::new("lib", "lib", EntryKind::Dir)]);
        let entry = CacheEntry {
            owner: "o".into(),
            repo: "r".into(),
            path: String::new(),
            content_type: ContentType::Directory,
            url: "https://example.test".into(),
            content: serde_json::to_string(&listing).unwrap(),
            last_accessed_at: Utc::now(),
        };
        assert_eq!(entry.to_listing().unwrap(), listing);
    }

    #[test]
    fn cache_entry_interprets_file_rows() {
        let entry = CacheEntry {
            owner: "o".into(),
            repo: "r".into(),
            path: "src/a.rs".into(),
            content_type: ContentType::File,
            url: "https://github.com/o/r/blob/main/src/a.rs".into(),
            content: "fn a() {}".into(),
            last_accessed_at: Utc::now(),
        };
        let file = entry.to_code_file();
        assert_eq!(file.path, "src/a.rs");
        assert_eq!(file.source_url, "https://github.com/o/r/blob/main/src/a.rs");
        assert_eq!(file.content, "fn a() {}");
    }
}
