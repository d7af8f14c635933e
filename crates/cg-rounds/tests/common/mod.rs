//! In-process fakes for the remote host and the judge.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cg_core::entities::{Analysis, CodeFile, DirEntry, DirectoryListing};
use cg_core::enums::EntryKind;
use cg_db::GuessDb;
use cg_github::{Gateway, GatewayError, RemoteContent};
use cg_judge::ComplexityJudge;

/// Repositories described as flat `path -> content` maps. Listings are
/// derived from the paths.
#[derive(Default)]
pub struct FakeHost {
    repos: HashMap<String, BTreeMap<String, String>>,
    rate_limited: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeHost {
    pub fn with_file(mut self, repo: &str, path: &str, content: &str) -> Self {
        self.repos
            .entry(repo.to_string())
            .or_default()
            .insert(path.to_string(), content.to_string());
        self
    }

    pub fn rate_limited(mut self, repo: &str) -> Self {
        self.rate_limited.insert(repo.to_string());
        self
    }

    /// Network calls made for `owner/repo`.
    pub fn calls_to(&self, repo: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|key| key.as_str() == repo)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn enter(&self, owner: &str, repo: &str) -> Result<&BTreeMap<String, String>, GatewayError> {
        let key = format!("{owner}/{repo}");
        self.calls.lock().unwrap().push(key.clone());
        if self.rate_limited.contains(&key) {
            return Err(GatewayError::RateLimited { reset_at: None });
        }
        self.repos.get(&key).ok_or_else(|| GatewayError::Api {
            status: 404,
            message: format!("{key} not found"),
        })
    }
}

#[async_trait]
impl RemoteContent for FakeHost {
    async fn fetch_listing(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<DirectoryListing, GatewayError> {
        let files = self.enter(owner, repo)?;
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        };

        let mut dirs = BTreeSet::new();
        let mut entries = Vec::new();
        for file in files.keys() {
            let Some(rest) = file.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((dir, _)) => {
                    dirs.insert(dir.to_string());
                }
                None => entries.push(DirEntry::new(rest, file, EntryKind::File)),
            }
        }
        entries.extend(
            dirs.iter()
                .map(|dir| DirEntry::new(dir, &format!("{prefix}{dir}"), EntryKind::Dir)),
        );
        Ok(DirectoryListing::new(entries))
    }

    async fn fetch_file(&self, owner: &str, repo: &str, path: &str) -> Result<CodeFile, GatewayError> {
        let content = self
            .enter(owner, repo)?
            .get(path)
            .cloned()
            .ok_or_else(|| GatewayError::Api {
                status: 404,
                message: format!("{path} not found"),
            })?;
        Ok(CodeFile {
            content,
            path: path.to_string(),
            source_url: format!("https://github.com/{owner}/{repo}/blob/main/{path}"),
        })
    }

    fn listing_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!("https://api.test/repos/{owner}/{repo}/contents/{path}")
    }
}

/// Judge with a fixed score, counting its calls.
pub struct FixedJudge {
    complexity: u8,
    calls: AtomicUsize,
}

impl FixedJudge {
    pub fn new(complexity: u8) -> Arc<Self> {
        Arc::new(Self {
            complexity,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComplexityJudge for FixedJudge {
    async fn analyze(&self, _code: &str, path: &str, _language: &str) -> Analysis {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Analysis {
            description: format!("judged {path}"),
            complexity: self.complexity,
        }
    }
}

pub async fn gateway(host: FakeHost) -> Gateway<FakeHost> {
    let db = GuessDb::open_local(":memory:").await.unwrap();
    Gateway::new(host, Arc::new(db), 50)
}

/// `lines` distinct Rust statements.
pub fn rust_source(lines: usize) -> String {
    (0..lines).map(|i| format!("let v{i} = {i};\n")).collect()
}
