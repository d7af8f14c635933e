//! Random walk over a repository tree to find one code file.

use cg_core::budget::ApiBudget;
use cg_core::entities::{CodeFile, DirEntry, DirectoryListing};
use cg_core::language::is_code_file;
use cg_github::{Gateway, RemoteContent};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::RoundError;

/// Root directory names that conventionally hold source code.
pub const SOURCE_DIRS: &[&str] = &[
    "src",
    "lib",
    "core",
    "main",
    "utils",
    "helpers",
    "components",
    "packages",
];

/// Full walks from the root before giving up on a repository.
///
/// Each walk is cheap once the listings are cached, but a tree whose
/// reachable directories hold no code would otherwise loop forever.
pub const MAX_WALKS: usize = 8;

/// Pick one recognized code file from `owner/repo` and fetch it.
///
/// 1. List the root. With no directories, choose among root code files.
/// 2. Otherwise choose a directory, preferring [`SOURCE_DIRS`], and choose
///    among its code files.
/// 3. Failing that, descend into one random subdirectory and try its files.
/// 4. Failing that, start again from the root.
///
/// Every choice is uniform over the filtered candidates.
///
/// # Errors
///
/// Returns [`RoundError::NoCodeFound`] when the root has neither
/// directories nor code files, or after [`MAX_WALKS`] fruitless walks, and
/// [`RoundError::Gateway`] for any gateway failure (quota errors included).
pub async fn pick_code_file<R, G>(
    gateway: &Gateway<R>,
    budget: &mut ApiBudget,
    rng: &mut G,
    owner: &str,
    repo: &str,
) -> Result<CodeFile, RoundError>
where
    R: RemoteContent,
    G: Rng + Send + ?Sized,
{
    let no_code = || RoundError::NoCodeFound {
        repository: format!("{owner}/{repo}"),
    };

    for walk in 0..MAX_WALKS {
        let root = gateway.list_directory(budget, owner, repo, "").await?;
        let Some(target) = choose_directory(&root, rng) else {
            let path = choose_code_file(&root, rng).ok_or_else(no_code)?;
            return Ok(gateway.get_file(budget, owner, repo, &path).await?);
        };

        let listing = gateway.list_directory(budget, owner, repo, &target).await?;
        if let Some(path) = choose_code_file(&listing, rng) {
            return Ok(gateway.get_file(budget, owner, repo, &path).await?);
        }

        let nested: Vec<&DirEntry> = listing.dirs().collect();
        if let Some(sub) = nested.choose(rng).map(|entry| entry.path.clone()) {
            let sub_listing = gateway.list_directory(budget, owner, repo, &sub).await?;
            if let Some(path) = choose_code_file(&sub_listing, rng) {
                return Ok(gateway.get_file(budget, owner, repo, &path).await?);
            }
        }

        tracing::debug!(owner, repo, walk, directory = %target, "no code file on this walk, restarting");
    }

    Err(no_code())
}

/// Path of the directory to search, or `None` if the root has no directories.
fn choose_directory<G: Rng + ?Sized>(root: &DirectoryListing, rng: &mut G) -> Option<String> {
    let dirs: Vec<&DirEntry> = root.dirs().collect();
    let preferred: Vec<&DirEntry> = dirs
        .iter()
        .copied()
        .filter(|entry| SOURCE_DIRS.contains(&entry.name.to_lowercase().as_str()))
        .collect();
    let candidates = if preferred.is_empty() { dirs } else { preferred };
    candidates.choose(rng).map(|entry| entry.path.clone())
}

fn choose_code_file<G: Rng + ?Sized>(listing: &DirectoryListing, rng: &mut G) -> Option<String> {
    let files: Vec<&DirEntry> = listing.files().filter(|entry| is_code_file(&entry.name)).collect();
    files.choose(rng).map(|entry| entry.path.clone())
}
