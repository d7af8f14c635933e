mod common;

use std::collections::HashSet;

use cg_config::SelectionConfig;
use cg_core::entities::RepositoryRef;
use cg_rounds::{RoundPlanner, Selector};
use common::{FakeHost, FixedJudge, gateway, rust_source};
use pretty_assertions::assert_eq;

fn catalog() -> Vec<RepositoryRef> {
    vec![
        RepositoryRef::new("o", "alpha", "Rust", "first"),
        RepositoryRef::new("o", "beta", "Rust", "second"),
    ]
}

async fn planner() -> RoundPlanner<FakeHost, std::sync::Arc<FixedJudge>> {
    let host = FakeHost::default()
        .with_file("o/alpha", "src/lib.rs", &rust_source(15))
        .with_file("o/beta", "src/lib.rs", &rust_source(30));
    let selector = Selector::new(gateway(host).await, FixedJudge::new(5), SelectionConfig::default())
        .with_seed(11)
        .with_fallback(catalog());
    RoundPlanner::with_catalog(selector, catalog())
}

fn repo_of(url: &str) -> String {
    url.trim_start_matches("https://github.com/")
        .splitn(3, '/')
        .take(2)
        .collect::<Vec<_>>()
        .join("/")
}

#[tokio::test]
async fn rounds_do_not_repeat_repositories_within_a_game() {
    let planner = planner().await;

    let first = planner.create_round("game-1", 1, 3).await.unwrap();
    let second = planner.create_round("game-1", 2, 3).await.unwrap();

    let used: HashSet<String> = [&first, &second]
        .iter()
        .map(|round| repo_of(&round.program_url))
        .collect();
    assert_eq!(
        used,
        HashSet::from(["o/alpha".to_string(), "o/beta".to_string()])
    );
    assert_eq!(first.time_limit, 80);
}

#[tokio::test]
async fn exhausted_pool_resets_to_full_catalog() {
    let planner = planner().await;
    let db = planner.selector().gateway().cache();
    db.record_repo_use("g", "o/alpha").await.unwrap();
    db.record_repo_use("g", "o/beta").await.unwrap();

    let pool = planner.pool_for_game("g").await.unwrap();
    assert_eq!(pool.len(), 2);
}

#[tokio::test]
async fn partially_used_pool_excludes_used_repositories() {
    let planner = planner().await;
    let db = planner.selector().gateway().cache();
    db.record_repo_use("g", "o/alpha").await.unwrap();

    let pool = planner.pool_for_game("g").await.unwrap();
    assert_eq!(pool.iter().map(RepositoryRef::key).collect::<Vec<_>>(), vec!["o/beta"]);
}

#[tokio::test]
async fn final_round_clears_history() {
    let planner = planner().await;

    planner.create_round("g", 1, 2).await.unwrap();
    let db = planner.selector().gateway().cache();
    assert_eq!(db.repos_used_in_game("g").await.unwrap().len(), 1);

    planner.create_round("g", 2, 2).await.unwrap();
    assert!(db.repos_used_in_game("g").await.unwrap().is_empty());
}

#[tokio::test]
async fn games_keep_separate_histories() {
    let planner = planner().await;
    planner.create_round("a", 1, 5).await.unwrap();

    let db = planner.selector().gateway().cache();
    assert!(db.repos_used_in_game("b").await.unwrap().is_empty());
    assert_eq!(planner.pool_for_game("b").await.unwrap().len(), 2);
}
