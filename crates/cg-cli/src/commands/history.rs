use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct HistoryView<'a> {
    game: &'a str,
    repositories: Vec<String>,
}

#[derive(Serialize)]
struct ClearedView<'a> {
    game: &'a str,
    cleared: u64,
}

/// Handle `codeguess history`.
pub async fn handle(
    action: &HistoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::Show { game } => {
            let repositories = ctx.db.repos_used_in_game(game).await?;
            output(&HistoryView { game, repositories }, flags.format)
        }
        HistoryCommands::Clear { game } => {
            let cleared = ctx.db.clear_game_history(game).await?;
            output(&ClearedView { game, cleared }, flags.format)
        }
    }
}
