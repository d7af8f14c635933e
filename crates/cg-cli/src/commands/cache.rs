use crate::cli::GlobalFlags;
use crate::cli::subcommands::CacheCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `codeguess cache`.
pub async fn handle(action: &CacheCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CacheCommands::Stats => {
            let stats = ctx.db.cache_stats().await?;
            output(&stats, flags.format)
        }
    }
}
