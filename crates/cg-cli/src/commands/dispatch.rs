use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Round(args) => commands::round::handle(&args, ctx, flags).await,
        Commands::Pick(args) => commands::pick::handle(&args, ctx, flags).await,
        Commands::Cache { action } => commands::cache::handle(&action, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags).await,
        Commands::Repos(args) => commands::repos::handle(&args, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
