use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RoundArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `codeguess round`.
pub async fn handle(args: &RoundArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let planner = ctx.planner()?;
    let fields = planner
        .create_round(&args.game, args.round_number, args.total)
        .await
        .with_context(|| {
            format!(
                "failed to create round {} of {} for game '{}'",
                args.round_number, args.total, args.game
            )
        })?;
    output(&fields, flags.format)
}
