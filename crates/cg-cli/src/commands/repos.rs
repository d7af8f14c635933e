use cg_core::catalog::{catalog, catalog_for_language};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReposArgs;
use crate::output::output;

/// Handle `codeguess repos`.
pub fn handle(args: &ReposArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let repos = match &args.language {
        Some(language) => catalog_for_language(language),
        None => catalog(),
    };
    output(&repos, flags.format)
}
