use cg_core::entities::RoundFields;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `codeguess schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(RoundFields);
    output(&schema, flags.format)
}
