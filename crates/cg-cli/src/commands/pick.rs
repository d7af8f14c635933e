use anyhow::Context;
use cg_core::catalog::catalog;
use cg_core::entities::RepositoryRef;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PickArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `codeguess pick`.
pub async fn handle(args: &PickArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let repository = resolve(&args.repo)?;
    let min_complexity = args
        .min_complexity
        .unwrap_or(ctx.config.selection.primary_min_complexity);

    let content = ctx
        .selector()?
        .select(std::slice::from_ref(&repository), min_complexity)
        .await
        .with_context(|| format!("failed to select content from {}", repository.key()))?;
    output(&content, flags.format)
}

/// Catalog entry for `key`, or a bare reference for repositories outside it.
fn resolve(key: &str) -> anyhow::Result<RepositoryRef> {
    let bare = RepositoryRef::from_key(key)?;
    Ok(catalog()
        .into_iter()
        .find(|repo| repo.key() == bare.key())
        .unwrap_or(bare))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::resolve;

    #[test]
    fn catalog_repositories_keep_their_metadata() {
        let repo = resolve("psf/requests").unwrap();
        assert_eq!(repo.primary_language, "Python");
    }

    #[test]
    fn unknown_repositories_are_accepted_bare() {
        let repo = resolve("someone/tool").unwrap();
        assert_eq!(repo.key(), "someone/tool");
        assert!(repo.primary_language.is_empty());
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(resolve("no-slash").is_err());
    }
}
