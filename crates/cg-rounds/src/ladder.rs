//! The repository fallback ladder, as data.

use std::collections::HashSet;

use cg_config::SelectionConfig;
use cg_core::entities::RepositoryRef;
use rand::Rng;
use rand::seq::SliceRandom;

/// Acceptance rules applied to a repository attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Line window plus the requested complexity floor.
    Primary,
    /// Line window plus a relaxed complexity floor.
    Backup,
    /// Any file with enough effective lines; stores the stripped text.
    LastChance,
}

/// One rung: which repository to try and how strict to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub repository: RepositoryRef,
    pub tier: Tier,
    pub min_complexity: u8,
}

/// Build the ladder for one selection request.
///
/// The pool is shuffled. The first repository is the primary, the next
/// `backup_repos` are backups with floors dropping by `complexity_step` per
/// rung (never below `complexity_floor`, never above `min_complexity`), and
/// the next one is the last-chance repository. When the pool runs out before
/// the last-chance rung, that repository is drawn from `fallback` (the
/// catalog), avoiding repositories already on the ladder where possible.
pub fn plan_ladder<G: Rng + ?Sized>(
    pool: &[RepositoryRef],
    min_complexity: u8,
    config: &SelectionConfig,
    fallback: &[RepositoryRef],
    rng: &mut G,
) -> Vec<Attempt> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    let mut remaining = shuffled.into_iter();

    let mut ladder = Vec::with_capacity(config.backup_repos + 2);
    let Some(primary) = remaining.next() else {
        return ladder;
    };
    ladder.push(Attempt {
        repository: primary,
        tier: Tier::Primary,
        min_complexity,
    });

    for (rung, repository) in remaining.by_ref().take(config.backup_repos).enumerate() {
        ladder.push(Attempt {
            repository,
            tier: Tier::Backup,
            min_complexity: backup_floor(min_complexity, rung, config),
        });
    }

    let last_chance = remaining.next().or_else(|| {
        let used: HashSet<String> = ladder.iter().map(|a| a.repository.key()).collect();
        let unused: Vec<&RepositoryRef> =
            fallback.iter().filter(|r| !used.contains(&r.key())).collect();
        unused
            .choose(rng)
            .copied()
            .or_else(|| fallback.choose(rng))
            .cloned()
    });
    if let Some(repository) = last_chance {
        ladder.push(Attempt {
            repository,
            tier: Tier::LastChance,
            min_complexity: 0,
        });
    }
    ladder
}

fn backup_floor(min_complexity: u8, rung: usize, config: &SelectionConfig) -> u8 {
    let steps = u8::try_from(rung + 1).unwrap_or(u8::MAX);
    min_complexity
        .saturating_sub(config.complexity_step.saturating_mul(steps))
        .max(config.complexity_floor)
        .min(min_complexity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn repos(n: usize) -> Vec<RepositoryRef> {
        (0..n)
            .map(|i| RepositoryRef::new("o", &format!("r{i}"), "Rust", ""))
            .collect()
    }

    #[test]
    fn full_pool_yields_primary_backups_and_last_chance() {
        let config = SelectionConfig::default();
        let ladder = plan_ladder(&repos(10), 4, &config, &[], &mut StdRng::seed_from_u64(3));

        let tiers: Vec<Tier> = ladder.iter().map(|a| a.tier).collect();
        assert_eq!(tiers[0], Tier::Primary);
        assert_eq!(tiers[1..6], [Tier::Backup; 5]);
        assert_eq!(tiers[6], Tier::LastChance);
        assert_eq!(ladder.len(), 7);

        let floors: Vec<u8> = ladder.iter().map(|a| a.min_complexity).collect();
        assert_eq!(floors, vec![4, 3, 2, 1, 1, 1, 0]);

        let keys: HashSet<String> = ladder.iter().map(|a| a.repository.key()).collect();
        assert_eq!(keys.len(), 7, "no repository repeats");
    }

    #[test]
    fn floors_never_increase_and_respect_the_minimum() {
        let config = SelectionConfig {
            complexity_step: 2,
            complexity_floor: 2,
            ..SelectionConfig::default()
        };
        let ladder = plan_ladder(&repos(6), 9, &config, &[], &mut StdRng::seed_from_u64(0));
        let floors: Vec<u8> = ladder.iter().map(|a| a.min_complexity).collect();
        assert_eq!(floors, vec![9, 7, 5, 3, 2, 2]);
    }

    #[test]
    fn requested_floor_below_configured_floor_is_not_raised() {
        let config = SelectionConfig {
            complexity_floor: 3,
            ..SelectionConfig::default()
        };
        let ladder = plan_ladder(&repos(3), 2, &config, &[], &mut StdRng::seed_from_u64(0));
        assert!(ladder.iter().all(|a| a.min_complexity <= 2));
    }

    #[test]
    fn short_pool_draws_last_chance_from_fallback() {
        let config = SelectionConfig::default();
        let pool = repos(1);
        let catalog = repos(3);
        let ladder = plan_ladder(&pool, 4, &config, &catalog, &mut StdRng::seed_from_u64(5));

        assert_eq!(ladder.len(), 2);
        assert_eq!(ladder[0].repository.key(), "o/r0");
        assert_eq!(ladder[1].tier, Tier::LastChance);
        assert_ne!(ladder[1].repository.key(), "o/r0");
    }

    #[test]
    fn empty_pool_yields_empty_ladder() {
        let config = SelectionConfig::default();
        assert!(plan_ladder(&[], 4, &config, &repos(3), &mut StdRng::seed_from_u64(0)).is_empty());
    }
}
