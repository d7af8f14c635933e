//! Round content selection: one uniform loop over the fallback ladder.

use cg_config::SelectionConfig;
use cg_core::budget::ApiBudget;
use cg_core::catalog::catalog;
use cg_core::entities::{Analysis, CodeFile, RepositoryRef, RoundContent, TimeBudget};
use cg_core::language::language_from_path;
use cg_github::{Gateway, RemoteContent};
use cg_judge::ComplexityJudge;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RoundError;
use crate::ladder::{Attempt, Tier, plan_ladder};
use crate::normalizer::{count_code_lines, strip_comments};
use crate::sampler::pick_code_file;

/// A judged file that passed the length checks.
#[derive(Debug, Clone)]
struct Candidate {
    file: CodeFile,
    stripped: String,
    analysis: Analysis,
}

enum Verdict {
    Accept(Candidate),
    /// Within the line window but under the complexity floor.
    Keep(Candidate),
    Skip(&'static str),
}

/// Finds round content by walking a fallback ladder of repositories.
pub struct Selector<R, J> {
    gateway: Gateway<R>,
    judge: J,
    config: SelectionConfig,
    fallback: Vec<RepositoryRef>,
    seed: Option<u64>,
}

impl<R: RemoteContent, J: ComplexityJudge> Selector<R, J> {
    pub fn new(gateway: Gateway<R>, judge: J, config: SelectionConfig) -> Self {
        Self {
            gateway,
            judge,
            config,
            fallback: catalog(),
            seed: None,
        }
    }

    /// Fix the random source, for reproducible selection.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Repositories the last-chance tier draws from when the pool is short.
    /// Defaults to the full catalog.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Vec<RepositoryRef>) -> Self {
        self.fallback = fallback;
        self
    }

    pub const fn gateway(&self) -> &Gateway<R> {
        &self.gateway
    }

    pub const fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Produce round content from `pool`, starting at `min_complexity`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyPool`] for an empty pool and
    /// [`RoundError::Exhausted`] when every rung of the ladder failed.
    pub async fn select(
        &self,
        pool: &[RepositoryRef],
        min_complexity: u8,
    ) -> Result<RoundContent, RoundError> {
        if pool.is_empty() {
            return Err(RoundError::EmptyPool);
        }
        let mut rng = self.rng();
        let ladder = plan_ladder(pool, min_complexity, &self.config, &self.fallback, &mut rng);
        self.run_ladder(&ladder, &mut rng).await
    }

    /// Try each rung in order and return the first success.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Exhausted`] when every rung failed.
    pub async fn run_ladder<G: Rng + Send>(
        &self,
        ladder: &[Attempt],
        rng: &mut G,
    ) -> Result<RoundContent, RoundError> {
        for attempt in ladder {
            let repository = attempt.repository.key();
            match self.attempt(attempt, rng).await {
                Ok(content) => {
                    tracing::info!(
                        %repository,
                        tier = ?attempt.tier,
                        path = %content.path,
                        complexity = content.complexity,
                        "round content selected"
                    );
                    return Ok(content);
                }
                Err(error) => {
                    tracing::warn!(%repository, tier = ?attempt.tier, %error, "repository attempt failed");
                }
            }
        }
        Err(RoundError::Exhausted {
            attempts: ladder.len(),
        })
    }

    /// One repository-level attempt with a fresh call budget.
    async fn attempt<G: Rng + Send>(
        &self,
        attempt: &Attempt,
        rng: &mut G,
    ) -> Result<RoundContent, RoundError> {
        let RepositoryRef { owner, name, .. } = &attempt.repository;
        let mut budget = ApiBudget::new(self.config.max_api_calls);
        let mut best: Option<Candidate> = None;

        for draw in 0..self.config.max_attempts {
            let file = match pick_code_file(&self.gateway, &mut budget, rng, owner, name).await {
                Ok(file) => file,
                Err(error) if error.is_quota() => return self.from_cache(attempt, error).await,
                Err(error) => {
                    tracing::debug!(%owner, repo = %name, draw, %error, "draw failed");
                    continue;
                }
            };

            match self.evaluate(attempt, file).await {
                Verdict::Accept(candidate) => return Ok(self.finish(attempt, candidate)),
                Verdict::Keep(candidate) => {
                    if best
                        .as_ref()
                        .is_none_or(|b| candidate.analysis.complexity > b.analysis.complexity)
                    {
                        best = Some(candidate);
                    }
                }
                Verdict::Skip(reason) => {
                    tracing::debug!(%owner, repo = %name, draw, reason, "candidate skipped");
                }
            }
        }

        best.map(|candidate| self.finish(attempt, candidate))
            .ok_or_else(|| RoundError::NoSuitableFile {
                repository: attempt.repository.key(),
            })
    }

    /// Upstream quota is gone: serve a random cached file, re-judged.
    async fn from_cache(&self, attempt: &Attempt, cause: RoundError) -> Result<RoundContent, RoundError> {
        let Some(file) = self.gateway.sample_cached_file().await else {
            return Err(cause);
        };
        tracing::info!(
            repository = %attempt.repository.key(),
            %cause,
            substitute = %file.source_url,
            "quota exhausted, using cached file"
        );

        let stripped = strip_comments(&file.content, language_from_path(&file.path));
        if attempt.tier == Tier::LastChance
            && count_code_lines(&stripped) < self.config.last_chance_min_lines
        {
            return Err(cause);
        }
        let candidate = self.judge_candidate(file, stripped).await;
        Ok(self.finish(attempt, candidate))
    }

    async fn evaluate(&self, attempt: &Attempt, file: CodeFile) -> Verdict {
        let stripped = strip_comments(&file.content, language_from_path(&file.path));
        let lines = count_code_lines(&stripped);

        if attempt.tier == Tier::LastChance {
            if lines < self.config.last_chance_min_lines {
                return Verdict::Skip("too short");
            }
            return Verdict::Accept(self.judge_candidate(file, stripped).await);
        }

        if lines < self.config.min_lines {
            return Verdict::Skip("too short");
        }
        if lines > self.config.max_lines {
            return Verdict::Skip("too long");
        }
        let candidate = self.judge_candidate(file, stripped).await;
        if candidate.analysis.complexity >= attempt.min_complexity {
            Verdict::Accept(candidate)
        } else {
            Verdict::Keep(candidate)
        }
    }

    async fn judge_candidate(&self, file: CodeFile, stripped: String) -> Candidate {
        let language = language_from_path(&file.path);
        let analysis = self.judge.analyze(&file.content, &file.path, language).await;
        Candidate {
            file,
            stripped,
            analysis,
        }
    }

    fn finish(&self, attempt: &Attempt, candidate: Candidate) -> RoundContent {
        let Candidate {
            file,
            stripped,
            analysis,
        } = candidate;
        let time = TimeBudget {
            base_secs: self.config.base_time_secs,
            secs_per_complexity: self.config.secs_per_complexity,
        };
        RoundContent {
            repository: attempt.repository.key(),
            content: if attempt.tier == Tier::LastChance {
                stripped
            } else {
                file.content
            },
            source_url: file.source_url,
            path: file.path,
            description: analysis.description,
            complexity: analysis.complexity,
            time_limit_secs: time.time_limit(analysis.complexity),
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}
