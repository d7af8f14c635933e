//! # cg-judge
//!
//! Rates candidate code files with a short description and a 1-10
//! complexity score. Judging never fails from the caller's point of view:
//! transport errors, bad statuses and malformed answers all degrade to
//! [`Analysis::default`].

pub mod error;
pub mod openai;
pub mod parse;
pub mod prompt;

use async_trait::async_trait;
use cg_core::entities::Analysis;

pub use error::JudgeError;
pub use openai::OpenAiJudge;
pub use parse::{parse_analysis, parse_analysis_or};

/// Anything that can score a code excerpt.
#[async_trait]
pub trait ComplexityJudge: Send + Sync {
    /// Describe and score `code`. Always returns a usable analysis.
    async fn analyze(&self, code: &str, path: &str, language: &str) -> Analysis;
}

#[async_trait]
impl<J: ComplexityJudge + ?Sized> ComplexityJudge for std::sync::Arc<J> {
    async fn analyze(&self, code: &str, path: &str, language: &str) -> Analysis {
        (**self).analyze(code, path, language).await
    }
}
