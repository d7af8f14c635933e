//! # cg-rounds
//!
//! Round content acquisition for codeguess.
//!
//! - [`sampler`]: random walk to one code file of a repository
//! - [`normalizer`]: comment stripping and effective line counts
//! - [`ladder`]: the primary → backups → last-chance plan
//! - [`Selector`]: runs the ladder against the gateway and the judge
//! - [`RoundPlanner`]: per-game round creation with repository history

pub mod error;
pub mod ladder;
pub mod normalizer;
pub mod planner;
pub mod sampler;
pub mod selector;

pub use error::RoundError;
pub use ladder::{Attempt, Tier};
pub use planner::RoundPlanner;
pub use selector::Selector;
