//! Entity structs for the round-content pipeline.
//!
//! All structs derive `Serialize` and `Deserialize`; the ones that cross the
//! storage or CLI boundary also derive `JsonSchema`.

mod content;
mod repository;
mod round;

pub use content::{CacheEntry, CodeFile, DirEntry, DirectoryListing};
pub use repository::RepositoryRef;
pub use round::{Analysis, DEFAULT_COMPLEXITY, DEFAULT_DESCRIPTION, RoundContent, RoundFields, TimeBudget};
