//! Repository modules implementing storage operations.
//!
//! Each module adds methods to `GuessDb` via `impl GuessDb` blocks.

pub mod content_cache;
pub mod game_history;
