use clap::{Args, Subcommand};

use crate::cli::subcommands::{CacheCommands, HistoryCommands};

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the next round of a game.
    Round(RoundArgs),
    /// Select round content from a single repository (plus fallbacks).
    Pick(PickArgs),
    /// List the repository catalog.
    Repos(ReposArgs),
    /// Content cache inspection.
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
    /// Per-game repository history.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Print the JSON Schema of the round fields.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct RoundArgs {
    /// Game identifier.
    #[arg(long)]
    pub game: String,
    /// 1-based round number.
    #[arg(long = "round", value_parser = clap::value_parser!(u32).range(1..))]
    pub round_number: u32,
    /// Total rounds in the game.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub total: u32,
}

#[derive(Clone, Debug, Args)]
pub struct PickArgs {
    /// Repository as `owner/name`.
    #[arg(long)]
    pub repo: String,
    /// Complexity floor (defaults to `selection.primary_min_complexity`).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub min_complexity: Option<u8>,
}

#[derive(Clone, Debug, Args)]
pub struct ReposArgs {
    /// Only repositories whose primary language matches (case-insensitive).
    #[arg(long)]
    pub language: Option<String>,
}
