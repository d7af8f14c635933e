use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum CacheCommands {
    /// Row counts and stored bytes per content type.
    Stats,
}

#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// Repositories already used in a game.
    Show {
        #[arg(long)]
        game: String,
    },
    /// Forget a game's repository history.
    Clear {
        #[arg(long)]
        game: String,
    },
}
