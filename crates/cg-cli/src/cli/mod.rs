use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `codeguess` binary.
#[derive(Debug, Parser)]
#[command(
    name = "codeguess",
    version,
    about = "Round content acquisition for a code-guessing game"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::HistoryCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn round_arguments_parse() {
        let cli = Cli::try_parse_from([
            "codeguess", "round", "--game", "g-1", "--round", "2", "--total", "5",
        ])
        .expect("cli should parse");

        let Commands::Round(args) = cli.command else {
            panic!("expected round command");
        };
        assert_eq!(args.game, "g-1");
        assert_eq!((args.round_number, args.total), (2, 5));
    }

    #[test]
    fn round_zero_is_rejected() {
        let parsed =
            Cli::try_parse_from(["codeguess", "round", "--game", "g", "--round", "0", "--total", "3"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["codeguess", "repos", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Repos(_)));
    }

    #[test]
    fn min_complexity_is_bounded() {
        let ok = Cli::try_parse_from(["codeguess", "pick", "--repo", "a/b", "--min-complexity", "7"])
            .expect("cli should parse");
        assert!(matches!(ok.command, Commands::Pick(ref args) if args.min_complexity == Some(7)));
        assert!(
            Cli::try_parse_from(["codeguess", "pick", "--repo", "a/b", "--min-complexity", "11"])
                .is_err()
        );
    }

    #[test]
    fn history_subcommands_parse() {
        let cli = Cli::try_parse_from(["codeguess", "history", "clear", "--game", "g-9"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::Clear { ref game }
            } if game == "g-9"
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["codeguess", "--format", "table", "schema"]).is_err());
    }
}
