//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the data and domain code.

use clap::{Parser, Subcommand};

pub mod menu;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "trates",
    version,
    about = "Fetch U.S. Treasury average interest rates from the FiscalData API",
    after_help = "Use '<command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up rates for specific dates (up to 5).
    Lookup(LookupArgs),
    /// Look up rates over a month range (inclusive).
    Range(RangeArgs),
    /// List all available security types and descriptions.
    ListSecurities,
    /// Launch the interactive menu.
    ///
    /// This drives the same handlers as `lookup`/`range`/`list-securities`,
    /// prompting for each input instead of reading flags.
    Menu,
}

/// Options for the `lookup` command.
#[derive(Debug, Parser, Clone)]
pub struct LookupArgs {
    /// One or more dates in YYYY-MM-DD format (e.g., 2023-09-30 2023-08-31).
    #[arg(long, required = true, num_args = 1.., value_name = "YYYY-MM-DD")]
    pub dates: Vec<String>,

    /// Description of the first security (e.g., 'Treasury Bills'). Quote it
    /// if it has spaces.
    #[arg(long)]
    pub security1: String,

    /// Optional second security to compare.
    #[arg(long)]
    pub security2: Option<String>,
}

/// Options for the `range` command.
#[derive(Debug, Parser, Clone)]
pub struct RangeArgs {
    /// Start month in YYYY-MM format (e.g., 2022-10).
    #[arg(long, value_name = "YYYY-MM")]
    pub start_date: String,

    /// End month in YYYY-MM format (e.g., 2023-09).
    #[arg(long, value_name = "YYYY-MM")]
    pub end_date: String,

    /// Description of the first security (e.g., 'Treasury Notes'). Quote it
    /// if it has spaces.
    #[arg(long)]
    pub security1: String,

    /// Optional second security to compare.
    #[arg(long)]
    pub security2: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lookup_invocation() {
        let cli = Cli::try_parse_from([
            "trates",
            "lookup",
            "--dates",
            "2023-09-30",
            "2023-08-31",
            "--security1",
            "Treasury Bills",
            "--security2",
            "Treasury Notes",
        ])
        .unwrap();

        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(args.dates, vec!["2023-09-30", "2023-08-31"]);
        assert_eq!(args.security1, "Treasury Bills");
        assert_eq!(args.security2.as_deref(), Some("Treasury Notes"));
    }

    #[test]
    fn parses_range_invocation() {
        let cli = Cli::try_parse_from([
            "trates",
            "range",
            "--start-date",
            "2022-10",
            "--end-date",
            "2023-09",
            "--security1",
            "Treasury Notes",
        ])
        .unwrap();

        let Command::Range(args) = cli.command else {
            panic!("expected range");
        };
        assert_eq!(args.start_date, "2022-10");
        assert_eq!(args.end_date, "2023-09");
        assert_eq!(args.security2, None);
    }

    #[test]
    fn lookup_requires_dates_and_security1() {
        assert!(Cli::try_parse_from(["trates", "lookup", "--security1", "Treasury Bills"]).is_err());
        assert!(Cli::try_parse_from(["trates", "lookup", "--dates", "2023-09-30"]).is_err());
    }
}
