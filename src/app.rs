//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - validates dates, ranges, and security selections
//! - runs the per-date fetch loop
//! - prints tables and warnings

use chrono::NaiveDate;
use clap::Parser;

use crate::cli::{Cli, Command, LookupArgs, RangeArgs};
use crate::data::{FiscalDataClient, RateSource};
use crate::domain::catalog;
use crate::domain::dates::{AvailabilityWindow, YearMonth, month_end_dates};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `trates` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `trates` to behave like `trates menu`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);

    let client = FiscalDataClient::from_env();

    match cli.command {
        Command::Lookup(args) => handle_lookup(&client, &args),
        Command::Range(args) => handle_range(&client, &args),
        Command::ListSecurities => {
            print!("{}", crate::report::format_security_listing());
            Ok(())
        }
        Command::Menu => crate::cli::menu::run(&client),
    }
}

/// Handle the `lookup` command.
pub fn handle_lookup(source: &dyn RateSource, args: &LookupArgs) -> Result<(), AppError> {
    let dates = pipeline::validate_lookup_dates(&args.dates)?;
    let securities = catalog::resolve_selection(&args.security1, args.security2.as_deref())?;
    fetch_and_display(source, &dates, &securities)
}

/// Handle the `range` command.
pub fn handle_range(source: &dyn RateSource, args: &RangeArgs) -> Result<(), AppError> {
    let start = YearMonth::parse(&args.start_date)?;
    let end = YearMonth::parse(&args.end_date)?;
    let securities = catalog::resolve_selection(&args.security1, args.security2.as_deref())?;

    let window = AvailabilityWindow::from_env()?;
    let span = month_end_dates(start, end, &window)?;
    for month in &span.skipped {
        eprintln!(
            "Warning: Skipping {month} - outside available range ({} to {}).",
            window.start, window.end
        );
    }

    fetch_and_display(source, &span.dates, &securities)
}

fn fetch_and_display(
    source: &dyn RateSource,
    dates: &[NaiveDate],
    securities: &[&'static str],
) -> Result<(), AppError> {
    println!("\nFetching data, please wait...");
    let report = pipeline::collect_rates(source, dates, securities);

    if report.rows.is_empty() {
        println!("\nNo matching data found for the selected criteria.");
    } else {
        println!("\n--- Results ---");
        print!("{}", crate::report::format_rates_table(&report.rows));
    }

    if !report.failed.is_empty() {
        eprintln!(
            "Note: {} of {} requested dates could not be fetched.",
            report.failed.len(),
            dates.len()
        );
    }

    Ok(())
}

/// Rewrite argv so a bare `trates` opens the interactive menu.
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() == 1 {
        argv.push("menu".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RateRecord;

    /// Panics on any fetch; used to prove validation happens first.
    struct NoFetchSource;

    impl RateSource for NoFetchSource {
        fn fetch_rates(&self, _date: NaiveDate) -> Result<Vec<RateRecord>, AppError> {
            panic!("fetch must not run for invalid input");
        }
    }

    fn lookup_args(dates: Vec<String>, security1: &str, security2: Option<&str>) -> LookupArgs {
        LookupArgs {
            dates,
            security1: security1.to_string(),
            security2: security2.map(str::to_string),
        }
    }

    #[test]
    fn duplicate_security_fails_before_any_fetch() {
        let args = lookup_args(
            vec!["2023-09-30".to_string()],
            "Treasury Bills",
            Some("treasury bills"),
        );
        let err = handle_lookup(&NoFetchSource, &args).unwrap_err();
        assert_eq!(err, AppError::DuplicateSecurity("Treasury Bills".to_string()));
    }

    #[test]
    fn too_many_dates_fails_before_any_fetch() {
        let dates: Vec<String> = (1..=6).map(|d| format!("2023-09-{d:02}")).collect();
        let args = lookup_args(dates, "Treasury Bills", None);
        let err = handle_lookup(&NoFetchSource, &args).unwrap_err();
        assert_eq!(err, AppError::TooManyDates(6));
    }

    #[test]
    fn unknown_security_fails_before_any_fetch() {
        let args = lookup_args(vec!["2023-09-30".to_string()], "Treasury Bricks", None);
        let err = handle_lookup(&NoFetchSource, &args).unwrap_err();
        assert_eq!(err, AppError::UnknownSecurity("Treasury Bricks".to_string()));
    }

    #[test]
    fn inverted_range_fails_before_any_fetch() {
        let args = RangeArgs {
            start_date: "2023-09".to_string(),
            end_date: "2023-08".to_string(),
            security1: "Treasury Bills".to_string(),
            security2: None,
        };
        let err = handle_range(&NoFetchSource, &args).unwrap_err();
        assert!(matches!(err, AppError::InvalidRange(_)));
    }

    #[test]
    fn bare_invocation_defaults_to_menu() {
        let argv = rewrite_args(vec!["trates".to_string()]);
        assert_eq!(argv, vec!["trates".to_string(), "menu".to_string()]);
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        let argv = vec!["trates".to_string(), "list-securities".to_string()];
        assert_eq!(rewrite_args(argv.clone()), argv);

        let argv = vec!["trates".to_string(), "--help".to_string()];
        assert_eq!(rewrite_args(argv.clone()), argv);
    }
}
