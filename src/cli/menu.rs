//! Interactive menu surface.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the menu provides the "run `trates` and be prompted" UX
//!
//! Each field is read in a validate-and-reprompt loop; `q` (or EOF) leaves
//! the menu, and a failed command returns to the menu instead of exiting.

use std::io::{self, Write};

use crate::app;
use crate::app::pipeline;
use crate::cli::{LookupArgs, RangeArgs};
use crate::data::RateSource;
use crate::domain::catalog;
use crate::domain::dates::YearMonth;
use crate::error::AppError;

/// Run the menu loop until the user exits.
pub fn run(source: &dyn RateSource) -> Result<(), AppError> {
    loop {
        println!();
        println!("U.S. Treasury Average Interest Rates");
        println!("  1) Look up rates for specific dates");
        println!("  2) Look up rates over a month range");
        println!("  3) List available securities");
        println!("  q) Quit");

        let Some(choice) = prompt("Select an option: ")? else {
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "1" => lookup_flow(source),
            "2" => range_flow(source),
            "3" => {
                print!("{}", crate::report::format_security_listing());
                Ok(Some(()))
            }
            "q" | "Q" => return Ok(()),
            other => {
                println!("Invalid choice: '{other}'. Enter 1, 2, 3, or q.");
                Ok(Some(()))
            }
        };

        match outcome {
            Ok(Some(())) => {}
            // EOF mid-flow: treat like quitting.
            Ok(None) => return Ok(()),
            Err(err) => eprintln!("Error: {err}"),
        }
    }
}

fn lookup_flow(source: &dyn RateSource) -> Result<Option<()>, AppError> {
    let Some(dates) = dates_prompt()? else {
        return Ok(None);
    };
    let Some(Some(security1)) = security_prompt("First security description: ", false)? else {
        return Ok(None);
    };
    let Some(security2) = security_prompt("Second security description (blank for none): ", true)?
    else {
        return Ok(None);
    };

    app::handle_lookup(
        source,
        &LookupArgs {
            dates,
            security1,
            security2,
        },
    )?;
    Ok(Some(()))
}

fn range_flow(source: &dyn RateSource) -> Result<Option<()>, AppError> {
    let Some(start_date) = month_prompt("Start month (YYYY-MM): ")? else {
        return Ok(None);
    };
    let Some(end_date) = month_prompt("End month (YYYY-MM): ")? else {
        return Ok(None);
    };
    let Some(Some(security1)) = security_prompt("First security description: ", false)? else {
        return Ok(None);
    };
    let Some(security2) = security_prompt("Second security description (blank for none): ", true)?
    else {
        return Ok(None);
    };

    app::handle_range(
        source,
        &RangeArgs {
            start_date,
            end_date,
            security1,
            security2,
        },
    )?;
    Ok(Some(()))
}

/// Read lookup dates until they pass validation. `None` means EOF.
fn dates_prompt() -> Result<Option<Vec<String>>, AppError> {
    loop {
        let Some(input) = prompt("Dates (YYYY-MM-DD, space-separated, up to 5): ")? else {
            return Ok(None);
        };
        let dates: Vec<String> = input.split_whitespace().map(str::to_string).collect();
        if dates.is_empty() {
            println!("Enter at least one date.");
            continue;
        }
        match pipeline::validate_lookup_dates(&dates) {
            Ok(_) => return Ok(Some(dates)),
            Err(err) => println!("{err}"),
        }
    }
}

/// Read a `YYYY-MM` month until it parses. `None` means EOF.
fn month_prompt(label: &str) -> Result<Option<String>, AppError> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };
        match YearMonth::parse(&input) {
            Ok(_) => return Ok(Some(input)),
            Err(err) => println!("{err}"),
        }
    }
}

/// Read a security description until it resolves against the catalog.
///
/// Outer `None` means EOF; inner `None` means the optional field was left
/// blank. The returned description is catalog-cased.
fn security_prompt(label: &str, optional: bool) -> Result<Option<Option<String>>, AppError> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };
        if input.is_empty() {
            if optional {
                return Ok(Some(None));
            }
            println!("A security description is required.");
            continue;
        }
        match catalog::resolve_description(&input) {
            Ok(canonical) => return Ok(Some(Some(canonical.to_string()))),
            Err(err) => println!("{err}"),
        }
    }
}

/// Print a prompt and read one trimmed line. `None` means EOF.
fn prompt(label: &str) -> Result<Option<String>, AppError> {
    print!("{label}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::Io(format!("failed to write prompt: {e}")))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| AppError::Io(format!("failed to read input: {e}")))?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
