//! Input validation and the per-date fetch/filter/sort assembler.

use chrono::NaiveDate;

use crate::data::RateSource;
use crate::domain::ReportRow;
use crate::domain::catalog;
use crate::domain::dates::parse_iso_date;
use crate::error::AppError;

/// Maximum number of dates a single `lookup` may request.
pub const MAX_LOOKUP_DATES: usize = 5;

/// Validate lookup dates: count, format, then collapse duplicates and sort
/// ascending.
pub fn validate_lookup_dates(inputs: &[String]) -> Result<Vec<NaiveDate>, AppError> {
    if inputs.len() > MAX_LOOKUP_DATES {
        return Err(AppError::TooManyDates(inputs.len()));
    }
    let mut dates = Vec::with_capacity(inputs.len());
    for input in inputs {
        dates.push(parse_iso_date(input)?);
    }
    dates.sort();
    dates.dedup();
    Ok(dates)
}

/// Combined result of a multi-date aggregation.
#[derive(Debug, Clone)]
pub struct RateReport {
    /// Matching rows across all dates, sorted by (date, description).
    pub rows: Vec<ReportRow>,
    /// Dates whose fetch failed (already warned on stderr).
    pub failed: Vec<(NaiveDate, AppError)>,
}

/// Fetch each date in turn, keep the rows for the requested securities, tag
/// them with their catalog category, and sort the combined list.
///
/// A failing date is warned and skipped; it does not abort the remaining
/// dates.
pub fn collect_rates(
    source: &dyn RateSource,
    dates: &[NaiveDate],
    securities: &[&'static str],
) -> RateReport {
    let mut rows = Vec::new();
    let mut failed = Vec::new();

    for &date in dates {
        match source.fetch_rates(date) {
            Ok(records) => {
                for record in records {
                    if !securities.contains(&record.security_desc.as_str()) {
                        continue;
                    }
                    // Requested names are catalog entries, so this cannot miss.
                    let Some(category) = catalog::category_of(&record.security_desc) else {
                        continue;
                    };
                    rows.push(ReportRow {
                        record_date: record.record_date,
                        category,
                        security_desc: record.security_desc,
                        rate: record.rate,
                    });
                }
            }
            Err(err) => {
                eprintln!("Warning: Could not fetch data for {date}: {err}");
                failed.push((date, err));
            }
        }
    }

    rows.sort_by(|a, b| {
        a.record_date
            .cmp(&b.record_date)
            .then_with(|| a.security_desc.cmp(&b.security_desc))
    });

    RateReport { rows, failed }
}
