//! Year-month arithmetic and the data-availability window.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::AppError;

/// Earliest month the API is known to carry data for.
const DEFAULT_WINDOW_START: YearMonth = YearMonth::new(2020, 10);
/// Latest month the API is known to carry data for.
const DEFAULT_WINDOW_END: YearMonth = YearMonth::new(2025, 9);

const ENV_WINDOW_START: &str = "TREASURY_RATES_WINDOW_START";
const ENV_WINDOW_END: &str = "TREASURY_RATES_WINDOW_END";

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Parse `YYYY-MM`, validated by parsing `<input>-01` as a full date.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let first = NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d")
            .map_err(|_| {
                AppError::InvalidRange(format!("Invalid date format '{input}'. Use YYYY-MM."))
            })?;
        Ok(Self::new(first.year(), first.month()))
    }

    /// The following calendar month.
    pub fn succ(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Last calendar day of this month (variable lengths, leap years).
    ///
    /// `None` only for months outside chrono's representable date range.
    pub fn last_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)?
            .checked_add_months(Months::new(1))?
            .pred_opt()
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Inclusive month window the API carries data for.
///
/// The defaults reflect upstream data availability at release time; both
/// ends can be overridden from the environment once the dataset grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: YearMonth,
    pub end: YearMonth,
}

impl AvailabilityWindow {
    pub const DEFAULT: Self = Self {
        start: DEFAULT_WINDOW_START,
        end: DEFAULT_WINDOW_END,
    };

    /// Load the window, honoring environment overrides (`.env` supported).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let start = month_from_env(ENV_WINDOW_START, DEFAULT_WINDOW_START)?;
        let end = month_from_env(ENV_WINDOW_END, DEFAULT_WINDOW_END)?;
        if start > end {
            return Err(AppError::Config(format!(
                "{ENV_WINDOW_START} ({start}) is after {ENV_WINDOW_END} ({end})."
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }
}

fn month_from_env(var: &str, default: YearMonth) -> Result<YearMonth, AppError> {
    match std::env::var(var) {
        Ok(value) => YearMonth::parse(value.trim())
            .map_err(|_| AppError::Config(format!("{var} must be YYYY-MM (got '{value}')."))),
        Err(_) => Ok(default),
    }
}

/// Month-end dates surviving window clamping, plus the months dropped by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSpan {
    pub dates: Vec<NaiveDate>,
    pub skipped: Vec<YearMonth>,
}

/// Enumerate month-end dates for every month in `[start, end]`, clamped to
/// `window`.
///
/// Months inside the requested range but outside the window are reported in
/// `skipped` rather than failing the call; zero surviving dates is
/// `EmptyRange`.
pub fn month_end_dates(
    start: YearMonth,
    end: YearMonth,
    window: &AvailabilityWindow,
) -> Result<MonthSpan, AppError> {
    if start > end {
        return Err(AppError::InvalidRange(format!(
            "Start date {start} cannot be after end date {end}."
        )));
    }

    let mut dates = Vec::new();
    let mut skipped = Vec::new();
    let mut current = start;
    while current <= end {
        if window.contains(current) {
            let date = current.last_day().ok_or_else(|| {
                AppError::InvalidRange(format!(
                    "Month {current} is outside the supported calendar range."
                ))
            })?;
            dates.push(date);
        } else {
            skipped.push(current);
        }
        current = current.succ();
    }

    if dates.is_empty() {
        return Err(AppError::EmptyRange(format!(
            "No valid dates within the specified range and available period ({} to {}).",
            window.start, window.end
        )));
    }

    Ok(MonthSpan { dates, skipped })
}

/// Parse a `YYYY-MM-DD` lookup date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDateFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_month_parses_and_displays() {
        let ym = YearMonth::parse("2023-09").unwrap();
        assert_eq!(ym, YearMonth::new(2023, 9));
        assert_eq!(ym.to_string(), "2023-09");
    }

    #[test]
    fn year_month_rejects_garbage() {
        assert!(matches!(YearMonth::parse("2023-13"), Err(AppError::InvalidRange(_))));
        assert!(matches!(YearMonth::parse("09-2023"), Err(AppError::InvalidRange(_))));
        assert!(matches!(YearMonth::parse("2023-09-30"), Err(AppError::InvalidRange(_))));
    }

    #[test]
    fn succ_rolls_over_december() {
        assert_eq!(YearMonth::new(2023, 12).succ(), YearMonth::new(2024, 1));
        assert_eq!(YearMonth::new(2023, 5).succ(), YearMonth::new(2023, 6));
    }

    #[test]
    fn last_day_handles_variable_lengths_and_leap_years() {
        assert_eq!(YearMonth::new(2023, 9).last_day(), Some(ymd(2023, 9, 30)));
        assert_eq!(YearMonth::new(2023, 2).last_day(), Some(ymd(2023, 2, 28)));
        assert_eq!(YearMonth::new(2024, 2).last_day(), Some(ymd(2024, 2, 29)));
        assert_eq!(YearMonth::new(2023, 12).last_day(), Some(ymd(2023, 12, 31)));
    }

    #[test]
    fn enumerates_month_ends_inclusive() {
        let span = month_end_dates(
            YearMonth::new(2023, 8),
            YearMonth::new(2023, 9),
            &AvailabilityWindow::DEFAULT,
        )
        .unwrap();
        assert_eq!(span.dates, vec![ymd(2023, 8, 31), ymd(2023, 9, 30)]);
        assert!(span.skipped.is_empty());
    }

    #[test]
    fn single_month_range_is_valid() {
        let span = month_end_dates(
            YearMonth::new(2024, 2),
            YearMonth::new(2024, 2),
            &AvailabilityWindow::DEFAULT,
        )
        .unwrap();
        assert_eq!(span.dates, vec![ymd(2024, 2, 29)]);
    }

    #[test]
    fn start_after_end_is_invalid() {
        let err = month_end_dates(
            YearMonth::new(2023, 9),
            YearMonth::new(2023, 8),
            &AvailabilityWindow::DEFAULT,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRange(_)));
    }

    #[test]
    fn range_fully_outside_window_is_empty() {
        let err = month_end_dates(
            YearMonth::new(2019, 1),
            YearMonth::new(2019, 6),
            &AvailabilityWindow::DEFAULT,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::EmptyRange(_)));
    }

    #[test]
    fn months_outside_window_are_skipped_not_fatal() {
        let span = month_end_dates(
            YearMonth::new(2020, 8),
            YearMonth::new(2020, 11),
            &AvailabilityWindow::DEFAULT,
        )
        .unwrap();
        assert_eq!(span.dates, vec![ymd(2020, 10, 31), ymd(2020, 11, 30)]);
        assert_eq!(span.skipped, vec![YearMonth::new(2020, 8), YearMonth::new(2020, 9)]);
    }

    #[test]
    fn window_contains_is_inclusive() {
        let window = AvailabilityWindow::DEFAULT;
        assert!(window.contains(YearMonth::new(2020, 10)));
        assert!(window.contains(YearMonth::new(2025, 9)));
        assert!(!window.contains(YearMonth::new(2020, 9)));
        assert!(!window.contains(YearMonth::new(2025, 10)));
    }

    #[test]
    fn parse_iso_date_accepts_valid_rejects_invalid() {
        assert_eq!(parse_iso_date("2023-09-30").unwrap(), ymd(2023, 9, 30));
        assert!(matches!(
            parse_iso_date("2023-02-30"),
            Err(AppError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            parse_iso_date("09/30/2023"),
            Err(AppError::InvalidDateFormat(_))
        ));
    }
}
