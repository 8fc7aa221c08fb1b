//! Data access.
//!
//! - FiscalData API client (`fiscal`)
//! - the `RateSource` seam the command handlers fetch through

use chrono::NaiveDate;

use crate::domain::RateRecord;
use crate::error::AppError;

pub mod fiscal;

pub use fiscal::FiscalDataClient;

/// Anything that can produce the rate records published for a date.
///
/// The HTTP client is the production implementation; tests substitute a stub
/// so the aggregation logic runs without network I/O.
pub trait RateSource {
    fn fetch_rates(&self, date: NaiveDate) -> Result<Vec<RateRecord>, AppError>;
}
