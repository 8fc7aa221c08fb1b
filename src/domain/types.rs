//! Shared domain types.

use chrono::NaiveDate;

/// Top-level grouping a security description belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityCategory {
    Marketable,
    NonMarketable,
    InterestBearingDebt,
}

impl SecurityCategory {
    pub const ALL: [SecurityCategory; 3] = [
        SecurityCategory::Marketable,
        SecurityCategory::NonMarketable,
        SecurityCategory::InterestBearingDebt,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SecurityCategory::Marketable => "Marketable",
            SecurityCategory::NonMarketable => "Non-marketable",
            SecurityCategory::InterestBearingDebt => "Interest-bearing Debt",
        }
    }
}

/// One rate observation, as returned by the rate client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRecord {
    pub record_date: NaiveDate,
    /// Category string as reported by the API.
    pub security_type: String,
    pub security_desc: String,
    /// Fixed-point percentage string, e.g. `4.187%`.
    pub rate: String,
}

/// One display row: a record re-tagged with its catalog category.
///
/// The category comes from the catalog, not from the API's
/// `security_type_desc`, so every displayed row is consistent with
/// `list-securities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub record_date: NaiveDate,
    pub category: SecurityCategory,
    pub security_desc: String,
    pub rate: String,
}
