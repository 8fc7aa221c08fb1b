//! The security catalog: valid descriptions and their categories.
//!
//! The catalog is fixed for the process lifetime. It validates user-supplied
//! descriptions (case-insensitive, canonicalized to catalog casing) and
//! annotates result rows with their category.

use crate::domain::types::SecurityCategory;
use crate::error::AppError;

/// Valid security descriptions per category, in display order.
pub const CATALOG: &[(SecurityCategory, &[&str])] = &[
    (
        SecurityCategory::Marketable,
        &[
            "Treasury Bills",
            "Treasury Notes",
            "Treasury Bonds",
            "Treasury Inflation-Protected Securities (TIPS)",
            "Treasury Floating Rate Notes (FRN)",
            "Federal Financing Bank",
            "Total Marketable",
        ],
    ),
    (
        SecurityCategory::NonMarketable,
        &[
            "Domestic Series",
            "Foreign Series",
            "State and Local Government Series",
            "United States Savings Securities",
            "United States Savings Inflation Securities",
            "Government Account Series",
            "Government Account Series Inflation Securities",
            "Total Non-marketable",
            "Special Purpose Vehicle",
        ],
    ),
    (
        SecurityCategory::InterestBearingDebt,
        &["Total Interest-bearing Debt"],
    ),
];

/// Resolve a free-text description to its catalog-cased form.
pub fn resolve_description(input: &str) -> Result<&'static str, AppError> {
    for (_, descs) in CATALOG {
        for desc in descs.iter().copied() {
            if desc.eq_ignore_ascii_case(input) {
                return Ok(desc);
            }
        }
    }
    Err(AppError::UnknownSecurity(input.to_string()))
}

/// Resolve one or two requested securities, rejecting duplicates.
pub fn resolve_selection(
    first: &str,
    second: Option<&str>,
) -> Result<Vec<&'static str>, AppError> {
    let first = resolve_description(first)?;
    let mut selection = vec![first];
    if let Some(second) = second {
        let second = resolve_description(second)?;
        if second == first {
            return Err(AppError::DuplicateSecurity(first.to_string()));
        }
        selection.push(second);
    }
    Ok(selection)
}

/// Category of a canonical description.
pub fn category_of(desc: &str) -> Option<SecurityCategory> {
    CATALOG
        .iter()
        .find(|(_, descs)| descs.iter().any(|d| *d == desc))
        .map(|(category, _)| *category)
}
