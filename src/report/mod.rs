//! Terminal output formatting.
//!
//! We keep formatting code in one place so:
//! - handlers stay thin and testable
//! - output changes are localized

pub mod format;

pub use format::*;
