//! Shared domain logic.
//!
//! - record/category types (`types`)
//! - the security catalog + validator (`catalog`)
//! - year-month arithmetic and the availability window (`dates`)

pub mod catalog;
pub mod dates;
pub mod types;

pub use types::*;
