//! `treasury-rates` library crate.
//!
//! The binary (`trates`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the interactive menu and the subcommands share one set of handlers
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
