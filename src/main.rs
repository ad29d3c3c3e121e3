//! methodprune - Remove named methods from a generated source file
//!
//! Locates each method by its declaration, attached doc comment and brace
//! balance, then writes every other line to a new file for review.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use colored::Colorize;

/// Main entry point for the methodprune CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
