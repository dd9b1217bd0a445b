//! gravycharge - Compute GRAVY and net charge at pH 7 for peptide sequences
//!
//! Reads peptide sequences one per line (from a file or stdin), scores each
//! with the Kyte-Doolittle hydropathy scale and a fixed charge table, and
//! writes a CSV report (to a file or stdout).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
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

/// Main entry point for the gravycharge CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("gravycharge: {err:#}");
        std::process::exit(1);
    }
}
