//! gravycharge - Compute GRAVY and net charge at pH 7 for peptide sequences
//!
//! This library provides the core scoring logic: static residue property
//! tables, the two per-sequence reductions (GRAVY and net charge), and the
//! streaming CSV report writer. Argument handling and file wiring live in
//! the binary.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod report;
pub mod residue;
pub mod score;
