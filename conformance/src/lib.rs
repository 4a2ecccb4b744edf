//! SDM ABox conformance suite.
//!
//! Validates a generated ABox against the standards it must satisfy and
//! against the TBox it was built for.
//!
//! # Conformance Scope
//!
//! | Check | Standard |
//! |-------|----------|
//! | Syntax | RDF 1.1, Turtle 1.1 / N-Triples |
//! | Predicates | SDM vocabulary, TBox property declarations |
//! | Object forms | `owl:DatatypeProperty` → literal, `owl:ObjectProperty` → IRI |
//!
//! # Entry Point
//!
//! ```no_run
//! use sdm_conformance::{run_all, AboxPaths};
//! use std::path::PathBuf;
//!
//! let paths = AboxPaths {
//!     tbox: PathBuf::from("TBOX_v2.ttl"),
//!     abox: PathBuf::from("ABOX.ttl"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod parsed;
pub mod report;
pub mod validators;

use anyhow::Context;
use log::info;
use sdm_abox::Tbox;

pub use parsed::ParsedAbox;
pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
pub struct AboxPaths {
    /// TBox the ABox was generated against.
    pub tbox: std::path::PathBuf,
    /// Generated ABox (`.ttl` or `.nt`).
    pub abox: std::path::PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. RDF syntax
/// 2. Vocabulary against the TBox
///
/// # Errors
///
/// Returns an error only if a file cannot be read or the TBox is invalid.
pub fn run_all(paths: &AboxPaths) -> anyhow::Result<ConformanceReport> {
    let tbox = Tbox::load(&paths.tbox)
        .with_context(|| format!("Failed to load TBox {}", paths.tbox.display()))?;
    let abox = ParsedAbox::load(&paths.abox)?;
    info!("Validating {} against {}", paths.abox.display(), paths.tbox.display());

    let mut report = ConformanceReport::new();
    report.extend(validators::rdf::validate(&abox));
    report.extend(validators::vocabulary::validate(&abox, &tbox));
    Ok(report)
}
