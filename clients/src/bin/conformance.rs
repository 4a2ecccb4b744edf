//! `sdm-conformance`: Validates a generated ABox.
//!
//! Runs the conformance suite:
//! - RDF syntax (Turtle 1.1 / N-Triples)
//! - SDM vocabulary and TBox declarations
//!
//! **Usage:**
//! ```
//! sdm-conformance [--tbox <path>] [--abox <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use sdm_conformance::{run_all, AboxPaths};

/// Run the SDM ABox conformance suite.
#[derive(Parser)]
#[command(
    name = "sdm-conformance",
    about = "Validate a generated SDM ABox against RDF syntax and the TBox"
)]
struct Args {
    /// TBox Turtle file.
    #[arg(long, default_value = "TBOX_v2.ttl")]
    tbox: PathBuf,

    /// ABox to validate (`.ttl` or `.nt`).
    #[arg(long, default_value = "ABOX.ttl")]
    abox: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let report = run_all(&AboxPaths {
        tbox: args.tbox,
        abox: args.abox,
    })?;

    println!("SDM ABox Conformance Report");
    println!("===========================");
    println!();
    for result in &report.results {
        println!("{result}");
    }
    println!();
    println!("Summary: {}", report.summary());

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
