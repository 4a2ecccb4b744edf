//! `sdm-abox`: Converts the relational CSV extracts into the SDM ABox.
//!
//! **Inputs:**
//! - `<tbox>`: the SDM TBox (Turtle)
//! - `<data>/*.csv`: the node and edge extracts named by the mapping table
//!
//! **Outputs:**
//! - `<out>`: the ABox, Turtle (`.ttl`) or N-Triples (`.nt`)
//! - `<summary>`: optional JSON run summary
//!
//! **Usage:**
//! ```
//! sdm-abox [--tbox <path>] [--data <dir>] [--out <path>] [--format <fmt>]
//!          [--mappings <toml>] [--summary <json>] [--print-mappings]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sdm_abox::{convert, table, ConvertOptions, MappingConfig};
use sdm_ontology::Format;

/// Build the SDM ABox from CSV extracts.
#[derive(Parser)]
#[command(name = "sdm-abox", about = "Build the SDM ABox from CSV extracts")]
struct Args {
    /// TBox Turtle file.
    #[arg(long, default_value = "TBOX_v2.ttl")]
    tbox: PathBuf,

    /// Directory holding the CSV extracts.
    #[arg(long, default_value = "clean_datasets/newdata")]
    data: PathBuf,

    /// Output ABox file.
    #[arg(long, default_value = "ABOX.ttl")]
    out: PathBuf,

    /// Output format (`turtle` or `ntriples`); inferred from `--out` if omitted.
    #[arg(long)]
    format: Option<Format>,

    /// TOML mapping table replacing the built-in one.
    #[arg(long)]
    mappings: Option<PathBuf>,

    /// Write a JSON run summary to this path.
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Print the active mapping table as TOML and exit.
    #[arg(long)]
    print_mappings: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let entries = match &args.mappings {
        Some(path) => MappingConfig::load(path)
            .with_context(|| format!("Failed to load mapping table {}", path.display()))?
            .into_entries(),
        None => table::default_table(),
    };

    if args.print_mappings {
        print!("{}", MappingConfig::from_entries(&entries).to_toml_string()?);
        return Ok(());
    }

    let mut options = ConvertOptions::new(&args.tbox, &args.data, &args.out).with_entries(entries);
    if let Some(format) = args.format {
        options = options.with_format(format);
    }

    let summary = convert(&options).context("ABox conversion failed")?;

    println!(
        "SDM ABox: {} triples ({} distinct) from {} mapping entries",
        summary.triples,
        summary.distinct_triples,
        summary.entries.len()
    );
    println!("  Written: {}", summary.output.display());

    if let Some(path) = &args.summary {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize run summary")?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Written: {}", path.display());
    }

    Ok(())
}
