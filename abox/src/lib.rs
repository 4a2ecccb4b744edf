//! Builds the SDM publication ABox from relational CSV extracts.
//!
//! A run loads the TBox, streams every CSV file named by the mapping table
//! through the [`loader`], and serializes the accumulated graph.
//!
//! # Entry Point
//!
//! ```no_run
//! use sdm_abox::{convert, ConvertOptions};
//!
//! let options = ConvertOptions::new("TBOX_v2.ttl", "clean_datasets/newdata", "ABOX.ttl");
//! let summary = convert(&options).expect("conversion failed");
//! println!("{} triples", summary.triples);
//! ```
//!
//! Any error aborts the run. Each file is loaded all-or-nothing, and nothing
//! is written unless every file loaded.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod config;
pub mod error;
pub mod loader;
pub mod mapping;
pub mod table;
pub mod tbox;

use std::path::PathBuf;

use log::{info, warn};
use sdm_ontology::{Format, Graph};
use serde::Serialize;

pub use config::{ConvertOptions, MappingConfig};
pub use error::{AboxError, Result};
pub use loader::{load, load_from_reader, LoadStats};
pub use mapping::{DerivedTriple, MappingEntry, TripleMap};
pub use tbox::Tbox;

/// Outcome of a successful [`convert`] run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Triples in the TBox.
    pub tbox_triples: usize,
    /// One record per mapping entry, in load order.
    pub entries: Vec<LoadStats>,
    /// Triples written, duplicates included.
    pub triples: usize,
    /// Distinct triples written.
    pub distinct_triples: usize,
    /// Output file.
    pub output: PathBuf,
    /// Output format.
    pub format: Format,
}

/// Loads every entry of `options.entries` into a fresh graph.
///
/// # Errors
///
/// Returns the first loader error; see [`loader::load`].
pub fn build_graph(options: &ConvertOptions) -> Result<(Graph, Vec<LoadStats>)> {
    let mut graph = Graph::new();
    let mut stats = Vec::with_capacity(options.entries.len());
    for entry in &options.entries {
        entry.check_kind();
        let path = options.data_dir.join(&entry.file);
        stats.push(loader::load(&mut graph, &path, entry)?);
    }
    Ok((graph, stats))
}

/// Runs a full conversion: TBox, every mapping entry, serialization.
///
/// # Errors
///
/// - [`AboxError::Io`] if the TBox, a CSV file, or the output cannot be accessed
/// - [`AboxError::Tbox`] if the TBox is not valid Turtle
/// - any loader error from [`build_graph`]
pub fn convert(options: &ConvertOptions) -> Result<RunSummary> {
    let tbox = Tbox::load(&options.tbox)?;
    let mapped = options.entries.iter().flat_map(|e| {
        std::iter::once(e.triples.predicate).chain(e.derived.as_ref().map(|d| d.predicate))
    });
    for predicate in tbox.undeclared(mapped) {
        warn!("{} is not declared in {}", predicate.iri(), options.tbox.display());
    }

    let (graph, entries) = build_graph(options)?;
    info!(
        "{} triples ({} distinct) from {} mapping entries",
        graph.len(),
        graph.distinct_len(),
        entries.len()
    );

    let content = options.format.serialize(&graph);
    std::fs::write(&options.output, content).map_err(|e| AboxError::io(&options.output, e))?;
    info!("Written: {}", options.output.display());

    Ok(RunSummary {
        tbox_triples: tbox.triple_count,
        entries,
        triples: graph.len(),
        distinct_triples: graph.distinct_len(),
        output: options.output.clone(),
        format: options.format,
    })
}
