//! Run configuration and TOML mapping tables.
//!
//! The built-in table ([`crate::table::default_table`]) can be replaced by a
//! TOML document of `[[mapping]]` records:
//!
//! ```toml
//! [[mapping]]
//! file = "Edge_papers_author.csv"
//! subject = "author_id"
//! predicate = "writes"
//! object = "id_paper"
//!
//! [mapping.derived]
//! flag_column = "main_author"
//! flag_value = "TRUE"
//! predicate = "corr_author"
//! ```
//!
//! Predicate keys are checked while the document is parsed, so a typo fails
//! before any CSV file is opened.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use sdm_ontology::{Format, Predicate};
use serde::{Deserialize, Serialize};

use crate::error::{AboxError, Result};
use crate::mapping::{DerivedTriple, MappingEntry, TripleMap};
use crate::table;

/// A mapping table as read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    /// Entries in load order.
    #[serde(default, rename = "mapping")]
    pub mappings: Vec<MappingRecord>,
}

/// One `[[mapping]]` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingRecord {
    /// CSV file name, relative to the data directory.
    pub file: String,
    /// Subject column.
    pub subject: String,
    /// Predicate key.
    pub predicate: Predicate,
    /// Object column.
    pub object: String,
    /// Shorthand: the object column is a literal.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub literal: bool,
    /// Additional literal columns.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub literal_columns: BTreeSet<String>,
    /// Optional derived-triple rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived: Option<DerivedRecord>,
}

/// A `[mapping.derived]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerivedRecord {
    /// Flag column.
    pub flag_column: String,
    /// Triggering value.
    pub flag_value: String,
    /// Predicate key of the derived statement.
    pub predicate: Predicate,
}

impl MappingConfig {
    /// Parses a TOML mapping table.
    ///
    /// # Errors
    ///
    /// Returns [`AboxError::Config`] for malformed TOML, unknown fields,
    /// unknown predicate keys, or an empty table.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: MappingConfig =
            toml::from_str(s).map_err(|e| AboxError::Config(e.to_string()))?;
        if config.mappings.is_empty() {
            return Err(AboxError::Config("no [[mapping]] entries".to_owned()));
        }
        for (i, m) in config.mappings.iter().enumerate() {
            for (what, value) in [("file", &m.file), ("subject", &m.subject), ("object", &m.object)] {
                if value.trim().is_empty() {
                    return Err(AboxError::Config(format!("mapping[{i}]: empty {what}")));
                }
            }
        }
        Ok(config)
    }

    /// Reads and parses a TOML mapping table from disk.
    ///
    /// # Errors
    ///
    /// Returns [`AboxError::Io`] if the file cannot be read, otherwise as
    /// [`MappingConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AboxError::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            AboxError::Config(msg) => AboxError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Converts the records into mapping entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<MappingEntry> {
        self.mappings
            .into_iter()
            .map(|m| {
                let mut literal_columns = m.literal_columns;
                if m.literal {
                    literal_columns.insert(m.object.clone());
                }
                MappingEntry {
                    file: m.file,
                    triples: TripleMap::new(m.subject, m.predicate, m.object),
                    literal_columns,
                    derived: m
                        .derived
                        .map(|d| DerivedTriple::new(d.flag_column, d.flag_value, d.predicate)),
                }
            })
            .collect()
    }

    /// Builds the TOML form of `entries`.
    #[must_use]
    pub fn from_entries(entries: &[MappingEntry]) -> Self {
        let mappings = entries
            .iter()
            .map(|e| {
                let literal = e.object_is_literal();
                let mut literal_columns = e.literal_columns.clone();
                literal_columns.remove(&e.triples.object);
                MappingRecord {
                    file: e.file.clone(),
                    subject: e.triples.subject.clone(),
                    predicate: e.triples.predicate,
                    object: e.triples.object.clone(),
                    literal,
                    literal_columns,
                    derived: e.derived.as_ref().map(|d| DerivedRecord {
                        flag_column: d.flag_column.clone(),
                        flag_value: d.flag_value.clone(),
                        predicate: d.predicate,
                    }),
                }
            })
            .collect();
        Self { mappings }
    }

    /// Renders the table as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`AboxError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| AboxError::Config(e.to_string()))
    }
}

/// Everything a conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// TBox Turtle file.
    pub tbox: PathBuf,
    /// Directory holding the CSV extracts.
    pub data_dir: PathBuf,
    /// Output ABox file.
    pub output: PathBuf,
    /// Output format.
    pub format: Format,
    /// Mapping table, in load order.
    pub entries: Vec<MappingEntry>,
}

impl ConvertOptions {
    /// Options using the built-in table and the format implied by `output`.
    #[must_use]
    pub fn new(tbox: impl Into<PathBuf>, data_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        Self {
            tbox: tbox.into(),
            data_dir: data_dir.into(),
            format: Format::from_path(&output),
            output,
            entries: table::default_table(),
        }
    }

    /// Replaces the mapping table.
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<MappingEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Overrides the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}
