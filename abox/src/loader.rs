//! The CSV-to-triple loader.
//!
//! [`load`] streams one CSV file through one [`MappingEntry`] and appends the
//! resulting statements to a [`Graph`]. Columns are resolved by header name
//! once per file, so column order in the file does not matter.
//!
//! Loading is all-or-nothing per file: triples are staged while the file is
//! read and committed to the graph only once every row has been mapped. A
//! missing column, a short row, or a CSV error leaves the graph untouched.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info};
use sdm_ontology::{Graph, Predicate, Term, Triple, SDM};
use serde::Serialize;

use crate::error::{AboxError, Result};
use crate::mapping::MappingEntry;

/// What one call to [`load`] contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// CSV file name.
    pub file: String,
    /// Mapped predicate.
    pub predicate: Predicate,
    /// Data rows read (header excluded).
    pub rows: u64,
    /// Triples committed, derived ones included.
    pub triples: u64,
    /// Of which produced by the derived-triple rule.
    pub derived: u64,
}

/// Header positions resolved for one entry.
struct Columns {
    subject: usize,
    object: usize,
    flag: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, entry: &MappingEntry) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| AboxError::ColumnNotFound {
                    column: column.to_owned(),
                    file: entry.file.clone(),
                })
        };
        Ok(Self {
            subject: find(&entry.triples.subject)?,
            object: find(&entry.triples.object)?,
            flag: entry
                .derived
                .as_ref()
                .map(|rule| find(&rule.flag_column))
                .transpose()?,
        })
    }
}

/// Loads `csv_path` through `entry` into `graph`.
///
/// # Errors
///
/// Returns [`AboxError::Io`] if the file cannot be opened, and any error of
/// [`load_from_reader`]. On error the graph is unchanged.
pub fn load(graph: &mut Graph, csv_path: &Path, entry: &MappingEntry) -> Result<LoadStats> {
    let file = File::open(csv_path).map_err(|e| AboxError::io(csv_path, e))?;
    let stats = load_from_reader(graph, file, entry)?;
    info!(
        "{}: {} rows -> {} triples ({})",
        entry.file, stats.rows, stats.triples, stats.predicate
    );
    Ok(stats)
}

/// Loads CSV data from `reader` through `entry` into `graph`.
///
/// The first record is the header. Blank lines are not rows and are skipped.
/// For every following row the subject is
/// minted from the subject column, the object is an `xsd:string` literal if
/// the object column is one of the entry's literal columns and an SDM IRI
/// otherwise. When the entry carries a derived rule and the row's flag
/// column matches, the same subject and object are emitted a second time
/// under the rule's predicate.
///
/// # Errors
///
/// - [`AboxError::ColumnNotFound`] if a mapped column is missing from the header
/// - [`AboxError::ShortRow`] if a row has no cell for a mapped column
/// - [`AboxError::Csv`] for malformed CSV
pub fn load_from_reader<R: Read>(
    graph: &mut Graph,
    reader: R,
    entry: &MappingEntry,
) -> Result<LoadStats> {
    let csv_err = |source| AboxError::Csv {
        file: entry.file.clone(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let columns = Columns::resolve(&headers, entry)?;
    let predicate = entry.triples.predicate;
    let literal = entry.object_is_literal();

    let mut staged = Vec::new();
    let mut rows = 0u64;
    let mut derived = 0u64;
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record).map_err(csv_err)? {
        rows += 1;
        let line = record.position().map_or(rows + 1, |p| p.line());
        let cell = |index: usize, column: &str| {
            record.get(index).ok_or_else(|| AboxError::ShortRow {
                file: entry.file.clone(),
                line,
                column: column.to_owned(),
            })
        };

        let subject = SDM.mint(cell(columns.subject, &entry.triples.subject)?);
        let value = cell(columns.object, &entry.triples.object)?;
        let object = if literal {
            Term::string(value)
        } else {
            Term::sdm(value)
        };

        let extra = match (&entry.derived, columns.flag) {
            (Some(rule), Some(index)) => rule
                .matches(cell(index, &rule.flag_column)?)
                .then(|| Triple::new(subject.clone(), rule.predicate, object.clone())),
            _ => None,
        };

        staged.push(Triple::new(subject, predicate, object));
        if let Some(triple) = extra {
            derived += 1;
            staged.push(triple);
        }
    }

    if entry.derived.is_some() {
        debug!("{}: {} derived triples", entry.file, derived);
    }

    let triples = staged.len() as u64;
    graph.extend(staged);

    Ok(LoadStats {
        file: entry.file.clone(),
        predicate,
        rows,
        triples,
        derived,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::DerivedTriple;
    use crate::table;

    fn authorship() -> MappingEntry {
        MappingEntry::iri(table::PAPERS_AUTHOR, "author_id", Predicate::Writes, "id_paper")
            .with_derived(DerivedTriple::new("main_author", "TRUE", Predicate::CorrAuthor))
    }

    #[test]
    fn paper_attributes_are_literals() {
        let csv = "id_paper,title,doi,abstract\np1,\"Graph theory\",\"10.1/x\",\"abs text\"\n";
        let mut g = Graph::new();
        for (pred, col, expected) in [
            (Predicate::Title, "title", "Graph theory"),
            (Predicate::Doi, "doi", "10.1/x"),
            (Predicate::Abstract, "abstract", "abs text"),
        ] {
            let entry = MappingEntry::literal("Node_paper.csv", "id_paper", pred, col);
            load_from_reader(&mut g, csv.as_bytes(), &entry).unwrap();
            assert!(g.contains(&Triple::new(SDM.mint("p1"), pred, Term::string(expected))));
        }
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn corresponding_author_gets_two_triples() {
        let csv = "author_id,id_paper,main_author\na1,p1,TRUE\na2,p1,FALSE\n";
        let mut g = Graph::new();
        let stats = load_from_reader(&mut g, csv.as_bytes(), &authorship()).unwrap();
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.triples, 3);
        assert_eq!(stats.derived, 1);
        assert!(g.contains(&Triple::new(SDM.mint("a1"), Predicate::Writes, Term::sdm("p1"))));
        assert!(g.contains(&Triple::new(SDM.mint("a1"), Predicate::CorrAuthor, Term::sdm("p1"))));
        assert!(g.contains(&Triple::new(SDM.mint("a2"), Predicate::Writes, Term::sdm("p1"))));
        assert!(!g.contains(&Triple::new(SDM.mint("a2"), Predicate::CorrAuthor, Term::sdm("p1"))));
    }

    #[test]
    fn missing_column_commits_nothing() {
        let csv = "author_id,paper\na1,p1\n";
        let mut g = Graph::new();
        let err = load_from_reader(&mut g, csv.as_bytes(), &authorship()).unwrap_err();
        assert!(
            matches!(err, AboxError::ColumnNotFound { ref column, .. } if column == "id_paper"),
            "{err}"
        );
        assert!(g.is_empty());
    }

    #[test]
    fn missing_flag_column_is_an_error() {
        let csv = "author_id,id_paper\na1,p1\n";
        let mut g = Graph::new();
        let err = load_from_reader(&mut g, csv.as_bytes(), &authorship()).unwrap_err();
        assert!(matches!(err, AboxError::ColumnNotFound { ref column, .. } if column == "main_author"));
    }

    #[test]
    fn short_row_rolls_back_the_file() {
        let csv = "id_paper,cites_value\np1,p2\np3\n";
        let entry = MappingEntry::iri("Edge_paper_paper.csv", "id_paper", Predicate::Cites, "cites_value");
        let mut g = Graph::new();
        let err = load_from_reader(&mut g, csv.as_bytes(), &entry).unwrap_err();
        match err {
            AboxError::ShortRow { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, "cites_value");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(g.is_empty());
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let csv = "id_paper,cites_value\np1,p2\n\np3,p4\n";
        let entry = MappingEntry::iri("Edge_paper_paper.csv", "id_paper", Predicate::Cites, "cites_value");
        let mut g = Graph::new();
        let stats = load_from_reader(&mut g, csv.as_bytes(), &entry).unwrap();
        assert_eq!(stats.rows, 2);
        assert!(g.contains(&Triple::new(SDM.mint("p3"), Predicate::Cites, Term::sdm("p4"))));
    }

    #[test]
    fn header_only_file_yields_nothing() {
        let entry = MappingEntry::iri("Edge_paper_paper.csv", "id_paper", Predicate::Cites, "cites_value");
        let mut g = Graph::new();
        let stats = load_from_reader(&mut g, "id_paper,cites_value\n".as_bytes(), &entry).unwrap();
        assert_eq!(stats.rows, 0);
        assert!(g.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut g = Graph::new();
        let err = load(&mut g, Path::new("/nonexistent/Node_paper.csv"), &authorship()).unwrap_err();
        assert!(matches!(err, AboxError::Io { .. }));
    }

    #[test]
    fn self_referencing_entry_uses_one_column_twice() {
        let csv = "community\nDatabases\n";
        let entry = MappingEntry::literal(
            "Node_community.csv",
            "community",
            Predicate::CommunityName,
            "community",
        );
        let mut g = Graph::new();
        load_from_reader(&mut g, csv.as_bytes(), &entry).unwrap();
        assert!(g.contains(&Triple::new(
            SDM.mint("Databases"),
            Predicate::CommunityName,
            Term::string("Databases"),
        )));
    }
}
