//! Mapping descriptors.
//!
//! A [`MappingEntry`] says how one CSV file turns into triples: which column
//! names the subject, which vocabulary predicate to use, which column holds
//! the object, and whether that object is a literal. An entry may also carry
//! a [`DerivedTriple`] rule that emits a second statement for flagged rows.

use std::collections::BTreeSet;

use log::warn;
use sdm_ontology::{Predicate, PropertyKind};

/// The `(subject column, predicate, object column)` part of a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleMap {
    /// Column whose cell becomes the subject IRI.
    pub subject: String,
    /// Predicate emitted for every row.
    pub predicate: Predicate,
    /// Column whose cell becomes the object.
    pub object: String,
}

impl TripleMap {
    /// Creates a triple map.
    #[must_use]
    pub fn new(subject: impl Into<String>, predicate: Predicate, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

/// Emits `(subject, predicate, object)` again under another predicate when a
/// flag column holds a given value.
///
/// The authorship table uses this to mark corresponding authors: a row with
/// `main_author = TRUE` yields both `sdm:writes` and `sdm:corr_author`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTriple {
    /// Column holding the flag, looked up by name.
    pub flag_column: String,
    /// Exact cell value that triggers the rule.
    pub flag_value: String,
    /// Predicate of the derived statement.
    pub predicate: Predicate,
}

impl DerivedTriple {
    /// Creates a derived-triple rule.
    #[must_use]
    pub fn new(flag_column: impl Into<String>, flag_value: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            flag_column: flag_column.into(),
            flag_value: flag_value.into(),
            predicate,
        }
    }

    /// Returns true if `cell` triggers the rule.
    #[must_use]
    pub fn matches(&self, cell: &str) -> bool {
        cell == self.flag_value
    }
}

/// One row of the driver table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// CSV file name, relative to the data directory.
    pub file: String,
    /// Subject, predicate, and object columns.
    pub triples: TripleMap,
    /// Columns whose values are written as `xsd:string` literals.
    pub literal_columns: BTreeSet<String>,
    /// Optional second statement for flagged rows.
    pub derived: Option<DerivedTriple>,
}

impl MappingEntry {
    /// An entry whose object column is an IRI.
    #[must_use]
    pub fn iri(file: &str, subject: &str, predicate: Predicate, object: &str) -> Self {
        Self {
            file: file.to_owned(),
            triples: TripleMap::new(subject, predicate, object),
            literal_columns: BTreeSet::new(),
            derived: None,
        }
    }

    /// An entry whose object column is a literal.
    #[must_use]
    pub fn literal(file: &str, subject: &str, predicate: Predicate, object: &str) -> Self {
        let mut entry = Self::iri(file, subject, predicate, object);
        entry.literal_columns.insert(object.to_owned());
        entry
    }

    /// Attaches a derived-triple rule.
    #[must_use]
    pub fn with_derived(mut self, derived: DerivedTriple) -> Self {
        self.derived = Some(derived);
        self
    }

    /// Returns true if values of `column` are rendered as literals.
    #[must_use]
    pub fn is_literal(&self, column: &str) -> bool {
        self.literal_columns.contains(column)
    }

    /// Returns true if this entry's objects are literals.
    #[must_use]
    pub fn object_is_literal(&self) -> bool {
        self.is_literal(&self.triples.object)
    }

    /// Logs a warning when the object form disagrees with the predicate kind.
    ///
    /// A literal object on an object property (or an IRI object on a datatype
    /// property) is still loaded as configured.
    pub fn check_kind(&self) -> bool {
        let expected = match self.triples.predicate.kind() {
            PropertyKind::Datatype => true,
            PropertyKind::Object => false,
        };
        let consistent = expected == self.object_is_literal();
        if !consistent {
            warn!(
                "{}: {} is a {:?} property but column {} is mapped as {}",
                self.file,
                self.triples.predicate,
                self.triples.predicate.kind(),
                self.triples.object,
                if self.object_is_literal() { "a literal" } else { "an IRI" }
            );
        }
        consistent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_entry_marks_object_column() {
        let e = MappingEntry::literal("Node_paper.csv", "id_paper", Predicate::Title, "title");
        assert!(e.is_literal("title"));
        assert!(!e.is_literal("id_paper"));
        assert!(e.object_is_literal());
        assert!(e.check_kind());
    }

    #[test]
    fn iri_entry_has_no_literal_columns() {
        let e = MappingEntry::iri("Edge_paper_paper.csv", "id_paper", Predicate::Cites, "cites_value");
        assert!(e.literal_columns.is_empty());
        assert!(e.check_kind());
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let e = MappingEntry::literal("Edge_paper_paper.csv", "id_paper", Predicate::Cites, "cites_value");
        assert!(!e.check_kind());
    }

    #[test]
    fn derived_rule_matches_exactly() {
        let rule = DerivedTriple::new("main_author", "TRUE", Predicate::CorrAuthor);
        assert!(rule.matches("TRUE"));
        assert!(!rule.matches("true"));
        assert!(!rule.matches("FALSE"));
        assert!(!rule.matches(""));
    }
}
