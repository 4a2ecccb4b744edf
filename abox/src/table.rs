//! The built-in driver table.
//!
//! Each entry is independent. Node files carry literal attributes; edge files
//! link two entities. The authorship entry carries the corresponding-author
//! rule.

use sdm_ontology::Predicate;

use crate::mapping::{DerivedTriple, MappingEntry};

/// Authorship edge file.
pub const PAPERS_AUTHOR: &str = "Edge_papers_author.csv";
/// Review edge file (reviewer, review, paper).
pub const PAPER_AUTHOR_REVIEWS: &str = "Edge_paper_author_reviews.csv";

/// Flag column marking the corresponding author in [`PAPERS_AUTHOR`].
pub const MAIN_AUTHOR_COLUMN: &str = "main_author";
/// Value of [`MAIN_AUTHOR_COLUMN`] that marks the corresponding author.
pub const MAIN_AUTHOR_FLAG: &str = "TRUE";

/// Returns the default mapping table, in load order.
#[must_use]
pub fn default_table() -> Vec<MappingEntry> {
    use Predicate::*;

    vec![
        // Papers
        MappingEntry::literal("Node_paper.csv", "id_paper", Title, "title"),
        MappingEntry::literal("Node_paper.csv", "id_paper", Doi, "doi"),
        MappingEntry::literal("Node_paper.csv", "id_paper", Abstract, "abstract"),
        // Volumes
        MappingEntry::literal("Node_volumes.csv", "volume_id", VolName, "volume"),
        MappingEntry::literal("Node_volumes.csv", "volume_id", VolYear, "year"),
        // Editions
        MappingEntry::literal("Node_edition.csv", "ref_edition", EdiName, "edition"),
        MappingEntry::literal("Node_edition.csv", "ref_edition", EdiNum, "edition_num"),
        MappingEntry::literal("Node_edition.csv", "ref_edition", EdiYear, "year"),
        // Journals
        MappingEntry::literal("Node_journals.csv", "journal_id", JourName, "x"),
        // Keywords
        MappingEntry::literal("Node_keywords.csv", "keywords_id", Keyword, "Node_keywords"),
        // Conferences
        MappingEntry::literal("Node_conference.csv", "conference_id", ConfName, "conference"),
        // Authors
        MappingEntry::literal("Node_author.csv", "author_id", AuthorName, "author"),
        // Reviewers and reviews
        MappingEntry::literal(PAPER_AUTHOR_REVIEWS, "author_id", ReviewerName, "author"),
        MappingEntry::literal(PAPER_AUTHOR_REVIEWS, "rev_id", Content, "content"),
        MappingEntry::literal(PAPER_AUTHOR_REVIEWS, "rev_id", Decision, "approves"),
        // Communities
        MappingEntry::literal("Node_community.csv", "community", CommunityName, "community"),
        // Edges
        MappingEntry::iri(PAPERS_AUTHOR, "author_id", Writes, "id_paper").with_derived(
            DerivedTriple::new(MAIN_AUTHOR_COLUMN, MAIN_AUTHOR_FLAG, CorrAuthor),
        ),
        MappingEntry::iri(PAPER_AUTHOR_REVIEWS, "author_id", WritesR, "rev_id"),
        MappingEntry::iri(PAPER_AUTHOR_REVIEWS, "rev_id", About, "id_paper"),
        MappingEntry::iri("Edge_paper_paper.csv", "id_paper", Cites, "cites_value"),
        MappingEntry::iri("Edge_paper_keywords.csv", "id_paper", RelatesTo, "keywords"),
        MappingEntry::iri("Edge_paper_volumes.csv", "id_volume", PublInVol, "id_paper"),
        MappingEntry::iri("Edge_papers_edition.csv", "ref_edition", PublInEdi, "id_paper"),
        MappingEntry::iri("Edge_volumes_journal.csv", "journal", HoldsJour, "id_volume"),
        MappingEntry::iri("Edge_edition_conference.csv", "conference", HoldsConf, "ref_edition"),
        MappingEntry::iri("Edge_conference_community.csv", "conference", ConfPertainsTo, "community"),
        MappingEntry::iri("Edge_journal_community.csv", "journal", JourPertainsTo, "community"),
    ]
}

/// Distinct CSV files referenced by `table`, in first-use order.
#[must_use]
pub fn files(table: &[MappingEntry]) -> Vec<&str> {
    let mut files: Vec<&str> = Vec::new();
    for entry in table {
        if !files.contains(&entry.file.as_str()) {
            files.push(&entry.file);
        }
    }
    files
}
