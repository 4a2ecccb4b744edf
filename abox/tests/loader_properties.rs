//! Property-based tests for the CSV loader.
//!
//! Rows are generated as random identifiers and free text, written out as
//! CSV with the `csv` crate, and loaded through each built-in mapping entry.

use std::collections::BTreeSet;

use proptest::prelude::*;
use sdm_abox::table::{default_table, PAPERS_AUTHOR};
use sdm_abox::{load_from_reader, DerivedTriple, MappingEntry};
use sdm_ontology::{Graph, Predicate, Term, Triple, SDM};

fn to_csv(header: &[&str], rows: &[Vec<String>]) -> Vec<u8> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(header).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    wtr.into_inner().unwrap()
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,8}",
        "[A-Za-z][A-Za-z ,\"]{0,15}",
    ]
}

fn authorship() -> MappingEntry {
    MappingEntry::iri(PAPERS_AUTHOR, "author_id", Predicate::Writes, "id_paper")
        .with_derived(DerivedTriple::new("main_author", "TRUE", Predicate::CorrAuthor))
}

fn expected(entry: &MappingEntry, subject: &str, object: &str) -> Triple {
    let object = if entry.object_is_literal() {
        Term::string(object)
    } else {
        Term::sdm(object)
    };
    Triple::new(SDM.mint(subject), entry.triples.predicate, object)
}

proptest! {
    /// Every built-in entry maps each row to exactly its own triple.
    #[test]
    fn one_triple_per_row(
        index in 0..default_table().len(),
        rows in prop::collection::vec((cell(), cell()), 0..12),
    ) {
        let entry = default_table().swap_remove(index);
        prop_assume!(entry.derived.is_none());
        let (s, o) = (entry.triples.subject.as_str(), entry.triples.object.as_str());
        let (header, data): (Vec<&str>, Vec<Vec<String>>) = if s == o {
            (vec![s], rows.iter().map(|(a, _)| vec![a.clone()]).collect())
        } else {
            (vec![s, o], rows.iter().map(|(a, b)| vec![a.clone(), b.clone()]).collect())
        };

        let mut graph = Graph::new();
        let stats = load_from_reader(&mut graph, to_csv(&header, &data).as_slice(), &entry).unwrap();

        prop_assert_eq!(stats.rows as usize, rows.len());
        prop_assert_eq!(graph.len(), rows.len());
        for (triple, row) in graph.iter().zip(&data) {
            let object = if s == o { &row[0] } else { &row[1] };
            prop_assert_eq!(triple, &expected(&entry, &row[0], object));
        }
    }

    /// Reordering columns does not change the resulting triple set.
    #[test]
    fn column_order_is_irrelevant(
        rows in prop::collection::vec((cell(), cell(), any::<bool>()), 1..10),
    ) {
        let entry = authorship();
        let flag = |b: bool| if b { "TRUE".to_owned() } else { "FALSE".to_owned() };
        let forward = to_csv(
            &["author_id", "id_paper", "main_author"],
            &rows.iter().map(|(a, p, m)| vec![a.clone(), p.clone(), flag(*m)]).collect::<Vec<_>>(),
        );
        let reversed = to_csv(
            &["main_author", "id_paper", "author_id"],
            &rows.iter().map(|(a, p, m)| vec![flag(*m), p.clone(), a.clone()]).collect::<Vec<_>>(),
        );

        let mut g1 = Graph::new();
        let mut g2 = Graph::new();
        load_from_reader(&mut g1, forward.as_slice(), &entry).unwrap();
        load_from_reader(&mut g2, reversed.as_slice(), &entry).unwrap();
        let a: BTreeSet<_> = g1.iter().collect();
        let b: BTreeSet<_> = g2.iter().collect();
        prop_assert_eq!(a, b);
    }

    /// Flagged rows yield two triples, all others one.
    #[test]
    fn derived_rule_counts(
        rows in prop::collection::vec((cell(), cell(), prop_oneof![Just("TRUE"), Just("FALSE"), Just("true"), Just("")]), 0..12),
    ) {
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|(a, p, m)| vec![a.clone(), p.clone(), (*m).to_owned()])
            .collect();
        let mut graph = Graph::new();
        let stats = load_from_reader(
            &mut graph,
            to_csv(&["author_id", "id_paper", "main_author"], &data).as_slice(),
            &authorship(),
        )
        .unwrap();

        let flagged = rows.iter().filter(|(_, _, m)| *m == "TRUE").count();
        prop_assert_eq!(stats.derived as usize, flagged);
        prop_assert_eq!(graph.count_predicate(Predicate::Writes), rows.len());
        prop_assert_eq!(graph.count_predicate(Predicate::CorrAuthor), flagged);
        prop_assert_eq!(graph.len(), rows.len() + flagged);
    }

    /// Loading the same input twice into one graph doubles it.
    #[test]
    fn loading_twice_doubles(rows in prop::collection::vec((cell(), cell()), 0..8)) {
        let entry = MappingEntry::iri("Edge_paper_paper.csv", "id_paper", Predicate::Cites, "cites_value");
        let data: Vec<Vec<String>> = rows.iter().map(|(a, b)| vec![a.clone(), b.clone()]).collect();
        let csv = to_csv(&["id_paper", "cites_value"], &data);

        let mut graph = Graph::new();
        load_from_reader(&mut graph, csv.as_slice(), &entry).unwrap();
        let once = graph.len();
        load_from_reader(&mut graph, csv.as_slice(), &entry).unwrap();
        prop_assert_eq!(graph.len(), 2 * once);
    }
}
