//! The append-only graph accumulator.
//!
//! A [`Graph`] holds triples in insertion order. Exact duplicates are kept:
//! inserting the same statement twice stores it twice, and both serializers
//! write it twice. Use [`Graph::distinct_len`] for the set size.

use std::collections::HashSet;

use crate::model::Triple;
use crate::vocab::{Namespace, Predicate, SDM, XSD};

/// An ordered collection of triples plus the prefix bindings to emit.
#[derive(Debug, Clone)]
pub struct Graph {
    prefixes: Vec<Namespace>,
    triples: Vec<Triple>,
}

impl Graph {
    /// Creates an empty graph binding the `sdm` and `xsd` prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefixes: vec![SDM, XSD],
            triples: Vec::new(),
        }
    }

    /// Adds a prefix binding. Re-binding an existing prefix replaces it.
    pub fn bind(&mut self, namespace: Namespace) {
        self.prefixes.retain(|ns| ns.prefix != namespace.prefix);
        self.prefixes.push(namespace);
    }

    /// Prefix bindings in declaration order.
    #[must_use]
    pub fn prefixes(&self) -> &[Namespace] {
        &self.prefixes
    }

    /// Appends a triple.
    pub fn insert(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Appends triples in iteration order.
    pub fn extend(&mut self, triples: impl IntoIterator<Item = Triple>) {
        self.triples.extend(triples);
    }

    /// Number of stored triples, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if no triple has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.triples.iter().collect::<HashSet<_>>().len()
    }

    /// Number of stored triples using `predicate`.
    #[must_use]
    pub fn count_predicate(&self, predicate: Predicate) -> usize {
        self.triples
            .iter()
            .filter(|t| t.predicate == predicate)
            .count()
    }

    /// Iterates triples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Returns true if the graph holds `triple` at least once.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Term;

    fn writes(a: &str, p: &str) -> Triple {
        Triple::new(SDM.mint(a), Predicate::Writes, Term::sdm(p))
    }

    #[test]
    fn duplicates_are_kept() {
        let mut g = Graph::new();
        g.insert(writes("a1", "p1"));
        g.insert(writes("a1", "p1"));
        g.insert(writes("a2", "p1"));
        assert_eq!(g.len(), 3);
        assert_eq!(g.distinct_len(), 2);
        assert_eq!(g.count_predicate(Predicate::Writes), 3);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut g = Graph::new();
        g.extend([writes("b", "p"), writes("a", "p")]);
        let subjects: Vec<_> = g.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(
            subjects,
            ["http://www.gra.fo/schema/sdm/b", "http://www.gra.fo/schema/sdm/a"]
        );
    }

    #[test]
    fn rebinding_replaces_prefix() {
        let mut g = Graph::new();
        g.bind(Namespace {
            prefix: "xsd",
            iri: "urn:x-xsd:",
        });
        assert_eq!(g.prefixes().len(), 2);
        assert!(g.prefixes().iter().any(|ns| ns.iri == "urn:x-xsd:"));
    }
}
