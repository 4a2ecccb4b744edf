//! SDM publication vocabulary encoded as typed Rust data.
//!
//! The `sdm-ontology` crate provides the predicates of the SDM schema
//! (`http://www.gra.fo/schema/sdm/`) as a closed enumeration, the term and
//! triple types an ABox is made of, an append-only [`Graph`] accumulator, and
//! serializers that produce Turtle and N-Triples output.
//!
//! # Entry Point
//!
//! ```
//! use sdm_ontology::{Graph, Predicate, Term, Triple, SDM};
//!
//! let mut graph = Graph::new();
//! graph.insert(Triple::new(SDM.mint("a1"), Predicate::Writes, Term::sdm("p1")));
//! assert_eq!(graph.len(), 1);
//! ```
//!
//! # Serialization
//!
//! ```
//! # let graph = sdm_ontology::Graph::new();
//! let turtle   = sdm_ontology::serializer::turtle::to_turtle(&graph);
//! let ntriples = sdm_ontology::serializer::ntriples::to_ntriples(&graph);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod graph;
pub mod model;
pub mod serializer;
pub mod vocab;

pub use graph::Graph;
pub use model::{Term, Triple};
pub use serializer::Format;
pub use vocab::{Namespace, Predicate, PropertyKind, UnknownPredicate, SDM, XSD};
