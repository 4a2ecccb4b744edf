//! ABox validators (RDF syntax, vocabulary).

pub mod rdf;
pub mod vocabulary;
