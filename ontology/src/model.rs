//! RDF term and triple types.
//!
//! These types describe the statements the converter produces. Subjects are
//! always IRIs minted in the [`SDM`](crate::vocab::SDM) namespace; objects are
//! either IRIs minted the same way or typed literals.

use crate::vocab::{iris, Predicate, SDM};

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A reference to another resource, as a full IRI.
    Iri(String),
    /// A typed literal.
    Literal {
        /// Lexical form, exactly as read from the CSV cell.
        value: String,
        /// Full IRI of the datatype.
        datatype: String,
    },
}

impl Term {
    /// An IRI in the SDM namespace built from a raw cell value.
    #[must_use]
    pub fn sdm(local: &str) -> Self {
        Term::Iri(SDM.mint(local))
    }

    /// An `xsd:string` literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: iris::XSD_STRING.to_owned(),
        }
    }

    /// Returns true for literals.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// Returns the IRI if this is an IRI term.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal { .. } => None,
        }
    }
}

/// A single RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Full IRI of the subject.
    pub subject: String,
    /// The vocabulary predicate.
    pub predicate: Predicate,
    /// IRI or literal object.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    #[must_use]
    pub fn new(subject: impl Into<String>, predicate: Predicate, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object,
        }
    }
}
