//! TBox loading.
//!
//! The TBox is parsed with `sophia_turtle` so that a broken schema file stops
//! the run early. Apart from that it is only used for diagnostics: the set of
//! declared properties lets the driver warn about predicates the schema does
//! not know. Mapping never depends on TBox contents.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::info;
use sdm_ontology::vocab::iris::{
    OWL_DATATYPE_PROPERTY, OWL_OBJECT_PROPERTY, RDF_PROPERTY, RDF_TYPE,
};
use sdm_ontology::Predicate;
use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple;

use crate::error::{AboxError, Result};

/// A parsed TBox.
#[derive(Debug, Clone, Default)]
pub struct Tbox {
    /// Source file, if loaded from disk.
    pub path: Option<PathBuf>,
    /// Number of triples in the document.
    pub triple_count: usize,
    /// IRIs typed as `owl:ObjectProperty`.
    pub object_properties: BTreeSet<String>,
    /// IRIs typed as `owl:DatatypeProperty`.
    pub datatype_properties: BTreeSet<String>,
    /// IRIs typed as plain `rdf:Property`.
    pub other_properties: BTreeSet<String>,
}

impl Tbox {
    /// Parses the Turtle file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AboxError::Io`] if the file cannot be opened and
    /// [`AboxError::Tbox`] if it is not valid Turtle.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| AboxError::io(path, e))?;
        let mut tbox = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            AboxError::Tbox { message, .. } => AboxError::Tbox {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        tbox.path = Some(path.to_path_buf());
        info!(
            "TBox {}: {} triples, {} properties declared",
            path.display(),
            tbox.triple_count,
            tbox.property_count()
        );
        Ok(tbox)
    }

    /// Parses Turtle from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`AboxError::Tbox`] if the input is not valid Turtle.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut tbox = Tbox::default();
        sophia_turtle::parser::turtle::parse_bufread(reader)
            .for_each_triple(|t| {
                tbox.triple_count += 1;
                if !t.p().iri().is_some_and(|p| p.as_str() == RDF_TYPE) {
                    return;
                }
                let (s, o) = (t.s(), t.o());
                let (Some(subject), Some(class)) = (s.iri(), o.iri()) else {
                    return;
                };
                let set = match class.as_str() {
                    OWL_OBJECT_PROPERTY => &mut tbox.object_properties,
                    OWL_DATATYPE_PROPERTY => &mut tbox.datatype_properties,
                    RDF_PROPERTY => &mut tbox.other_properties,
                    _ => return,
                };
                set.insert(subject.as_str().to_owned());
            })
            .map_err(|e| AboxError::Tbox {
                path: PathBuf::new(),
                message: e.to_string(),
            })?;
        Ok(tbox)
    }

    /// Number of distinct declared property IRIs.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.object_properties
            .iter()
            .chain(&self.datatype_properties)
            .chain(&self.other_properties)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Returns true if the TBox declares `iri` as a property.
    #[must_use]
    pub fn declares(&self, iri: &str) -> bool {
        self.object_properties.contains(iri)
            || self.datatype_properties.contains(iri)
            || self.other_properties.contains(iri)
    }

    /// The predicates in `predicates` that the TBox does not declare, deduplicated.
    #[must_use]
    pub fn undeclared(&self, predicates: impl IntoIterator<Item = Predicate>) -> Vec<Predicate> {
        predicates
            .into_iter()
            .filter(|p| !self.declares(p.iri()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
