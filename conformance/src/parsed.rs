//! A generated ABox read back through `sophia_turtle`.

use std::path::Path;

use anyhow::{Context, Result};
use sdm_ontology::Format;
use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple;

/// The object of a parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// An IRI.
    Iri(String),
    /// A literal with its datatype IRI.
    Literal {
        /// Lexical form.
        value: String,
        /// Datatype IRI, if the parser reported one.
        datatype: Option<String>,
    },
    /// A blank node.
    Blank,
}

/// One parsed triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Subject IRI; `None` for blank nodes.
    pub subject: Option<String>,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Object,
}

/// An ABox document and the statements it parsed to.
#[derive(Debug, Clone)]
pub struct ParsedAbox {
    /// Format used to parse the document.
    pub format: Format,
    /// Raw document text.
    pub content: String,
    /// Statements, or the parser message if the document is not valid RDF.
    pub statements: std::result::Result<Vec<Statement>, String>,
}

impl ParsedAbox {
    /// Reads and parses the ABox at `path`, picking the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. Syntax errors are kept in
    /// [`ParsedAbox::statements`] so validators can report them.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::parse(content, Format::from_path(path)))
    }

    /// Parses `content` as `format`.
    #[must_use]
    pub fn parse(content: String, format: Format) -> Self {
        let mut statements = Vec::new();
        let outcome = match format {
            Format::Turtle => sophia_turtle::parser::turtle::parse_str(&content)
                .for_each_triple(|t| statements.push(statement(&t)))
                .map_err(|e| e.to_string()),
            Format::NTriples => sophia_turtle::parser::nt::parse_str(&content)
                .for_each_triple(|t| statements.push(statement(&t)))
                .map_err(|e| e.to_string()),
        };
        Self {
            format,
            statements: outcome.map(|()| statements),
            content,
        }
    }
}

fn statement<T: Triple>(t: &T) -> Statement {
    let (s, p, o) = (t.s(), t.p(), t.o());
    let object = if let Some(iri) = o.iri() {
        Object::Iri(iri.as_str().to_owned())
    } else if let Some(lex) = o.lexical_form() {
        Object::Literal {
            value: (*lex).to_owned(),
            datatype: o.datatype().map(|d| d.as_str().to_owned()),
        }
    } else {
        Object::Blank
    };
    Statement {
        subject: s.iri().map(|i| i.as_str().to_owned()),
        predicate: p.iri().map(|i| i.as_str().to_owned()).unwrap_or_default(),
        object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turtle_statements() {
        let ttl = "@prefix sdm: <http://www.gra.fo/schema/sdm/> .\n\
                   @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
                   sdm:p1 sdm:title \"Graph theory\"^^xsd:string ;\n    sdm:cites sdm:p2 .\n";
        let parsed = ParsedAbox::parse(ttl.to_owned(), Format::Turtle);
        let statements = parsed.statements.unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(
            statements[0].object,
            Object::Literal {
                value: "Graph theory".to_owned(),
                datatype: Some("http://www.w3.org/2001/XMLSchema#string".to_owned()),
            }
        );
        assert_eq!(
            statements[1].object,
            Object::Iri("http://www.gra.fo/schema/sdm/p2".to_owned())
        );
    }

    #[test]
    fn keeps_syntax_errors() {
        let parsed = ParsedAbox::parse("sdm:p1 sdm:title \"x\" .".to_owned(), Format::Turtle);
        assert!(parsed.statements.is_err());
    }
}
