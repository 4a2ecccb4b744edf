//! Turtle 1.1 serializer for an ABox graph.
//!
//! Produces the prefix declarations bound on the graph followed by every
//! stored triple in insertion order. Consecutive triples that share a subject
//! are written as one `;`-separated block.

use crate::graph::Graph;
use crate::model::Term;
use crate::vocab::Namespace;

use super::escape_string;

/// Serializes `graph` to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let prefixes = graph.prefixes();
    let mut out = String::with_capacity(64 + graph.len() * 96);

    for ns in prefixes {
        out.push_str(&format!("@prefix {}: <{}> .\n", ns.prefix, ns.iri));
    }
    out.push('\n');

    let mut current: Option<&str> = None;
    for triple in graph {
        let predicate = iri_to_turtle(triple.predicate.iri(), prefixes);
        let object = term_to_turtle(&triple.object, prefixes);
        if current == Some(triple.subject.as_str()) {
            out.push_str(&format!(" ;\n    {} {}", predicate, object));
        } else {
            if current.is_some() {
                out.push_str(" .\n\n");
            }
            out.push_str(&format!(
                "{} {} {}",
                iri_to_turtle(&triple.subject, prefixes),
                predicate,
                object
            ));
            current = Some(triple.subject.as_str());
        }
    }
    if current.is_some() {
        out.push_str(" .\n");
    }

    out
}

/// Writes an IRI as a prefixed name when a binding covers it and the local
/// part is safe to abbreviate, otherwise as `<iri>`.
fn iri_to_turtle(iri: &str, prefixes: &[Namespace]) -> String {
    prefixes
        .iter()
        .find_map(|ns| {
            ns.local(iri)
                .filter(|local| is_safe_local(local))
                .map(|local| format!("{}:{}", ns.prefix, local))
        })
        .unwrap_or_else(|| format!("<{}>", iri))
}

fn term_to_turtle(term: &Term, prefixes: &[Namespace]) -> String {
    match term {
        Term::Iri(iri) => iri_to_turtle(iri, prefixes),
        Term::Literal { value, datatype } => format!(
            "\"{}\"^^{}",
            escape_string(value),
            iri_to_turtle(datatype, prefixes)
        ),
    }
}

/// A conservative subset of `PN_LOCAL`: ASCII alphanumerics, `_` and `-`,
/// with `.` allowed only between other characters. `-` may not lead.
fn is_safe_local(local: &str) -> bool {
    let bytes = local.as_bytes();
    let Some((&first, _)) = bytes.split_first() else {
        return true;
    };
    if first == b'-' || first == b'.' || bytes.last() == Some(&b'.') {
        return false;
    }
    bytes
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}
