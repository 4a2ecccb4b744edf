//! N-Triples serializer for an ABox graph.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! N-Triples is suitable for streaming, bulk loading, and diff-friendly storage.

use crate::graph::Graph;
use crate::model::Term;

use super::escape_string;

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 128);
    for t in graph {
        let obj = match &t.object {
            Term::Iri(o) => iri(o),
            Term::Literal { value, datatype } => lit(value, datatype),
        };
        triple(&mut out, &t.subject, t.predicate.iri(), &obj);
    }
    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str, datatype: &str) -> String {
    format!("\"{}\"^^<{}>", escape_string(s), datatype)
}
