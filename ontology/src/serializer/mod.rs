//! Serializers for an ABox [`Graph`](crate::Graph).
//!
//! Two serialization formats are supported:
//! - **Turtle** ([`turtle`]): the default output, with prefix bindings and
//!   subject grouping
//! - **N-Triples** ([`ntriples`]): one absolute triple per line, for bulk loading

use std::path::Path;

use crate::graph::Graph;

pub mod ntriples;
pub mod turtle;

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Turtle 1.1.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Format {
    /// Picks the format from a file extension: `.nt` is N-Triples, anything
    /// else is Turtle.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => Format::NTriples,
            _ => Format::Turtle,
        }
    }

    /// Serializes `graph` in this format.
    #[must_use]
    pub fn serialize(self, graph: &Graph) -> String {
        match self {
            Format::Turtle => turtle::to_turtle(graph),
            Format::NTriples => ntriples::to_ntriples(graph),
        }
    }

    /// Conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Turtle => "ttl",
            Format::NTriples => "nt",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Format::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Format::NTriples),
            other => Err(format!("unknown RDF format: {other} (expected turtle or ntriples)")),
        }
    }
}

/// Escapes a lexical form for a double-quoted Turtle / N-Triples string.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("ABOX.ttl")), Format::Turtle);
        assert_eq!(Format::from_path(Path::new("out/abox.NT")), Format::NTriples);
        assert_eq!(Format::from_path(Path::new("abox")), Format::Turtle);
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(escape_string("say \"hi\"\nnow"), "say \\\"hi\\\"\\nnow");
        assert_eq!(escape_string("a\\b"), "a\\\\b");
    }
}
