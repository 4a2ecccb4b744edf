//! RDF 1.1 / Turtle 1.1 validator.
//!
//! Validates that the ABox artifact is well-formed:
//! - the document parses without errors
//! - it contains at least one triple
//! - a Turtle document binds the `sdm` prefix
//! - every subject is an IRI

use sdm_ontology::{Format, SDM};

use crate::parsed::ParsedAbox;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "abox/rdf";

/// Validates the syntax of a parsed ABox.
#[must_use]
pub fn validate(abox: &ParsedAbox) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let statements = match &abox.statements {
        Ok(statements) => statements,
        Err(message) => {
            report.push(
                TestResult::fail(VALIDATOR, format!("ABox is not valid {:?}", abox.format))
                    .with_details([message.clone()], 1),
            );
            return report;
        }
    };

    if statements.is_empty() {
        report.push(TestResult::fail(VALIDATOR, "ABox contains no triples"));
    } else {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "ABox parses as {:?} ({} triples, {} bytes)",
                abox.format,
                statements.len(),
                abox.content.len()
            ),
        ));
    }

    if abox.format == Format::Turtle {
        let binding = format!("@prefix {}: <{}>", SDM.prefix, SDM.iri);
        if abox.content.lines().any(|l| l.trim_start().starts_with(&binding)) {
            report.push(TestResult::pass(VALIDATOR, "sdm prefix is bound"));
        } else {
            report.push(TestResult::warn(VALIDATOR, "sdm prefix is not bound"));
        }
    }

    let blank = statements.iter().filter(|s| s.subject.is_none()).count();
    if blank > 0 {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{blank} triples have a blank-node subject"),
        ));
    }

    report
}
