//! Vocabulary validator.
//!
//! Checks the predicates of a parsed ABox against the SDM vocabulary and the
//! TBox:
//! - every predicate is a known SDM predicate
//! - every predicate is declared by the TBox
//! - datatype predicates have literal objects, object predicates IRI objects
//! - subjects and IRI objects live in the SDM namespace

use std::collections::BTreeSet;

use sdm_abox::Tbox;
use sdm_ontology::{Predicate, PropertyKind, SDM};

use crate::parsed::{Object, ParsedAbox};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "abox/vocabulary";
const MAX_DETAILS: usize = 10;

/// Validates the vocabulary usage of `abox` against `tbox`.
///
/// Nothing is reported for an ABox that failed to parse; the RDF validator
/// covers that case.
#[must_use]
pub fn validate(abox: &ParsedAbox, tbox: &Tbox) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Ok(statements) = &abox.statements else {
        return report;
    };

    let mut unknown = BTreeSet::new();
    let mut used = BTreeSet::new();
    let mut kind_errors = Vec::new();
    let mut foreign = BTreeSet::new();

    for st in statements {
        let Some(predicate) = Predicate::from_iri(&st.predicate) else {
            unknown.insert(st.predicate.clone());
            continue;
        };
        used.insert(predicate);

        let literal = matches!(st.object, Object::Literal { .. });
        let expected = predicate.kind() == PropertyKind::Datatype;
        if literal != expected {
            kind_errors.push(format!(
                "{} {} has {} object",
                st.subject.as_deref().unwrap_or("_:"),
                predicate,
                if literal { "a literal" } else { "a non-literal" }
            ));
        }

        for iri in st.subject.iter().chain(match &st.object {
            Object::Iri(iri) => Some(iri),
            _ => None,
        }) {
            if SDM.local(iri).is_none() {
                foreign.insert(iri.clone());
            }
        }
    }

    if unknown.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} distinct SDM predicates used", used.len()),
        ));
    } else {
        report.push(
            TestResult::fail(VALIDATOR, format!("{} unknown predicates", unknown.len()))
                .with_details(unknown, MAX_DETAILS),
        );
    }

    let undeclared = tbox.undeclared(used.iter().copied());
    if undeclared.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "all predicates are declared in the TBox"));
    } else {
        report.push(
            TestResult::fail(
                VALIDATOR,
                format!("{} predicates are not declared in the TBox", undeclared.len()),
            )
            .with_details(undeclared.iter().map(|p| p.iri().to_owned()), MAX_DETAILS),
        );
    }

    if kind_errors.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "object forms match predicate kinds"));
    } else {
        report.push(
            TestResult::fail(
                VALIDATOR,
                format!("{} triples have the wrong object form", kind_errors.len()),
            )
            .with_details(kind_errors, MAX_DETAILS),
        );
    }

    if !foreign.is_empty() {
        report.push(
            TestResult::warn(
                VALIDATOR,
                format!("{} IRIs outside the sdm namespace", foreign.len()),
            )
            .with_details(foreign, MAX_DETAILS),
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_ontology::Format;

    const TBOX: &str = "@prefix sdm: <http://www.gra.fo/schema/sdm/> .\n\
        @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
        sdm:writes a owl:ObjectProperty .\n\
        sdm:title a owl:DatatypeProperty .\n";

    fn check(ttl: &str) -> ConformanceReport {
        let tbox = Tbox::from_reader(TBOX.as_bytes()).unwrap();
        let abox = ParsedAbox::parse(
            format!(
                "@prefix sdm: <http://www.gra.fo/schema/sdm/> .\n\
                 @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n{ttl}"
            ),
            Format::Turtle,
        );
        validate(&abox, &tbox)
    }

    #[test]
    fn conforming_abox_passes() {
        let report = check("sdm:a1 sdm:writes sdm:p1 .\nsdm:p1 sdm:title \"T\"^^xsd:string .\n");
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn undeclared_predicate_fails() {
        let report = check("sdm:a1 sdm:corr_author sdm:p1 .\n");
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn unknown_predicate_fails() {
        let report = check("sdm:a1 sdm:wrote sdm:p1 .\n");
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn literal_on_object_property_fails() {
        let report = check("sdm:a1 sdm:writes \"p1\"^^xsd:string .\n");
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn foreign_iris_warn() {
        let report = check("sdm:a1 sdm:writes <urn:isbn:1> .\n");
        assert!(report.all_passed());
        assert_eq!(report.count(crate::report::Severity::Warning), 1);
    }
}
