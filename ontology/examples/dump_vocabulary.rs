//! Lists the SDM vocabulary and serializes a two-triple sample graph.
//!
//! Run with: `cargo run --example dump_vocabulary -p sdm-ontology`

use sdm_ontology::serializer::{ntriples, turtle};
use sdm_ontology::{Graph, Predicate, PropertyKind, Term, Triple, SDM};

fn main() {
    println!("SDM vocabulary ({})", SDM.iri);
    for kind in [PropertyKind::Object, PropertyKind::Datatype] {
        let keys: Vec<_> = Predicate::ALL
            .iter()
            .filter(|p| p.kind() == kind)
            .map(|p| p.key())
            .collect();
        println!("  {:?} ({}): {}", kind, keys.len(), keys.join(", "));
    }
    println!();

    let mut graph = Graph::new();
    graph.insert(Triple::new(SDM.mint("a1"), Predicate::Writes, Term::sdm("p1")));
    graph.insert(Triple::new(SDM.mint("p1"), Predicate::Title, Term::string("Graph theory")));

    println!("Turtle output:");
    print!("{}", turtle::to_turtle(&graph));
    println!();
    println!("N-Triples output:");
    print!("{}", ntriples::to_ntriples(&graph));
}
