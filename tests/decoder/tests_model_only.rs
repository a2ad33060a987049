//! Tests for the model-only filter.

use ontouml::vocab::terms;
use ontouml::{DecodeOptions, Decoder};

use crate::helpers::document_fixtures::sample_project;
use crate::helpers::graph_assertions::*;

fn node_appears(graph: &ontouml::OntoGraph, id: &str) -> bool {
    let target = node(id);
    graph.inner().iter().any(|t| {
        matches!(t.subject, oxrdf::SubjectRef::NamedNode(n) if n == target.as_ref())
            || matches!(t.object, oxrdf::TermRef::NamedNode(n) if n == target.as_ref())
    })
}

#[test]
fn test_model_only_drops_diagrammatic_nodes() {
    let options = DecodeOptions::new().with_model_only(true);
    let decoded = decode_with(options, &sample_project());
    let graph = &decoded.graph;

    for dropped in [
        "proj",
        "pkg",
        "d1",
        "cv1",
        "gv1",
        "cv1_rect",
        "cv1_rect_point",
        "gv1_path",
        "gv1_path_point_0",
    ] {
        assert!(!node_appears(graph, dropped), "{dropped} should be gone");
    }
    for kept in ["person", "age", "age_cardinality", "gen1", "gs1", "rel1"] {
        assert!(node_appears(graph, kept), "{kept} should be kept");
    }
}

#[test]
fn test_model_only_keeps_model_relations() {
    let options = DecodeOptions::new().with_model_only(true);
    let decoded = decode_with(options, &sample_project());
    let graph = &decoded.graph;
    assert_eq!(related_ids(graph, "gen1", terms::GENERAL), vec!["person"]);
    assert_eq!(related_ids(graph, "person", terms::ATTRIBUTE), vec!["age"]);
    // The project node is gone, and with it every `project` triple.
    assert!(related_ids(graph, "person", terms::PROJECT).is_empty());
}

#[test]
fn test_decode_model_forces_the_filter() {
    let decoder = Decoder::new(DecodeOptions::new()).unwrap();
    let document = sample_project();

    let full = decoder.decode_value(&document).unwrap();
    let model = decoder.decode_model(&document).unwrap();
    let filtered = decode_with(DecodeOptions::new().with_model_only(true), &document);

    assert!(model.graph.len() < full.graph.len());
    assert_eq!(model.graph.to_ntriples(), filtered.graph.to_ntriples());
}
