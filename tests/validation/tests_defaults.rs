//! Tests that fully declared elements receive no default and no repair.

use ontouml::codes;
use ontouml::vocab::terms;
use rstest::rstest;
use serde_json::Value;

use crate::helpers::document_fixtures::{declared_class, declared_property, declared_relation};
use crate::helpers::graph_assertions::*;

const CLASS_LITERALS: &[&str] = &[
    terms::ORDER,
    terms::IS_ABSTRACT,
    terms::IS_DERIVED,
    terms::IS_POWERTYPE,
];

const COLLECTIVE_LITERALS: &[&str] = &[
    terms::ORDER,
    terms::IS_ABSTRACT,
    terms::IS_DERIVED,
    terms::IS_POWERTYPE,
    terms::IS_EXTENSIONAL,
];

#[rstest]
#[case(declared_class("kind", 1, false), "c1", CLASS_LITERALS, &[terms::STEREOTYPE])]
#[case(declared_class("type", 2, true), "c1", CLASS_LITERALS, &[terms::STEREOTYPE])]
#[case(declared_class("collective", 1, false), "c1", COLLECTIVE_LITERALS, &[terms::STEREOTYPE])]
#[case(
    declared_property("p1"),
    "p1",
    &[terms::IS_DERIVED, terms::IS_ORDERED, terms::IS_READ_ONLY],
    &[terms::AGGREGATION_KIND]
)]
#[case(
    declared_relation(),
    "r1",
    &[terms::IS_DERIVED, terms::IS_ABSTRACT],
    &[terms::STEREOTYPE]
)]
fn test_declared_element_is_left_alone(
    #[case] document: Value,
    #[case] id: &str,
    #[case] literal_terms: &[&str],
    #[case] individual_terms: &[&str],
) {
    let reported = decode(&document);
    let corrected = decode_correcting(&document);

    assert_eq!(reported.with_code(codes::DEFAULT_APPLIED).count(), 0);
    assert!(
        reported.diagnostics.is_empty(),
        "{:?}",
        reported.diagnostics
    );
    assert_eq!(reported.graph.to_ntriples(), corrected.graph.to_ntriples());

    for term in literal_terms {
        assert_eq!(literals(&reported.graph, id, term).len(), 1, "{id} {term}");
    }
    for term in individual_terms {
        assert_eq!(
            individuals(&reported.graph, id, term).len(),
            1,
            "{id} {term}"
        );
    }
}

#[test]
fn test_declared_relation_ends_keep_their_values() {
    let decoded = decode(&declared_relation());
    let graph = &decoded.graph;
    assert_eq!(literal_value(graph, "r1", terms::IS_ABSTRACT), "true");
    assert_eq!(literal_value(graph, "e1", terms::IS_ORDERED), "true");
    assert_eq!(
        individuals(graph, "e2", terms::AGGREGATION_KIND),
        vec!["none"]
    );
    assert!(codes_for(&decoded, "e1").is_empty());
}
