//! Tests for Property decoding and Cardinality nodes.

use ontouml::codes;
use ontouml::vocab::terms;
use rstest::rstest;
use serde_json::json;

use crate::helpers::document_fixtures::class_with_attribute;
use crate::helpers::graph_assertions::*;

fn single_property(fields: serde_json::Value) -> serde_json::Value {
    let mut property = json!({"id": "p1", "type": "Property", "name": "p"});
    if let (serde_json::Value::Object(map), serde_json::Value::Object(fields)) =
        (&mut property, fields)
    {
        map.extend(fields);
    }
    property
}

#[rstest]
#[case("2..*", "2", "*")]
#[case("3", "3", "3")]
#[case("*..5", "0", "5")]
#[case("0..1", "0", "1")]
#[case("1..", "1", "1")]
fn test_cardinality_node(#[case] declared: &str, #[case] lower: &str, #[case] upper: &str) {
    let decoded = decode(&class_with_attribute(declared));
    let graph = &decoded.graph;

    assert_eq!(
        related_ids(graph, "age", terms::CARDINALITY),
        vec!["age_cardinality"]
    );
    assert!(has_type(graph, "age_cardinality", "Cardinality"));
    assert_eq!(
        literal_value(graph, "age_cardinality", terms::CARDINALITY_VALUE),
        declared
    );
    assert_eq!(
        literal_value(graph, "age_cardinality", terms::LOWER_BOUND),
        lower
    );
    assert_eq!(
        literal_value(graph, "age_cardinality", terms::UPPER_BOUND),
        upper
    );
    assert_lacks_code(&decoded, "age", codes::INVALID_CARDINALITY);
}

#[test]
fn test_non_numeric_bounds_are_stored_verbatim() {
    let decoded = decode(&class_with_attribute("one..many"));
    let graph = &decoded.graph;
    assert_eq!(
        literal_value(graph, "age_cardinality", terms::LOWER_BOUND),
        "one"
    );
    assert_eq!(
        literal_value(graph, "age_cardinality", terms::UPPER_BOUND),
        "many"
    );
    let warnings = decoded.with_code(codes::INVALID_CARDINALITY).count();
    assert_eq!(warnings, 2);
}

#[test]
fn test_property_without_cardinality_has_no_cardinality_node() {
    let decoded = decode(&single_property(json!({})));
    assert!(related_ids(&decoded.graph, "p1", terms::CARDINALITY).is_empty());
    assert!(decoded.graph.instances_of("Cardinality").is_empty());
}

#[test]
fn test_property_defaults() {
    let decoded = decode(&single_property(json!({})));
    let graph = &decoded.graph;
    for term in [terms::IS_DERIVED, terms::IS_ORDERED, terms::IS_READ_ONLY] {
        assert_eq!(literal_value(graph, "p1", term), "false", "{term}");
    }
    assert_eq!(
        individuals(graph, "p1", terms::AGGREGATION_KIND),
        vec!["none"]
    );
    assert_has_code(&decoded, "p1", codes::DEFAULT_APPLIED);
    // Properties have no mandatory stereotype.
    assert_lacks_code(&decoded, "p1", codes::MISSING_STEREOTYPE);
}

#[rstest]
#[case("COMPOSITE", "composite")]
#[case("Shared", "shared")]
#[case("none", "none")]
fn test_aggregation_kind_is_lower_cased(#[case] declared: &str, #[case] expected: &str) {
    let decoded = decode(&single_property(json!({"aggregationKind": declared})));
    assert_eq!(
        individuals(&decoded.graph, "p1", terms::AGGREGATION_KIND),
        vec![expected]
    );
    assert_lacks_code(&decoded, "p1", codes::INVALID_ENUM_VALUE);
}

#[test]
fn test_invalid_aggregation_kind_is_reported_but_emitted() {
    let decoded = decode(&single_property(json!({"aggregationKind": "Strong"})));
    assert_eq!(
        individuals(&decoded.graph, "p1", terms::AGGREGATION_KIND),
        vec!["strong"]
    );
    assert_has_code(&decoded, "p1", codes::INVALID_ENUM_VALUE);
}

#[test]
fn test_property_relations() {
    let decoded = decode(&single_property(json!({
        "propertyType": {"id": "c1", "type": "Class"},
        "subsettedProperties": [{"id": "p0", "type": "Property"}],
        "redefinedProperties": [{"id": "p2", "type": "Property"}, {"id": "p3", "type": "Property"}]
    })));
    let graph = &decoded.graph;
    assert_eq!(related_ids(graph, "p1", terms::PROPERTY_TYPE), vec!["c1"]);
    assert_eq!(
        related_ids(graph, "p1", terms::SUBSETS_PROPERTY),
        vec!["p0"]
    );
    assert_eq!(
        related_ids(graph, "p1", terms::REDEFINES_PROPERTY),
        vec!["p2", "p3"]
    );
    // Stubs are typed by the walk and nothing more.
    assert!(has_type(graph, "p2", "Property"));
    assert!(literals(graph, "p2", terms::IS_DERIVED).is_empty());
}

#[rstest]
#[case("begin", false)]
#[case("end", false)]
#[case("middle", true)]
fn test_property_stereotype_validity(#[case] stereotype: &str, #[case] invalid: bool) {
    let decoded = decode(&single_property(json!({"stereotype": stereotype})));
    assert_eq!(
        individuals(&decoded.graph, "p1", terms::STEREOTYPE),
        vec![stereotype]
    );
    let found = codes_for(&decoded, "p1");
    assert_eq!(
        found.iter().any(|c| c == codes::INVALID_STEREOTYPE),
        invalid
    );
}
