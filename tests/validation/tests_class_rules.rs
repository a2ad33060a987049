//! Tests for local class rules through the decoder.

use ontouml::codes;
use ontouml::vocab::terms;
use serde_json::json;

use crate::helpers::document_fixtures::class_with;
use crate::helpers::graph_assertions::*;

// ============================================================================
// isPowertype
// ============================================================================

#[test]
fn test_powertype_without_stereotype_implies_type() {
    let document = class_with(json!({"isPowertype": true}));

    let reported = decode(&document);
    assert!(individuals(&reported.graph, "c1", terms::STEREOTYPE).is_empty());
    assert_eq!(
        literal_value(&reported.graph, "c1", terms::IS_POWERTYPE),
        "true"
    );
    assert_has_code(&reported, "c1", codes::STEREOTYPE_INFERRED);
    assert_has_code(&reported, "c1", codes::MISSING_STEREOTYPE);

    let corrected = decode_correcting(&document);
    assert_eq!(
        individuals(&corrected.graph, "c1", terms::STEREOTYPE),
        vec!["type"]
    );
    assert_eq!(
        literal_value(&corrected.graph, "c1", terms::IS_POWERTYPE),
        "true"
    );
    assert_eq!(literal_value(&corrected.graph, "c1", terms::ORDER), "2");
    assert_lacks_code(&corrected, "c1", codes::MISSING_STEREOTYPE);
}

#[test]
fn test_powertype_on_known_stereotype_is_forced_false() {
    let document = class_with(json!({"stereotype": "kind", "isPowertype": true}));

    let reported = decode(&document);
    assert_eq!(
        literal_value(&reported.graph, "c1", terms::IS_POWERTYPE),
        "true"
    );
    assert_has_code(&reported, "c1", codes::ATTRIBUTE_NOT_ALLOWED);

    let corrected = decode_correcting(&document);
    assert_eq!(
        literal_value(&corrected.graph, "c1", terms::IS_POWERTYPE),
        "false"
    );
    assert_eq!(
        individuals(&corrected.graph, "c1", terms::STEREOTYPE),
        vec!["kind"]
    );
}

#[test]
fn test_powertype_on_type_is_accepted() {
    let document = class_with(json!({"stereotype": "type", "isPowertype": true}));
    let decoded = decode_correcting(&document);
    assert_eq!(
        literal_value(&decoded.graph, "c1", terms::IS_POWERTYPE),
        "true"
    );
    assert!(!decoded.has_errors());
    assert_lacks_code(&decoded, "c1", codes::ATTRIBUTE_NOT_ALLOWED);
}

#[test]
fn test_false_powertype_without_stereotype_is_not_a_hint() {
    let decoded = decode_correcting(&class_with(json!({"isPowertype": false})));
    assert!(individuals(&decoded.graph, "c1", terms::STEREOTYPE).is_empty());
    assert_lacks_code(&decoded, "c1", codes::STEREOTYPE_INFERRED);
}

// ============================================================================
// isExtensional
// ============================================================================

#[test]
fn test_extensional_without_stereotype_implies_collective() {
    let document = class_with(json!({"isExtensional": true}));

    let corrected = decode_correcting(&document);
    assert_eq!(
        individuals(&corrected.graph, "c1", terms::STEREOTYPE),
        vec!["collective"]
    );
    assert_eq!(
        literal_value(&corrected.graph, "c1", terms::IS_EXTENSIONAL),
        "true"
    );

    let reported = decode(&document);
    assert!(individuals(&reported.graph, "c1", terms::STEREOTYPE).is_empty());
    assert_has_code(&reported, "c1", codes::STEREOTYPE_INFERRED);
}

#[test]
fn test_extensional_on_non_collective_is_removed_when_correcting() {
    let document = class_with(json!({"stereotype": "kind", "isExtensional": false}));

    let reported = decode(&document);
    assert_eq!(
        literal_value(&reported.graph, "c1", terms::IS_EXTENSIONAL),
        "false"
    );
    assert_has_code(&reported, "c1", codes::ATTRIBUTE_NOT_ALLOWED);

    let corrected = decode_correcting(&document);
    assert!(literals(&corrected.graph, "c1", terms::IS_EXTENSIONAL).is_empty());
    assert_has_code(&corrected, "c1", codes::ATTRIBUTE_NOT_ALLOWED);
}

#[test]
fn test_conflicting_attributes_are_an_error_without_repair() {
    let document = class_with(json!({
        "stereotype": "kind",
        "isExtensional": true,
        "isPowertype": true
    }));
    let decoded = decode_correcting(&document);
    assert_has_code(&decoded, "c1", codes::CONFLICTING_ATTRIBUTES);
    assert!(decoded.has_errors());
    // First match wins: no further attribute rule touches the class.
    assert_eq!(
        literal_value(&decoded.graph, "c1", terms::IS_POWERTYPE),
        "true"
    );
    assert_eq!(
        literal_value(&decoded.graph, "c1", terms::IS_EXTENSIONAL),
        "true"
    );
    assert_lacks_code(&decoded, "c1", codes::ATTRIBUTE_NOT_ALLOWED);
}

#[test]
fn test_repairs_are_idempotent() {
    let document = class_with(json!({"stereotype": "kind", "isPowertype": true, "order": 3}));
    let first = decode_correcting(&document);
    let second = decode_correcting(&document);
    assert_eq!(first.graph.to_ntriples(), second.graph.to_ntriples());
    assert_eq!(literal_value(&first.graph, "c1", terms::ORDER), "1");
}
