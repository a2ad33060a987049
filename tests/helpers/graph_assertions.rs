//! Decode shortcuts and graph queries by document id.

use ontouml::vocab::local_name;
use ontouml::{BaseIri, DecodeOptions, Decoded, Decoder, OntoGraph};
use oxrdf::{Literal, NamedNode, Term};
use serde_json::Value;

/// Node for a document id under the default base.
pub fn node(id: &str) -> NamedNode {
    BaseIri::default().node(id)
}

/// Decode with the given options, panicking on fatal errors.
pub fn decode_with(options: DecodeOptions, document: &Value) -> Decoded {
    Decoder::new(options)
        .expect("options should be valid")
        .decode_value(document)
        .expect("document should decode")
}

/// Decode with default options (reporting, not correcting).
pub fn decode(document: &Value) -> Decoded {
    decode_with(DecodeOptions::new(), document)
}

/// Decode with correction enabled.
pub fn decode_correcting(document: &Value) -> Decoded {
    decode_with(DecodeOptions::new().with_correct(true), document)
}

/// Returns true if `id` is typed `ontouml:<type_name>`.
pub fn has_type(graph: &OntoGraph, id: &str, type_name: &str) -> bool {
    graph.types_of(&node(id)).iter().any(|t| t == type_name)
}

/// Document ids of the nodes `id ontouml:<term> ?o`, sorted.
pub fn related_ids(graph: &OntoGraph, id: &str, term: &str) -> Vec<String> {
    let base = BaseIri::default();
    let mut ids: Vec<String> = graph
        .objects(&node(id), term)
        .into_iter()
        .filter_map(|o| match o {
            Term::NamedNode(n) => base.local_id(n.as_str()).map(str::to_string),
            _ => None,
        })
        .collect();
    ids.sort();
    ids
}

/// Vocabulary individuals of `id ontouml:<term> ?o`, sorted.
pub fn individuals(graph: &OntoGraph, id: &str, term: &str) -> Vec<String> {
    let mut names: Vec<String> = graph
        .objects(&node(id), term)
        .into_iter()
        .filter_map(|o| match o {
            Term::NamedNode(n) => local_name(n.as_str()).map(str::to_string),
            _ => None,
        })
        .collect();
    names.sort();
    names
}

/// Literals of `id ontouml:<term> ?o`.
pub fn literals(graph: &OntoGraph, id: &str, term: &str) -> Vec<Literal> {
    graph
        .objects(&node(id), term)
        .into_iter()
        .filter_map(|o| match o {
            Term::Literal(l) => Some(l),
            _ => None,
        })
        .collect()
}

/// The single literal value of `id ontouml:<term>`, panicking otherwise.
pub fn literal_value(graph: &OntoGraph, id: &str, term: &str) -> String {
    let found = literals(graph, id, term);
    assert_eq!(
        found.len(),
        1,
        "expected one literal for {id} {term}, got {found:?}"
    );
    found[0].value().to_string()
}

/// Codes of every diagnostic about `id`, sorted.
pub fn codes_for(decoded: &Decoded, id: &str) -> Vec<String> {
    let mut codes: Vec<String> = decoded
        .diagnostics
        .iter()
        .filter(|d| &*d.element_id == id)
        .filter_map(|d| d.code.as_deref().map(str::to_string))
        .collect();
    codes.sort();
    codes
}

/// Assert that some diagnostic about `id` carries `code`.
pub fn assert_has_code(decoded: &Decoded, id: &str, code: &str) {
    let codes = codes_for(decoded, id);
    assert!(
        codes.iter().any(|c| c == code),
        "expected {code} for '{id}', got {codes:?}"
    );
}

/// Assert that no diagnostic about `id` carries `code`.
pub fn assert_lacks_code(decoded: &Decoded, id: &str, code: &str) {
    let codes = codes_for(decoded, id);
    assert!(
        !codes.iter().any(|c| c == code),
        "unexpected {code} for '{id}', got {codes:?}"
    );
}
