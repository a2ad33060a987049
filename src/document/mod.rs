//! Source document handling.
//!
//! A document is a JSON tree of objects carrying `id` and `type`. Before
//! decoding, null-valued fields are stripped so that "present but null" and
//! "absent" behave the same everywhere. The tree is then indexed once by
//! [`DocumentIndex`]; decoders never walk the raw tree themselves.

mod index;

use serde_json::{Map, Value};

use crate::vocab::ElementType;

pub use index::{DocumentIndex, IndexedObject};

/// Fields the generic walker never turns into triples.
///
/// Each is either handled by a specialized decoder (`stereotype`, `order`,
/// boolean flags, `cardinality`, geometry) or has no vocabulary mapping
/// (`propertyAssignments`).
pub const RESERVED_FIELDS: [&str; 17] = [
    "x",
    "y",
    "points",
    "stereotype",
    "order",
    "restrictedTo",
    "cardinality",
    "aggregationKind",
    "isAbstract",
    "isDerived",
    "isExtensional",
    "isPowertype",
    "isOrdered",
    "isReadOnly",
    "isDisjoint",
    "isComplete",
    "propertyAssignments",
];

/// Returns true if the walker must skip this field.
pub fn is_reserved_field(field: &str) -> bool {
    RESERVED_FIELDS.contains(&field)
}

/// Remove every null-valued object field, recursively.
///
/// Null items inside arrays are left in place; consumers skip them.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_nulls(v);
            }
        }
        Value::Array(items) => {
            for item in items {
                strip_nulls(item);
            }
        }
        _ => {}
    }
}

/// Returns true if the object only references another object by id.
///
/// Stubs carry the `id`/`type` pair of a definition that lives elsewhere in
/// the document. They receive a type assertion from the walker but are
/// ignored by specialized decoders.
pub fn is_reference_stub(kind: Option<ElementType>, object: &Map<String, Value>) -> bool {
    match kind {
        Some(ElementType::Class) => !object.contains_key("name"),
        Some(kind) if kind.is_element_view() => !object.contains_key("modelElement"),
        _ => object.len() < 3,
    }
}

/// Id of the object referenced by `field`, when it holds an object with a string id.
pub fn referenced_id<'d>(object: &'d Map<String, Value>, field: &str) -> Option<&'d str> {
    match object.get(field) {
        Some(Value::Object(target)) => match target.get("id") {
            Some(Value::String(id)) => Some(id.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Ids of every object referenced by an array `field`, in document order.
pub fn referenced_ids<'d>(object: &'d Map<String, Value>, field: &str) -> Vec<&'d str> {
    match object.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(target) => match target.get("id") {
                    Some(Value::String(id)) => Some(id.as_str()),
                    _ => None,
                },
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Read a boolean field. Non-boolean values read as absent.
pub fn bool_field(object: &Map<String, Value>, field: &str) -> Option<bool> {
    object.get(field).and_then(Value::as_bool)
}

/// Read a string field. Non-string values read as absent.
pub fn str_field<'d>(object: &'d Map<String, Value>, field: &str) -> Option<&'d str> {
    object.get(field).and_then(Value::as_str)
}
