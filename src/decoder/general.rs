//! Generic tree walk.
//!
//! Every indexed object gets one type assertion and one literal per scalar
//! field. Nested objects are not special here: they are indexed objects in
//! their own right and receive their own assertions.

use oxrdf::Literal;
use serde_json::{Number, Value};

use super::DecodeContext;
use crate::document::{IndexedObject, is_reserved_field};
use crate::graph::literals;
use crate::validation::{Diagnostic, codes};
use crate::vocab::terms;

/// Fields whose strings are human-readable and take the language tag.
const TEXT_FIELDS: [&str; 3] = ["name", "description", "text"];

/// Walk every object in the document.
pub fn decode_general(ctx: &mut DecodeContext<'_>) {
    for position in 0..ctx.index.len() {
        let Some(obj) = ctx.index.get(position).cloned() else {
            continue;
        };
        let subject = ctx.node(obj.id);
        ctx.graph.add_type(&subject, obj.type_name);

        for (field, value) in obj.object {
            if field == "id" || field == "type" || is_reserved_field(field) {
                continue;
            }
            match value {
                Value::Object(_) | Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(literal) = scalar_literal(ctx, &obj, field, item) {
                            ctx.graph.add_literal(&subject, field, literal);
                        }
                    }
                }
                scalar => {
                    if let Some(literal) = scalar_literal(ctx, &obj, field, scalar) {
                        ctx.graph.add_literal(&subject, field, literal);
                    }
                }
            }
        }
    }
    tracing::debug!(
        objects = ctx.index.len(),
        triples = ctx.graph.len(),
        "generic walk done"
    );
}

/// Literal for one scalar value, None for values that produce no triple.
fn scalar_literal(
    ctx: &mut DecodeContext<'_>,
    obj: &IndexedObject<'_>,
    field: &str,
    value: &Value,
) -> Option<Literal> {
    if field == terms::WIDTH || field == terms::HEIGHT {
        return match positive_integer(value) {
            Some(n) => Some(literals::positive_integer(n)),
            None => {
                ctx.reporter.add(
                    Diagnostic::error(
                        obj.type_name,
                        obj.id,
                        format!("'{field}' must be a positive integer, dropped {value}"),
                    )
                    .with_code(codes::INVALID_POSITIVE_INTEGER),
                );
                None
            }
        };
    }

    match value {
        Value::String(s) => {
            let language = if TEXT_FIELDS.contains(&field) {
                ctx.language.as_deref()
            } else {
                None
            };
            Some(literals::text(s, language))
        }
        Value::Bool(b) => Some(Literal::from(*b)),
        Value::Number(n) => Some(number_literal(n)),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

fn number_literal(n: &Number) -> Literal {
    if let Some(i) = n.as_i64() {
        literals::integer(i)
    } else if let Some(u) = n.as_u64() {
        Literal::new_typed_literal(u.to_string(), oxrdf::vocab::xsd::INTEGER)
    } else {
        literals::double(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// A positive integer given as a number or a numeral string.
pub(crate) fn positive_integer(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().filter(|v| *v > 0),
        Value::String(s) => s.trim().parse::<u64>().ok().filter(|v| *v > 0),
        _ => None,
    }
}
