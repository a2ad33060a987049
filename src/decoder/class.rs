//! Class decoder.

use serde_json::Value;

use super::DecodeContext;
use crate::document::IndexedObject;
use crate::graph::literals;
use crate::validation::{ClassRecord, Order, check_class};
use crate::vocab::{ClassStereotype, ElementType, OntologicalNature, terms};

/// Decode every Class definition: local rules, attributes with their
/// defaults, stereotype, natures, and the `attribute`/`literal` relations.
pub fn decode_classes(ctx: &mut DecodeContext<'_>) {
    for (position, obj) in ctx.definitions(ElementType::Class) {
        let mut record = ClassRecord::from_object(obj.id, obj.object);
        check_class(&mut record, ctx.correct, &mut ctx.reporter);

        set_class_attributes(ctx, &obj, &record);
        ctx.stereotype(&obj, &record.stereotype, true, |name| {
            ClassStereotype::parse(name).is_some()
        });
        set_class_restricted_to(ctx, &obj);

        if ctx.counting.has(ElementType::Property) {
            let property = ElementType::Property.type_name();
            for property_id in ctx.index.descendant_ids_of(position, property) {
                ctx.relate(obj.id, terms::ATTRIBUTE, property_id);
            }
        }
        if ctx.counting.has(ElementType::Literal) {
            let literal = ElementType::Literal.type_name();
            for literal_id in ctx.index.descendant_ids_of(position, literal) {
                ctx.relate(obj.id, terms::LITERAL, literal_id);
            }
        }
    }
}

fn set_class_attributes(
    ctx: &mut DecodeContext<'_>,
    obj: &IndexedObject<'_>,
    record: &ClassRecord,
) {
    let subject = ctx.node(obj.id);

    let order = record.resolved_order();
    if record.order == Order::Absent {
        ctx.reporter.default_applied(obj.type_name, obj.id, terms::ORDER, &order.to_string());
    }
    let order_literal = literals::non_negative_integer(order);
    ctx.graph.add_literal(&subject, terms::ORDER, order_literal);

    match record.is_extensional {
        Some(value) => {
            ctx.graph.add_bool(&subject, terms::IS_EXTENSIONAL, value);
        }
        None if record.stereotype.is(ClassStereotype::Collective.as_str()) => {
            ctx.bool_or_default(obj, terms::IS_EXTENSIONAL, None);
        }
        None => {}
    }
    ctx.bool_or_default(obj, terms::IS_POWERTYPE, record.is_powertype);
    ctx.bool_or_default(obj, terms::IS_DERIVED, record.is_derived);
    ctx.bool_or_default(obj, terms::IS_ABSTRACT, record.is_abstract);
}

/// `restrictedTo` holds nature names such as `functional-complex`.
fn set_class_restricted_to(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>) {
    let names: Vec<&str> = match obj.get(terms::RESTRICTED_TO) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(name)) => vec![name.as_str()],
        _ => return,
    };
    let subject = ctx.node(obj.id);
    for name in names {
        match OntologicalNature::from_document_name(name) {
            Some(nature) => {
                ctx.graph.add_individual(&subject, terms::RESTRICTED_TO, nature.individual());
            }
            None => ctx
                .reporter
                .invalid_enum_value(obj.type_name, obj.id, terms::RESTRICTED_TO, name),
        }
    }
}
