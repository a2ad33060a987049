//! Relation decoder.

use super::DecodeContext;
use crate::document::{IndexedObject, bool_field, referenced_ids};
use crate::validation::{Diagnostic, codes};
use crate::vocab::{ElementType, RelationStereotype, Stereotype, terms};

/// Decode every Relation definition: defaults, stereotype, and its ends.
///
/// Relation stereotypes are optional; only a declared value outside the
/// enumeration is reported.
pub fn decode_relations(ctx: &mut DecodeContext<'_>) {
    for (_, obj) in ctx.definitions(ElementType::Relation) {
        for term in [terms::IS_DERIVED, terms::IS_ABSTRACT] {
            ctx.bool_or_default(&obj, term, bool_field(obj.object, term));
        }

        let stereotype = Stereotype::from_field(obj.get(terms::STEREOTYPE));
        ctx.stereotype(&obj, &stereotype, false, |name| {
            RelationStereotype::parse(name).is_some()
        });

        set_relation_ends(ctx, &obj);
    }
}

/// Ends come from `properties`, in order: every end is a `relationEnd`, the
/// first is the source and the second the target.
fn set_relation_ends(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>) {
    let ends = referenced_ids(obj.object, "properties");
    for end in &ends {
        ctx.relate(obj.id, terms::RELATION_END, end);
    }
    if let Some(source) = ends.first() {
        ctx.relate(obj.id, terms::SOURCE_END, source);
    }
    if let Some(target) = ends.get(1) {
        ctx.relate(obj.id, terms::TARGET_END, target);
    }
    if ends.len() != 2 {
        ctx.reporter.add(
            Diagnostic::error(
                obj.type_name,
                obj.id,
                format!("a relation must have exactly two ends, found {}", ends.len()),
            )
            .with_code(codes::MISSING_RELATION_END),
        );
    }
}
