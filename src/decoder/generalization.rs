//! Generalization and GeneralizationSet decoders.

use super::DecodeContext;
use crate::document::{bool_field, referenced_id, referenced_ids};
use crate::validation::{Diagnostic, codes};
use crate::vocab::{ElementType, terms};

/// `general` and `specific` for every Generalization definition. A missing
/// end is reported; the other end is still asserted.
pub fn decode_generalizations(ctx: &mut DecodeContext<'_>) {
    for (_, obj) in ctx.definitions(ElementType::Generalization) {
        for term in [terms::GENERAL, terms::SPECIFIC] {
            match referenced_id(obj.object, term) {
                Some(target) => ctx.relate(obj.id, term, target),
                None => ctx.reporter.add(
                    Diagnostic::error(
                        obj.type_name,
                        obj.id,
                        format!("missing mandatory '{term}' end"),
                    )
                    .with_code(codes::MISSING_REFERENCE),
                ),
            }
        }
    }
}

/// Defaults, member generalizations, and the optional categorizer of every
/// GeneralizationSet definition.
pub fn decode_generalization_sets(ctx: &mut DecodeContext<'_>) {
    for (_, obj) in ctx.definitions(ElementType::GeneralizationSet) {
        for term in [terms::IS_DISJOINT, terms::IS_COMPLETE] {
            ctx.bool_or_default(&obj, term, bool_field(obj.object, term));
        }

        for generalization in referenced_ids(obj.object, "generalizations") {
            ctx.relate(obj.id, terms::GENERALIZATION, generalization);
        }
        if let Some(categorizer) = referenced_id(obj.object, terms::CATEGORIZER) {
            ctx.relate(obj.id, terms::CATEGORIZER, categorizer);
        }
    }
}
