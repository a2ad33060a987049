//! Element view decoder.

use super::DecodeContext;
use crate::document::{IndexedObject, referenced_id};
use crate::validation::{Diagnostic, codes};
use crate::vocab::{ElementType, terms};

/// Suffix of the shape node assumed for a view whose shape carries no id.
pub const SHAPE_SUFFIX: &str = "_shape";

/// `isViewOf` and `shape` for every element view; `sourceView` and
/// `targetView` for connector views.
pub fn decode_element_views(ctx: &mut DecodeContext<'_>) {
    if !ctx.counting.has_any(&ElementType::ELEMENT_VIEWS) {
        return;
    }
    for kind in ElementType::ELEMENT_VIEWS {
        for (_, obj) in ctx.definitions(kind) {
            if let Some(element) = referenced_id(obj.object, "modelElement") {
                ctx.relate(obj.id, terms::IS_VIEW_OF, element);
            }

            let shape = match referenced_id(obj.object, terms::SHAPE) {
                Some(shape) => shape.to_string(),
                None => format!("{}{SHAPE_SUFFIX}", obj.id),
            };
            ctx.relate(obj.id, terms::SHAPE, &shape);

            if kind.is_connector_view() {
                set_connector_ends(ctx, &obj);
            }
        }
    }
}

fn set_connector_ends(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>) {
    for (field, term) in [
        ("source", terms::SOURCE_VIEW),
        ("target", terms::TARGET_VIEW),
    ] {
        match referenced_id(obj.object, field) {
            Some(view) => ctx.relate(obj.id, term, view),
            None => ctx.reporter.add(
                Diagnostic::error(
                    obj.type_name,
                    obj.id,
                    format!("connector view has no '{field}' view"),
                )
                .with_code(codes::MISSING_REFERENCE),
            ),
        }
    }
}
