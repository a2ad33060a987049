//! Project, Package, and Diagram decoders: the containers of a document.

use indexmap::IndexSet;

use super::DecodeContext;
use crate::document::referenced_id;
use crate::validation::{Diagnostic, codes};
use crate::vocab::{ElementType, terms};

/// `project` from every modeled element nested in a project, plus the project's
/// `model` and `diagram` relations.
pub fn decode_projects(ctx: &mut DecodeContext<'_>) {
    for (position, obj) in ctx.definitions(ElementType::Project) {
        let is_member = |kind: ElementType| kind != ElementType::Project && ctx.counting.has(kind);
        let members: IndexSet<&str> = ctx
            .index
            .descendants(position)
            .iter()
            .filter(|d| d.kind.is_some_and(is_member))
            .map(|d| d.id)
            .collect();
        for member in members {
            ctx.relate(member, terms::PROJECT, obj.id);
        }

        if let Some(model) = referenced_id(obj.object, terms::MODEL) {
            ctx.relate(obj.id, terms::MODEL, model);
        }

        if ctx.counting.has(ElementType::Diagram) {
            let diagrams = ctx.index.descendant_ids_of(position, ElementType::Diagram.type_name());
            for diagram in diagrams {
                ctx.relate(obj.id, terms::DIAGRAM, diagram);
            }
        }
    }
}

/// `containsModelElement` to every object held directly in `contents`.
pub fn decode_packages(ctx: &mut DecodeContext<'_>) {
    for (position, obj) in ctx.definitions(ElementType::Package) {
        let contents: IndexSet<&str> = ctx
            .index
            .children_in(position, "contents")
            .map(|child| child.id)
            .collect();
        for element in contents {
            ctx.relate(obj.id, terms::CONTAINS_MODEL_ELEMENT, element);
        }
    }
}

/// `owner` and `containsView` of every Diagram.
pub fn decode_diagrams(ctx: &mut DecodeContext<'_>) {
    for (position, obj) in ctx.definitions(ElementType::Diagram) {
        match referenced_id(obj.object, terms::OWNER) {
            Some(owner) => ctx.relate(obj.id, terms::OWNER, owner),
            None => ctx.reporter.add(
                Diagnostic::error(obj.type_name, obj.id, "diagram has no owner")
                    .with_code(codes::MISSING_REFERENCE),
            ),
        }

        let views: IndexSet<&str> = ctx
            .index
            .children_in(position, "contents")
            .filter(|child| child.kind.is_some_and(|kind| kind.is_element_view()))
            .map(|child| child.id)
            .collect();
        for view in views {
            ctx.relate(obj.id, terms::CONTAINS_VIEW, view);
        }
    }
}
