//! Global rule joining stereotyped properties with the classes typing them.
//!
//! A property stereotyped `begin` or `end` marks a temporal boundary and only
//! makes sense on an `event` class. The rule runs after every decoder on the
//! decoded graph itself, so it sees stereotypes repaired by local rules.

use oxrdf::{NamedNode, Term};

use super::diagnostics::{Diagnostic, Reporter, codes};
use crate::base::BaseIri;
use crate::graph::OntoGraph;
use crate::vocab::{ClassStereotype, ElementType, PropertyStereotype, local_name, terms};

/// One row of the join: a stereotyped property and the class typing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StereotypedProperty {
    pub property: NamedNode,
    pub property_stereotype: PropertyStereotype,
    pub class: NamedNode,
    /// Local name of the class stereotype, None when the class has none.
    pub class_stereotype: Option<String>,
}

fn vocab_names(objects: Vec<Term>) -> Vec<String> {
    objects
        .into_iter()
        .filter_map(|term| match term {
            Term::NamedNode(n) => local_name(n.as_str()).map(str::to_string),
            _ => None,
        })
        .collect()
}

/// Every (property, class) pair where the property carries a valid property
/// stereotype and its `propertyType` is a class.
///
/// Invalid property stereotypes are reported when the property is decoded
/// and do not take part in the join.
pub fn stereotyped_properties(graph: &OntoGraph) -> Vec<StereotypedProperty> {
    let mut rows = Vec::new();
    for property in graph.instances_of(ElementType::Property.type_name()) {
        let declared = vocab_names(graph.objects(&property, terms::STEREOTYPE));
        let stereotypes: Vec<PropertyStereotype> = declared
            .iter()
            .filter_map(|name| PropertyStereotype::parse(name))
            .collect();
        if stereotypes.is_empty() {
            continue;
        }
        for class_term in graph.objects(&property, terms::PROPERTY_TYPE) {
            let Term::NamedNode(class) = class_term else {
                continue;
            };
            if !graph
                .types_of(&class)
                .iter()
                .any(|t| t == ElementType::Class.type_name())
            {
                continue;
            }
            let class_stereotype = vocab_names(graph.objects(&class, terms::STEREOTYPE))
                .into_iter()
                .next();
            for stereotype in &stereotypes {
                rows.push(StereotypedProperty {
                    property: property.clone(),
                    property_stereotype: *stereotype,
                    class: class.clone(),
                    class_stereotype: class_stereotype.clone(),
                });
            }
        }
    }
    rows.sort_by(|a, b| {
        (a.class.as_str(), a.property.as_str()).cmp(&(b.class.as_str(), b.property.as_str()))
    });
    rows
}

/// Check that classes typing stereotyped properties are events.
///
/// A class with another stereotype is reported and left alone. A class
/// without a stereotype is reported and, when correcting, becomes an event.
pub fn check_property_stereotypes(
    graph: &mut OntoGraph,
    base: &BaseIri,
    correct: bool,
    reporter: &mut Reporter,
) {
    let event = ClassStereotype::Event.as_str();
    for row in stereotyped_properties(graph) {
        let class_id = base.local_id(row.class.as_str()).unwrap_or(row.class.as_str());
        let property_id =
            base.local_id(row.property.as_str()).unwrap_or(row.property.as_str());
        match row.class_stereotype.as_deref() {
            Some(stereotype) if stereotype == event => {}
            Some(stereotype) => reporter.add(
                Diagnostic::error(
                    "Class",
                    class_id,
                    format!(
                        "class with stereotype '{stereotype}' types property '{property_id}' \
                         stereotyped '{}'; only 'event' classes can be associated with \
                         stereotyped properties",
                        row.property_stereotype.as_str()
                    ),
                )
                .with_code(codes::STEREOTYPE_MISMATCH),
            ),
            None => {
                let action = if correct { "set" } else { "should be set" };
                reporter.add(
                    Diagnostic::warning(
                        "Class",
                        class_id,
                        format!(
                            "stereotype {action} to 'event' as the class types property \
                             '{property_id}' stereotyped '{}'",
                            row.property_stereotype.as_str()
                        ),
                    )
                    .with_code(codes::STEREOTYPE_INFERRED),
                );
                if correct {
                    graph.add_individual(&row.class, terms::STEREOTYPE, event);
                }
            }
        }
    }
}
