//! Model-only filter.

use indexmap::IndexSet;
use oxrdf::vocab::rdf;
use oxrdf::{SubjectRef, TermRef, Triple};

use super::OntoGraph;
use crate::base::BaseIri;
use crate::vocab::{ElementType, local_name};

/// Drop every node of the decoded document that is not a model element.
///
/// A node in the `base` namespace typed with any class outside
/// [`ElementType::MODEL_ELEMENTS`] loses every triple where it is the
/// subject or the object. Vocabulary terms are never removed. Returns the
/// number of removed triples.
pub fn retain_model_elements(graph: &mut OntoGraph, base: &BaseIri) -> usize {
    let mut dropped: IndexSet<String> = IndexSet::new();
    for triple in graph.inner().triples_for_predicate(rdf::TYPE) {
        let (SubjectRef::NamedNode(subject), TermRef::NamedNode(class)) =
            (triple.subject, triple.object)
        else {
            continue;
        };
        if !base.contains(subject.as_str()) {
            continue;
        }
        let keep = local_name(class.as_str())
            .and_then(ElementType::from_type_name)
            .is_some_and(|kind| kind.is_model_element());
        if !keep {
            dropped.insert(subject.as_str().to_string());
        }
    }

    if dropped.is_empty() {
        return 0;
    }

    let doomed: Vec<Triple> = graph
        .inner()
        .iter()
        .filter(|t| {
            let subject_dropped = match t.subject {
                SubjectRef::NamedNode(n) => dropped.contains(n.as_str()),
                _ => false,
            };
            let object_dropped = match t.object {
                TermRef::NamedNode(n) => dropped.contains(n.as_str()),
                _ => false,
            };
            subject_dropped || object_dropped
        })
        .map(|t| t.into_owned())
        .collect();

    let inner = graph.inner_mut();
    for triple in &doomed {
        inner.remove(triple);
    }
    tracing::debug!(
        nodes = dropped.len(),
        triples = doomed.len(),
        "removed diagrammatic data"
    );
    doomed.len()
}
