//! Element counting table.

use oxrdf::TermRef;
use oxrdf::vocab::rdf;
use rustc_hash::FxHashMap;

use super::OntoGraph;
use crate::vocab::{ElementType, local_name};

/// Number of `rdf:type` assertions for each modeled OntoUML class.
///
/// Computed once after the generic walk and read-only afterwards. Decoders
/// use it to skip work for types absent from the document; it never changes
/// what a decoder would emit. Types outside [`ElementType`] are not counted.
#[derive(Clone, Debug, Default)]
pub struct ElementCounting {
    counts: FxHashMap<ElementType, usize>,
}

impl ElementCounting {
    /// Count the `rdf:type` assertions whose class is a modeled OntoUML class.
    pub fn count(graph: &OntoGraph) -> Self {
        let mut counts: FxHashMap<ElementType, usize> = FxHashMap::default();
        for triple in graph.inner().triples_for_predicate(rdf::TYPE) {
            let TermRef::NamedNode(class) = triple.object else {
                continue;
            };
            if let Some(kind) = local_name(class.as_str()).and_then(ElementType::from_type_name) {
                *counts.entry(kind).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for a kind, zero when absent.
    pub fn get(&self, kind: ElementType) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Returns true if at least one node has this type.
    pub fn has(&self, kind: ElementType) -> bool {
        self.get(kind) > 0
    }

    /// Returns true if any of the given types is present.
    pub fn has_any(&self, kinds: &[ElementType]) -> bool {
        kinds.iter().any(|kind| self.has(*kind))
    }

    /// Class names with a non-zero count, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.counts.keys().map(|kind| kind.type_name()).collect();
        names.sort_unstable();
        names
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
