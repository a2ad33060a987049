//! Per-call decode state.

use oxrdf::NamedNode;

use crate::base::BaseIri;
use crate::document::{DocumentIndex, IndexedObject};
use crate::graph::{ElementCounting, OntoGraph};
use crate::validation::Reporter;
use crate::vocab::{ElementType, Stereotype, terms};

/// Everything one decode call owns: the index over its document, the graph
/// being built, the counting table, and the diagnostics reporter.
pub struct DecodeContext<'d> {
    pub base: BaseIri,
    /// Validated, lower-cased language tag.
    pub language: Option<String>,
    pub correct: bool,
    pub index: DocumentIndex<'d>,
    pub graph: OntoGraph,
    pub counting: ElementCounting,
    pub reporter: Reporter,
}

impl<'d> DecodeContext<'d> {
    pub fn new(
        base: BaseIri,
        language: Option<String>,
        correct: bool,
        silent: bool,
        index: DocumentIndex<'d>,
    ) -> Self {
        Self {
            base,
            language,
            correct,
            index,
            graph: OntoGraph::new(),
            counting: ElementCounting::default(),
            reporter: Reporter::new(silent),
        }
    }

    /// Node for a document-local id.
    pub fn node(&self, id: &str) -> NamedNode {
        self.base.node(id)
    }

    /// `subject ontouml:<term> object`, both given by id.
    pub fn relate(&mut self, subject_id: &str, term: &str, object_id: &str) {
        let subject = self.node(subject_id);
        let object = self.node(object_id);
        self.graph.add_relation(&subject, term, &object);
    }

    /// Boolean attribute: the declared value, or `false` with an info
    /// diagnostic when the field is absent.
    pub fn bool_or_default(&mut self, obj: &IndexedObject<'_>, term: &str, declared: Option<bool>) {
        let subject = self.node(obj.id);
        let value = match declared {
            Some(value) => value,
            None => {
                self.reporter.default_applied(obj.type_name, obj.id, term, "false");
                false
            }
        };
        self.graph.add_bool(&subject, term, value);
    }

    /// Assert a declared stereotype. Absence is reported when `mandatory`;
    /// a value outside `valid` is reported but still asserted.
    pub fn stereotype(
        &mut self,
        obj: &IndexedObject<'_>,
        stereotype: &Stereotype,
        mandatory: bool,
        valid: impl Fn(&str) -> bool,
    ) {
        match stereotype.name() {
            None => {
                if mandatory {
                    self.reporter.missing_stereotype(obj.type_name, obj.id);
                }
            }
            Some(name) => {
                let subject = self.node(obj.id);
                self.graph.add_individual(&subject, terms::STEREOTYPE, name);
                if !valid(name) {
                    self.reporter.invalid_stereotype(obj.type_name, obj.id, name);
                }
            }
        }
    }

    /// Full definitions of a type, skipped entirely when the counting table
    /// has none of them.
    pub fn definitions(&self, kind: ElementType) -> Vec<(usize, IndexedObject<'d>)> {
        if !self.counting.has(kind) {
            return Vec::new();
        }
        self.index
            .definitions(kind)
            .map(|(position, obj)| (position, obj.clone()))
            .collect()
    }
}
