//! The output graph.
//!
//! [`OntoGraph`] wraps an [`oxrdf::Graph`] with helpers that speak in
//! vocabulary term names, so decoders write `add_relation(&s, terms::GENERAL, &o)`
//! instead of assembling triples by hand. The underlying graph is exposed for
//! external serializers.

mod counting;
mod filter;

use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Graph, Literal, NamedNode, Term, TermRef, Triple};

use crate::vocab::{local_name, ontouml_ref};

pub use counting::ElementCounting;
pub use filter::retain_model_elements;

/// Triples produced by one decode call.
#[derive(Clone, Debug, Default)]
pub struct OntoGraph {
    inner: Graph,
}

impl OntoGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns false if it was already present.
    pub fn insert(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNode,
        object: impl Into<Term>,
    ) -> bool {
        let triple = Triple::new(subject.clone(), predicate, object);
        self.inner.insert(&triple)
    }

    /// `subject rdf:type ontouml:<class_name>`.
    pub fn add_type(&mut self, subject: &NamedNode, class_name: &str) -> bool {
        self.insert(subject, rdf::TYPE.into_owned(), ontouml_ref(class_name))
    }

    /// `subject ontouml:<term> object` between two nodes.
    pub fn add_relation(&mut self, subject: &NamedNode, term: &str, object: &NamedNode) -> bool {
        self.insert(subject, ontouml_ref(term), object.clone())
    }

    /// `subject ontouml:<term> "value"`.
    pub fn add_literal(&mut self, subject: &NamedNode, term: &str, literal: Literal) -> bool {
        self.insert(subject, ontouml_ref(term), literal)
    }

    /// `subject ontouml:<term> "true"^^xsd:boolean`.
    pub fn add_bool(&mut self, subject: &NamedNode, term: &str, value: bool) -> bool {
        self.add_literal(subject, term, Literal::from(value))
    }

    /// `subject ontouml:<term> ontouml:<individual>`, for enumeration values.
    pub fn add_individual(&mut self, subject: &NamedNode, term: &str, individual: &str) -> bool {
        self.insert(subject, ontouml_ref(term), ontouml_ref(individual))
    }

    /// Objects of `subject ontouml:<term> ?o`.
    pub fn objects(&self, subject: &NamedNode, term: &str) -> Vec<Term> {
        let predicate = ontouml_ref(term);
        self.inner
            .objects_for_subject_predicate(subject.as_ref(), predicate.as_ref())
            .map(TermRef::into_owned)
            .collect()
    }

    /// Subjects typed `ontouml:<class_name>`.
    pub fn instances_of(&self, class_name: &str) -> Vec<NamedNode> {
        let class = ontouml_ref(class_name);
        self.inner
            .subjects_for_predicate_object(rdf::TYPE, class.as_ref())
            .filter_map(|s| match s {
                oxrdf::SubjectRef::NamedNode(n) => Some(n.into_owned()),
                _ => None,
            })
            .collect()
    }

    /// Local names of every OntoUML class asserted for `subject`.
    pub fn types_of(&self, subject: &NamedNode) -> Vec<String> {
        self.inner
            .objects_for_subject_predicate(subject.as_ref(), rdf::TYPE)
            .filter_map(|o| match o {
                TermRef::NamedNode(n) => local_name(n.as_str()).map(str::to_string),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The underlying RDF graph.
    pub fn inner(&self) -> &Graph {
        &self.inner
    }

    pub(crate) fn inner_mut(&mut self) -> &mut Graph {
        &mut self.inner
    }

    /// N-Triples rendering with lines sorted, for inspection and diffing.
    pub fn to_ntriples(&self) -> String {
        let mut lines: Vec<String> = self.inner.iter().map(|t| format!("{t} .")).collect();
        lines.sort();
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

/// Literal helpers for the datatypes the decoder emits.
pub mod literals {
    use super::*;

    pub fn non_negative_integer(value: u64) -> Literal {
        Literal::new_typed_literal(value.to_string(), xsd::NON_NEGATIVE_INTEGER)
    }

    pub fn positive_integer(value: u64) -> Literal {
        Literal::new_typed_literal(value.to_string(), xsd::POSITIVE_INTEGER)
    }

    pub fn integer(value: i64) -> Literal {
        Literal::new_typed_literal(value.to_string(), xsd::INTEGER)
    }

    pub fn double(value: f64) -> Literal {
        Literal::new_typed_literal(value.to_string(), xsd::DOUBLE)
    }

    /// Plain string, or language-tagged when a (validated, lower-cased) tag is given.
    pub fn text(value: &str, language: Option<&str>) -> Literal {
        match language {
            Some(tag) => Literal::new_language_tagged_literal_unchecked(value, tag),
            None => Literal::new_simple_literal(value),
        }
    }
}
