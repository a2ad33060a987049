//! Decoding pipeline from an OntoUML JSON document to an [`OntoGraph`].
//!
//! A decode runs in fixed phases over one per-call [`DecodeContext`]:
//!
//! 1. null fields are stripped and the document is indexed once;
//! 2. the generic walk types every object and emits its scalar fields;
//! 3. the element counting table is computed from the walked graph;
//! 4. per-type decoders run in dependency order (containers, model
//!    elements, then views and shapes);
//! 5. global rules that need the whole graph run last, followed by the
//!    optional model-only filter.
//!
//! ## Quick start
//!
//! ```ignore
//! use ontouml::{DecodeOptions, Decoder};
//!
//! let decoder = Decoder::new(DecodeOptions::new().with_language("en"))?;
//! let decoded = decoder.decode_str(r#"{"id": "c1", "type": "Class", "name": "Person"}"#)?;
//! println!("{}", decoded.graph.to_ntriples());
//! for diagnostic in &decoded.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! ```

mod class;
mod context;
mod general;
mod generalization;
mod project;
mod property;
mod relation;
mod shape;
mod view;

use std::path::Path;

use serde_json::Value;

pub use context::DecodeContext;
pub use property::{CARDINALITY_SUFFIX, CardinalityBounds};
pub use shape::POINT_SUFFIX;
pub use view::SHAPE_SUFFIX;

use crate::base::BaseIri;
use crate::config::DecodeOptions;
use crate::document::{DocumentIndex, strip_nulls};
use crate::error::DecodeError;
use crate::graph::{ElementCounting, OntoGraph, retain_model_elements};
use crate::validation::{Diagnostic, Severity, check_property_stereotypes};

/// Result of one decode: the graph and everything reported on the way.
#[derive(Clone, Debug, Default)]
pub struct Decoded {
    pub graph: OntoGraph,
    /// Empty when the decoder runs silent.
    pub diagnostics: Vec<Diagnostic>,
}

impl Decoded {
    /// Diagnostics of one severity.
    pub fn diagnostics_of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Diagnostics carrying a given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.has_code(code))
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics_of(Severity::Error).next().is_some()
    }
}

/// Decoder bound to one validated configuration.
///
/// The decoder holds no per-document state; one instance can decode any
/// number of documents, from any number of threads.
#[derive(Clone, Debug)]
pub struct Decoder {
    options: DecodeOptions,
    base: BaseIri,
    language: Option<String>,
}

impl Decoder {
    // ── Construction ─────────────────────────────────────────────────

    /// Validate the options and build a decoder.
    pub fn new(options: DecodeOptions) -> Result<Self, DecodeError> {
        let base = options.validate()?;
        let language = options.language.as_deref().map(str::to_lowercase);
        Ok(Self {
            options,
            base,
            language,
        })
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn base(&self) -> &BaseIri {
        &self.base
    }

    // ── Entry points ─────────────────────────────────────────────────

    /// Decode a parsed document.
    pub fn decode_value(&self, document: &Value) -> Result<Decoded, DecodeError> {
        self.run(document, self.options.model_only)
    }

    /// Decode a document given as JSON text.
    pub fn decode_str(&self, source: &str) -> Result<Decoded, DecodeError> {
        let document: Value = serde_json::from_str(source)?;
        self.decode_value(&document)
    }

    /// Decode a document given as JSON bytes.
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<Decoded, DecodeError> {
        let document: Value = serde_json::from_slice(bytes)?;
        self.decode_value(&document)
    }

    /// Read and decode a JSON file.
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Decoded, DecodeError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading document");
        let bytes = std::fs::read(path)?;
        self.decode_slice(&bytes)
    }

    /// Decode only the conceptual model, regardless of the `model_only`
    /// option: diagrams, views, shapes, and points are left out.
    pub fn decode_model(&self, document: &Value) -> Result<Decoded, DecodeError> {
        self.run(document, true)
    }

    // ── Pipeline ─────────────────────────────────────────────────────

    fn run(&self, document: &Value, model_only: bool) -> Result<Decoded, DecodeError> {
        let mut document = document.clone();
        strip_nulls(&mut document);
        let index = DocumentIndex::build(&document)?;

        let mut ctx = DecodeContext::new(
            self.base.clone(),
            self.language.clone(),
            self.options.correct,
            self.options.silent,
            index,
        );

        general::decode_general(&mut ctx);
        ctx.counting = ElementCounting::count(&ctx.graph);
        tracing::debug!(
            types = ?ctx.counting.type_names(),
            elements = ctx.counting.total(),
            "element counting"
        );

        project::decode_projects(&mut ctx);
        project::decode_packages(&mut ctx);
        project::decode_diagrams(&mut ctx);
        class::decode_classes(&mut ctx);
        property::decode_properties(&mut ctx);
        relation::decode_relations(&mut ctx);
        generalization::decode_generalizations(&mut ctx);
        generalization::decode_generalization_sets(&mut ctx);
        view::decode_element_views(&mut ctx);
        shape::decode_rectangular_shapes(&mut ctx);
        shape::decode_paths(&mut ctx);

        check_property_stereotypes(&mut ctx.graph, &ctx.base, ctx.correct, &mut ctx.reporter);

        if model_only {
            retain_model_elements(&mut ctx.graph, &ctx.base);
        }

        tracing::debug!(
            triples = ctx.graph.len(),
            errors = ctx.reporter.error_count(),
            warnings = ctx.reporter.warning_count(),
            "decode finished"
        );

        Ok(Decoded {
            graph: ctx.graph,
            diagnostics: ctx.reporter.into_diagnostics(),
        })
    }
}
