//! # ontouml-graph
//!
//! Decoder from OntoUML JSON models to RDF graphs conforming to the OntoUML
//! Vocabulary, with validation and optional correction of the decoded model.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! decoder     → Decoder entry points, per-type decoders, pipeline
//!   ↓
//! validation  → Diagnostics, Reporter, class and property rules
//!   ↓
//! graph       → OntoGraph over oxrdf, element counting, model-only filter
//!   ↓
//! document    → Null stripping, DocumentIndex over the JSON tree
//!   ↓
//! config      → DecodeOptions, GraphSyntax
//!   ↓
//! vocab       → OntoUML namespace, term names, closed enumerations
//!   ↓
//! base        → BaseIri, default namespace
//! ```

// ============================================================================
// MODULES (dependency order: base → vocab → config → document → graph → validation → decoder)
// ============================================================================

/// Foundation types: base namespace and node construction
pub mod base;

/// OntoUML Vocabulary: namespace, terms, stereotypes, element types
pub mod vocab;

/// Decode configuration: options, output syntax names
pub mod config;

/// Source document handling: null stripping, one-pass index
pub mod document;

/// Decoded graph and the operations over it
pub mod graph;

/// Validation and correction: diagnostics, local and global rules
pub mod validation;

/// The decoding pipeline and its entry points
pub mod decoder;

/// Fatal decode errors
pub mod error;

// Re-export the public surface
pub use base::{BaseIri, DEFAULT_BASE_IRI};
pub use config::{DecodeOptions, GraphSyntax};
pub use decoder::{Decoded, Decoder};
pub use error::DecodeError;
pub use graph::OntoGraph;
pub use validation::{Diagnostic, Severity, codes};
pub use vocab::{ElementType, ONTOUML_NS};
