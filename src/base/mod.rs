//! Foundation types for the decoder.
//!
//! This module provides the node-identity primitive used throughout the crate:
//! [`BaseIri`], a validated base namespace with `base + id` node construction.
//!
//! This module has NO dependencies on other crate modules except the error type.

mod iri;

pub use iri::{BaseIri, DEFAULT_BASE_IRI};
