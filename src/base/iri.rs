//! Identifier/URI builder.
//!
//! Every source object with an `id` maps to exactly one graph node, built by
//! appending the id to a base namespace. The base is validated once at
//! configuration time; node construction itself cannot fail.

use std::sync::Arc;

use oxrdf::NamedNode;

use crate::error::DecodeError;

/// Base namespace used when the caller does not configure one.
pub const DEFAULT_BASE_IRI: &str = "https://example.org#";

/// A validated base namespace (absolute IRI ending in `#` or `/`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseIri(Arc<str>);

impl BaseIri {
    /// Validate a base namespace.
    pub fn parse(base: &str) -> Result<Self, DecodeError> {
        if !base.ends_with('#') && !base.ends_with('/') {
            return Err(DecodeError::config(
                "base_uri",
                format!("'{base}' must end with '#' or '/'"),
            ));
        }
        NamedNode::new(base).map_err(|e| {
            DecodeError::config("base_uri", format!("'{base}' is not an IRI: {e}"))
        })?;
        Ok(Self(base.into()))
    }

    /// The namespace string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Node for a document-local id: `base + id`.
    pub fn node(&self, id: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", self.0, id))
    }

    /// Returns the local id if `iri` lies in this namespace.
    pub fn local_id<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.as_str())
    }

    /// Returns true if `iri` lies in this namespace.
    pub fn contains(&self, iri: &str) -> bool {
        iri.starts_with(self.as_str())
    }
}

impl Default for BaseIri {
    fn default() -> Self {
        Self(DEFAULT_BASE_IRI.into())
    }
}

impl std::fmt::Display for BaseIri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
