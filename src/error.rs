//! Error types for decode operations.
//!
//! Only structural and resource problems are errors. Per-object semantic
//! violations never abort a decode; they are reported as
//! [`Diagnostic`](crate::validation::Diagnostic)s instead.

use thiserror::Error;

/// Fatal errors that abort the decode of one document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON parsing error (input document or configuration).
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing error (configuration).
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error while reading an input document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document does not have the shape of an OntoUML JSON tree.
    #[error("Malformed document at '{location}': {message}")]
    Structural { location: String, message: String },

    /// Invalid configuration value (base IRI, language tag, syntax name).
    #[error("Invalid configuration for '{field}': {message}")]
    Config {
        field: &'static str,
        message: String,
    },
}

impl DecodeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create a structural error located at an object id or JSON path.
    pub fn structural(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structural {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(field: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            field,
            message: message.into(),
        }
    }

    /// Create a missing-field error for an object.
    pub fn missing_field(location: impl Into<String>, field: &str) -> Self {
        Self::structural(location, format!("missing required field '{field}'"))
    }

    /// Returns true for errors caused by the input document itself.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Structural { .. })
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}
