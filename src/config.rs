//! Decode configuration.
//!
//! [`DecodeOptions`] is an immutable snapshot handed to one decode call.
//! It can be built in code with the `with_*` methods or loaded from a JSON
//! (or, with the `yaml` feature, YAML) document using camelCase keys:
//!
//! ```json
//! { "baseUri": "https://example.org/model#", "language": "en", "correct": true }
//! ```

use std::fmt;
use std::str::FromStr;

use oxrdf::Literal;
use serde::{Deserialize, Serialize};

use crate::base::{BaseIri, DEFAULT_BASE_IRI};
use crate::error::DecodeError;

// ============================================================================
// GRAPH SYNTAX
// ============================================================================

/// Output syntax requested by the caller.
///
/// The decoder itself only produces an in-memory graph; the syntax is carried
/// so that serializers and file writers downstream agree on a format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphSyntax {
    #[serde(rename = "turtle")]
    Turtle,
    #[default]
    #[serde(rename = "ttl")]
    Ttl,
    #[serde(rename = "turtle2")]
    Turtle2,
    #[serde(rename = "xml")]
    Xml,
    #[serde(rename = "pretty-xml")]
    PrettyXml,
    #[serde(rename = "json-ld")]
    JsonLd,
    #[serde(rename = "ntriples")]
    NTriples,
    #[serde(rename = "nt")]
    Nt,
    #[serde(rename = "nt11")]
    Nt11,
    #[serde(rename = "n3")]
    N3,
    #[serde(rename = "trig")]
    TriG,
    #[serde(rename = "trix")]
    TriX,
    #[serde(rename = "nquads")]
    NQuads,
}

impl GraphSyntax {
    pub const ALL: [Self; 13] = [
        Self::Turtle,
        Self::Ttl,
        Self::Turtle2,
        Self::Xml,
        Self::PrettyXml,
        Self::JsonLd,
        Self::NTriples,
        Self::Nt,
        Self::Nt11,
        Self::N3,
        Self::TriG,
        Self::TriX,
        Self::NQuads,
    ];

    /// The name accepted in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Turtle => "turtle",
            Self::Ttl => "ttl",
            Self::Turtle2 => "turtle2",
            Self::Xml => "xml",
            Self::PrettyXml => "pretty-xml",
            Self::JsonLd => "json-ld",
            Self::NTriples => "ntriples",
            Self::Nt => "nt",
            Self::Nt11 => "nt11",
            Self::N3 => "n3",
            Self::TriG => "trig",
            Self::TriX => "trix",
            Self::NQuads => "nquads",
        }
    }

    /// Aliases collapse to one canonical syntax (`ttl` → `turtle`).
    pub fn canonical(&self) -> Self {
        match self {
            Self::Ttl | Self::Turtle2 => Self::Turtle,
            Self::PrettyXml => Self::Xml,
            Self::Nt | Self::Nt11 => Self::NTriples,
            other => *other,
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self.canonical() {
            Self::Xml => "xml",
            Self::JsonLd => "jsonld",
            Self::NTriples => "nt",
            Self::N3 => "n3",
            Self::TriG => "trig",
            Self::TriX => "trix",
            Self::NQuads => "nq",
            _ => "ttl",
        }
    }
}

impl FromStr for GraphSyntax {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|syntax| syntax.as_str() == s)
            .ok_or_else(|| DecodeError::config("syntax", format!("unknown graph syntax '{s}'")))
    }
}

impl fmt::Display for GraphSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DECODE OPTIONS
// ============================================================================

fn default_base_uri() -> String {
    DEFAULT_BASE_IRI.to_string()
}

/// Options for one decode call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodeOptions {
    /// Namespace prepended to every element id.
    pub base_uri: String,

    /// Output syntax for downstream serializers.
    pub syntax: GraphSyntax,

    /// Language tag attached to `name`, `description`, and `text` literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Keep only model elements (drop diagrams, views, shapes, packages).
    pub model_only: bool,

    /// Suppress every diagnostic, in logs and in the returned report.
    pub silent: bool,

    /// Repair violations that have a known fix instead of only reporting them.
    pub correct: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            base_uri: default_base_uri(),
            syntax: GraphSyntax::default(),
            language: None,
            model_only: false,
            silent: false,
            correct: false,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    pub fn with_syntax(mut self, syntax: GraphSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_model_only(mut self, model_only: bool) -> Self {
        self.model_only = model_only;
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_correct(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }

    /// Check the base namespace and language tag.
    ///
    /// Returns the parsed base so callers do not validate it twice.
    pub fn validate(&self) -> Result<BaseIri, DecodeError> {
        let base = BaseIri::parse(&self.base_uri)?;
        if let Some(language) = &self.language {
            Literal::new_language_tagged_literal("", language.as_str()).map_err(|e| {
                DecodeError::config("language", format!("'{language}' is not a BCP47 tag: {e}"))
            })?;
        }
        Ok(base)
    }

    /// Load options from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, DecodeError> {
        let options: Self = serde_json::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(source: &str) -> Result<Self, DecodeError> {
        let options: Self =
            serde_yaml::from_str(source).map_err(|e| DecodeError::yaml(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }
}
