//! Diagnostics — semantic problems found while decoding.
//!
//! Every problem the decoder detects in an otherwise well-formed document is
//! a [`Diagnostic`] attached to the element it concerns. The [`Reporter`]
//! collects them for the caller and mirrors each one to `tracing`.

use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A diagnostic message about one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g., "E0001").
    pub code: Option<Arc<str>>,
    /// Id of the element concerned.
    pub element_id: Arc<str>,
    /// Type name of the element concerned.
    pub element_type: Arc<str>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    fn new(
        severity: Severity,
        element_type: &str,
        element_id: &str,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            severity,
            code: None,
            element_id: element_id.into(),
            element_type: element_type.into(),
            message: message.into(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(element_type: &str, element_id: &str, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, element_type, element_id, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(element_type: &str, element_id: &str, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, element_type, element_id, message)
    }

    /// Create a new info diagnostic.
    pub fn info(element_type: &str, element_id: &str, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Info, element_type, element_id, message)
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns true if the diagnostic carries the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(
                f,
                "{}[{}] {} '{}': {}",
                self.severity.as_str(),
                code,
                self.element_type,
                self.element_id,
                self.message
            ),
            None => write!(
                f,
                "{} {} '{}': {}",
                self.severity.as_str(),
                self.element_type,
                self.element_id,
                self.message
            ),
        }
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable diagnostic codes.
///
/// ## Code Ranges
///
/// - **E0001-E0099**: Violations without an automatic repair, or values that
///   make the output syntactically invalid
/// - **W0001-W0099**: Violations with a repair (applied only when correcting)
/// - **I0001-I0099**: Informational (defaults applied)
pub mod codes {
    // ========================================================================
    // ERRORS (E0001-E0099)
    // ========================================================================

    /// Stereotype outside the enumeration for its element type.
    pub const INVALID_STEREOTYPE: &str = "E0001";
    /// Attributes that cannot hold together on one class.
    pub const CONFLICTING_ATTRIBUTES: &str = "E0002";
    /// Property stereotype requires a class stereotype the class does not have.
    pub const STEREOTYPE_MISMATCH: &str = "E0003";
    /// A relation without exactly two ends.
    pub const MISSING_RELATION_END: &str = "E0004";
    /// A required reference (generalization end, view element) is missing.
    pub const MISSING_REFERENCE: &str = "E0005";
    /// A width or height that is not a positive integer.
    pub const INVALID_POSITIVE_INTEGER: &str = "E0006";
    /// Value outside a closed enumeration (aggregation kind, nature).
    pub const INVALID_ENUM_VALUE: &str = "E0007";
    /// A shape or path point without integer coordinates.
    pub const INVALID_COORDINATE: &str = "E0008";

    // ========================================================================
    // WARNINGS (W0001-W0099)
    // ========================================================================

    /// Mandatory stereotype not declared.
    pub const MISSING_STEREOTYPE: &str = "W0001";
    /// Stereotype implied by other attributes.
    pub const STEREOTYPE_INFERRED: &str = "W0002";
    /// Attribute not allowed for the class stereotype.
    pub const ATTRIBUTE_NOT_ALLOWED: &str = "W0003";
    /// Order not valid for the class stereotype.
    pub const INVALID_ORDER: &str = "W0004";
    /// Cardinality bound that is neither a number nor `*`.
    pub const INVALID_CARDINALITY: &str = "W0005";

    // ========================================================================
    // INFORMATION (I0001-I0099)
    // ========================================================================

    /// A default value was asserted for a missing attribute.
    pub const DEFAULT_APPLIED: &str = "I0001";
}

// ============================================================================
// REPORTER
// ============================================================================

/// Collects diagnostics during one decode.
///
/// Each added diagnostic is also emitted as a `tracing` event at the matching
/// level. A silent reporter drops everything: nothing is logged and nothing
/// is collected.
#[derive(Clone, Debug, Default)]
pub struct Reporter {
    silent: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    /// Create a new empty reporter.
    pub fn new(silent: bool) -> Self {
        Self {
            silent,
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if self.silent {
            return;
        }
        let code = diagnostic.code.as_deref().unwrap_or("-");
        match diagnostic.severity {
            Severity::Error => tracing::error!(
                code,
                element = %diagnostic.element_id,
                kind = %diagnostic.element_type,
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                code,
                element = %diagnostic.element_id,
                kind = %diagnostic.element_type,
                "{}",
                diagnostic.message
            ),
            Severity::Info => tracing::info!(
                code,
                element = %diagnostic.element_id,
                kind = %diagnostic.element_type,
                "{}",
                diagnostic.message
            ),
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an undeclared mandatory stereotype.
    pub fn missing_stereotype(&mut self, element_type: &str, element_id: &str) {
        self.add(
            Diagnostic::warning(element_type, element_id, "mandatory stereotype not defined")
                .with_code(codes::MISSING_STEREOTYPE),
        );
    }

    /// Report a stereotype outside its enumeration.
    pub fn invalid_stereotype(&mut self, element_type: &str, element_id: &str, stereotype: &str) {
        self.add(
            Diagnostic::error(
                element_type,
                element_id,
                format!("invalid stereotype '{stereotype}'; the output is syntactically invalid"),
            )
            .with_code(codes::INVALID_STEREOTYPE),
        );
    }

    /// Report a value outside a closed enumeration.
    pub fn invalid_enum_value(
        &mut self,
        element_type: &str,
        element_id: &str,
        field: &str,
        value: &str,
    ) {
        self.add(
            Diagnostic::error(
                element_type,
                element_id,
                format!("invalid value '{value}' for '{field}'"),
            )
            .with_code(codes::INVALID_ENUM_VALUE),
        );
    }

    /// Report a default asserted for a missing attribute.
    pub fn default_applied(
        &mut self,
        element_type: &str,
        element_id: &str,
        field: &str,
        value: &str,
    ) {
        self.add(
            Diagnostic::info(
                element_type,
                element_id,
                format!("'{field}' not defined; default value '{value}' asserted"),
            )
            .with_code(codes::DEFAULT_APPLIED),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
