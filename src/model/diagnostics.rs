//! Recoverable problems found while lowering.
//!
//! Every construct the builder cannot model is reported here and the build
//! carries on with a best-effort node. Diagnostics are ordered and never
//! deduplicated.

use std::fmt;
use std::sync::Arc;

use crate::base::{SourceLocation, SourceSpan};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn display(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Log level the diagnostic is mirrored at.
    pub fn level(&self) -> tracing::Level {
        match self {
            Severity::Error => tracing::Level::ERROR,
            Severity::Warning => tracing::Level::WARN,
            Severity::Info => tracing::Level::INFO,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Warning code (e.g., "W0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Where it happened. A point location is stored as an empty span.
    pub span: SourceSpan,
}

impl Diagnostic {
    /// Create a new error diagnostic at a point.
    pub fn error(location: SourceLocation, message: impl Into<Arc<str>>) -> Self {
        Self::at(Severity::Error, location, message)
    }

    /// Create a new warning diagnostic at a point.
    pub fn warning(location: SourceLocation, message: impl Into<Arc<str>>) -> Self {
        Self::at(Severity::Warning, location, message)
    }

    pub fn info(location: SourceLocation, message: impl Into<Arc<str>>) -> Self {
        Self::at(Severity::Info, location, message)
    }

    fn at(severity: Severity, location: SourceLocation, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            span: SourceSpan::new(location.clone(), location),
        }
    }

    /// Set the span (range) for this diagnostic.
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }

    /// Set the warning code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn location(&self) -> &SourceLocation {
        &self.span.start
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span.start, self.severity.display())?;
        if let Some(code) = &self.code {
            write!(f, " {}", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes for lowering problems.
///
/// All of them are warnings: the build continues after each one.
pub mod codes {
    /// A cursor kind the builder does not model.
    pub const UNHANDLED_DECLARATION: &str = "W0001";
    /// A type kind with no structured mapping; lowered as unexposed.
    pub const UNSUPPORTED_TYPE: &str = "W0002";
    /// A constant-fold result that is neither integer, floating nor string.
    pub const UNSUPPORTED_VALUE: &str = "W0003";
    /// An array whose length depends on a template argument.
    pub const DEPENDENT_ARRAY: &str = "W0004";
    /// A macro body token with an unknown lexical class.
    pub const UNSUPPORTED_MACRO_TOKEN: &str = "W0005";
    /// A documentation comment node of an unknown kind.
    pub const UNSUPPORTED_COMMENT: &str = "W0006";
}

// ============================================================================
// DIAGNOSTIC BAG
// ============================================================================

/// Ordered, append-only diagnostics list owned by the compilation.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => tracing::error!("{}", diagnostic),
            Severity::Warning => tracing::warn!("{}", diagnostic),
            Severity::Info => tracing::info!("{}", diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }

    /// Add a coded warning at a location.
    pub fn warning(&mut self, code: &str, location: SourceLocation, message: impl Into<Arc<str>>) {
        self.add(Diagnostic::warning(location, message).with_code(code));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics carrying the given code, in insertion order.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |d| d.code.as_deref() == Some(code))
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
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
