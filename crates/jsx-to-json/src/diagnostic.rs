//! Non-fatal diagnostics
//!
//! Unsupported constructs never abort a conversion. They degrade to a fallback
//! value and a [`Diagnostic`] is handed to the context's [`DiagnosticSink`].

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::syntax::Span;

/// What kind of construct could not be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Expression kind the evaluator does not fold
    UnsupportedExpression,
    /// Binary operator outside the supported set
    UnsupportedBinaryOperator,
    /// Unary operator outside the supported set
    UnsupportedUnaryOperator,
    /// Object member that is not a plain `key: value` pair
    UnsupportedObjectMember,
    /// Markup node kind the converter does not handle
    UnsupportedMarkup,
    /// Attribute item that is not a named attribute
    UnsupportedAttribute,
}

impl DiagnosticKind {
    /// Short stable name, used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::UnsupportedExpression => "unsupported-expression",
            DiagnosticKind::UnsupportedBinaryOperator => "unsupported-binary-operator",
            DiagnosticKind::UnsupportedUnaryOperator => "unsupported-unary-operator",
            DiagnosticKind::UnsupportedObjectMember => "unsupported-object-member",
            DiagnosticKind::UnsupportedMarkup => "unsupported-markup",
            DiagnosticKind::UnsupportedAttribute => "unsupported-attribute",
        }
    }
}

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Category
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
    /// Location of the offending node
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message, self.span.start, self.span.end
        )
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Discards everything. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = diagnostic.kind.as_str(),
            start = diagnostic.span.start,
            end = diagnostic.span.end,
            "{}",
            diagnostic.message
        );
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of diagnostics reported so far.
    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .diagnostics
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report(Diagnostic::new(
            DiagnosticKind::UnsupportedExpression,
            "unexpected expression type CallExpression",
            Span::new(3, 8),
        ));
        assert_eq!(sink.len(), 1);

        let taken = sink.take();
        assert_eq!(taken[0].kind, DiagnosticKind::UnsupportedExpression);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::new(
            DiagnosticKind::UnsupportedBinaryOperator,
            "unsupported binary operator `in`",
            Span::new(10, 16),
        );
        assert_eq!(d.to_string(), "unsupported binary operator `in` at 10..16");
    }

    #[test]
    fn test_noop_sink_accepts_reports() {
        NoopSink.report(Diagnostic::new(
            DiagnosticKind::UnsupportedMarkup,
            "ignored",
            Span::default(),
        ));
    }
}
