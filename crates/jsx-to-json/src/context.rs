//! Conversion context configuration

use std::fmt;
use std::sync::Arc;

use crate::diagnostic::{Diagnostic, DiagnosticSink, NoopSink};
use crate::style::{parse_style, StyleMap};

/// Signature of an inline style parser.
pub type StyleParser = fn(&str) -> Option<StyleMap>;

/// Configuration passed through every evaluation and conversion call.
///
/// The context holds no per-call state, so one instance can be shared across
/// threads and reused for any number of conversions.
#[derive(Clone)]
pub struct ConvertContext {
    /// Where non-fatal diagnostics go
    pub diagnostics: Arc<dyn DiagnosticSink>,

    /// Converts `style="..."` strings into mappings
    pub style_parser: StyleParser,

    /// Emit a `tracing` event for every converted node
    pub trace: bool,
}

impl Default for ConvertContext {
    fn default() -> Self {
        Self {
            diagnostics: Arc::new(NoopSink),
            style_parser: parse_style,
            trace: false,
        }
    }
}

impl fmt::Debug for ConvertContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertContext")
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}

impl ConvertContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send diagnostics to the given sink.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Use a different inline style parser.
    pub fn with_style_parser(mut self, parser: StyleParser) -> Self {
        self.style_parser = parser;
        self
    }

    /// Enable or disable per-node tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Report a diagnostic to the configured sink.
    pub fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
    }

    /// Run the configured style parser.
    pub fn parse_style(&self, css: &str) -> Option<StyleMap> {
        (self.style_parser)(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{CollectingSink, DiagnosticKind};
    use crate::syntax::Span;

    #[test]
    fn test_default_context() {
        let ctx = ConvertContext::default();
        assert!(!ctx.trace);
        assert!(ctx.parse_style("color: red").is_some());
    }

    #[test]
    fn test_custom_style_parser() {
        fn never(_: &str) -> Option<StyleMap> {
            None
        }
        let ctx = ConvertContext::new().with_style_parser(never);
        assert!(ctx.parse_style("color: red").is_none());
    }

    #[test]
    fn test_report_reaches_sink() {
        let sink = Arc::new(CollectingSink::new());
        let ctx = ConvertContext::new().with_diagnostics(sink.clone());
        ctx.report(Diagnostic::new(
            DiagnosticKind::UnsupportedExpression,
            "x",
            Span::default(),
        ));
        assert_eq!(sink.len(), 1);
    }
}
