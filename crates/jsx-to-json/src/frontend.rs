//! Markup frontend trait
//!
//! A frontend turns source text into the owned [`SyntaxTree`]. The evaluator
//! and converter never see parser-specific types:
//!
//! ```text
//! Source Text → [Frontend] → SyntaxTree → [Evaluator / Converter] → Value
//! ```
//!
//! The default frontend is [`crate::frontends::OxcFrontend`].

use std::fmt;

use crate::syntax::SyntaxTree;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Byte offset into the parsed text, when the parser reported one
    pub offset: Option<usize>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
        }
    }

    /// Add a byte offset to the error.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(offset) = self.offset {
            write!(f, " at offset {}", offset)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

// ═══════════════════════════════════════════════════════════════════════
// MARKUP FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Parser interface used by the converter.
///
/// # Example Implementation
///
/// ```
/// use jsx_to_json::frontend::{MarkupFrontend, ParseError};
/// use jsx_to_json::syntax::SyntaxTree;
///
/// struct EmptyFrontend;
///
/// impl MarkupFrontend for EmptyFrontend {
///     fn parse(&self, _source: &str) -> Result<SyntaxTree, ParseError> {
///         Ok(SyntaxTree::default())
///     }
///
///     fn name(&self) -> &str {
///         "empty"
///     }
/// }
///
/// assert!(EmptyFrontend.parse("<a/>").unwrap().body.is_empty());
/// ```
pub trait MarkupFrontend: Send + Sync {
    /// Parse source text into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source is not valid markup.
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError>;

    /// Return the name of this frontend.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_creation() {
        let err = ParseError::new("unexpected token");
        assert_eq!(err.message, "unexpected token");
        assert!(err.offset.is_none());
    }

    #[test]
    fn test_parse_error_with_offset() {
        let err = ParseError::new("unexpected token").with_offset(12);
        assert_eq!(err.offset, Some(12));
    }

    #[test]
    fn test_parse_error_display() {
        let display = ParseError::new("Unexpected token").with_offset(4).to_string();
        assert_eq!(display, "Parse error: Unexpected token at offset 4");
    }
}
