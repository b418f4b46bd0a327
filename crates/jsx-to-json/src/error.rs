//! Error types for conversion

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position inside the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Locate a byte offset within `source`.
    ///
    /// Offsets past the end clamp to the end; offsets inside a multi-byte
    /// character resolve to that character.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count();
        Self { line, column }
    }
}

/// Machine-readable body of a [`ConvertError::SyntaxError`].
///
/// The error message is this payload serialized as JSON, so callers that only
/// see the message can still recover the location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxErrorPayload {
    /// Where parsing failed, when the parser reported a position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,

    /// `Could not parse "<input>"`
    pub validation_error: String,
}

impl SyntaxErrorPayload {
    /// Build the payload for a failed parse of `input`.
    pub fn new(input: &str, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            validation_error: format!("Could not parse \"{}\"", input),
        }
    }

    /// Serialize as the JSON message carried by the error.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.validation_error.clone())
    }
}

/// Fatal conversion errors.
///
/// Everything else (unsupported expressions, operators and node kinds) is
/// reported as a diagnostic and never surfaces here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input is not text
    #[error("Invalid argument: expected a string, got {got}")]
    InvalidArgument {
        /// Type name of what was passed
        got: String,
    },

    /// Input could not be parsed as markup
    #[error("{message}")]
    SyntaxError {
        /// JSON form of `payload`
        message: String,
        /// Structured details
        payload: SyntaxErrorPayload,
    },
}

impl ConvertError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(got: impl Into<String>) -> Self {
        ConvertError::InvalidArgument { got: got.into() }
    }

    /// Create a syntax error from its payload.
    pub fn syntax(payload: SyntaxErrorPayload) -> Self {
        ConvertError::SyntaxError {
            message: payload.to_message(),
            payload,
        }
    }

    /// The structured payload, for syntax errors.
    pub fn payload(&self) -> Option<&SyntaxErrorPayload> {
        match self {
            ConvertError::SyntaxError { payload, .. } => Some(payload),
            ConvertError::InvalidArgument { .. } => None,
        }
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
