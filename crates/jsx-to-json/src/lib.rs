//! # jsx-to-json
//!
//! Converts JSX markup into a plain, JSON-serializable tree with constant
//! folding of simple embedded expressions.
//!
//! Every element becomes `[tagName, attributes, ...children]`:
//!
//! ```
//! use serde_json::json;
//!
//! let out = jsx_to_json::convert(r#"<div class="a" id={`x${1 + 1}`}><b>hi</b></div>"#).unwrap();
//! assert_eq!(
//!     out[0].to_json().unwrap(),
//!     json!(["div", {"className": "a", "id": "x2"}, ["b", {}, "hi"]])
//! );
//! ```
//!
//! ## Architecture
//!
//! - **Frontend**: parse source text into an owned [`syntax`] tree
//! - **Evaluator** ([`eval`]): fold literals, operators, arrays, objects and
//!   templates into [`Value`]s
//! - **Node converter** ([`convert`]): build the output tree, normalizing
//!   attribute names on known HTML/SVG tags
//! - **Entry point** ([`Converter`]): wrap, parse, convert, filter
//!
//! Constructs that cannot be folded are never fatal. They are reported to
//! the [`DiagnosticSink`] configured on the [`ConvertContext`] and passed
//! through as [`Value::Node`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod convert;
pub mod converter;
pub mod diagnostic;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod frontends;
pub mod names;
pub mod style;
pub mod syntax;
pub mod value;

// Re-export main types
pub use context::ConvertContext;
pub use convert::convert_node;
pub use converter::{convert, convert_input, Converter};
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, NoopSink, TracingSink};
pub use error::{ConvertError, Result, SourceLocation, SyntaxErrorPayload};
pub use eval::{evaluate, Evaluate};
pub use frontend::{MarkupFrontend, ParseError};
pub use frontends::OxcFrontend;
pub use style::{parse_style, StyleMap};
pub use value::{Node, Object, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
