//! Conversion entry point
//!
//! Wraps the input in a synthetic `<root>` element so that any sequence of
//! sibling nodes parses as one expression, then converts the root's children.

use crate::context::ConvertContext;
use crate::convert::convert_node;
use crate::error::{ConvertError, Result, SourceLocation, SyntaxErrorPayload};
use crate::frontend::MarkupFrontend;
use crate::frontends::OxcFrontend;
use crate::syntax::Expression;
use crate::Value;

const ROOT_OPEN: &str = "<root>";
const ROOT_CLOSE: &str = "</root>";

/// Converts markup source into output trees.
///
/// # Example
///
/// ```
/// use jsx_to_json::Converter;
///
/// let converter = Converter::new();
/// let out = converter.convert("<br/>").unwrap();
/// assert_eq!(out[0].to_json().unwrap(), serde_json::json!(["br", {}]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter<F: MarkupFrontend = OxcFrontend> {
    frontend: F,
    ctx: ConvertContext,
}

impl Converter<OxcFrontend> {
    /// Create a converter with the default frontend and context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the default frontend and the given context.
    pub fn with_context(ctx: ConvertContext) -> Self {
        Self {
            frontend: OxcFrontend::new(),
            ctx,
        }
    }
}

impl<F: MarkupFrontend> Converter<F> {
    /// Create a converter using `frontend` and the default context.
    pub fn with_frontend(frontend: F) -> Self {
        Self {
            frontend,
            ctx: ConvertContext::default(),
        }
    }

    /// Create a converter from a frontend and a context.
    pub fn from_parts(frontend: F, ctx: ConvertContext) -> Self {
        Self { frontend, ctx }
    }

    /// The context used for every conversion.
    pub fn context(&self) -> &ConvertContext {
        &self.ctx
    }

    /// The frontend used for parsing.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Convert markup source into a sequence of output trees.
    ///
    /// Falsy results (such as empty text) are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::SyntaxError`] if the input does not parse.
    #[tracing::instrument(
        level = "debug",
        skip(self, input),
        fields(frontend = self.frontend.name(), len = input.len())
    )]
    pub fn convert(&self, input: &str) -> Result<Vec<Value>> {
        let wrapped = format!("{}{}{}", ROOT_OPEN, input, ROOT_CLOSE);

        let mut tree = self.frontend.parse(&wrapped).map_err(|err| {
            tracing::debug!(error = %err, "parse failed");
            let location = err.offset.map(|offset| {
                SourceLocation::from_offset(input, offset.saturating_sub(ROOT_OPEN.len()))
            });
            ConvertError::syntax(SyntaxErrorPayload::new(input, location))
        })?;
        // spans from here on are relative to `input`
        tree.rebase(ROOT_OPEN.len() as u32);

        let Some(Expression::MarkupElement(root)) = tree.body.first() else {
            tracing::debug!("no markup at top level");
            return Ok(Vec::new());
        };

        let values: Vec<Value> = root
            .node
            .children()
            .iter()
            .map(|child| convert_node(child, &self.ctx))
            .filter(Value::is_truthy)
            .collect();

        tracing::debug!(count = values.len(), "converted");
        Ok(values)
    }

    /// Convert a dynamically typed input.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidArgument`] unless `input` is a JSON
    /// string, and [`ConvertError::SyntaxError`] if it does not parse.
    pub fn convert_input(&self, input: &serde_json::Value) -> Result<Vec<Value>> {
        match input {
            serde_json::Value::String(source) => self.convert(source),
            other => Err(ConvertError::invalid_argument(json_type_name(other))),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Convert markup source with the default frontend and context.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let out = jsx_to_json::convert("<div id={1+2}>hi</div>").unwrap();
/// assert_eq!(out[0].to_json().unwrap(), json!(["div", {"id": 3}, "hi"]));
/// ```
///
/// # Errors
///
/// Returns [`ConvertError::SyntaxError`] if the input does not parse.
pub fn convert(input: &str) -> Result<Vec<Value>> {
    Converter::new().convert(input)
}

/// Convert a dynamically typed input with the default frontend and context.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidArgument`] for anything but a JSON string.
pub fn convert_input(input: &serde_json::Value) -> Result<Vec<Value>> {
    Converter::new().convert_input(input)
}
