//! Value representation for folded expressions and converted markup

mod coerce;
mod display;
mod impls;
mod json;

pub use coerce::{number_to_string, string_to_number};

use indexmap::IndexMap;
use serde::Serialize;

use crate::syntax::{Expression, MarkupNode};

/// Ordered string-keyed mapping used for attributes and object literals.
pub type Object = IndexMap<String, Value>;

/// A statically determined value, or a node that could not be evaluated.
///
/// The variants mirror the JavaScript value model that constant folding
/// needs. Converted markup is an [`Value::Array`] of the shape
/// `[tagName, attributes, ...children]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `undefined`; dropped from attribute and object mappings
    Undefined,

    /// `null`
    Null,

    /// Boolean
    Bool(bool),

    /// IEEE-754 double, like every JS number
    Number(f64),

    /// String
    String(String),

    /// Ordered sequence
    Array(Vec<Value>),

    /// Insertion-ordered mapping
    Object(Object),

    /// A node passed through unevaluated
    Node(Box<Node>),
}

/// A syntax node carried through as a fallback value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Unevaluated expression
    Expression(Expression),
    /// Unconverted markup
    Markup(MarkupNode),
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Node::Expression(expr)
    }
}

impl From<MarkupNode> for Node {
    fn from(node: MarkupNode) -> Self {
        Node::Markup(node)
    }
}
