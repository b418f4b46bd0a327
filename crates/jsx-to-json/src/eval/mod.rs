//! Expression evaluation
//!
//! Folds statically known expressions into [`Value`]s. Evaluation never
//! fails: anything that cannot be folded is reported to the context's
//! diagnostic sink and passed through as a [`Value::Node`].

pub mod array;
pub mod binary;
pub mod literal;
pub mod object;
pub mod template;
pub mod unary;

use crate::context::ConvertContext;
use crate::convert::convert_node;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::syntax::{Expression, ExpressionContainer, MarkupElement, Unrecognized};
use crate::Value;

/// Trait for folding syntax nodes into values.
///
/// Each expression node type implements this trait.
pub trait Evaluate {
    /// Evaluate this node.
    fn eval(&self, ctx: &ConvertContext) -> Value;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expression {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        match self {
            Expression::Literal(expr) => expr.eval(ctx),
            Expression::ExpressionContainer(expr) => expr.eval(ctx),
            Expression::ArrayLiteral(expr) => expr.eval(ctx),
            Expression::TemplateLiteral(expr) => expr.eval(ctx),
            Expression::ObjectLiteral(expr) => expr.eval(ctx),
            Expression::Identifier(expr) => expr.eval(ctx),
            Expression::BinaryOp(expr) => expr.eval(ctx),
            Expression::UnaryOp(expr) => expr.eval(ctx),
            Expression::MarkupElement(expr) => expr.eval(ctx),
            Expression::Unrecognized(expr) => expr.eval(ctx),
        }
    }
}

impl Evaluate for ExpressionContainer {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        self.expression.eval(ctx)
    }
}

impl Evaluate for MarkupElement {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        convert_node(&self.node, ctx)
    }
}

impl Evaluate for Unrecognized {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        ctx.report(Diagnostic::new(
            DiagnosticKind::UnsupportedExpression,
            format!("unexpected expression type {}", self.kind),
            self.span,
        ));
        Value::node(Expression::Unrecognized(self.clone()))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an optional expression.
///
/// A missing expression is an attribute written without a value, which
/// evaluates to `true`.
///
/// # Example
///
/// ```
/// use jsx_to_json::{evaluate, ConvertContext, Value};
///
/// assert_eq!(evaluate(None, &ConvertContext::default()), Value::Bool(true));
/// ```
pub fn evaluate(node: Option<&Expression>, ctx: &ConvertContext) -> Value {
    match node {
        Some(expr) => expr.eval(ctx),
        None => Value::Bool(true),
    }
}
