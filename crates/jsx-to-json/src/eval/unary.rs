//! Unary operation evaluation

use crate::context::ConvertContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::syntax::UnaryOp;
use crate::Value;

use super::Evaluate;

impl Evaluate for UnaryOp {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        match self.operator.as_str() {
            "+" => Value::Number(self.argument.eval(ctx).to_number()),
            "-" => Value::Number(-self.argument.eval(ctx).to_number()),
            "~" => Value::from(!self.argument.eval(ctx).to_int32()),
            other => {
                ctx.report(Diagnostic::new(
                    DiagnosticKind::UnsupportedUnaryOperator,
                    format!("unsupported unary operator {}", other),
                    self.span,
                ));
                // the operand, not the whole expression
                Value::node((*self.argument).clone())
            }
        }
    }
}
