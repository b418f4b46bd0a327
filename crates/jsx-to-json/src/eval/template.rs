//! Template literal evaluation
//!
//! Literal segments and interpolations are merged by source position and
//! concatenated. Segments contribute their raw text; interpolations
//! contribute the JS string form of their value.

use crate::context::ConvertContext;
use crate::syntax::TemplateLiteral;
use crate::Value;

use super::Evaluate;

impl Evaluate for TemplateLiteral {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        let mut parts: Vec<(u32, String)> =
            Vec::with_capacity(self.quasis.len() + self.expressions.len());

        parts.extend(self.quasis.iter().map(|q| (q.start, q.raw.clone())));
        parts.extend(
            self.expressions
                .iter()
                .map(|expr| (expr.start(), expr.eval(ctx).to_string())),
        );
        parts.sort_by_key(|(start, _)| *start);

        Value::String(parts.into_iter().map(|(_, text)| text).collect())
    }
}
