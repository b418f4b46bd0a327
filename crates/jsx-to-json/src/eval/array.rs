//! Array literal evaluation

use crate::context::ConvertContext;
use crate::syntax::ArrayLiteral;
use crate::Value;

use super::Evaluate;

impl Evaluate for ArrayLiteral {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        let items = self
            .elements
            .iter()
            .map(|element| match element {
                Some(expr) => expr.eval(ctx),
                // hole
                None => Value::Undefined,
            })
            .collect();
        Value::Array(items)
    }
}
