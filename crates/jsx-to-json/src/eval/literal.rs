//! Literal and identifier evaluation

use crate::context::ConvertContext;
use crate::syntax::{Identifier, Literal, LiteralValue};
use crate::Value;

use super::Evaluate;

impl Evaluate for Literal {
    fn eval(&self, _ctx: &ConvertContext) -> Value {
        match &self.value {
            LiteralValue::Null => Value::Null,
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::String(s) => Value::String(s.clone()),
        }
    }
}

/// Identifiers are never resolved; they fold to their own name.
impl Evaluate for Identifier {
    fn eval(&self, _ctx: &ConvertContext) -> Value {
        Value::String(self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    fn lit(value: LiteralValue) -> Value {
        Literal {
            value,
            span: Span::default(),
        }
        .eval(&ConvertContext::default())
    }

    #[test]
    fn test_literals() {
        assert_eq!(lit(LiteralValue::Null), Value::Null);
        assert_eq!(lit(LiteralValue::Bool(false)), Value::Bool(false));
        assert_eq!(lit(LiteralValue::Number(1.5)), Value::Number(1.5));
        assert_eq!(lit(LiteralValue::String("x".into())), Value::from("x"));
    }

    #[test]
    fn test_identifier_is_its_name() {
        let id = Identifier {
            name: "undefined".to_string(),
            span: Span::default(),
        };
        assert_eq!(id.eval(&ConvertContext::default()), Value::from("undefined"));
    }
}
