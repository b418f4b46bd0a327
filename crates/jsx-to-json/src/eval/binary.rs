//! Binary operation evaluation
//!
//! Operators follow JavaScript semantics over [`Value`]: f64 arithmetic,
//! 32-bit integer bitwise operators, string concatenation for `+`, and the
//! abstract and strict equality and relational comparison algorithms.

use std::cmp::Ordering;

use crate::context::ConvertContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::syntax::{BinaryOp, Expression};
use crate::Value;

use super::Evaluate;

/// Binary operators that can be folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `**`
    Exp,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `==`
    Eq,
    /// `===`
    StrictEq,
    /// `!=`
    Ne,
    /// `!==`
    StrictNe,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `|`
    BitOr,
    /// `&`
    BitAnd,
    /// `^`
    BitXor,
}

impl BinaryOperator {
    /// Look up an operator by its source text.
    pub fn from_source(op: &str) -> Option<Self> {
        let op = match op {
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Sub,
            "*" => BinaryOperator::Mul,
            "**" => BinaryOperator::Exp,
            "/" => BinaryOperator::Div,
            "%" => BinaryOperator::Rem,
            "==" => BinaryOperator::Eq,
            "===" => BinaryOperator::StrictEq,
            "!=" => BinaryOperator::Ne,
            "!==" => BinaryOperator::StrictNe,
            "<" => BinaryOperator::Lt,
            "<=" => BinaryOperator::Le,
            ">" => BinaryOperator::Gt,
            ">=" => BinaryOperator::Ge,
            "<<" => BinaryOperator::Shl,
            ">>" => BinaryOperator::Shr,
            ">>>" => BinaryOperator::UShr,
            "|" => BinaryOperator::BitOr,
            "&" => BinaryOperator::BitAnd,
            "^" => BinaryOperator::BitXor,
            _ => return None,
        };
        Some(op)
    }
}

impl Evaluate for BinaryOp {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        let Some(op) = BinaryOperator::from_source(&self.operator) else {
            ctx.report(Diagnostic::new(
                DiagnosticKind::UnsupportedBinaryOperator,
                format!("unsupported binary operator {}", self.operator),
                self.span,
            ));
            return Value::node(Expression::BinaryOp(self.clone()));
        };

        let left = self.left.eval(ctx);
        let right = self.right.eval(ctx);
        apply(op, &left, &right)
    }
}

/// Apply a binary operator to two values.
pub fn apply(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    match op {
        // Arithmetic
        BinaryOperator::Add => add(left, right),
        BinaryOperator::Sub => Value::Number(left.to_number() - right.to_number()),
        BinaryOperator::Mul => Value::Number(left.to_number() * right.to_number()),
        BinaryOperator::Div => Value::Number(left.to_number() / right.to_number()),
        // f64 `%` truncates like JS
        BinaryOperator::Rem => Value::Number(left.to_number() % right.to_number()),
        BinaryOperator::Exp => Value::Number(exponentiate(left.to_number(), right.to_number())),

        // Equality
        BinaryOperator::Eq => Value::Bool(loose_equals(left, right)),
        BinaryOperator::Ne => Value::Bool(!loose_equals(left, right)),
        BinaryOperator::StrictEq => Value::Bool(strict_equals(left, right)),
        BinaryOperator::StrictNe => Value::Bool(!strict_equals(left, right)),

        // Relational
        BinaryOperator::Lt => Value::Bool(less_than(left, right) == Some(true)),
        BinaryOperator::Gt => Value::Bool(less_than(right, left) == Some(true)),
        BinaryOperator::Le => Value::Bool(less_than(right, left) == Some(false)),
        BinaryOperator::Ge => Value::Bool(less_than(left, right) == Some(false)),

        // Bitwise
        BinaryOperator::BitOr => Value::from(left.to_int32() | right.to_int32()),
        BinaryOperator::BitAnd => Value::from(left.to_int32() & right.to_int32()),
        BinaryOperator::BitXor => Value::from(left.to_int32() ^ right.to_int32()),
        BinaryOperator::Shl => {
            Value::from(left.to_int32().wrapping_shl(right.to_uint32() & 31))
        }
        BinaryOperator::Shr => {
            Value::from(left.to_int32().wrapping_shr(right.to_uint32() & 31))
        }
        BinaryOperator::UShr => Value::Number(f64::from(
            left.to_uint32().wrapping_shr(right.to_uint32() & 31),
        )),
    }
}

fn add(left: &Value, right: &Value) -> Value {
    let left = left.to_primitive();
    let right = right.to_primitive();
    if left.is_string() || right.is_string() {
        Value::String(format!("{}{}", left, right))
    } else {
        Value::Number(left.to_number() + right.to_number())
    }
}

/// `Number::exponentiate`, which differs from `powf` for a few inputs.
fn exponentiate(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        return f64::NAN;
    }
    if exponent == 0.0 {
        return 1.0;
    }
    if base.abs() == 1.0 && exponent.is_infinite() {
        return f64::NAN;
    }
    base.powf(exponent)
}

/// `IsStrictlyEqual`. Arrays, objects and nodes are fresh values, so they
/// never compare equal.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// `IsLooselyEqual`
pub fn loose_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (a, b) if a.is_nullish() && b.is_nullish() => true,
        (a, b) if a.is_nullish() || b.is_nullish() => false,
        (Value::Number(a), Value::String(b)) => *a == crate::value::string_to_number(b),
        (Value::String(a), Value::Number(b)) => crate::value::string_to_number(a) == *b,
        (Value::Bool(_), other) => loose_equals(&Value::Number(left.to_number()), other),
        (other, Value::Bool(_)) => loose_equals(other, &Value::Number(right.to_number())),
        (a, b) if is_compound(a) && !is_compound(b) => loose_equals(&a.to_primitive(), b),
        (a, b) if !is_compound(a) && is_compound(b) => loose_equals(a, &b.to_primitive()),
        (a, b) => strict_equals(a, b),
    }
}

fn is_compound(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_) | Value::Node(_))
}

/// `IsLessThan`. `None` stands for the `undefined` result produced when
/// either side is NaN.
pub fn less_than(left: &Value, right: &Value) -> Option<bool> {
    let left = left.to_primitive();
    let right = right.to_primitive();

    if let (Value::String(a), Value::String(b)) = (&left, &right) {
        // strings compare by UTF-16 code units
        return Some(a.encode_utf16().cmp(b.encode_utf16()) == Ordering::Less);
    }

    let a = left.to_number();
    let b = right.to_number();
    if a.is_nan() || b.is_nan() {
        None
    } else {
        Some(a < b)
    }
}
