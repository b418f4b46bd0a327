//! JSON serialization for Value
//!
//! Follows `JSON.stringify` where the JS value model and JSON disagree:
//! non-finite numbers and `undefined` become `null`. Integral numbers that fit
//! a 64-bit integer are written without a fractional part.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::Value;

/// 2^63: integral values below this magnitude fit an i64 exactly.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// 2^64: non-negative integral values below this fit a u64 exactly.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(None)?;
                for (key, value) in map {
                    if value.is_undefined() {
                        continue;
                    }
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::Node(node) => node.serialize(serializer),
        }
    }
}

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        serializer.serialize_unit()
    } else if n.fract() == 0.0 && n.abs() < I64_LIMIT {
        // -0 also lands here and is written as 0
        serializer.serialize_i64(n as i64)
    } else if n.fract() == 0.0 && n > 0.0 && n < U64_LIMIT {
        serializer.serialize_u64(n as u64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl Value {
    /// Convert into a `serde_json::Value`.
    ///
    /// # Errors
    ///
    /// Returns an error if a passthrough node fails to serialize.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Span, Unrecognized};
    use crate::syntax::Expression;
    use serde_json::json;

    #[test]
    fn test_numbers() {
        assert_eq!(Value::Number(3.0).to_json().unwrap(), json!(3));
        assert_eq!(Value::Number(-0.0).to_json().unwrap(), json!(0));
        assert_eq!(Value::Number(2.5).to_json().unwrap(), json!(2.5));
        assert_eq!(Value::Number(f64::NAN).to_json().unwrap(), json!(null));
        assert_eq!(Value::Number(f64::INFINITY).to_json().unwrap(), json!(null));
        assert_eq!(Value::Number(1e300).to_json().unwrap(), json!(1e300));
    }

    #[test]
    fn test_large_integral_numbers() {
        assert_eq!(
            serde_json::to_string(&Value::Number(9_007_199_254_740_992.0)).unwrap(),
            "9007199254740992"
        );
        assert_eq!(
            serde_json::to_string(&Value::Number(-9_007_199_254_740_994.0)).unwrap(),
            "-9007199254740994"
        );
        assert_eq!(
            serde_json::to_string(&Value::Number(1e19)).unwrap(),
            "10000000000000000000"
        );
        assert_eq!(Value::Number(1e18).to_json().unwrap(), json!(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn test_element_shape() {
        let el = Value::element(
            "div",
            Value::object([("id", Value::from(3)), ("hidden", Value::Bool(true))]),
            vec![Value::from("hi")],
        );
        assert_eq!(
            el.to_json().unwrap(),
            json!(["div", {"id": 3, "hidden": true}, "hi"])
        );
    }

    #[test]
    fn test_undefined_in_containers() {
        let arr = Value::array(vec![Value::Undefined, Value::from(1)]);
        assert_eq!(arr.to_json().unwrap(), json!([null, 1]));

        let obj = Value::object([("a", Value::Undefined), ("b", Value::Null)]);
        assert_eq!(obj.to_json().unwrap(), json!({"b": null}));
    }

    #[test]
    fn test_node_passthrough() {
        let node = Value::node(Expression::Unrecognized(Unrecognized {
            kind: "CallExpression".to_string(),
            span: Span::new(1, 6),
            source: "foo()".to_string(),
        }));
        assert_eq!(
            node.to_json().unwrap(),
            json!({
                "type": "Unrecognized",
                "kind": "CallExpression",
                "span": {"start": 1, "end": 6},
                "source": "foo()"
            })
        );
    }
}
