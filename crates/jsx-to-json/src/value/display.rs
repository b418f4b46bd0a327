//! Display implementation for Value
//!
//! `Display` is JavaScript's `ToString`: it is what template literals, string
//! concatenation and object keys use.

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", number_to_string(*n)),
            Value::String(s) => write!(f, "{}", s),

            // Array.prototype.join(","): null and undefined become empty
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }

            Value::Object(_) | Value::Node(_) => write!(f, "[object Object]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_primitives() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::from("x").to_string(), "x");
    }

    #[test]
    fn test_display_array_joins() {
        let arr = Value::array(vec![
            Value::from(1),
            Value::Null,
            Value::array(vec![Value::from("a"), Value::from("b")]),
            Value::Undefined,
        ]);
        assert_eq!(arr.to_string(), "1,,a,b,");
    }

    #[test]
    fn test_display_object() {
        assert_eq!(Value::Object(Object::new()).to_string(), "[object Object]");
    }
}
