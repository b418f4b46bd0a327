//! Value trait implementations: constructors, predicates, extractors, From traits

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create an array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Create an object value from key/value pairs, later keys overwriting earlier ones
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create a passthrough value for an unevaluated node
    pub fn node(node: impl Into<Node>) -> Self {
        Value::Node(Box::new(node.into()))
    }

    /// Create a converted element: `[tag, attributes, ...children]`
    pub fn element(tag: impl Into<String>, attributes: Value, children: Vec<Value>) -> Self {
        let mut items = Vec::with_capacity(children.len() + 2);
        items.push(Value::String(tag.into()));
        items.push(attributes);
        items.extend(children);
        Value::Array(items)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is `undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a passthrough node
    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// JS truthiness: `false`, `0`, `NaN`, `""`, `null` and `undefined` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Node(_) => true,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Borrow as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the number, if this is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow as a slice of array items
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as an object mapping
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the passthrough node
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<Option<Object>> for Value {
    fn from(map: Option<Object>) -> Self {
        map.map_or(Value::Null, Value::Object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(-0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::string("").is_truthy());

        assert!(Value::string(" ").is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(Value::array(vec![]).is_truthy());
        assert!(Value::Object(Object::new()).is_truthy());
    }

    #[test]
    fn test_element_constructor() {
        let el = Value::element("div", Value::Null, vec![Value::from("hi")]);
        assert_eq!(
            el,
            Value::array(vec![Value::from("div"), Value::Null, Value::from("hi")])
        );
    }

    #[test]
    fn test_object_constructor_overwrites() {
        let obj = Value::object([("a", Value::from(1)), ("b", Value::from(2)), ("a", Value::from(3))]);
        let map = obj.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0), Some((&"a".to_string(), &Value::from(3))));
    }

    #[test]
    fn test_from_option_object() {
        assert_eq!(Value::from(None::<Object>), Value::Null);
        assert_eq!(Value::from(Some(Object::new())), Value::Object(Object::new()));
    }
}
