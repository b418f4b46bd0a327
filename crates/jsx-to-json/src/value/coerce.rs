//! JavaScript type coercions used by constant folding

use oxc_syntax::number::ToJsString;

use super::Value;

const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_31: f64 = 2_147_483_648.0;

/// Format a number the way JavaScript's `String(n)` does.
///
/// `-0` formats as `"0"`.
pub fn number_to_string(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_js_string()
    }
}

/// Parse a string the way JavaScript's `Number(s)` does.
///
/// Surrounding whitespace is ignored, the empty string is `0`, `0x`/`0o`/`0b`
/// prefixes and `Infinity` are accepted, anything else that is not a decimal
/// literal is `NaN`.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_prefixed_integer(s) {
        return n;
    }

    // Rust's float parser also accepts `inf` and `nan`, which JS does not
    let is_decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parse `0x..`, `0o..` or `0b..` literals. Returns `None` when there is no prefix.
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let parsed = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(parsed.unwrap_or(f64::NAN))
}

/// `ToInt32` on an already-converted number.
pub(crate) fn number_to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let m = n.trunc().rem_euclid(TWO_POW_32);
    if m >= TWO_POW_31 {
        (m - TWO_POW_32) as i32
    } else {
        m as i32
    }
}

/// `ToUint32` on an already-converted number.
pub(crate) fn number_to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(TWO_POW_32) as u32
}

impl Value {
    /// `ToPrimitive`: arrays, objects and nodes become their string form.
    pub fn to_primitive(&self) -> Value {
        match self {
            Value::Array(_) | Value::Object(_) | Value::Node(_) => Value::String(self.to_string()),
            other => other.clone(),
        }
    }

    /// `ToNumber`
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Array(_) | Value::Object(_) | Value::Node(_) => {
                string_to_number(&self.to_string())
            }
        }
    }

    /// `ToInt32`
    pub fn to_int32(&self) -> i32 {
        number_to_int32(self.to_number())
    }

    /// `ToUint32`
    pub fn to_uint32(&self) -> u32 {
        number_to_uint32(self.to_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(3.0), "3");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.5), "0.5");
        assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("  42  "), 42.0);
        assert_eq!(string_to_number("-1.5e2"), -150.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("nan").is_nan());
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("0x").is_nan());
        assert!(string_to_number("0xZZ").is_nan());
    }

    #[test]
    fn test_to_int32_wraps() {
        assert_eq!(number_to_int32(2_147_483_648.0), -2_147_483_648);
        assert_eq!(number_to_int32(4_294_967_296.0), 0);
        assert_eq!(number_to_int32(-1.9), -1);
        assert_eq!(number_to_int32(f64::NAN), 0);
        assert_eq!(number_to_uint32(-1.0), 4_294_967_295);
    }

    #[test]
    fn test_value_to_number() {
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::Bool(true).to_number(), 1.0);
        assert_eq!(Value::from("7").to_number(), 7.0);
        assert_eq!(Value::array(vec![]).to_number(), 0.0);
        assert_eq!(Value::array(vec![Value::from(5)]).to_number(), 5.0);
        assert!(Value::array(vec![Value::from(1), Value::from(2)]).to_number().is_nan());
    }
}
