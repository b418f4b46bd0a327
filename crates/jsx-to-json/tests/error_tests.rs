use jsx_to_json::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// Helper that expects a syntax error and returns its payload
fn syntax_error(src: &str) -> SyntaxErrorPayload {
    match convert(src) {
        Err(ConvertError::SyntaxError { message, payload }) => {
            let decoded: SyntaxErrorPayload =
                serde_json::from_str(&message).expect("message is not JSON");
            assert_eq!(decoded, payload);
            payload
        }
        other => panic!("expected a syntax error for {:?}, got {:?}", src, other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Syntax Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unterminated_tag() {
    let payload = syntax_error("<div>");
    assert_eq!(payload.validation_error, "Could not parse \"<div>\"");
    let location = payload.location.expect("location");
    assert_eq!(location.line, 1);
}

#[test]
fn test_mismatched_closing_tag() {
    let payload = syntax_error("<a></b>");
    assert_eq!(payload.validation_error, "Could not parse \"<a></b>\"");
    assert!(payload.location.is_some());
}

#[test]
fn test_location_is_relative_to_input() {
    let payload = syntax_error("<div>\n  <p>x</div>\n</div>");
    assert_eq!(payload.location.expect("location").line, 2);
}

#[test]
fn test_invalid_expression() {
    let payload = syntax_error("<a x={1 +} />");
    assert!(payload.location.is_some());
}

#[test]
fn test_message_shape() {
    let err = convert("<div>").unwrap_err();
    let message: serde_json::Value = serde_json::from_str(&err.to_string()).unwrap();
    assert_eq!(message["validationError"], json!("Could not parse \"<div>\""));
    assert!(message["location"]["line"].is_u64());
    assert!(message["location"]["column"].is_u64());
}

// ═══════════════════════════════════════════════════════════════════════
// Invalid Arguments
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_non_string_input() {
    assert_eq!(
        convert_input(&json!(42)).unwrap_err(),
        ConvertError::InvalidArgument {
            got: "number".to_string()
        }
    );
    assert!(matches!(
        convert_input(&json!(null)),
        Err(ConvertError::InvalidArgument { .. })
    ));
    assert!(matches!(
        convert_input(&json!({"src": "<a/>"})),
        Err(ConvertError::InvalidArgument { .. })
    ));
}

#[test]
fn test_string_input_is_converted() {
    let out = convert_input(&json!("<p>x</p>")).unwrap();
    assert_eq!(out[0].to_json().unwrap(), json!(["p", {}, "x"]));
}

#[test]
fn test_string_input_can_still_fail_to_parse() {
    assert!(matches!(
        convert_input(&json!("<p>")),
        Err(ConvertError::SyntaxError { .. })
    ));
}
