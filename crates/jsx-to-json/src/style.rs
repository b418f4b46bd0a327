//! Inline style parsing
//!
//! Turns `style="color: red; margin: 0 auto"` into an ordered property map.
//! Comments are dropped, declarations are separated by `;` outside quotes and
//! parentheses, and each declaration splits at its first `:`. Declarations
//! with an empty property or value are skipped.

use indexmap::IndexMap;

/// Property name to value, in declaration order.
pub type StyleMap = IndexMap<String, String>;

/// Parse an inline style string.
///
/// Returns `None` when the string holds no usable declaration.
pub fn parse_style(css: &str) -> Option<StyleMap> {
    let mut styles = StyleMap::new();

    for declaration in split_declarations(css) {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        styles.insert(property.to_string(), value.to_string());
    }

    if styles.is_empty() {
        None
    } else {
        Some(styles)
    }
}

/// Split on top-level `;`, dropping `/* ... */` comments.
fn split_declarations(css: &str) -> Vec<String> {
    let mut declarations = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = css.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            current.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            '"' | '\'' => {
                quote = Some(c);
                current.push(c);
            }
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ';' if depth == 0 => declarations.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if !current.trim().is_empty() {
        declarations.push(current);
    }
    declarations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(css: &str) -> Vec<(String, String)> {
        parse_style(css)
            .map(|m| m.into_iter().collect())
            .unwrap_or_default()
    }

    fn expected(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_single_declaration() {
        assert_eq!(pairs("color:red"), expected(&[("color", "red")]));
    }

    #[test]
    fn test_multiple_declarations_keep_order() {
        assert_eq!(
            pairs(" margin : 0 auto ; color: blue; "),
            expected(&[
                ("margin", "0 auto"),
                ("color", "blue")
            ])
        );
    }

    #[test]
    fn test_later_declaration_wins() {
        assert_eq!(
            pairs("color: red; color: blue"),
            expected(&[("color", "blue")])
        );
    }

    #[test]
    fn test_value_with_colon_and_semicolon_in_url() {
        assert_eq!(
            pairs("background: url(data:image/png;base64,AAA); top: 0"),
            expected(&[
                ("background", "url(data:image/png;base64,AAA)"),
                ("top", "0")
            ])
        );
    }

    #[test]
    fn test_quoted_semicolon() {
        assert_eq!(
            pairs(r#"content: "a;b"; font-family: 'x;y'"#),
            expected(&[
                ("content", r#""a;b""#),
                ("font-family", "'x;y'")
            ])
        );
    }

    #[test]
    fn test_comments_are_removed() {
        assert_eq!(
            pairs("/* lead */ color: /* inner */ red; /* tail */"),
            expected(&[("color", "red")])
        );
    }

    #[test]
    fn test_custom_properties_keep_case() {
        assert_eq!(
            pairs("--Main-Color: #fff; Color: red !important"),
            expected(&[
                ("--Main-Color", "#fff"),
                ("Color", "red !important")
            ])
        );
    }

    #[test]
    fn test_empty_and_malformed() {
        assert!(parse_style("").is_none());
        assert!(parse_style("   ;  ;").is_none());
        assert!(parse_style("color").is_none());
        assert!(parse_style("color:").is_none());
        assert!(parse_style(": red").is_none());
    }
}
