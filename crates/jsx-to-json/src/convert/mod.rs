//! Markup node conversion
//!
//! Elements and fragments become `[tagName, attributes, ...children]`; text
//! becomes a string. Embedded expressions are folded by [`crate::eval`].

pub mod attribute;

use crate::context::ConvertContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::syntax::MarkupNode;
use crate::Value;

pub use attribute::convert_attributes;

/// Tag name used for fragments.
pub const FRAGMENT_TAG: &str = "Fragment";

/// Convert a markup node into its output tree.
///
/// # Example
///
/// ```
/// use jsx_to_json::syntax::{Fragment, MarkupNode, Span, Text};
/// use jsx_to_json::{convert_node, ConvertContext, Value};
///
/// let node = MarkupNode::Fragment(Fragment {
///     children: vec![MarkupNode::Text(Text {
///         value: "hi".to_string(),
///         span: Span::new(2, 4),
///     })],
///     span: Span::new(0, 7),
/// });
/// let value = convert_node(&node, &ConvertContext::default());
/// assert_eq!(
///     value,
///     Value::array(vec!["Fragment".into(), Value::Null, "hi".into()])
/// );
/// ```
pub fn convert_node(node: &MarkupNode, ctx: &ConvertContext) -> Value {
    if ctx.trace {
        let span = node.span();
        tracing::trace!(start = span.start, end = span.end, "converting markup node");
    }

    match node {
        MarkupNode::Fragment(fragment) => {
            Value::element(FRAGMENT_TAG, Value::Null, convert_children(&fragment.children, ctx))
        }
        MarkupNode::Element(element) => {
            let attributes = convert_attributes(element, ctx);
            Value::element(
                element.name.clone(),
                Value::Object(attributes),
                convert_children(&element.children, ctx),
            )
        }
        MarkupNode::Text(text) => Value::String(text.value.clone()),
        MarkupNode::Unrecognized(u) => {
            ctx.report(Diagnostic::new(
                DiagnosticKind::UnsupportedMarkup,
                format!("unexpected node type {}", u.kind),
                u.span,
            ));
            Value::node(node.clone())
        }
    }
}

fn convert_children(children: &[MarkupNode], ctx: &ConvertContext) -> Vec<Value> {
    children.iter().map(|child| convert_node(child, ctx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::CollectingSink;
    use crate::syntax::{
        Attribute, AttributeItem, Element, Expression, Literal, LiteralValue, Span, Text,
        Unrecognized,
    };
    use crate::value::Object;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn text(value: &str) -> MarkupNode {
        MarkupNode::Text(Text {
            value: value.to_string(),
            span: Span::default(),
        })
    }

    fn attr(name: &str, value: Option<Expression>) -> AttributeItem {
        AttributeItem::Attribute(Attribute {
            name: name.to_string(),
            value,
            span: Span::default(),
        })
    }

    fn string(value: &str) -> Expression {
        Expression::Literal(Literal {
            value: LiteralValue::String(value.to_string()),
            span: Span::default(),
        })
    }

    fn element(name: &str, attributes: Vec<AttributeItem>, children: Vec<MarkupNode>) -> MarkupNode {
        MarkupNode::Element(Element {
            name: name.to_string(),
            attributes,
            children,
            span: Span::default(),
        })
    }

    #[test]
    fn test_element_with_attributes_and_children() {
        let node = element(
            "label",
            vec![attr("for", Some(string("x"))), attr("hidden", None)],
            vec![text("Name")],
        );
        assert_eq!(
            convert_node(&node, &ConvertContext::default()),
            Value::element(
                "label",
                Value::object([("htmlFor", Value::from("x")), ("hidden", Value::Bool(true))]),
                vec![Value::from("Name")],
            )
        );
    }

    #[test]
    fn test_custom_element_keeps_names() {
        let node = element("myComp", vec![attr("class", Some(string("x")))], vec![]);
        assert_eq!(
            convert_node(&node, &ConvertContext::default()),
            Value::element("myComp", Value::object([("class", Value::from("x"))]), vec![])
        );
    }

    #[test]
    fn test_style_on_custom_element() {
        let node = element("Box", vec![attr("style", Some(string("top: 0")))], vec![]);
        assert_eq!(
            convert_node(&node, &ConvertContext::default()),
            Value::element(
                "Box",
                Value::object([("style", Value::object([("top", Value::from("0"))]))]),
                vec![],
            )
        );
    }

    #[test]
    fn test_spread_attribute_is_reported() {
        let sink = Arc::new(CollectingSink::new());
        let ctx = ConvertContext::new().with_diagnostics(sink.clone());
        let node = element(
            "div",
            vec![AttributeItem::Unrecognized(Unrecognized {
                kind: "JSXSpreadAttribute".to_string(),
                span: Span::new(5, 14),
                source: "{...rest}".to_string(),
            })],
            vec![],
        );

        let value = convert_node(&node, &ctx);

        assert_eq!(value, Value::element("div", Value::Object(Object::new()), vec![]));
        assert_eq!(sink.take()[0].kind, DiagnosticKind::UnsupportedAttribute);
    }

    #[test]
    fn test_unrecognized_child_passes_through() {
        let sink = Arc::new(CollectingSink::new());
        let ctx = ConvertContext::new().with_diagnostics(sink.clone());
        let child = MarkupNode::Unrecognized(Unrecognized {
            kind: "JSXExpressionContainer".to_string(),
            span: Span::new(5, 10),
            source: "{foo}".to_string(),
        });
        let node = element("p", vec![], vec![child.clone()]);

        let value = convert_node(&node, &ctx);

        assert_eq!(
            value,
            Value::element("p", Value::Object(Object::new()), vec![Value::node(child)])
        );
        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "unexpected node type JSXExpressionContainer");
    }
}
