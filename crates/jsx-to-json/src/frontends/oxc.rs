//! JSX frontend backed by `oxc_parser`
//!
//! The oxc AST lives in an arena that is dropped when [`OxcFrontend::parse`]
//! returns, so everything the evaluator needs is copied into the owned
//! [`crate::syntax`] tree. Node kinds outside the modelled subset keep their
//! ESTree kind name and source text.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    ArrayExpressionElement, Expression as OxcExpression, JSXAttributeItem, JSXAttributeName,
    JSXAttributeValue, JSXChild, JSXElement, JSXExpression, JSXFragment, ObjectPropertyKind,
    PropertyKey, Statement,
};
use oxc_parser::{ParseOptions, Parser};
use oxc_span::{GetSpan, SourceType, Span as OxcSpan};

use crate::frontend::{MarkupFrontend, ParseError};
use crate::syntax::{
    ArrayLiteral, Attribute, AttributeItem, BinaryOp, Element, Expression, ExpressionContainer,
    Fragment, Identifier, Literal, LiteralValue, MarkupElement, MarkupNode, ObjectLiteral,
    ObjectMember, Property, Span, SyntaxTree, TemplateLiteral, TemplateSegment, Text, UnaryOp,
    Unrecognized,
};

/// JSX frontend.
///
/// # Example
///
/// ```
/// use jsx_to_json::frontends::OxcFrontend;
/// use jsx_to_json::frontend::MarkupFrontend;
///
/// let frontend = OxcFrontend::new();
/// let tree = frontend.parse("<div id=\"a\" />").unwrap();
/// assert_eq!(tree.body.len(), 1);
/// assert_eq!(frontend.name(), "oxc");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OxcFrontend;

impl OxcFrontend {
    /// Create a new oxc frontend.
    pub fn new() -> Self {
        Self
    }
}

impl MarkupFrontend for OxcFrontend {
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        let allocator = Allocator::default();
        let options = ParseOptions {
            preserve_parens: false,
            ..ParseOptions::default()
        };
        let ret = Parser::new(&allocator, source, SourceType::jsx())
            .with_options(options)
            .parse();

        if let Some(diagnostic) = ret.errors.first() {
            let mut err = ParseError::new(diagnostic.message.to_string());
            if let Some(label) = diagnostic.labels.as_ref().and_then(|labels| labels.first()) {
                err = err.with_offset(label.offset());
            }
            return Err(err);
        }
        if ret.panicked {
            return Err(ParseError::new("parser aborted"));
        }

        let lower = Lower { source };
        let body = ret
            .program
            .body
            .iter()
            .map(|stmt| lower.statement(stmt))
            .collect();
        Ok(SyntaxTree { body })
    }

    fn name(&self) -> &str {
        "oxc"
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Lowering
// ═══════════════════════════════════════════════════════════════════════

struct Lower<'s> {
    source: &'s str,
}

fn span(span: OxcSpan) -> Span {
    Span::new(span.start, span.end)
}

impl Lower<'_> {
    fn unrecognized(&self, kind: &str, oxc_span: OxcSpan) -> Unrecognized {
        Unrecognized {
            kind: kind.to_string(),
            span: span(oxc_span),
            source: oxc_span.source_text(self.source).to_string(),
        }
    }

    fn statement(&self, stmt: &Statement<'_>) -> Expression {
        match stmt {
            Statement::ExpressionStatement(s) => self.expression(&s.expression),
            other => Expression::Unrecognized(self.unrecognized("Statement", other.span())),
        }
    }

    fn expression(&self, expr: &OxcExpression<'_>) -> Expression {
        let literal = |value: LiteralValue, s: OxcSpan| {
            Expression::Literal(Literal {
                value,
                span: span(s),
            })
        };

        match expr {
            OxcExpression::NullLiteral(lit) => literal(LiteralValue::Null, lit.span),
            OxcExpression::BooleanLiteral(lit) => literal(LiteralValue::Bool(lit.value), lit.span),
            OxcExpression::NumericLiteral(lit) => {
                literal(LiteralValue::Number(lit.value), lit.span)
            }
            OxcExpression::StringLiteral(lit) => {
                literal(LiteralValue::String(lit.value.to_string()), lit.span)
            }
            OxcExpression::TemplateLiteral(tpl) => Expression::TemplateLiteral(TemplateLiteral {
                quasis: tpl
                    .quasis
                    .iter()
                    .map(|q| TemplateSegment {
                        raw: q.value.raw.to_string(),
                        start: q.span.start,
                    })
                    .collect(),
                expressions: tpl.expressions.iter().map(|e| self.expression(e)).collect(),
                span: span(tpl.span),
            }),
            OxcExpression::Identifier(id) => Expression::Identifier(Identifier {
                name: id.name.to_string(),
                span: span(id.span),
            }),
            OxcExpression::ArrayExpression(arr) => Expression::ArrayLiteral(ArrayLiteral {
                elements: arr
                    .elements
                    .iter()
                    .map(|el| self.array_element(el))
                    .collect(),
                span: span(arr.span),
            }),
            OxcExpression::ObjectExpression(obj) => Expression::ObjectLiteral(ObjectLiteral {
                properties: obj
                    .properties
                    .iter()
                    .map(|p| self.object_member(p))
                    .collect(),
                span: span(obj.span),
            }),
            OxcExpression::BinaryExpression(bin) => Expression::BinaryOp(BinaryOp {
                operator: bin.operator.as_str().to_string(),
                left: Box::new(self.expression(&bin.left)),
                right: Box::new(self.expression(&bin.right)),
                span: span(bin.span),
            }),
            OxcExpression::UnaryExpression(un) => Expression::UnaryOp(UnaryOp {
                operator: un.operator.as_str().to_string(),
                argument: Box::new(self.expression(&un.argument)),
                span: span(un.span),
            }),
            OxcExpression::ParenthesizedExpression(paren) => self.expression(&paren.expression),
            OxcExpression::JSXElement(el) => Expression::MarkupElement(MarkupElement {
                node: Box::new(self.element(el)),
                span: span(el.span),
            }),
            OxcExpression::JSXFragment(frag) => Expression::MarkupElement(MarkupElement {
                node: Box::new(self.fragment(frag)),
                span: span(frag.span),
            }),
            other => Expression::Unrecognized(self.unrecognized(expression_kind(other), other.span())),
        }
    }

    fn array_element(&self, el: &ArrayExpressionElement<'_>) -> Option<Expression> {
        match el {
            ArrayExpressionElement::Elision(_) => None,
            ArrayExpressionElement::SpreadElement(spread) => Some(Expression::Unrecognized(
                self.unrecognized("SpreadElement", spread.span),
            )),
            other => other.as_expression().map(|e| self.expression(e)),
        }
    }

    fn object_member(&self, member: &ObjectPropertyKind<'_>) -> ObjectMember {
        match member {
            ObjectPropertyKind::ObjectProperty(prop) => {
                let key = match &prop.key {
                    PropertyKey::StaticIdentifier(id) => Expression::Identifier(Identifier {
                        name: id.name.to_string(),
                        span: span(id.span),
                    }),
                    PropertyKey::PrivateIdentifier(id) => {
                        return ObjectMember::Unrecognized(
                            self.unrecognized("PrivateIdentifier", id.span),
                        );
                    }
                    other => match other.as_expression() {
                        Some(e) => self.expression(e),
                        None => {
                            return ObjectMember::Unrecognized(
                                self.unrecognized("PropertyKey", other.span()),
                            );
                        }
                    },
                };
                ObjectMember::Property(Property {
                    key,
                    value: self.expression(&prop.value),
                    span: span(prop.span),
                })
            }
            ObjectPropertyKind::SpreadProperty(spread) => {
                ObjectMember::Unrecognized(self.unrecognized("SpreadElement", spread.span))
            }
        }
    }

    fn element(&self, el: &JSXElement<'_>) -> MarkupNode {
        let opening = &el.opening_element;
        MarkupNode::Element(Element {
            name: opening.name.to_string(),
            attributes: opening
                .attributes
                .iter()
                .map(|attr| self.attribute(attr))
                .collect(),
            children: el.children.iter().map(|c| self.child(c)).collect(),
            span: span(el.span),
        })
    }

    fn fragment(&self, frag: &JSXFragment<'_>) -> MarkupNode {
        MarkupNode::Fragment(Fragment {
            children: frag.children.iter().map(|c| self.child(c)).collect(),
            span: span(frag.span),
        })
    }

    fn child(&self, child: &JSXChild<'_>) -> MarkupNode {
        match child {
            JSXChild::Text(text) => MarkupNode::Text(Text {
                value: text.value.to_string(),
                span: span(text.span),
            }),
            JSXChild::Element(el) => self.element(el),
            JSXChild::Fragment(frag) => self.fragment(frag),
            JSXChild::ExpressionContainer(c) => {
                MarkupNode::Unrecognized(self.unrecognized("JSXExpressionContainer", c.span))
            }
            JSXChild::Spread(s) => {
                MarkupNode::Unrecognized(self.unrecognized("JSXSpreadChild", s.span))
            }
        }
    }

    fn attribute(&self, item: &JSXAttributeItem<'_>) -> AttributeItem {
        let attr = match item {
            JSXAttributeItem::Attribute(attr) => attr,
            JSXAttributeItem::SpreadAttribute(spread) => {
                return AttributeItem::Unrecognized(
                    self.unrecognized("JSXSpreadAttribute", spread.span),
                );
            }
        };

        let name = match &attr.name {
            JSXAttributeName::Identifier(id) => id.name.to_string(),
            JSXAttributeName::NamespacedName(ns) => ns.to_string(),
        };
        let value = attr.value.as_ref().map(|value| match value {
            JSXAttributeValue::StringLiteral(lit) => Expression::Literal(Literal {
                value: LiteralValue::String(lit.value.to_string()),
                span: span(lit.span),
            }),
            JSXAttributeValue::ExpressionContainer(c) => {
                let inner = match &c.expression {
                    JSXExpression::EmptyExpression(empty) => {
                        Expression::Unrecognized(self.unrecognized("JSXEmptyExpression", empty.span))
                    }
                    other => match other.as_expression() {
                        Some(e) => self.expression(e),
                        None => Expression::Unrecognized(
                            self.unrecognized("JSXExpression", other.span()),
                        ),
                    },
                };
                Expression::ExpressionContainer(ExpressionContainer {
                    expression: Box::new(inner),
                    span: span(c.span),
                })
            }
            JSXAttributeValue::Element(el) => Expression::MarkupElement(MarkupElement {
                node: Box::new(self.element(el)),
                span: span(el.span),
            }),
            JSXAttributeValue::Fragment(frag) => Expression::MarkupElement(MarkupElement {
                node: Box::new(self.fragment(frag)),
                span: span(frag.span),
            }),
        });

        AttributeItem::Attribute(Attribute {
            name,
            value,
            span: span(attr.span),
        })
    }
}

/// ESTree-style kind name for expressions that are not lowered.
fn expression_kind(expr: &OxcExpression<'_>) -> &'static str {
    match expr {
        OxcExpression::BooleanLiteral(_)
        | OxcExpression::NullLiteral(_)
        | OxcExpression::NumericLiteral(_)
        | OxcExpression::StringLiteral(_) => "Literal",
        OxcExpression::BigIntLiteral(_) => "BigIntLiteral",
        OxcExpression::RegExpLiteral(_) => "RegExpLiteral",
        OxcExpression::TemplateLiteral(_) => "TemplateLiteral",
        OxcExpression::Identifier(_) => "Identifier",
        OxcExpression::MetaProperty(_) => "MetaProperty",
        OxcExpression::Super(_) => "Super",
        OxcExpression::ArrayExpression(_) => "ArrayExpression",
        OxcExpression::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
        OxcExpression::AssignmentExpression(_) => "AssignmentExpression",
        OxcExpression::AwaitExpression(_) => "AwaitExpression",
        OxcExpression::BinaryExpression(_) => "BinaryExpression",
        OxcExpression::CallExpression(_) => "CallExpression",
        OxcExpression::ChainExpression(_) => "ChainExpression",
        OxcExpression::ClassExpression(_) => "ClassExpression",
        OxcExpression::ConditionalExpression(_) => "ConditionalExpression",
        OxcExpression::FunctionExpression(_) => "FunctionExpression",
        OxcExpression::ImportExpression(_) => "ImportExpression",
        OxcExpression::LogicalExpression(_) => "LogicalExpression",
        OxcExpression::NewExpression(_) => "NewExpression",
        OxcExpression::ObjectExpression(_) => "ObjectExpression",
        OxcExpression::ParenthesizedExpression(_) => "ParenthesizedExpression",
        OxcExpression::SequenceExpression(_) => "SequenceExpression",
        OxcExpression::TaggedTemplateExpression(_) => "TaggedTemplateExpression",
        OxcExpression::ThisExpression(_) => "ThisExpression",
        OxcExpression::UnaryExpression(_) => "UnaryExpression",
        OxcExpression::UpdateExpression(_) => "UpdateExpression",
        OxcExpression::YieldExpression(_) => "YieldExpression",
        OxcExpression::PrivateInExpression(_) => "PrivateInExpression",
        OxcExpression::JSXElement(_) => "JSXElement",
        OxcExpression::JSXFragment(_) => "JSXFragment",
        OxcExpression::TSAsExpression(_) => "TSAsExpression",
        OxcExpression::TSSatisfiesExpression(_) => "TSSatisfiesExpression",
        OxcExpression::TSTypeAssertion(_) => "TSTypeAssertion",
        OxcExpression::TSNonNullExpression(_) => "TSNonNullExpression",
        OxcExpression::TSInstantiationExpression(_) => "TSInstantiationExpression",
        OxcExpression::V8IntrinsicExpression(_) => "V8IntrinsicExpression",
        OxcExpression::ComputedMemberExpression(_)
        | OxcExpression::StaticMemberExpression(_)
        | OxcExpression::PrivateFieldExpression(_) => "MemberExpression",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_markup(src: &str) -> MarkupNode {
        let tree = OxcFrontend::new().parse(src).unwrap();
        match tree.body.into_iter().next() {
            Some(Expression::MarkupElement(m)) => *m.node,
            other => panic!("expected markup, got {:?}", other),
        }
    }

    fn attribute_value(src: &str) -> Expression {
        let MarkupNode::Element(el) = parse_markup(src) else {
            panic!("expected element");
        };
        match el.attributes.into_iter().next() {
            Some(AttributeItem::Attribute(Attribute {
                value: Some(Expression::ExpressionContainer(c)),
                ..
            })) => *c.expression,
            other => panic!("expected expression container, got {:?}", other),
        }
    }

    #[test]
    fn test_element_names() {
        let MarkupNode::Element(el) = parse_markup("<svg:rect />") else {
            panic!("expected element");
        };
        assert_eq!(el.name, "svg:rect");

        let MarkupNode::Element(el) = parse_markup("<A.B.C />") else {
            panic!("expected element");
        };
        assert_eq!(el.name, "A.B.C");
    }

    #[test]
    fn test_attribute_forms() {
        let MarkupNode::Element(el) =
            parse_markup(r##"<input disabled xlink:href="#a" value={1} {...rest} />"##)
        else {
            panic!("expected element");
        };
        assert_eq!(el.attributes.len(), 4);
        match &el.attributes[0] {
            AttributeItem::Attribute(a) => {
                assert_eq!(a.name, "disabled");
                assert!(a.value.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
        match &el.attributes[1] {
            AttributeItem::Attribute(a) => assert_eq!(a.name, "xlink:href"),
            other => panic!("unexpected {:?}", other),
        }
        match &el.attributes[3] {
            AttributeItem::Unrecognized(u) => {
                assert_eq!(u.kind, "JSXSpreadAttribute");
                assert_eq!(u.source, "{...rest}");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_children_kinds() {
        let node = parse_markup("<div>hi<b/><>x</>{y}</div>");
        let kinds: Vec<&str> = node
            .children()
            .iter()
            .map(|c| match c {
                MarkupNode::Element(_) => "element",
                MarkupNode::Fragment(_) => "fragment",
                MarkupNode::Text(_) => "text",
                MarkupNode::Unrecognized(_) => "unrecognized",
            })
            .collect();
        assert_eq!(kinds, vec!["text", "element", "fragment", "unrecognized"]);
    }

    #[test]
    fn test_parens_unwrapped() {
        match attribute_value("<a x={(1 + 2)} />") {
            Expression::BinaryOp(b) => assert_eq!(b.operator, "+"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_array_holes_and_spread() {
        let Expression::ArrayLiteral(arr) = attribute_value("<a x={[1, , ...y]} />") else {
            panic!("expected array");
        };
        assert_eq!(arr.elements.len(), 3);
        assert!(arr.elements[1].is_none());
        assert!(matches!(arr.elements[2], Some(Expression::Unrecognized(_))));
    }

    #[test]
    fn test_object_members() {
        let Expression::ObjectLiteral(obj) = attribute_value("<a x={{a: 1, 'b': 2, ...c}} />")
        else {
            panic!("expected object");
        };
        assert_eq!(obj.properties.len(), 3);
        match &obj.properties[0] {
            ObjectMember::Property(p) => {
                assert!(matches!(&p.key, Expression::Identifier(id) if id.name == "a"))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(&obj.properties[2], ObjectMember::Unrecognized(_)));
    }

    #[test]
    fn test_unrecognized_keeps_kind_and_source() {
        match attribute_value("<a x={foo(1)} />") {
            Expression::Unrecognized(u) => {
                assert_eq!(u.kind, "CallExpression");
                assert_eq!(u.source, "foo(1)");
            }
            other => panic!("unexpected {:?}", other),
        }
        match attribute_value("<a x={a.b} />") {
            Expression::Unrecognized(u) => assert_eq!(u.kind, "MemberExpression"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_template_segments() {
        let Expression::TemplateLiteral(tpl) = attribute_value("<a x={`a${1}b`} />") else {
            panic!("expected template");
        };
        let raws: Vec<&str> = tpl.quasis.iter().map(|q| q.raw.as_str()).collect();
        assert_eq!(raws, vec!["a", "b"]);
        assert_eq!(tpl.expressions.len(), 1);
        assert!(tpl.quasis[0].start < tpl.expressions[0].start());
        assert!(tpl.expressions[0].start() < tpl.quasis[1].start);
    }

    #[test]
    fn test_parse_error_has_offset() {
        let err = OxcFrontend::new().parse("<div>").unwrap_err();
        assert!(err.offset.is_some());
        assert!(!err.message.is_empty());
    }
}
