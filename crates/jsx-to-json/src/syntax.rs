//! Owned syntax tree for JSX markup and embedded expressions
//!
//! Frontends lower their parser-specific AST into these types. The evaluator
//! and the node converter only ever see this tree, so every node category is a
//! closed enum with an explicit `Unrecognized` variant for constructs the
//! lowering does not model.

use serde::Serialize;

/// Byte range of a node in the parsed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: u32,
    /// End offset (exclusive)
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Move the span `offset` bytes towards the start, clamping at zero.
    pub const fn rebase(self, offset: u32) -> Self {
        Self::new(
            self.start.saturating_sub(offset),
            self.end.saturating_sub(offset),
        )
    }
}

/// A parsed program: one expression per top-level statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyntaxTree {
    /// Top-level statements in source order
    pub body: Vec<Expression>,
}

impl SyntaxTree {
    /// Make every span relative to a point `offset` bytes into the parsed
    /// source, e.g. after the parser was fed a wrapped copy of the input.
    pub fn rebase(&mut self, offset: u32) {
        for expr in &mut self.body {
            expr.rebase(offset);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

/// An expression embedded in markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// `"text"`, `42`, `true`, `null`
    Literal(Literal),
    /// `{ expr }` inside markup
    ExpressionContainer(ExpressionContainer),
    /// `[a, , b]`
    ArrayLiteral(ArrayLiteral),
    /// `` `a${b}c` ``
    TemplateLiteral(TemplateLiteral),
    /// `{ key: value }`
    ObjectLiteral(ObjectLiteral),
    /// A bare name such as `foo`
    Identifier(Identifier),
    /// `left op right`
    BinaryOp(BinaryOp),
    /// `op operand`
    UnaryOp(UnaryOp),
    /// Markup in expression position
    MarkupElement(MarkupElement),
    /// Anything the frontend does not model
    Unrecognized(Unrecognized),
}

impl Expression {
    /// Source span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Expression::Literal(e) => e.span,
            Expression::ExpressionContainer(e) => e.span,
            Expression::ArrayLiteral(e) => e.span,
            Expression::TemplateLiteral(e) => e.span,
            Expression::ObjectLiteral(e) => e.span,
            Expression::Identifier(e) => e.span,
            Expression::BinaryOp(e) => e.span,
            Expression::UnaryOp(e) => e.span,
            Expression::MarkupElement(e) => e.span,
            Expression::Unrecognized(e) => e.span,
        }
    }

    /// Start offset, used to order template segments.
    pub fn start(&self) -> u32 {
        self.span().start
    }

    /// Human-readable kind name.
    pub fn kind_name(&self) -> &str {
        match self {
            Expression::Literal(_) => "Literal",
            Expression::ExpressionContainer(_) => "ExpressionContainer",
            Expression::ArrayLiteral(_) => "ArrayLiteral",
            Expression::TemplateLiteral(_) => "TemplateLiteral",
            Expression::ObjectLiteral(_) => "ObjectLiteral",
            Expression::Identifier(_) => "Identifier",
            Expression::BinaryOp(_) => "BinaryOp",
            Expression::UnaryOp(_) => "UnaryOp",
            Expression::MarkupElement(_) => "MarkupElement",
            Expression::Unrecognized(u) => &u.kind,
        }
    }
}

/// A literal value as written in source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    /// The literal value
    pub value: LiteralValue,
    /// Source span
    pub span: Span,
}

/// The value carried by a [`Literal`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Any numeric literal
    Number(f64),
    /// String literal (escapes already decoded)
    String(String),
}

/// `{ expr }` wrapper around an embedded expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionContainer {
    /// The wrapped expression
    pub expression: Box<Expression>,
    /// Source span including the braces
    pub span: Span,
}

/// Array literal. Holes (`[a, , b]`) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayLiteral {
    /// Elements in order
    pub elements: Vec<Option<Expression>>,
    /// Source span
    pub span: Span,
}

/// A literal text segment of a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSegment {
    /// Raw text, escapes not processed
    pub raw: String,
    /// Start offset in source
    pub start: u32,
}

/// Template literal with interpolations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateLiteral {
    /// Literal segments in order
    pub quasis: Vec<TemplateSegment>,
    /// Interpolated expressions in order
    pub expressions: Vec<Expression>,
    /// Source span
    pub span: Span,
}

/// Object literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectLiteral {
    /// Members in order
    pub properties: Vec<ObjectMember>,
    /// Source span
    pub span: Span,
}

/// A member of an object literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ObjectMember {
    /// `key: value` (including shorthand and computed keys)
    Property(Property),
    /// Spread members and other forms
    Unrecognized(Unrecognized),
}

/// A `key: value` pair. Static identifier keys are `Identifier` expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Property key
    pub key: Expression,
    /// Property value
    pub value: Expression,
    /// Source span
    pub span: Span,
}

/// Identifier reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    /// The identifier text
    pub name: String,
    /// Source span
    pub span: Span,
}

/// Binary operator expression. The operator is kept as source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOp {
    /// Operator as written, e.g. `"+"` or `">>>"`
    pub operator: String,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
    /// Source span
    pub span: Span,
}

/// Prefix unary operator expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryOp {
    /// Operator as written, e.g. `"-"` or `"typeof"`
    pub operator: String,
    /// Operand
    pub argument: Box<Expression>,
    /// Source span
    pub span: Span,
}

/// Markup (element or fragment) used as an expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkupElement {
    /// The embedded markup
    pub node: Box<MarkupNode>,
    /// Source span
    pub span: Span,
}

/// A construct the frontend does not lower into a specific variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unrecognized {
    /// Parser node kind, e.g. `"CallExpression"`
    pub kind: String,
    /// Source span
    pub span: Span,
    /// Source text of the node
    pub source: String,
}

// ═══════════════════════════════════════════════════════════════════════
// Markup
// ═══════════════════════════════════════════════════════════════════════

/// A markup node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum MarkupNode {
    /// `<tag attr={..}>children</tag>`
    Element(Element),
    /// `<>children</>`
    Fragment(Fragment),
    /// Literal text between tags
    Text(Text),
    /// Expression containers, spread children, and anything else
    Unrecognized(Unrecognized),
}

impl MarkupNode {
    /// Source span of this node.
    pub fn span(&self) -> Span {
        match self {
            MarkupNode::Element(e) => e.span,
            MarkupNode::Fragment(f) => f.span,
            MarkupNode::Text(t) => t.span,
            MarkupNode::Unrecognized(u) => u.span,
        }
    }

    /// Child nodes of an element or fragment; empty for anything else.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Element(e) => &e.children,
            MarkupNode::Fragment(f) => &f.children,
            MarkupNode::Text(_) | MarkupNode::Unrecognized(_) => &[],
        }
    }
}

/// A markup element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Tag name as written (`div`, `MyComp`, `svg:rect`, `A.B`)
    pub name: String,
    /// Attributes in declaration order
    pub attributes: Vec<AttributeItem>,
    /// Children in order
    pub children: Vec<MarkupNode>,
    /// Source span
    pub span: Span,
}

/// A fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    /// Children in order
    pub children: Vec<MarkupNode>,
    /// Source span
    pub span: Span,
}

/// Text between tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    /// Text as produced by the parser
    pub value: String,
    /// Source span
    pub span: Span,
}

/// An entry in an element's attribute list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AttributeItem {
    /// `name`, `name="v"`, `name={expr}`
    Attribute(Attribute),
    /// `{...spread}` and anything else
    Unrecognized(Unrecognized),
}

/// A named attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Attribute name as written
    pub name: String,
    /// Value expression; `None` for `<input disabled />`
    pub value: Option<Expression>,
    /// Source span
    pub span: Span,
}

// ═══════════════════════════════════════════════════════════════════════
// Rebasing
// ═══════════════════════════════════════════════════════════════════════

trait Rebase {
    fn rebase(&mut self, offset: u32);
}

impl Rebase for Expression {
    fn rebase(&mut self, offset: u32) {
        match self {
            Expression::Literal(e) => e.span = e.span.rebase(offset),
            Expression::ExpressionContainer(e) => {
                e.expression.rebase(offset);
                e.span = e.span.rebase(offset);
            }
            Expression::ArrayLiteral(e) => {
                for element in e.elements.iter_mut().flatten() {
                    element.rebase(offset);
                }
                e.span = e.span.rebase(offset);
            }
            Expression::TemplateLiteral(e) => {
                for quasi in &mut e.quasis {
                    quasi.start = quasi.start.saturating_sub(offset);
                }
                for expr in &mut e.expressions {
                    expr.rebase(offset);
                }
                e.span = e.span.rebase(offset);
            }
            Expression::ObjectLiteral(e) => {
                for member in &mut e.properties {
                    match member {
                        ObjectMember::Property(prop) => {
                            prop.key.rebase(offset);
                            prop.value.rebase(offset);
                            prop.span = prop.span.rebase(offset);
                        }
                        ObjectMember::Unrecognized(u) => u.span = u.span.rebase(offset),
                    }
                }
                e.span = e.span.rebase(offset);
            }
            Expression::Identifier(e) => e.span = e.span.rebase(offset),
            Expression::BinaryOp(e) => {
                e.left.rebase(offset);
                e.right.rebase(offset);
                e.span = e.span.rebase(offset);
            }
            Expression::UnaryOp(e) => {
                e.argument.rebase(offset);
                e.span = e.span.rebase(offset);
            }
            Expression::MarkupElement(e) => {
                e.node.rebase(offset);
                e.span = e.span.rebase(offset);
            }
            Expression::Unrecognized(u) => u.span = u.span.rebase(offset),
        }
    }
}

impl Rebase for MarkupNode {
    fn rebase(&mut self, offset: u32) {
        match self {
            MarkupNode::Element(e) => {
                for item in &mut e.attributes {
                    match item {
                        AttributeItem::Attribute(attr) => {
                            if let Some(value) = &mut attr.value {
                                value.rebase(offset);
                            }
                            attr.span = attr.span.rebase(offset);
                        }
                        AttributeItem::Unrecognized(u) => u.span = u.span.rebase(offset),
                    }
                }
                for child in &mut e.children {
                    child.rebase(offset);
                }
                e.span = e.span.rebase(offset);
            }
            MarkupNode::Fragment(f) => {
                for child in &mut f.children {
                    child.rebase(offset);
                }
                f.span = f.span.rebase(offset);
            }
            MarkupNode::Text(t) => t.span = t.span.rebase(offset),
            MarkupNode::Unrecognized(u) => u.span = u.span.rebase(offset),
        }
    }
}
