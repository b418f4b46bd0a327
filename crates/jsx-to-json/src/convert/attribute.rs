//! Attribute resolution
//!
//! Each attribute goes through name normalization, value evaluation and
//! style parsing before the pairs are folded into one mapping.

use crate::context::ConvertContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::eval::evaluate;
use crate::names::resolve_attribute_name;
use crate::syntax::{AttributeItem, Element};
use crate::value::Object;
use crate::Value;

/// Build the attribute mapping of an element.
pub fn convert_attributes(element: &Element, ctx: &ConvertContext) -> Object {
    fold_attributes(
        element
            .attributes
            .iter()
            .filter_map(|item| resolve_attribute(&element.name, item, ctx)),
    )
}

/// Resolve one attribute to its output name and value.
///
/// Returns `None` for spread attributes and for values that evaluate to
/// `undefined`.
fn resolve_attribute(
    tag: &str,
    item: &AttributeItem,
    ctx: &ConvertContext,
) -> Option<(String, Value)> {
    let attr = match item {
        AttributeItem::Attribute(attr) => attr,
        AttributeItem::Unrecognized(u) => {
            ctx.report(Diagnostic::new(
                DiagnosticKind::UnsupportedAttribute,
                format!("unexpected attribute type {}", u.kind),
                u.span,
            ));
            return None;
        }
    };

    let name = resolve_attribute_name(tag, &attr.name);
    let value = evaluate(attr.value.as_ref(), ctx);
    if value.is_undefined() {
        return None;
    }

    let value = match value {
        Value::String(css) if name == "style" => style_value(&css, ctx),
        other => other,
    };
    Some((name.to_string(), value))
}

fn style_value(css: &str, ctx: &ConvertContext) -> Value {
    let styles: Option<Object> = ctx.parse_style(css).map(|map| {
        map.into_iter()
            .map(|(property, value)| (property, Value::String(value)))
            .collect()
    });
    Value::from(styles)
}

/// Fold pairs into a mapping. Later duplicates overwrite earlier ones in
/// place.
pub(crate) fn fold_attributes(pairs: impl IntoIterator<Item = (String, Value)>) -> Object {
    pairs
        .into_iter()
        .fold(Object::new(), |mut map, (name, value)| {
            map.insert(name, value);
            map
        })
}
