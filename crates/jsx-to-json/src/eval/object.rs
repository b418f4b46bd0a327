//! Object literal evaluation

use crate::context::ConvertContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::syntax::{ObjectLiteral, ObjectMember};
use crate::value::Object;
use crate::Value;

use super::Evaluate;

impl Evaluate for ObjectLiteral {
    fn eval(&self, ctx: &ConvertContext) -> Value {
        let mut map = Object::with_capacity(self.properties.len());

        for member in &self.properties {
            let prop = match member {
                ObjectMember::Property(prop) => prop,
                ObjectMember::Unrecognized(u) => {
                    ctx.report(Diagnostic::new(
                        DiagnosticKind::UnsupportedObjectMember,
                        format!("unexpected object member {}", u.kind),
                        u.span,
                    ));
                    continue;
                }
            };

            let key = prop.key.eval(ctx);
            let value = prop.value.eval(ctx);
            if key.is_undefined() || value.is_undefined() {
                continue;
            }
            // an existing key keeps its position, like a JS object
            map.insert(key.to_string(), value);
        }

        Value::Object(map)
    }
}
