//! Python type-hint projection.
//!
//! Only open objects are expressible: an object with declared properties
//! would need a `TypedDict` declaration, which this projection does not emit.

use schemata_core::{Kind, SchemaError, SchemaNode};
use serde_json::Value;

use super::Projection;

/// Projects schema nodes to Python type hints (`int`, `list[str]`,
/// `dict[str, float]`, `Union['a', 'b']`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonProjection;

impl Projection for PythonProjection {
    fn target(&self) -> &'static str {
        "python"
    }

    fn project(&self, node: &SchemaNode) -> Result<String, SchemaError> {
        match node.kind {
            Some(Kind::Array) => match &node.items {
                Some(items) => Ok(format!("list[{}]", self.project(items)?)),
                None => Ok("list".to_string()),
            },
            Some(Kind::Object) => {
                if node.has_properties() {
                    return Err(SchemaError::unsupported(
                        "object schemas with declared properties have no Python type hint",
                    ));
                }
                match &node.additional_properties {
                    Some(values) => Ok(format!("dict[str, {}]", self.project(values)?)),
                    None => Ok("dict".to_string()),
                }
            }
            _ if node.is_enum() => {
                let values = node.enum_values.as_deref().unwrap_or_default();
                if values.is_empty() {
                    return Err(SchemaError::unsupported("empty enum has no Python type hint"));
                }
                let literals: Vec<String> = values.iter().map(python_literal).collect();
                Ok(format!("Union[{}]", literals.join(", ")))
            }
            Some(Kind::Integer) => Ok("int".to_string()),
            Some(Kind::Number) => Ok("float".to_string()),
            Some(Kind::String) => Ok("str".to_string()),
            Some(Kind::Boolean) => Ok("bool".to_string()),
            Some(Kind::Type) => Ok("type".to_string()),
            None => Ok("Any".to_string()),
        }
    }
}

/// Spell a JSON value as a Python literal.
pub fn python_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => python_string(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(python_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", python_string(k), python_literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Single quotes unless the text contains one and no double quote.
fn python_string(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
