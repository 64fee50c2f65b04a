//! # Default Literals
//!
//! Schema documents carry `default` as the source-literal text of the default
//! value rather than the value itself. The literal syntax is JSON text:
//! `5`, `"abc"`, `[1, 2]`, `{"k": true}`.

use serde_json::Value;

use crate::error::SchemaError;

/// Render a default value as its literal text.
pub fn encode_default(value: &Value) -> String {
    value.to_string()
}

/// Read a `default` field back into a native value.
///
/// - A string is parsed as literal text. An empty string, or a literal that
///   parses to `null`, means no default.
/// - Any other JSON value is taken as the native value itself. Schema
///   generators outside schemata emit defaults in that form.
///
/// # Errors
///
/// Returns [`SchemaError::MalformedDocument`] if a string literal is not
/// valid literal text.
pub fn decode_default(raw: &Value, path: &str) -> Result<Option<Value>, SchemaError> {
    let value = match raw {
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::String(text) => serde_json::from_str::<Value>(text).map_err(|e| {
            SchemaError::malformed(path, format!("invalid default literal {text:?}: {e}"))
        })?,
        other => other.clone(),
    };
    Ok((!value.is_null()).then_some(value))
}
