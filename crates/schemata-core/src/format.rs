//! # Document Text Formats
//!
//! Schema documents are exchanged as JSON, and are often authored as YAML.
//! Both parse into the same `serde_json::Value` tree so the resolver and
//! codec only ever see one representation.

use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;
use crate::node::SchemaNode;

/// Text syntax of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension: `.yaml` / `.yml` are YAML,
    /// everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse document text into a JSON value tree.
///
/// # Errors
///
/// Returns [`SchemaError::Serialization`] for invalid JSON and
/// [`SchemaError::Yaml`] for invalid YAML or YAML that has no JSON
/// equivalent.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, SchemaError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(text).map_err(|e| SchemaError::Yaml(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(yaml)
        }
    }
}

/// Parse document text and decode it into a schema node.
pub fn parse_schema(text: &str, format: DocumentFormat) -> Result<SchemaNode, SchemaError> {
    SchemaNode::from_document(&parse_document(text, format)?)
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Mapping keys may be strings, numbers or booleans; they become strings.
/// YAML tags are dropped and the tagged value is kept. Non-finite floats have
/// no JSON spelling and are rejected.
pub fn yaml_to_json_value(yaml: serde_yaml::Value) -> Result<Value, SchemaError> {
    Ok(serde_json::to_value(json_compatible(yaml)?)?)
}

fn json_compatible(yaml: serde_yaml::Value) -> Result<serde_yaml::Value, SchemaError> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Tagged(tagged) => json_compatible(tagged.value)?,
        Yaml::Number(n) if n.as_f64().is_some_and(|f| !f.is_finite()) => {
            return Err(SchemaError::Yaml(format!("{n} has no JSON representation")))
        }
        Yaml::Sequence(items) => Yaml::Sequence(
            items
                .into_iter()
                .map(json_compatible)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(entries) => {
            let mut mapping = serde_yaml::Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                mapping.insert(Yaml::String(mapping_key(key)?), json_compatible(value)?);
            }
            Yaml::Mapping(mapping)
        }
        scalar => scalar,
    })
}

fn mapping_key(key: serde_yaml::Value) -> Result<String, SchemaError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => mapping_key(tagged.value),
        other => Err(SchemaError::Yaml(format!(
            "mapping key {other:?} cannot be a JSON object key"
        ))),
    }
}
