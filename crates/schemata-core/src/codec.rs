//! # Document Codec
//!
//! Converts [`SchemaNode`] trees to and from plain schema documents, the
//! nested mapping/sequence/scalar form that validators consume and that is
//! stored or sent over the wire.
//!
//! ## Encoding
//!
//! Only the fields of the node's active category are emitted:
//!
//! | Category | Fields |
//! |----------|--------|
//! | `array` | `type`, `description`, `default`, `items`, `minItems`, `maxItems` |
//! | `object` | `type`, `description`, `default`, `properties`, `required`, `additionalProperties` |
//! | enum (other kinds) | `type`, `description`, `default`, `enum` |
//! | scalar / untyped | `type`, `description`, `default`, `minimum`, `maximum` |
//!
//! Absent fields are omitted, never written as `null`. `required` is computed
//! from the `required` flags of the property nodes, in property order.
//!
//! ## Decoding
//!
//! `$ref` pointers are inlined against the root document's `definitions`
//! before interpretation. Every node must carry a `type`. For object nodes the
//! parent's `required` list is pushed down onto the `required` flag of each
//! property node.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::SchemaError;
use crate::kind::Kind;
use crate::literal::{decode_default, encode_default};
use crate::node::{Properties, SchemaNode};
use crate::resolve::resolve_document;

/// Field names of the document form.
pub mod field {
    pub const TYPE: &str = "type";
    pub const DESCRIPTION: &str = "description";
    pub const DEFAULT: &str = "default";
    pub const ENUM: &str = "enum";
    pub const ITEMS: &str = "items";
    pub const PROPERTIES: &str = "properties";
    pub const REQUIRED: &str = "required";
    pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
    pub const MINIMUM: &str = "minimum";
    pub const MAXIMUM: &str = "maximum";
    pub const MIN_ITEMS: &str = "minItems";
    pub const MAX_ITEMS: &str = "maxItems";
}

impl SchemaNode {
    /// Encode this node as a schema document.
    pub fn to_document(&self) -> Value {
        Value::Object(encode_node(self))
    }

    /// Decode a schema document, inlining its `$ref` pointers first.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::Reference`] if a `$ref` cannot be resolved.
    /// - [`SchemaError::MalformedDocument`] if a node lacks `type`, names an
    ///   unknown type, carries an unparsable `default` literal, or has a field
    ///   of the wrong shape.
    pub fn from_document(document: &Value) -> Result<Self, SchemaError> {
        let resolved = resolve_document(document)?;
        let node = decode_node(&resolved, "")?;
        tracing::debug!(
            kind = node.kind.map(|k| k.as_str()).unwrap_or("any"),
            properties = node.properties.as_ref().map_or(0, |p| p.len()),
            "decoded schema document"
        );
        Ok(node)
    }
}

/// Free-function form of [`SchemaNode::to_document`].
pub fn encode(node: &SchemaNode) -> Value {
    node.to_document()
}

/// Free-function form of [`SchemaNode::from_document`].
pub fn decode(document: &Value) -> Result<SchemaNode, SchemaError> {
    SchemaNode::from_document(document)
}

fn encode_node(node: &SchemaNode) -> Map<String, Value> {
    let mut doc = Map::new();
    if let Some(kind) = node.kind {
        doc.insert(field::TYPE.into(), Value::String(kind.as_str().into()));
    }
    if let Some(description) = &node.description {
        doc.insert(field::DESCRIPTION.into(), Value::String(description.clone()));
    }
    if let Some(default) = node.default_value.as_ref().filter(|v| !v.is_null()) {
        doc.insert(field::DEFAULT.into(), Value::String(encode_default(default)));
    }

    match node.kind {
        Some(Kind::Array) => {
            if let Some(items) = &node.items {
                doc.insert(field::ITEMS.into(), items.to_document());
            }
            insert_count(&mut doc, field::MIN_ITEMS, node.min_items);
            insert_count(&mut doc, field::MAX_ITEMS, node.max_items);
        }
        Some(Kind::Object) => {
            if let Some(properties) = &node.properties {
                let encoded: Map<String, Value> = properties
                    .iter()
                    .map(|(name, prop)| (name.clone(), prop.to_document()))
                    .collect();
                doc.insert(field::PROPERTIES.into(), Value::Object(encoded));
                let required: Vec<Value> = node
                    .required_properties()
                    .into_iter()
                    .map(|name| Value::String(name.to_string()))
                    .collect();
                // Draft 4 rejects an empty `required` list.
                if !required.is_empty() {
                    doc.insert(field::REQUIRED.into(), Value::Array(required));
                }
            }
            if let Some(additional) = &node.additional_properties {
                doc.insert(field::ADDITIONAL_PROPERTIES.into(), additional.to_document());
            }
        }
        _ => {
            if let Some(values) = &node.enum_values {
                doc.insert(field::ENUM.into(), Value::Array(values.clone()));
            } else {
                insert_number(&mut doc, field::MINIMUM, &node.minimum);
                insert_number(&mut doc, field::MAXIMUM, &node.maximum);
            }
        }
    }
    doc
}

fn insert_count(doc: &mut Map<String, Value>, key: &str, value: Option<u64>) {
    if let Some(n) = value {
        doc.insert(key.into(), Value::Number(n.into()));
    }
}

fn insert_number(doc: &mut Map<String, Value>, key: &str, value: &Option<Number>) {
    if let Some(n) = value {
        doc.insert(key.into(), Value::Number(n.clone()));
    }
}

fn decode_node(document: &Value, path: &str) -> Result<SchemaNode, SchemaError> {
    let map = document.as_object().ok_or_else(|| {
        SchemaError::malformed(path, format!("expected a schema mapping, found {}", shape(document)))
    })?;

    let kind = decode_kind(map, path)?;
    let mut node = SchemaNode {
        kind: Some(kind),
        description: optional_string(map, field::DESCRIPTION, path)?,
        default_value: match present(map, field::DEFAULT) {
            Some(raw) => decode_default(raw, &child_path(path, field::DEFAULT))?,
            None => None,
        },
        enum_values: match present(map, field::ENUM) {
            Some(Value::Array(values)) => Some(values.clone()),
            Some(other) => return Err(wrong_shape(path, field::ENUM, "an array", other)),
            None => None,
        },
        minimum: optional_number(map, field::MINIMUM, path)?,
        maximum: optional_number(map, field::MAXIMUM, path)?,
        min_items: optional_count(map, field::MIN_ITEMS, path)?,
        max_items: optional_count(map, field::MAX_ITEMS, path)?,
        ..SchemaNode::default()
    };

    match kind {
        Kind::Array => {
            if let Some(items) = present(map, field::ITEMS) {
                let items = decode_node(items, &child_path(path, field::ITEMS))?;
                node.items = Some(Box::new(items));
            }
        }
        Kind::Object => {
            node.properties = decode_properties(map, path)?;
            if let Some(additional) = present(map, field::ADDITIONAL_PROPERTIES) {
                // Boolean additionalProperties carries no sub-schema.
                if !additional.is_boolean() {
                    let additional =
                        decode_node(additional, &child_path(path, field::ADDITIONAL_PROPERTIES))?;
                    node.additional_properties = Some(Box::new(additional));
                }
            }
        }
        _ => {}
    }
    Ok(node)
}

fn decode_kind(map: &Map<String, Value>, path: &str) -> Result<Kind, SchemaError> {
    match present(map, field::TYPE) {
        Some(Value::String(tag)) => tag.parse::<Kind>().map_err(|_| {
            SchemaError::malformed(child_path(path, field::TYPE), format!("unknown schema type {tag:?}"))
        }),
        Some(other) => Err(wrong_shape(path, field::TYPE, "a string", other)),
        None => Err(SchemaError::malformed(path, "missing mandatory field 'type'")),
    }
}

fn decode_properties(
    map: &Map<String, Value>,
    path: &str,
) -> Result<Option<Properties>, SchemaError> {
    let raw = match present(map, field::PROPERTIES) {
        Some(Value::Object(raw)) => raw,
        Some(other) => return Err(wrong_shape(path, field::PROPERTIES, "a mapping", other)),
        None => return Ok(None),
    };

    let required = match present(map, field::REQUIRED) {
        Some(Value::Array(names)) => names
            .iter()
            .map(|name| {
                name.as_str().ok_or_else(|| {
                    wrong_shape(path, field::REQUIRED, "an array of strings", name)
                })
            })
            .collect::<Result<Vec<&str>, _>>()?,
        Some(other) => return Err(wrong_shape(path, field::REQUIRED, "an array", other)),
        None => Vec::new(),
    };

    let properties_path = child_path(path, field::PROPERTIES);
    let mut properties = Properties::with_capacity(raw.len());
    for (name, value) in raw {
        let mut prop = decode_node(value, &child_path(&properties_path, name))?;
        prop.required = required.contains(&name.as_str());
        properties.insert(name.clone(), prop);
    }
    Ok(Some(properties))
}

/// A field counts as absent when missing or `null`.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn optional_string(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<String>, SchemaError> {
    match present(map, key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_shape(path, key, "a string", other)),
        None => Ok(None),
    }
}

fn optional_number(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<Number>, SchemaError> {
    match present(map, key) {
        Some(Value::Number(n)) => Ok(Some(n.clone())),
        Some(other) => Err(wrong_shape(path, key, "a number", other)),
        None => Ok(None),
    }
}

fn optional_count(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<u64>, SchemaError> {
    match present(map, key) {
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| wrong_shape(path, key, "a non-negative integer", value)),
        None => Ok(None),
    }
}

fn wrong_shape(path: &str, key: &str, expected: &str, found: &Value) -> SchemaError {
    SchemaError::malformed(
        child_path(path, key),
        format!("expected {expected}, found {}", shape(found)),
    )
}

/// Append a JSON-pointer segment, escaping `~` and `/`.
fn child_path(path: &str, segment: &str) -> String {
    format!("{path}/{}", segment.replace('~', "~0").replace('/', "~1"))
}

fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Value::deserialize(deserializer)?;
        SchemaNode::from_document(&document).map_err(serde::de::Error::custom)
    }
}
