//! Integration tests: schema documents as produced by external schema
//! generators decode into node trees, and node trees survive a trip through
//! the document form and through JSON text.

use schemata_core::{decode, encode, Kind, SchemaError, SchemaNode};
use serde_json::json;

/// A generator-style document: refs into definitions, native defaults,
/// descriptions on every level.
fn order_document() -> serde_json::Value {
    json!({
        "title": "Order",
        "description": "A customer order",
        "type": "object",
        "properties": {
            "id": {"type": "integer", "minimum": 1, "description": "Order number"},
            "customer": {"$ref": "#/definitions/Customer"},
            "lines": {
                "type": "array",
                "items": {"$ref": "#/definitions/Line"},
                "minItems": 1
            },
            "status": {
                "type": "string",
                "enum": ["open", "paid", "shipped"],
                "default": "\"open\""
            },
            "metadata": {
                "type": "object",
                "additionalProperties": {"type": "string"}
            }
        },
        "required": ["id", "customer", "lines"],
        "definitions": {
            "Customer": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "email": {"type": "string"}
                },
                "required": ["name"]
            },
            "Line": {
                "type": "object",
                "properties": {
                    "sku": {"type": "string"},
                    "quantity": {"type": "integer", "minimum": 1, "default": 1}
                },
                "required": ["sku"]
            }
        }
    })
}

#[test]
fn test_decode_generator_document() {
    let order = decode(&order_document()).expect("order document should decode");

    assert_eq!(order.kind, Some(Kind::Object));
    assert_eq!(order.description.as_deref(), Some("A customer order"));
    assert_eq!(order.required_properties(), ["id", "customer", "lines"]);

    let customer = order.property("customer").unwrap();
    assert_eq!(customer.required_properties(), ["name"]);

    let line = order.property("lines").unwrap().items.as_deref().unwrap();
    let quantity = line.property("quantity").unwrap();
    assert_eq!(quantity.default_value, Some(json!(1)));
    assert!(!quantity.required);

    let status = order.property("status").unwrap();
    assert_eq!(status.default_value, Some(json!("open")));
    assert_eq!(status.enum_values.as_ref().unwrap().len(), 3);

    let metadata = order.property("metadata").unwrap();
    assert!(!metadata.has_properties());
    assert_eq!(
        metadata.additional_properties.as_ref().unwrap().kind,
        Some(Kind::String)
    );
}

#[test]
fn test_reencoded_document_is_self_contained() {
    let order = decode(&order_document()).unwrap();
    let doc = encode(&order);

    let text = doc.to_string();
    assert!(!text.contains("$ref"), "encoded document still has refs: {text}");
    assert!(!text.contains("definitions"));
    assert!(!text.contains("null"));

    // Generator-only keys are not part of the model.
    assert!(doc.get("title").is_none());
    assert_eq!(doc["required"], json!(["id", "customer", "lines"]));
    assert_eq!(doc["properties"]["lines"]["items"]["properties"]["quantity"]["default"], json!("1"));
}

#[test]
fn test_decode_encode_decode_is_stable() {
    let first = decode(&order_document()).unwrap();
    let second = decode(&encode(&first)).unwrap();
    assert_eq!(first, second);
    assert_eq!(encode(&first), encode(&second));
}

#[test]
fn test_json_text_roundtrip() {
    let order = decode(&order_document()).unwrap();
    let text = serde_json::to_string_pretty(&order).unwrap();
    let back: SchemaNode = serde_json::from_str(&text).unwrap();
    assert_eq!(back, order);
}

#[test]
fn test_cyclic_definitions_rejected() {
    let doc = json!({
        "type": "object",
        "properties": {"root": {"$ref": "#/definitions/Tree"}},
        "definitions": {
            "Tree": {
                "type": "object",
                "properties": {
                    "children": {"type": "array", "items": {"$ref": "#/definitions/Tree"}}
                }
            }
        }
    });
    let err = decode(&doc).unwrap_err();
    assert!(
        matches!(err, SchemaError::Reference(_)),
        "Expected a reference error, got: {err}"
    );
}
