//! Integration tests: Rust types are inferred into schema nodes, carried
//! through the document form, and projected to type declarations.

use std::collections::BTreeMap;

use schemata_core::SchemaNode;
use schemata_types::{
    describe_record, infer, Describe, Kind, NativeType, Projection, PythonProjection,
    SchemaError, TypeScriptProjection,
};
use serde_json::json;

#[allow(dead_code)]
struct Address {
    street: String,
    city: String,
    postcode: Option<String>,
}

describe_record!(Address {
    street: String,
    city: String,
    postcode: Option<String>,
});

#[allow(dead_code)]
struct Customer {
    name: String,
    age: Option<u8>,
    addresses: Vec<Address>,
    scores: BTreeMap<String, f64>,
    verified: bool,
}

describe_record!(Customer {
    name: String,
    age: Option<u8>,
    addresses: Vec<Address>,
    scores: BTreeMap<String, f64>,
    verified: bool,
});

/// A type whose schema was produced elsewhere and is carried as a document.
struct Invoice;

impl Describe for Invoice {
    fn describe() -> NativeType {
        NativeType::model(
            "Invoice",
            json!({
                "type": "object",
                "properties": {
                    "total": {"type": "number", "minimum": 0},
                    "currency": {"$ref": "#/definitions/Currency"}
                },
                "required": ["total", "currency"],
                "definitions": {
                    "Currency": {"type": "string", "enum": ["EUR", "USD"]}
                }
            }),
        )
    }
}

#[test]
fn test_customer_schema_document() -> anyhow::Result<()> {
    let node = infer::<Customer>()?;
    assert_eq!(
        node.required_properties(),
        ["name", "addresses", "scores", "verified"]
    );

    let doc = node.to_document();
    assert_eq!(doc["properties"]["addresses"]["items"]["required"], json!(["street", "city"]));
    assert_eq!(
        doc["properties"]["scores"]["additionalProperties"],
        json!({"type": "number"})
    );

    let decoded = SchemaNode::from_document(&doc)?;
    assert_eq!(decoded.kind, Some(Kind::Object));
    assert_eq!(
        decoded.required_properties(),
        node.required_properties(),
        "required flags must survive the document form"
    );
    Ok(())
}

#[test]
fn test_customer_interface() -> anyhow::Result<()> {
    let node = infer::<Customer>()?;
    let declared = TypeScriptProjection::default().declare(&node, Some("Customer"))?;
    let expected = "\
interface Customer {
  name: string;
  age: number;
  addresses: Array<{
    street: string;
    city: string;
    postcode: string;
  }>;
  scores: Record<string, number>;
  verified: boolean;
}";
    assert_eq!(declared, expected);
    Ok(())
}

#[test]
fn test_customer_has_no_python_hint() {
    let node = infer::<Customer>().unwrap();
    let err = PythonProjection.project(&node).unwrap_err();
    assert!(matches!(err, SchemaError::UnsupportedType(_)));

    let scores = node.property("scores").unwrap();
    assert_eq!(PythonProjection.project(scores).unwrap(), "dict[str, float]");
}

#[test]
fn test_model_type_projects_enum() -> anyhow::Result<()> {
    let node = infer::<Vec<Invoice>>()?;
    let invoice = node.items.as_deref().unwrap();
    assert!(invoice.property("currency").unwrap().required);

    let ts = TypeScriptProjection::default().project(&node)?;
    assert_eq!(
        ts,
        "Array<{\n  total: number;\n  currency: \"EUR\" | \"USD\";\n}>"
    );

    let currency = invoice.property("currency").unwrap();
    assert_eq!(PythonProjection.project(currency)?, "Union['EUR', 'USD']");
    Ok(())
}

#[test]
fn test_optional_scalars_project_like_their_base() {
    for (native, python, typescript) in [
        (Option::<i32>::describe(), "int", "number"),
        (Option::<String>::describe(), "str", "string"),
        (Vec::<Option<bool>>::describe(), "list[bool]", "Array<boolean>"),
    ] {
        let node = schemata_types::infer_native(&native).unwrap();
        assert_eq!(PythonProjection.project(&node).unwrap(), python);
        assert_eq!(TypeScriptProjection::default().project(&node).unwrap(), typescript);
    }
}
