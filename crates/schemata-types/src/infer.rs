//! # Schema Inference
//!
//! Builds a [`SchemaNode`] from a [`NativeType`] descriptor.
//!
//! | Native type | Schema node |
//! |-------------|-------------|
//! | primitive | scalar kind from [`PRIMITIVE_KINDS`] |
//! | `T` or absence (`Option<T>`) | node for `T`, `required = false` |
//! | list of `T` | `array`, `items` inferred from `T` |
//! | string-keyed map to `V` | `object`, `additional_properties` inferred from `V` |
//! | record | `object`, one property per field |
//! | model | its embedded schema document, decoded |
//!
//! Everything else fails with [`SchemaError::UnsupportedType`]. Inference is
//! deliberately not exhaustive: a union of several concrete types has no
//! node without combinators, and is rejected rather than approximated.

use schemata_core::{Kind, SchemaError, SchemaNode};

use crate::descriptor::{Describe, NativeType, Primitive};

/// Fixed mapping from primitive native types to schema kinds.
pub const PRIMITIVE_KINDS: [(Primitive, Kind); 4] = [
    (Primitive::Integer, Kind::Integer),
    (Primitive::String, Kind::String),
    (Primitive::Boolean, Kind::Boolean),
    (Primitive::Float, Kind::Number),
];

/// Schema kind of a primitive native type.
pub fn primitive_kind(primitive: Primitive) -> Option<Kind> {
    PRIMITIVE_KINDS
        .iter()
        .find(|(p, _)| *p == primitive)
        .map(|(_, kind)| *kind)
}

/// Infer the schema node of a Rust type.
///
/// ```
/// use schemata_core::Kind;
/// use schemata_types::infer;
///
/// let node = infer::<Option<i32>>().unwrap();
/// assert_eq!(node.kind, Some(Kind::Integer));
/// assert!(!node.required);
/// ```
pub fn infer<T: Describe + ?Sized>() -> Result<SchemaNode, SchemaError> {
    infer_native(&T::describe())
}

/// Infer the schema node of a native type descriptor.
///
/// The result is `required = true` unless the descriptor is an optional
/// wrapper.
///
/// # Errors
///
/// Returns [`SchemaError::UnsupportedType`] for unions of several concrete
/// types, a bare absence marker and opaque types, and the decode errors of
/// [`SchemaNode::from_document`] for a model whose schema is malformed.
pub fn infer_native(native: &NativeType) -> Result<SchemaNode, SchemaError> {
    let mut node = match native {
        NativeType::Primitive(primitive) => {
            let kind = primitive_kind(*primitive).ok_or_else(|| {
                SchemaError::unsupported(format!("no schema kind for primitive {}", primitive.as_str()))
            })?;
            SchemaNode::of_kind(kind)
        }
        NativeType::Union(alternatives) => return infer_union(native, alternatives),
        NativeType::None => {
            return Err(SchemaError::unsupported(
                "the absence marker has no schema outside an optional wrapper",
            ))
        }
        NativeType::List(element) => SchemaNode::array(infer_optional_child(element)?),
        NativeType::Map { value } => SchemaNode::map(infer_optional_child(value)?),
        NativeType::Record { name, fields } => {
            tracing::debug!(record = %name, fields = fields.len(), "inferring record schema");
            let properties = fields
                .iter()
                .map(|(field, ty)| infer_native(ty).map(|node| (field.clone(), node)))
                .collect::<Result<Vec<_>, SchemaError>>()?;
            SchemaNode::object(properties)
        }
        NativeType::Model { name, schema } => {
            tracing::debug!(model = %name, "decoding embedded model schema");
            SchemaNode::from_document(schema)?
        }
        NativeType::Opaque(name) => {
            return Err(SchemaError::unsupported(format!(
                "schema inference is not implemented for {name}"
            )))
        }
    };
    node.required = true;
    Ok(node)
}

fn infer_optional_child(child: &Option<Box<NativeType>>) -> Result<Option<SchemaNode>, SchemaError> {
    child.as_deref().map(infer_native).transpose()
}

fn infer_union(native: &NativeType, alternatives: &[NativeType]) -> Result<SchemaNode, SchemaError> {
    let mut flat = Vec::with_capacity(alternatives.len());
    flatten_union(alternatives, &mut flat);

    let optional = flat.iter().any(|alt| alt.is_none());
    let concrete: Vec<&NativeType> = flat.into_iter().filter(|alt| !alt.is_none()).collect();

    match concrete.as_slice() {
        [] => Err(SchemaError::unsupported(format!(
            "union without a concrete type: {native}"
        ))),
        [single] => {
            let mut node = infer_native(single)?;
            node.required = !optional;
            Ok(node)
        }
        many if optional => Err(SchemaError::unsupported(format!(
            "optional union of {} types is not supported: {native}",
            many.len()
        ))),
        many => Err(SchemaError::unsupported(format!(
            "union of {} types is not supported: {native}",
            many.len()
        ))),
    }
}

fn flatten_union<'a>(alternatives: &'a [NativeType], out: &mut Vec<&'a NativeType>) {
    for alt in alternatives {
        match alt {
            NativeType::Union(inner) => flatten_union(inner, out),
            other => out.push(other),
        }
    }
}
