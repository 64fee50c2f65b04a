//! # Native Type Descriptors
//!
//! [`NativeType`] describes a Rust type in the terms schema inference needs:
//! primitives, an absence marker, unions, sequences, string-keyed maps,
//! records with named fields, and model types that already carry a schema
//! document.
//!
//! The [`Describe`] trait produces a descriptor from a type at compile time.
//! It is implemented for the standard primitives and containers; records
//! implement it by hand or through [`describe_record!`](crate::describe_record).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

/// Primitive native types with a direct schema kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Integer,
    Float,
    String,
    Boolean,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

/// Descriptor of a native type.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeType {
    Primitive(Primitive),
    /// The explicit absence marker (`()` / `None`).
    None,
    /// A union of alternatives. `Option<T>` is `Union([T, None])`.
    Union(Vec<NativeType>),
    /// A homogeneous sequence. `None` element type is an untyped list.
    List(Option<Box<NativeType>>),
    /// A string-keyed mapping. `None` value type is an untyped map.
    Map { value: Option<Box<NativeType>> },
    /// A structured record with named, typed fields in declaration order.
    Record {
        name: String,
        fields: Vec<(String, NativeType)>,
    },
    /// A type that carries its own schema document.
    Model { name: String, schema: Value },
    /// Any type inference does not model.
    Opaque(String),
}

impl NativeType {
    pub fn optional(inner: NativeType) -> Self {
        Self::Union(vec![inner, Self::None])
    }

    pub fn list(element: NativeType) -> Self {
        Self::List(Some(Box::new(element)))
    }

    pub fn map(value: NativeType) -> Self {
        Self::Map {
            value: Some(Box::new(value)),
        }
    }

    pub fn record<I, K>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, NativeType)>,
        K: Into<String>,
    {
        Self::Record {
            name: name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn model(name: impl Into<String>, schema: Value) -> Self {
        Self::Model {
            name: name.into(),
            schema,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::None => f.write_str("none"),
            Self::Union(alternatives) => {
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{alt}")?;
                }
                Ok(())
            }
            Self::List(Some(element)) => write!(f, "list<{element}>"),
            Self::List(None) => f.write_str("list"),
            Self::Map { value: Some(value) } => write!(f, "map<string, {value}>"),
            Self::Map { value: None } => f.write_str("map"),
            Self::Record { name, .. } | Self::Model { name, .. } | Self::Opaque(name) => {
                f.write_str(name)
            }
        }
    }
}

/// Types that can describe themselves for schema inference.
pub trait Describe {
    fn describe() -> NativeType;
}

macro_rules! describe_primitive {
    ($primitive:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> NativeType {
                    NativeType::Primitive(Primitive::$primitive)
                }
            }
        )+
    };
}

describe_primitive!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
describe_primitive!(Float => f32, f64);
describe_primitive!(String => String, str, char);
describe_primitive!(Boolean => bool);

impl Describe for () {
    fn describe() -> NativeType {
        NativeType::None
    }
}

impl Describe for Value {
    fn describe() -> NativeType {
        NativeType::Opaque("serde_json::Value".to_string())
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> NativeType {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe() -> NativeType {
        T::describe()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> NativeType {
        NativeType::optional(T::describe())
    }
}

macro_rules! describe_sequence {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: Describe> Describe for $ty<T> {
                fn describe() -> NativeType {
                    NativeType::list(T::describe())
                }
            }
        )+
    };
}

describe_sequence!(Vec, VecDeque, BTreeSet);

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe() -> NativeType {
        NativeType::list(T::describe())
    }
}

impl<T: Describe> Describe for [T] {
    fn describe() -> NativeType {
        NativeType::list(T::describe())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> NativeType {
        NativeType::list(T::describe())
    }
}

impl<K: AsRef<str>, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> NativeType {
        NativeType::map(V::describe())
    }
}

impl<K: AsRef<str>, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> NativeType {
        NativeType::map(V::describe())
    }
}

impl<K: AsRef<str>, V: Describe, S> Describe for IndexMap<K, V, S> {
    fn describe() -> NativeType {
        NativeType::map(V::describe())
    }
}

/// Implement [`Describe`] for a record type from its field list.
///
/// ```
/// use schemata_types::{describe_record, Describe, NativeType};
///
/// #[allow(dead_code)]
/// struct Person {
///     name: String,
///     age: Option<u32>,
/// }
///
/// describe_record!(Person { name: String, age: Option<u32> });
///
/// assert!(matches!(Person::describe(), NativeType::Record { .. }));
/// ```
#[macro_export]
macro_rules! describe_record {
    ($name:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        impl $crate::Describe for $name {
            fn describe() -> $crate::NativeType {
                $crate::NativeType::Record {
                    name: stringify!($name).to_string(),
                    fields: vec![
                        $((stringify!($field).to_string(), <$ty as $crate::Describe>::describe())),*
                    ],
                }
            }
        }
    };
}
