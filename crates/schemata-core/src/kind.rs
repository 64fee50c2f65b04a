//! # Schema Kind
//!
//! The closed set of structural categories a schema node can declare through
//! its `type` field. Every `match` on [`Kind`] is exhaustive, so encoders and
//! projections are forced to handle a new category when one is added.
//!
//! An untyped node ("any value") is modelled as `Option<Kind>::None` on the
//! node, not as a variant here.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SchemaError;

/// Structural category of a schema node.
///
/// | Kind | `type` tag | Meaning |
/// |------|-----------|---------|
/// | String | `string` | text |
/// | Array | `array` | ordered sequence, element type in `items` |
/// | Object | `object` | mapping, fixed keys in `properties`, open keys in `additional_properties` |
/// | Number | `number` | any numeric value |
/// | Integer | `integer` | whole numbers |
/// | Boolean | `boolean` | `true` / `false` |
/// | Type | `type` | a type object itself |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Array,
    Object,
    Number,
    Integer,
    Boolean,
    Type,
}

impl Kind {
    /// Returns every kind in declaration order.
    pub fn all() -> &'static [Kind] {
        &[
            Self::String,
            Self::Array,
            Self::Object,
            Self::Number,
            Self::Integer,
            Self::Boolean,
            Self::Type,
        ]
    }

    /// Returns the `type` tag used in schema documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Type => "type",
        }
    }

    /// True for the kinds that carry `minimum` / `maximum`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = SchemaError;

    /// Parse a kind from its `type` tag. Tags are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            "number" => Ok(Self::Number),
            "integer" => Ok(Self::Integer),
            "boolean" => Ok(Self::Boolean),
            "type" => Ok(Self::Type),
            other => Err(SchemaError::malformed(
                "",
                format!("unknown schema type: {other:?}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in Kind::all() {
            assert!(seen.insert(kind), "Duplicate kind: {kind}");
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for kind in Kind::all() {
            let parsed: Kind = kind
                .as_str()
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {kind}: {e}"));
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("null".parse::<Kind>().is_err());
        assert!("String".parse::<Kind>().is_err());
        assert!("".parse::<Kind>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for kind in Kind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_numeric_kinds() {
        assert!(Kind::Integer.is_numeric());
        assert!(Kind::Number.is_numeric());
        assert!(!Kind::String.is_numeric());
        assert!(!Kind::Array.is_numeric());
    }
}
