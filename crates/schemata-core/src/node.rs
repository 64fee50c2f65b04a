//! # Schema Node
//!
//! [`SchemaNode`] is the recursive value describing one fragment of a JSON
//! Schema and its constraints. Nodes form an owned tree: each node exclusively
//! owns its `items`, `properties` and `additional_properties` children, so a
//! node is never shared and a resolved tree never contains a cycle.
//!
//! ## Field applicability
//!
//! | Field | Meaningful when |
//! |-------|-----------------|
//! | `items`, `min_items`, `max_items` | `kind = array` |
//! | `properties`, `additional_properties` | `kind = object` |
//! | `enum_values` | any kind other than array / object |
//! | `minimum`, `maximum` | numeric kinds without `enum_values` |
//! | `required` | the node is a property value inside a parent object |
//!
//! The constructors below only populate fields that apply to the kind they
//! build. Struct-literal construction is allowed for callers that need every
//! field, and the document encoder ignores fields outside the node's active
//! category.

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::kind::Kind;

/// Ordered property table of an object node. Key order is significant: it is
/// the order of `properties` and `required` in encoded documents and of
/// members in projected type declarations.
pub type Properties = IndexMap<String, SchemaNode>;

/// One fragment of a JSON Schema.
///
/// Equality is structural and recursive. `properties` compare as maps, so two
/// nodes listing the same properties in different orders are equal even
/// though they encode differently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    /// Human-readable text, carried through but never interpreted.
    pub description: Option<String>,
    /// Structural category. `None` means any value.
    pub kind: Option<Kind>,
    /// Closed set of allowed literal values.
    pub enum_values: Option<Vec<Value>>,
    /// Whether the owning key must be present in the parent object.
    pub required: bool,
    /// Literal default value.
    pub default_value: Option<Value>,
    /// Element schema of an array. `None` is an untyped array.
    pub items: Option<Box<SchemaNode>>,
    /// Fixed keys of an object.
    pub properties: Option<Properties>,
    /// Value schema for keys not listed in `properties`.
    pub additional_properties: Option<Box<SchemaNode>>,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

impl SchemaNode {
    /// A node that accepts any value.
    pub fn any() -> Self {
        Self::default()
    }

    /// A node of the given kind with no further constraints.
    pub fn of_kind(kind: Kind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::of_kind(Kind::String)
    }

    pub fn integer() -> Self {
        Self::of_kind(Kind::Integer)
    }

    pub fn number() -> Self {
        Self::of_kind(Kind::Number)
    }

    pub fn boolean() -> Self {
        Self::of_kind(Kind::Boolean)
    }

    /// An array node. `None` builds an untyped array.
    pub fn array(items: Option<SchemaNode>) -> Self {
        Self {
            kind: Some(Kind::Array),
            items: items.map(Box::new),
            ..Self::default()
        }
    }

    /// An object node with fixed keys.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        Self {
            kind: Some(Kind::Object),
            properties: Some(properties.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            ..Self::default()
        }
    }

    /// An index-signature object: any string key, values described by
    /// `values` (`None` for untyped values).
    pub fn map(values: Option<SchemaNode>) -> Self {
        Self {
            kind: Some(Kind::Object),
            additional_properties: values.map(Box::new),
            ..Self::default()
        }
    }

    /// A closed value set over an optional base kind.
    pub fn enumeration(kind: Option<Kind>, values: Vec<Value>) -> Self {
        Self {
            kind,
            enum_values: Some(values),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Numeric bounds, for `integer` / `number` nodes.
    pub fn with_bounds(mut self, minimum: Option<Number>, maximum: Option<Number>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Length bounds, for `array` nodes.
    pub fn with_item_bounds(mut self, min_items: Option<u64>, max_items: Option<u64>) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    /// True if the node declares at least one fixed property.
    pub fn has_properties(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// True if the node carries a closed value set.
    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }

    /// Names of the properties flagged as required, in declaration order.
    pub fn required_properties(&self) -> Vec<&str> {
        self.properties
            .iter()
            .flatten()
            .filter(|(_, prop)| prop.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Look up a fixed property by name.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_untyped() {
        let node = SchemaNode::any();
        assert_eq!(node.kind, None);
        assert!(!node.required);
        assert!(!node.has_properties());
    }

    #[test]
    fn test_object_preserves_property_order() {
        let node = SchemaNode::object([
            ("zeta", SchemaNode::string()),
            ("alpha", SchemaNode::integer().with_required(true)),
            ("mid", SchemaNode::boolean().with_required(true)),
        ]);
        let names: Vec<&str> = node
            .properties
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(node.required_properties(), ["alpha", "mid"]);
    }

    #[test]
    fn test_empty_properties_is_not_declared() {
        let node = SchemaNode::object(Vec::<(String, SchemaNode)>::new());
        assert!(node.properties.is_some());
        assert!(!node.has_properties());
    }

    #[test]
    fn test_structural_equality() {
        let a = SchemaNode::array(Some(SchemaNode::string().with_description("tag")));
        let b = SchemaNode::array(Some(SchemaNode::string().with_description("tag")));
        let c = SchemaNode::array(Some(SchemaNode::string()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_builder_fields() {
        let node = SchemaNode::integer()
            .with_bounds(Some(0.into()), Some(10.into()))
            .with_default(json!(3))
            .with_description("count");
        assert_eq!(node.minimum, Some(Number::from(0)));
        assert_eq!(node.maximum, Some(Number::from(10)));
        assert_eq!(node.default_value, Some(json!(3)));
        assert_eq!(node.description.as_deref(), Some("count"));
    }
}
