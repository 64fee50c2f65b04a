//! TypeScript structural-type projection.
//!
//! Objects with declared properties render as inline record types, one member
//! per property in declaration order, each preceded by a `//` comment when
//! the property has a description. Required-ness is not expressed. Objects
//! without declared properties render as `Record<string, V>`.
//!
//! [`TypeScriptProjection::declare`] wraps the same body in a named
//! `interface` declaration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use schemata_core::{Kind, SchemaError, SchemaNode};

use super::Projection;

/// Rendering options for [`TypeScriptProjection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeScriptOptions {
    /// Spaces per nesting level inside record bodies.
    pub indent: usize,
    /// Value type of open objects that do not describe their values.
    pub index_value: String,
}

impl Default for TypeScriptOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            index_value: "any".to_string(),
        }
    }
}

impl TypeScriptOptions {
    /// Load options from YAML (or JSON, which is a subset). Missing keys keep
    /// their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(text).map_err(|e| SchemaError::Yaml(format!("invalid TypeScript options: {e}")))
    }
}

/// Projects schema nodes to TypeScript types.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptProjection {
    options: TypeScriptOptions,
}

impl TypeScriptProjection {
    pub fn new(options: TypeScriptOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TypeScriptOptions {
        &self.options
    }

    /// Render an object node as a structural type, named when `name` is given:
    ///
    /// ```text
    /// interface Person {
    ///   // Full name
    ///   name: string;
    ///   age: number;
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnsupportedType`] if the node is not an object,
    /// or if a property type cannot be projected.
    pub fn declare(&self, node: &SchemaNode, name: Option<&str>) -> Result<String, SchemaError> {
        if node.kind != Some(Kind::Object) {
            return Err(SchemaError::unsupported(format!(
                "only object schemas can be declared as interfaces, found {}",
                node.kind.map_or("untyped", |k| k.as_str())
            )));
        }

        let mut members: Vec<String> = Vec::new();
        match node.properties.as_ref().filter(|p| !p.is_empty()) {
            Some(properties) => {
                for (prop_name, prop) in properties {
                    if let Some(description) = &prop.description {
                        members.extend(description.lines().map(|line| format!("// {line}")));
                    }
                    members.push(format!("{}: {};", member_name(prop_name), self.project(prop)?));
                }
            }
            None => members.push(format!("[key: string]: {};", self.index_value(node)?)),
        }

        let body = indent(&members.join("\n"), self.options.indent);
        let head = match name.filter(|n| !n.is_empty()) {
            Some(name) => format!("interface {name} "),
            None => String::new(),
        };
        Ok(format!("{head}{{\n{body}\n}}"))
    }

    fn index_value(&self, node: &SchemaNode) -> Result<String, SchemaError> {
        match &node.additional_properties {
            Some(values) => self.project(values),
            None => Ok(self.options.index_value.clone()),
        }
    }
}

impl Projection for TypeScriptProjection {
    fn target(&self) -> &'static str {
        "typescript"
    }

    fn project(&self, node: &SchemaNode) -> Result<String, SchemaError> {
        match node.kind {
            Some(Kind::Array) => match &node.items {
                Some(items) => Ok(format!("Array<{}>", self.project(items)?)),
                None => Ok("Array".to_string()),
            },
            Some(Kind::Object) if node.has_properties() => self.declare(node, None),
            Some(Kind::Object) => Ok(format!("Record<string, {}>", self.index_value(node)?)),
            _ if node.is_enum() => {
                let values = node.enum_values.as_deref().unwrap_or_default();
                if values.is_empty() {
                    return Ok("never".to_string());
                }
                let literals: Vec<String> = values.iter().map(Value::to_string).collect();
                Ok(literals.join(" | "))
            }
            Some(Kind::Boolean) => Ok("boolean".to_string()),
            Some(Kind::Integer | Kind::Number) => Ok("number".to_string()),
            Some(Kind::String) => Ok("string".to_string()),
            Some(Kind::Type) => Ok("type".to_string()),
            None => Ok("any".to_string()),
        }
    }
}

/// Property names that are not identifiers are quoted.
fn member_name(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        name.to_string()
    } else {
        Value::String(name.to_string()).to_string()
    }
}

/// Prefix every non-empty line with `width` spaces.
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
