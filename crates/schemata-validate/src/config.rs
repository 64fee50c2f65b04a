//! # Validator Configuration
//!
//! Selects the JSON Schema draft the validator enforces. Encoded schema nodes
//! use only keywords shared by draft 6 onward; draft 7 is the default.

use serde::{Deserialize, Serialize};

use schemata_core::SchemaError;

/// JSON Schema drafts supported by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Draft {
    Draft4,
    Draft6,
    #[default]
    Draft7,
    Draft201909,
    Draft202012,
}

impl Draft {
    pub fn all() -> &'static [Draft] {
        &[
            Self::Draft4,
            Self::Draft6,
            Self::Draft7,
            Self::Draft201909,
            Self::Draft202012,
        ]
    }

    pub(crate) fn to_jsonschema(self) -> jsonschema::Draft {
        match self {
            Self::Draft4 => jsonschema::Draft::Draft4,
            Self::Draft6 => jsonschema::Draft::Draft6,
            Self::Draft7 => jsonschema::Draft::Draft7,
            Self::Draft201909 => jsonschema::Draft::Draft201909,
            Self::Draft202012 => jsonschema::Draft::Draft202012,
        }
    }
}

/// Configuration of [`JsonSchemaValidator`](crate::JsonSchemaValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub draft: Draft,
}

impl ValidatorConfig {
    /// Load configuration from YAML (or JSON). Missing keys keep their
    /// defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(text)
            .map_err(|e| SchemaError::Yaml(format!("invalid validator config: {e}")))
    }
}
