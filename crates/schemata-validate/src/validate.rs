//! # Validator Seam
//!
//! [`Validate`] is the boundary between schema nodes and a JSON Schema
//! validator. [`JsonSchemaValidator`] implements it with the `jsonschema`
//! crate; [`validate_node`] encodes a [`SchemaNode`] and validates a
//! candidate value against the result.

use jsonschema::Validator;
use serde_json::Value;

use schemata_core::SchemaNode;

use crate::config::ValidatorConfig;
use crate::error::ValidateError;
use crate::report::{parse_instance_path, Issue, ValidationReport};

/// A JSON Schema validator.
pub trait Validate {
    /// Check `instance` against the schema document `schema`.
    ///
    /// An invalid instance yields an invalid report. An `Err` means the
    /// schema itself could not be used.
    fn validate(&self, schema: &Value, instance: &Value) -> Result<ValidationReport, ValidateError>;
}

/// [`Validate`] implementation backed by the `jsonschema` crate.
#[derive(Debug, Clone, Default)]
pub struct JsonSchemaValidator {
    config: ValidatorConfig,
}

impl JsonSchemaValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Compile a schema document once for repeated checks.
    pub fn compile(&self, schema: &Value) -> Result<CompiledSchema, ValidateError> {
        let mut opts = jsonschema::options();
        opts.with_draft(self.config.draft.to_jsonschema());
        let validator = opts
            .build(schema)
            .map_err(|e| ValidateError::InvalidSchema {
                reason: e.to_string(),
            })?;
        Ok(CompiledSchema { validator })
    }
}

impl Validate for JsonSchemaValidator {
    fn validate(&self, schema: &Value, instance: &Value) -> Result<ValidationReport, ValidateError> {
        Ok(self.compile(schema)?.check(instance))
    }
}

/// A schema compiled by [`JsonSchemaValidator::compile`].
pub struct CompiledSchema {
    validator: Validator,
}

impl CompiledSchema {
    pub fn check(&self, instance: &Value) -> ValidationReport {
        let issues: Vec<Issue> = self
            .validator
            .iter_errors(instance)
            .map(|e| {
                let instance_path = e.instance_path.to_string();
                Issue {
                    path: parse_instance_path(&instance_path, instance),
                    instance_path,
                    schema_path: e.schema_path.to_string(),
                    message: e.to_string(),
                }
            })
            .collect();
        tracing::debug!(issues = issues.len(), "validated instance");
        ValidationReport::new(issues)
    }
}

impl std::fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledSchema").finish_non_exhaustive()
    }
}

/// Encode `node` and validate `instance` against it.
pub fn validate_node<V: Validate + ?Sized>(
    validator: &V,
    node: &SchemaNode,
    instance: &Value,
) -> Result<ValidationReport, ValidateError> {
    validator.validate(&node.to_document(), instance)
}

/// Validation directly on schema nodes, using the default validator.
pub trait ValidateNode {
    /// The `(valid, issues)` verdict for `instance`.
    fn validate_value(&self, instance: &Value) -> Result<(bool, Vec<Issue>), ValidateError>;
}

impl ValidateNode for SchemaNode {
    fn validate_value(&self, instance: &Value) -> Result<(bool, Vec<Issue>), ValidateError> {
        validate_node(&JsonSchemaValidator::default(), self, instance).map(ValidationReport::into_verdict)
    }
}
