//! # schemata-validate — Validating Values Against Schema Nodes
//!
//! Adapter between schema nodes and a JSON Schema validator. A node is
//! encoded to its document form and handed to a [`Validate`] implementation;
//! the outcome is a [`ValidationReport`] of [`Issue`]s ordered by their path
//! in the candidate value.
//!
//! ## Crate Policy
//!
//! - A failing candidate value is a report, not an error. [`ValidateError`]
//!   is reserved for schemas the validator cannot use.
//! - Issue order is deterministic: stable sort by instance path.
//! - No network access is configured; remote `$ref` targets are not fetched.

pub mod config;
pub mod error;
pub mod report;
pub mod validate;

pub use config::{Draft, ValidatorConfig};
pub use error::ValidateError;
pub use report::{parse_instance_path, Issue, PathSegment, ValidationReport};
pub use validate::{validate_node, CompiledSchema, JsonSchemaValidator, Validate, ValidateNode};
