//! # schemata-core — Typed JSON Schema Nodes
//!
//! Models a JSON Schema as a typed, recursive value ([`SchemaNode`]) and
//! converts it to and from the plain document form that validators consume.
//!
//! ## Modules
//!
//! - [`kind`]: the closed set of structural categories (`string`, `array`,
//!   `object`, `number`, `integer`, `boolean`, `type`).
//! - [`node`]: the schema node tree. Each node owns its children; there is
//!   no sharing and no cycles.
//! - [`resolve`]: inlines `#/definitions/...` pointers, recursively.
//! - [`codec`]: category-aware encoding to documents and decoding back,
//!   including `required`-list derivation.
//! - [`literal`]: the textual form of `default` values.
//! - [`format`]: JSON and YAML document text.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schemata-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Operations are pure transformations over immutable trees and either fully
//!   succeed or fail; no partially built node is ever returned.

pub mod codec;
pub mod error;
pub mod format;
pub mod kind;
pub mod literal;
pub mod node;
pub mod resolve;

pub use codec::{decode, encode};
pub use error::{ReferenceError, SchemaError};
pub use format::{parse_document, parse_schema, DocumentFormat};
pub use kind::Kind;
pub use node::{Properties, SchemaNode};
pub use resolve::{resolve_document, resolve_refs};
