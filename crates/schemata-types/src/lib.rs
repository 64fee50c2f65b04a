//! # schemata-types — Native Types and Type Projections
//!
//! Connects schema nodes with type systems in both directions:
//!
//! - **Inference** ([`infer`]): a Rust type, described through the
//!   [`Describe`] trait as a [`NativeType`], becomes a [`SchemaNode`].
//!   Primitives map through a fixed table, `Option<T>` clears `required`,
//!   sequences become arrays, string-keyed maps become open objects, records
//!   become objects with one property per field, and model types contribute
//!   their embedded schema document.
//! - **Projection** ([`project`]): a schema node becomes a type expression in
//!   a target type system. Python type hints and TypeScript structural types
//!   are built in; further targets implement [`Projection`].
//!
//! The two directions are independent and are not inverses of each other.
//!
//! ## Crate Policy
//!
//! - Depends only on `schemata-core` internally.
//! - Unsupported types and shapes are errors, never approximations.

pub mod descriptor;
pub mod infer;
pub mod project;

pub use descriptor::{Describe, NativeType, Primitive};
pub use infer::{infer, infer_native, primitive_kind, PRIMITIVE_KINDS};
pub use project::{
    Projection, ProjectionTarget, PythonProjection, TypeScriptOptions, TypeScriptProjection,
};

pub use schemata_core::{Kind, SchemaError, SchemaNode};
