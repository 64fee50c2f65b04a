//! # Error Types
//!
//! Defines the error types used throughout schemata. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every failure is fatal to the operation that raised it. Decoding,
//!   resolution and projection either produce a complete result or an error,
//!   never a partially built node.
//! - Malformed-document errors carry the JSON pointer of the offending node
//!   within the document being decoded.
//! - A value that does not satisfy a schema is not an error of this crate;
//!   validators report it as an ordinary outcome.

use thiserror::Error;

/// Top-level error type for schema modelling operations.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A `$ref` pointer could not be resolved.
    #[error("reference resolution error: {0}")]
    Reference(#[from] ReferenceError),

    /// The document is missing a mandatory field or carries an invalid value.
    #[error("malformed schema document at '{path}': {reason}")]
    MalformedDocument {
        /// JSON pointer of the offending node ("" for the root).
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A native type or schema shape is outside what inference or
    /// projection models.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing or conversion failed.
    #[error("yaml error: {0}")]
    Yaml(String),
}

impl SchemaError {
    /// Shorthand for a [`SchemaError::MalformedDocument`].
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`SchemaError::UnsupportedType`].
    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::UnsupportedType(what.into())
    }
}

/// Error while inlining `$ref` pointers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// A path segment of the pointer does not exist in the definitions table.
    #[error("'{pointer}' not found in definitions (missing segment '{segment}')")]
    NotFound {
        /// The full `$ref` value.
        pointer: String,
        /// The first segment that could not be followed.
        segment: String,
    },

    /// The pointer is not of the form `#/definitions/<segment>/...`.
    #[error("unsupported reference pointer '{pointer}'")]
    InvalidPointer {
        /// The offending `$ref` value, rendered as text.
        pointer: String,
    },

    /// The pointer refers back to a definition that is still being resolved.
    #[error("cyclic reference through '{pointer}'")]
    Cycle {
        /// The pointer that closed the cycle.
        pointer: String,
    },
}
