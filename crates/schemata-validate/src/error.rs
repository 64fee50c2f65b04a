//! # Validation Adapter Errors
//!
//! A candidate value that does not satisfy its schema is *not* an error: it
//! is reported as an invalid [`ValidationReport`](crate::ValidationReport).
//! Errors here mean validation could not run at all.

use schemata_core::SchemaError;
use thiserror::Error;

/// Error raised when a schema cannot be turned into a validator.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The validator rejected the schema document itself.
    #[error("invalid schema document: {reason}")]
    InvalidSchema {
        /// Reason reported by the validator.
        reason: String,
    },

    /// Loading or decoding the schema failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
