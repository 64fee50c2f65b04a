//! # Type Projections
//!
//! A projection renders a [`SchemaNode`] as a type expression in some target
//! type system. Each target implements [`Projection`]; the node type knows
//! nothing about any of them, so adding a target does not touch the model.
//!
//! | Target | Implementation |
//! |--------|----------------|
//! | Python type hints | [`PythonProjection`] |
//! | TypeScript structural types | [`TypeScriptProjection`] |
//!
//! Projections fail with [`SchemaError::UnsupportedType`] for shapes the target
//! cannot express. They never fall back to a looser type.

pub mod python;
pub mod typescript;

use std::str::FromStr;

use schemata_core::{SchemaError, SchemaNode};

pub use python::PythonProjection;
pub use typescript::{TypeScriptOptions, TypeScriptProjection};

/// Renders schema nodes as type expressions of one target type system.
pub trait Projection {
    /// Short identifier of the target, e.g. `"python"`.
    fn target(&self) -> &'static str;

    /// Project `node` to a type expression.
    fn project(&self, node: &SchemaNode) -> Result<String, SchemaError>;
}

/// Built-in projection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionTarget {
    Python,
    TypeScript,
}

impl ProjectionTarget {
    pub fn all() -> &'static [ProjectionTarget] {
        &[Self::Python, Self::TypeScript]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    /// The projection for this target, with default options.
    pub fn projection(&self) -> Box<dyn Projection> {
        match self {
            Self::Python => Box::new(PythonProjection),
            Self::TypeScript => Box::new(TypeScriptProjection::default()),
        }
    }
}

impl FromStr for ProjectionTarget {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" | "py" => Ok(Self::Python),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(SchemaError::unsupported(format!(
                "unknown projection target: {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for ProjectionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
