//! # Validation Reports
//!
//! Structured issues reported by a validator, ordered by their location in
//! the candidate value so that reports are reproducible.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

/// One step of a path into a candidate value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(&key.replace('~', "~0").replace('/', "~1")),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Split a JSON pointer into typed segments.
///
/// Whether a numeric segment is an array index or an object key depends on
/// the value it points into, so the pointer is walked through `instance`.
pub fn parse_instance_path(pointer: &str, instance: &Value) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    let mut current = Some(instance);
    for raw in pointer.split('/').skip(1) {
        let segment = raw.replace("~1", "/").replace("~0", "~");
        match current {
            Some(Value::Array(items)) if segment.parse::<usize>().is_ok() => {
                let index = segment.parse::<usize>().unwrap_or_default();
                current = items.get(index);
                segments.push(PathSegment::Index(index));
            }
            Some(Value::Object(map)) => {
                current = map.get(&segment);
                segments.push(PathSegment::Key(segment));
            }
            _ => {
                current = None;
                segments.push(PathSegment::Key(segment));
            }
        }
    }
    segments
}

/// A single reason a candidate value failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the violating value, root first. Empty for the root.
    pub path: Vec<PathSegment>,
    /// The same location as a JSON pointer.
    pub instance_path: String,
    /// JSON pointer of the schema keyword that failed.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Outcome of validating one candidate value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// Build a report, stably sorting issues by path.
    pub fn new(mut issues: Vec<Issue>) -> Self {
        issues.sort_by(compare_paths);
        Self { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The `(valid, issues)` verdict.
    pub fn into_verdict(self) -> (bool, Vec<Issue>) {
        (self.issues.is_empty(), self.issues)
    }
}

fn compare_paths(a: &Issue, b: &Issue) -> Ordering {
    a.path.cmp(&b.path)
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}
