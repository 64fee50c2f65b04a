//! # Reference Resolution
//!
//! Inlines document-local `$ref` pointers of the form
//! `#/definitions/<segment>/<segment>/...` against a definitions table.
//!
//! ## Rules
//!
//! - A mapping that contains `$ref` is replaced wholesale by the resolved
//!   fragment. Sibling keys of `$ref` are dropped.
//! - Other mappings are copied key by key, each value resolved. Sequences are
//!   resolved element-wise and scalars pass through.
//! - Fragments reached through a pointer are resolved again, so definitions
//!   may refer to other definitions.
//! - Segments are JSON-pointer unescaped (`~1` is `/`, `~0` is `~`) and walk
//!   mappings by key and sequences by index.
//!
//! Cyclic definition graphs cannot be inlined into a finite tree. They are
//! detected with a stack of the pointers currently being expanded and
//! rejected with [`ReferenceError::Cycle`].

use serde_json::{Map, Value};

use crate::error::ReferenceError;

/// Reserved key marking a reference mapping.
pub const REF_KEY: &str = "$ref";

/// Key of the definitions table inside a root schema document.
pub const DEFINITIONS_KEY: &str = "definitions";

/// The only pointer prefix this resolver understands.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Resolve every `$ref` in `document` against `definitions`.
///
/// `definitions` is the value of a document's `definitions` section (a
/// mapping from definition name to fragment). The input is not modified.
///
/// # Errors
///
/// Returns [`ReferenceError::NotFound`] if a pointer path does not exist,
/// [`ReferenceError::InvalidPointer`] for a pointer outside
/// `#/definitions/`, and [`ReferenceError::Cycle`] for a self-referential
/// definition graph.
pub fn resolve_refs(document: &Value, definitions: &Value) -> Result<Value, ReferenceError> {
    let mut resolver = Resolver {
        definitions,
        active: Vec::new(),
    };
    resolver.resolve(document)
}

/// Resolve a root document against its own `definitions` section.
///
/// A document without `definitions` resolves against an empty table, so any
/// `$ref` it contains fails with [`ReferenceError::NotFound`].
pub fn resolve_document(document: &Value) -> Result<Value, ReferenceError> {
    let empty = Value::Object(Map::new());
    let definitions = document.get(DEFINITIONS_KEY).unwrap_or(&empty);
    resolve_refs(document, definitions)
}

struct Resolver<'a> {
    definitions: &'a Value,
    /// Pointers being expanded, outermost first.
    active: Vec<String>,
}

impl Resolver<'_> {
    fn resolve(&mut self, node: &Value) -> Result<Value, ReferenceError> {
        match node {
            Value::Object(map) => {
                if let Some(pointer) = map.get(REF_KEY) {
                    return self.follow(pointer);
                }
                let mut out = Map::with_capacity(map.len());
                for (key, value) in map {
                    out.insert(key.clone(), self.resolve(value)?);
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.resolve(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            scalar => Ok(scalar.clone()),
        }
    }

    fn follow(&mut self, pointer: &Value) -> Result<Value, ReferenceError> {
        let Some(pointer) = pointer.as_str() else {
            return Err(ReferenceError::InvalidPointer {
                pointer: pointer.to_string(),
            });
        };
        let path = match pointer.strip_prefix(DEFINITIONS_PREFIX) {
            Some(path) if !path.is_empty() => path,
            _ => {
                return Err(ReferenceError::InvalidPointer {
                    pointer: pointer.to_string(),
                })
            }
        };
        if self.active.iter().any(|p| p == pointer) {
            return Err(ReferenceError::Cycle {
                pointer: pointer.to_string(),
            });
        }

        let target = lookup(self.definitions, pointer, path)?;
        tracing::trace!(pointer, depth = self.active.len(), "inlining reference");

        self.active.push(pointer.to_string());
        let resolved = self.resolve(target);
        self.active.pop();
        resolved
    }
}

fn lookup<'a>(definitions: &'a Value, pointer: &str, path: &str) -> Result<&'a Value, ReferenceError> {
    let mut current = definitions;
    for raw in path.split('/') {
        let segment = unescape_segment(raw);
        let next = match current {
            Value::Object(map) => map.get(segment.as_str()),
            Value::Array(items) => array_index(&segment).and_then(|i| items.get(i)),
            _ => None,
        };
        current = next.ok_or_else(|| ReferenceError::NotFound {
            pointer: pointer.to_string(),
            segment: segment.clone(),
        })?;
    }
    Ok(current)
}

/// Array index in its canonical spelling: `0`, or digits without a leading
/// zero. Other spellings would give one element several pointers.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.is_empty()
            && !segment.starts_with('0')
            && segment.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

/// Undo JSON-pointer escaping. `~1` must be replaced before `~0`.
fn unescape_segment(raw: &str) -> String {
    raw.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_reference() {
        let definitions = json!({"Foo": {"type": "string"}});
        let resolved = resolve_refs(&json!({"$ref": "#/definitions/Foo"}), &definitions).unwrap();
        assert_eq!(resolved, json!({"type": "string"}));
    }

    #[test]
    fn test_nested_reference_resolves_fully() {
        let definitions = json!({
            "Foo": {"type": "array", "items": {"$ref": "#/definitions/Bar"}},
            "Bar": {"type": "integer"}
        });
        let doc = json!({
            "type": "object",
            "properties": {"foo": {"$ref": "#/definitions/Foo"}}
        });
        let resolved = resolve_refs(&doc, &definitions).unwrap();
        assert_eq!(
            resolved,
            json!({
                "type": "object",
                "properties": {"foo": {"type": "array", "items": {"type": "integer"}}}
            })
        );
    }

    #[test]
    fn test_reference_replaces_siblings() {
        let definitions = json!({"Foo": {"type": "string"}});
        let doc = json!({"$ref": "#/definitions/Foo", "description": "dropped"});
        let resolved = resolve_refs(&doc, &definitions).unwrap();
        assert_eq!(resolved, json!({"type": "string"}));
    }

    #[test]
    fn test_multi_segment_path() {
        let definitions = json!({"shapes": {"Point": {"type": "object"}}});
        let resolved =
            resolve_refs(&json!({"$ref": "#/definitions/shapes/Point"}), &definitions).unwrap();
        assert_eq!(resolved, json!({"type": "object"}));
    }

    #[test]
    fn test_sequence_index_and_escaped_segments() {
        let definitions = json!({
            "a/b": [{"type": "boolean"}, {"type": "number"}],
            "t~x": {"type": "string"}
        });
        let doc = json!([
            {"$ref": "#/definitions/a~1b/1"},
            {"$ref": "#/definitions/t~0x"}
        ]);
        let resolved = resolve_refs(&doc, &definitions).unwrap();
        assert_eq!(resolved, json!([{"type": "number"}, {"type": "string"}]));
    }

    #[test]
    fn test_scalars_pass_through() {
        let definitions = json!({});
        for value in [json!(1), json!("text"), json!(null), json!(true)] {
            assert_eq!(resolve_refs(&value, &definitions).unwrap(), value);
        }
    }

    #[test]
    fn test_missing_definition_is_fatal() {
        let definitions = json!({"Foo": {"type": "string"}});
        let err = resolve_refs(&json!({"$ref": "#/definitions/Missing"}), &definitions).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::NotFound {
                pointer: "#/definitions/Missing".to_string(),
                segment: "Missing".to_string(),
            }
        );
    }

    #[test]
    fn test_foreign_pointer_rejected() {
        let definitions = json!({"Foo": {"type": "string"}});
        for pointer in [json!("#/$defs/Foo"), json!("other.json#/Foo"), json!("#/definitions/"), json!(3)] {
            let err = resolve_refs(&json!({"$ref": pointer.clone()}), &definitions).unwrap_err();
            assert!(
                matches!(err, ReferenceError::InvalidPointer { .. }),
                "expected InvalidPointer for {pointer}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_cycle_detected() {
        let definitions = json!({
            "Node": {
                "type": "object",
                "properties": {"next": {"$ref": "#/definitions/Node"}}
            }
        });
        let err = resolve_refs(&json!({"$ref": "#/definitions/Node"}), &definitions).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::Cycle {
                pointer: "#/definitions/Node".to_string()
            }
        );
    }

    #[test]
    fn test_non_canonical_index_not_found() {
        let definitions = json!({"L": [{"type": "string"}, {"type": "integer"}]});
        for pointer in [
            "#/definitions/L/01",
            "#/definitions/L/00",
            "#/definitions/L/+1",
            "#/definitions/L/",
        ] {
            let err = resolve_refs(&json!({"$ref": pointer}), &definitions).unwrap_err();
            assert!(
                matches!(err, ReferenceError::NotFound { .. }),
                "expected NotFound for {pointer}, got {err:?}"
            );
        }
        let resolved = resolve_refs(&json!({"$ref": "#/definitions/L/1"}), &definitions).unwrap();
        assert_eq!(resolved, json!({"type": "integer"}));
    }

    #[test]
    fn test_index_aliases_cannot_dodge_cycle_detection() {
        let definitions = json!({"L": [{"$ref": "#/definitions/L/00"}]});
        let err = resolve_refs(&json!({"$ref": "#/definitions/L/0"}), &definitions).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::NotFound {
                pointer: "#/definitions/L/00".to_string(),
                segment: "00".to_string(),
            }
        );
    }

    #[test]
    fn test_repeated_non_cyclic_reference() {
        let definitions = json!({"Id": {"type": "integer"}});
        let doc = json!({
            "type": "object",
            "properties": {
                "a": {"$ref": "#/definitions/Id"},
                "b": {"$ref": "#/definitions/Id"}
            }
        });
        let resolved = resolve_refs(&doc, &definitions).unwrap();
        assert_eq!(resolved["properties"]["a"], json!({"type": "integer"}));
        assert_eq!(resolved["properties"]["b"], json!({"type": "integer"}));
    }

    #[test]
    fn test_resolve_document_uses_own_definitions() {
        let doc = json!({
            "type": "array",
            "items": {"$ref": "#/definitions/Tag"},
            "definitions": {"Tag": {"type": "string"}}
        });
        let resolved = resolve_document(&doc).unwrap();
        assert_eq!(resolved["items"], json!({"type": "string"}));
    }

    #[test]
    fn test_resolve_document_without_definitions() {
        let doc = json!({"type": "array", "items": {"$ref": "#/definitions/Tag"}});
        let err = resolve_document(&doc).unwrap_err();
        assert!(matches!(err, ReferenceError::NotFound { .. }));
    }
}
