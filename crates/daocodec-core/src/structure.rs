//! Structural matching for untyped JSON values.
//!
//! Decoded wire messages arrive as `serde_json::Value` trees with no
//! type tag. Before extracting strongly-typed fields, callers classify
//! a value by checking it against a [`Structure`] — a tree of required
//! keys. Matching is total: it never panics and anything that is not a
//! plain object fails the match.

use serde_json::Value;
use std::collections::BTreeMap;

/// A shape descriptor: which keys must exist, recursively.
///
/// Only plain-object shapes are expressible. Arrays satisfy an
/// [`Structure::Exists`] leaf but are never recursed into — no caller
/// in this codebase matches against array shapes, and extending the
/// semantics silently would be a trap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    /// The key must exist; no deeper constraint.
    Exists,
    /// The key must hold an object containing these keys.
    Object(BTreeMap<&'static str, Structure>),
}

impl Structure {
    /// Convenience constructor for an object shape.
    pub fn object<const N: usize>(fields: [(&'static str, Structure); N]) -> Self {
        Structure::Object(fields.into_iter().collect())
    }
}

/// Returns `true` only when every required key path in `structure`
/// exists in `value`. `false` for `null`, scalars, arrays, and objects
/// missing any nested required key. Never panics.
pub fn object_matches_structure(value: &Value, structure: &Structure) -> bool {
    match structure {
        Structure::Exists => true,
        Structure::Object(fields) => match value {
            Value::Object(map) => fields.iter().all(|(key, nested)| {
                map.get(*key)
                    .map(|v| object_matches_structure(v, nested))
                    .unwrap_or(false)
            }),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn any_shape() -> Structure {
        Structure::object([("typeUrl", Structure::Exists), ("value", Structure::Exists)])
    }

    #[test]
    fn matches_required_keys() {
        let v = json!({ "typeUrl": "/cosmos.bank.v1beta1.MsgSend", "value": "CgE=" });
        assert!(object_matches_structure(&v, &any_shape()));
    }

    #[test]
    fn missing_key_fails() {
        let v = json!({ "typeUrl": "/cosmos.bank.v1beta1.MsgSend" });
        assert!(!object_matches_structure(&v, &any_shape()));
    }

    #[test]
    fn non_objects_fail() {
        for v in [json!(null), json!(3), json!("s"), json!([{ "typeUrl": 1, "value": 2 }])] {
            assert!(!object_matches_structure(&v, &any_shape()));
        }
    }

    #[test]
    fn nested_shapes_recurse() {
        let shape = Structure::object([(
            "stargate",
            Structure::object([("typeUrl", Structure::Exists), ("value", Structure::Exists)]),
        )]);
        assert!(object_matches_structure(
            &json!({ "stargate": { "typeUrl": "/a.B", "value": {} } }),
            &shape
        ));
        assert!(!object_matches_structure(
            &json!({ "stargate": { "typeUrl": "/a.B" } }),
            &shape
        ));
        // The nested value must itself be an object for an Object shape.
        assert!(!object_matches_structure(&json!({ "stargate": 4 }), &shape));
    }

    #[test]
    fn exists_leaf_accepts_anything() {
        let shape = Structure::object([("k", Structure::Exists)]);
        for v in [json!({ "k": null }), json!({ "k": [] }), json!({ "k": 0 })] {
            assert!(object_matches_structure(&v, &shape));
        }
    }
}
