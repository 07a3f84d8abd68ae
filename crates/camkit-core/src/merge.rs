//! Deep merging of configuration trees.
//!
//! Camera components accept partial configuration objects. Before a camera is
//! built, the caller's object is merged over the component's defaults: nested
//! objects are merged key by key, everything else is a leaf and is replaced
//! wholesale by the caller's value.

use serde_json::Value;

/// Signature of a merge strategy used by component builders.
pub type MergeFn = fn(&Value, &Value) -> Value;

/// Merges `overrides` over `defaults`, returning a new tree.
///
/// Neither input is modified. Objects are merged recursively; arrays and
/// scalars in `overrides` replace the default outright. A `null` override is
/// treated as absent and keeps the default.
#[must_use]
pub fn deep_merge(defaults: &Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(base), Value::Object(over)) => {
            let mut merged = base.clone();
            for (key, value) in over {
                let entry = match base.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None if value.is_null() => continue,
                    None => value.clone(),
                };
                merged.insert(key.clone(), entry);
            }
            Value::Object(merged)
        }
        (_, Value::Null) => defaults.clone(),
        (_, over) => over.clone(),
    }
}

/// Replaces `defaults` with `overrides` at the top level only.
///
/// Any key present in `overrides` discards the default subtree entirely.
#[must_use]
pub fn shallow_merge(defaults: &Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(base), Value::Object(over)) => {
            let mut merged = base.clone();
            for (key, value) in over {
                if !value.is_null() {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Value::Object(merged)
        }
        (_, Value::Null) => defaults.clone(),
        (_, over) => over.clone(),
    }
}
