//! Field paths: dotted identifiers locating values in the form tree.
//!
//! A `FieldPath` like `"personal.email"` names one field in the nested form
//! data. The same paths are used as stable input identifiers, as schema keys,
//! and as the addresses on reported validation errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dotted path into the form data tree.
///
/// Paths are compared and ordered as plain strings, which keeps error maps
/// keyed by `FieldPath` in a stable display order.
///
/// Example: `FieldPath::new("preferences.contactMethod")`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(pub String);

impl FieldPath {
    /// Construct a path from any string-like value.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw dotted string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the dot-separated segments of this path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Resolve this path against a JSON tree.
    ///
    /// Returns `None` when any segment is missing or the located value is
    /// JSON `null`. An empty string is a present value, not an absent one —
    /// required-ness of empty strings is a rule concern, not a path concern.
    pub fn resolve<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        let mut current = value;
        for segment in self.segments() {
            match current.get(segment) {
                Some(v) if !v.is_null() => current = v,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Write `new_value` at this path inside `target`, creating intermediate
    /// objects as needed.
    ///
    /// A non-object value encountered along the way is replaced by an object
    /// so the assignment always lands. This is how the controller folds field
    /// edits into its draft tree.
    pub fn assign(&self, target: &mut Value, new_value: Value) {
        let segments: Vec<&str> = self.0.split('.').collect();
        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return,
        };

        let mut current = target;
        for segment in parents {
            if !current.is_object() {
                *current = Value::Object(serde_json::Map::new());
            }
            if let Value::Object(map) = current {
                current = map
                    .entry((*segment).to_string())
                    .or_insert_with(|| Value::Object(serde_json::Map::new()));
            }
        }

        if !current.is_object() {
            *current = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = current {
            map.insert((*last).to_string(), new_value);
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
