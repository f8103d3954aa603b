//! Lightweight lookups over a JSON document.
//!
//! These walkers return `Option` and make no distinction between the ways
//! a path can fail to resolve; callers that need error detail use the
//! navigator in the `json-nest` crate instead.

use serde_json::Value;

use crate::Segment;

/// Get a value from a JSON document by path.
///
/// Returns `None` when the path cannot be followed: a key segment over a
/// non-object, an index segment over a non-array, a missing key, or an
/// out-of-range index.
///
/// # Example
///
/// ```
/// use json_nest_slash_path::{get, parse_slash_path};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20]}});
/// assert_eq!(get(&doc, &parse_slash_path("/a/b/1")), Some(&json!(20)));
/// assert_eq!(get(&doc, &parse_slash_path("/a/missing")), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    let mut current = val;
    for segment in path {
        match current {
            Value::Array(arr) => {
                let idx = segment.as_index()?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                let key = segment.as_key()?;
                current = map.get(key)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[Segment]) -> Option<&'a mut Value> {
    let mut current = val;
    for segment in path {
        match current {
            Value::Array(arr) => {
                let idx = segment.as_index()?;
                current = arr.get_mut(idx)?;
            }
            Value::Object(map) => {
                let key = segment.as_key()?;
                current = map.get_mut(key)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
