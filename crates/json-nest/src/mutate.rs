//! Write path walking: creates missing structure on the way down.

use json_nest_slash_path::Segment;
use serde_json::{Map, Value};

use crate::error::{NestError, NodeKind};
use crate::nav::push_prefix;

/// Write `value` at `path`, materializing missing intermediate containers.
///
/// An empty path replaces the whole document. A `Null` slot (including the
/// root, and slots freshly created for a missing key) becomes an empty
/// object or array depending on the segment that descends into it; a
/// non-null slot of the wrong kind is a type mismatch, never silently
/// overwritten. Conflicts are always hit before the walk has created
/// anything for the deeper segments, so a failed write leaves the document
/// untouched.
///
/// Index segments pad the array with nulls up to the index. On the final
/// segment the write is an append after padding, so the value lands at the
/// index when the array was shorter, and at the end when it was longer.
pub fn set(root: &mut Value, path: &[Segment], value: Value) -> Result<(), NestError> {
    let Some((last, descent)) = path.split_last() else {
        *root = value;
        return Ok(());
    };

    let mut prefix = String::new();
    let mut current = root;
    for segment in descent {
        push_prefix(&mut prefix, segment);
        match segment {
            Segment::Key(key) => {
                let map = enter_object(current, &prefix)?;
                current = map.entry(key.clone()).or_insert(Value::Null);
            }
            Segment::Index(idx) => {
                let arr = enter_array(current, &prefix)?;
                while arr.len() < *idx {
                    arr.push(Value::Null);
                }
                if arr.len() == *idx {
                    arr.push(Value::Null);
                }
                current = &mut arr[*idx];
            }
        }
    }

    push_prefix(&mut prefix, last);
    match last {
        Segment::Key(key) => {
            let map = enter_object(current, &prefix)?;
            map.insert(key.clone(), value);
        }
        Segment::Index(idx) => {
            let arr = enter_array(current, &prefix)?;
            while arr.len() < *idx {
                arr.push(Value::Null);
            }
            arr.push(value);
        }
    }
    Ok(())
}

/// Materialize an object in a null slot, or fail on a conflicting kind.
fn enter_object<'a>(
    slot: &'a mut Value,
    prefix: &str,
) -> Result<&'a mut Map<String, Value>, NestError> {
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => Ok(map),
        other => Err(NestError::type_mismatch(prefix, NodeKind::Object, other)),
    }
}

/// Materialize an array in a null slot, or fail on a conflicting kind.
fn enter_array<'a>(slot: &'a mut Value, prefix: &str) -> Result<&'a mut Vec<Value>, NestError> {
    if slot.is_null() {
        *slot = Value::Array(Vec::new());
    }
    match slot {
        Value::Array(arr) => Ok(arr),
        other => Err(NestError::type_mismatch(prefix, NodeKind::Array, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_nest_slash_path::parse_slash_path;
    use serde_json::json;

    fn set_at(doc: &mut Value, path: &str, value: Value) -> Result<(), NestError> {
        set(doc, &parse_slash_path(path), value)
    }

    #[test]
    fn empty_path_replaces_document() {
        let mut doc = json!({"old": true});
        set_at(&mut doc, "", json!([1, 2])).unwrap();
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn writes_into_existing_object() {
        let mut doc = json!({"a": 1});
        set_at(&mut doc, "/b", json!(2)).unwrap();
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn overwrite_changes_kind() {
        let mut doc = json!({"a": 1});
        set_at(&mut doc, "/a", json!({"nested": true})).unwrap();
        assert_eq!(doc, json!({"a": {"nested": true}}));
    }

    #[test]
    fn auto_creates_nested_structure() {
        let mut doc = Value::Null;
        set_at(&mut doc, "/a/2/b", json!("x")).unwrap();
        assert_eq!(doc, json!({"a": [null, null, {"b": "x"}]}));
    }

    #[test]
    fn root_kind_follows_first_segment() {
        let mut doc = Value::Null;
        set_at(&mut doc, "/0", json!("first")).unwrap();
        assert_eq!(doc, json!(["first"]));

        let mut doc = Value::Null;
        set_at(&mut doc, "/name", json!("n")).unwrap();
        assert_eq!(doc, json!({"name": "n"}));
    }

    #[test]
    fn quoted_numeric_writes_object_key() {
        let mut doc = Value::Null;
        set_at(&mut doc, "/\"1\"", json!("x")).unwrap();
        assert_eq!(doc, json!({"1": "x"}));
    }

    #[test]
    fn unquoted_numeric_pads_array() {
        let mut doc = Value::Null;
        set_at(&mut doc, "/1", json!("x")).unwrap();
        assert_eq!(doc, json!([null, "x"]));
    }

    #[test]
    fn terminal_index_appends_after_padding() {
        // The final write is a push: a shorter array gains the value at the
        // index, a longer array gains it at the end.
        let mut doc = json!([1, 2, 3]);
        set_at(&mut doc, "/1", json!("x")).unwrap();
        assert_eq!(doc, json!([1, 2, 3, "x"]));

        let mut doc = json!([1]);
        set_at(&mut doc, "/3", json!("x")).unwrap();
        assert_eq!(doc, json!([1, null, null, "x"]));
    }

    #[test]
    fn intermediate_index_descends_into_existing_slot() {
        let mut doc = json!({"a": [{"b": 1}, {"b": 2}]});
        set_at(&mut doc, "/a/1/b", json!(20)).unwrap();
        assert_eq!(doc, json!({"a": [{"b": 1}, {"b": 20}]}));
    }

    #[test]
    fn conflicting_scalar_mid_path_is_not_overwritten() {
        let mut doc = json!({"a": 5});
        let err = set_at(&mut doc, "/a/b", json!(1)).unwrap_err();
        assert!(matches!(err, NestError::TypeMismatch { .. }));
        assert_eq!(doc, json!({"a": 5}));
    }

    #[test]
    fn conflicting_root_is_not_overwritten() {
        let mut doc = json!("scalar");
        assert!(set_at(&mut doc, "/a", json!(1)).is_err());
        assert!(set_at(&mut doc, "/0", json!(1)).is_err());
        assert_eq!(doc, json!("scalar"));
    }

    #[test]
    fn intermediate_index_pads_and_creates_slot() {
        let mut doc = json!({"a": [5]});
        set_at(&mut doc, "/a/2/x", json!(1)).unwrap();
        assert_eq!(doc, json!({"a": [5, null, {"x": 1}]}));
    }

    #[test]
    fn failed_writes_leave_document_untouched() {
        // A conflicting slot is detected before anything is created for
        // the deeper segments.
        let mut doc = json!({"a": [true]});
        assert!(set_at(&mut doc, "/a/0/x", json!(1)).is_err());
        assert_eq!(doc, json!({"a": [true]}));

        let mut doc = json!({"a": {"b": 5}});
        assert!(set_at(&mut doc, "/a/b/c/d", json!(1)).is_err());
        assert_eq!(doc, json!({"a": {"b": 5}}));
    }

    #[test]
    fn null_value_writes_are_kept() {
        let mut doc = Value::Null;
        set_at(&mut doc, "/a", Value::Null).unwrap();
        assert_eq!(doc, json!({"a": null}));
    }
}
