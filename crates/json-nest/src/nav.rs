//! Read-only path navigation.

use json_nest_slash_path::Segment;
use serde_json::Value;

use crate::error::{NestError, NodeKind};

/// Extends a consumed-path buffer with one more segment.
pub(crate) fn push_prefix(prefix: &mut String, segment: &Segment) {
    prefix.push('/');
    prefix.push_str(&segment.to_string());
}

/// Resolve a path to a borrowed node.
///
/// An empty path is the document itself. Absent object keys resolve to
/// `Null` (absence is not an error on read), while an index into a
/// non-array, a key into a non-object, or an index at or past the end of
/// an array fails with the consumed path prefix. A `Null` resolved
/// mid-path fails the following segment's container check.
pub fn resolve<'a>(root: &'a Value, path: &[Segment]) -> Result<&'a Value, NestError> {
    static NULL: Value = Value::Null;

    let mut current = root;
    let mut prefix = String::new();
    for segment in path {
        push_prefix(&mut prefix, segment);
        match segment {
            Segment::Index(idx) => match current {
                Value::Array(arr) => {
                    if *idx >= arr.len() {
                        return Err(NestError::OutOfRange {
                            path: prefix,
                            index: *idx,
                            len: arr.len(),
                        });
                    }
                    current = &arr[*idx];
                }
                other => return Err(NestError::type_mismatch(&prefix, NodeKind::Array, other)),
            },
            Segment::Key(key) => match current {
                Value::Object(map) => current = map.get(key).unwrap_or(&NULL),
                other => return Err(NestError::type_mismatch(&prefix, NodeKind::Object, other)),
            },
        }
    }
    Ok(current)
}
