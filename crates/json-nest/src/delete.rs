//! Delete path walking: removes an object key or splices an array element.

use json_nest_slash_path::Segment;
use serde_json::Value;

use crate::error::{NestError, NodeKind};
use crate::nav::push_prefix;

/// Remove the node addressed by `path`.
///
/// Deletion never creates structure: a missing intermediate container is
/// an error, unlike [`crate::mutate::set`]. An empty path is a no-op (the
/// root is kept), and removing an absent object key is a no-op success.
///
/// Array removal splices. Removing the sole element of an array collapses
/// the slot that held the array to `Null`; removing the last element of a
/// longer array leaves the shortened array in place. Both behaviors are
/// part of the observable contract.
pub fn delete(root: &mut Value, path: &[Segment]) -> Result<(), NestError> {
    let Some((last, descent)) = path.split_last() else {
        return Ok(());
    };

    let mut prefix = String::new();
    let mut current = root;
    for (pos, segment) in descent.iter().enumerate() {
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
                    current = &mut arr[*idx];
                }
                other => return Err(NestError::type_mismatch(&prefix, NodeKind::Array, other)),
            },
            Segment::Key(key) => match current {
                Value::Object(map) => match map.get_mut(key) {
                    Some(next) => current = next,
                    None => {
                        let next_segment = descent.get(pos + 1).unwrap_or(last);
                        return Err(NestError::TypeMismatch {
                            path: prefix,
                            expected: container_kind(next_segment),
                            actual: NodeKind::Null,
                        });
                    }
                },
                other => return Err(NestError::type_mismatch(&prefix, NodeKind::Object, other)),
            },
        }
    }

    push_prefix(&mut prefix, last);
    match last {
        Segment::Key(key) => match current {
            Value::Object(map) => {
                map.remove(key);
                Ok(())
            }
            other => Err(NestError::type_mismatch(&prefix, NodeKind::Object, other)),
        },
        Segment::Index(idx) => {
            let len = match &*current {
                Value::Array(arr) => arr.len(),
                other => return Err(NestError::type_mismatch(&prefix, NodeKind::Array, other)),
            };
            if *idx >= len {
                return Err(NestError::OutOfRange {
                    path: prefix,
                    index: *idx,
                    len,
                });
            }
            if len == 1 {
                // sole element: the slot that held the array becomes null
                *current = Value::Null;
            } else if let Value::Array(arr) = current {
                if *idx + 1 == len {
                    arr.truncate(len - 1);
                } else {
                    arr.remove(*idx);
                }
            }
            Ok(())
        }
    }
}

fn container_kind(segment: &Segment) -> NodeKind {
    match segment {
        Segment::Key(_) => NodeKind::Object,
        Segment::Index(_) => NodeKind::Array,
    }
}
