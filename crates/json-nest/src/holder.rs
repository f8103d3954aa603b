//! The document holder: one JSON root behind a reader/writer lock.

use std::fs;
use std::path::Path as FsPath;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDateTime, Utc};
use json_nest_slash_path::parse_slash_path;
use serde_json::Value;

use crate::error::{NestError, NodeKind};
use crate::{delete, mutate, nav, pretty};

/// A JSON document addressed by slash paths.
///
/// Every operation takes the document-wide lock: reads share it, writes
/// hold it exclusively, so a reader sees the document fully before or
/// fully after any write, never in between. Operations are synchronous
/// and run to completion while holding the lock; calling back into the
/// same holder from inside an operation is not supported.
///
/// ```
/// use json_nest::JsonNest;
/// use serde_json::json;
///
/// let doc = JsonNest::new();
/// doc.set("/users/0/name", json!("ada")).unwrap();
/// assert_eq!(doc.get("/users/0/name").unwrap(), json!("ada"));
/// assert_eq!(doc.get("").unwrap(), json!({"users": [{"name": "ada"}]}));
/// ```
pub struct JsonNest {
    root: RwLock<Value>,
}

impl JsonNest {
    /// Empty document (root is `null`).
    pub fn new() -> Self {
        JsonNest {
            root: RwLock::new(Value::Null),
        }
    }

    /// Document owning the given root value.
    pub fn from_value(root: Value) -> Self {
        JsonNest {
            root: RwLock::new(root),
        }
    }

    /// Decode a document from JSON text.
    pub fn parse_str(text: &str) -> Result<Self, NestError> {
        Ok(Self::from_value(serde_json::from_str(text)?))
    }

    /// Decode a document from JSON bytes.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, NestError> {
        Ok(Self::from_value(serde_json::from_slice(bytes)?))
    }

    /// Decode a document from a JSON file.
    pub fn parse_file(path: impl AsRef<FsPath>) -> Result<Self, NestError> {
        let path = path.as_ref();
        log::debug!("reading {}...", path.display());
        let bytes = fs::read(path)?;
        Self::parse_bytes(&bytes)
    }

    fn read_root(&self) -> Result<RwLockReadGuard<'_, Value>, NestError> {
        self.root
            .read()
            .map_err(|_| NestError::Internal("document lock poisoned".to_string()))
    }

    fn write_root(&self) -> Result<RwLockWriteGuard<'_, Value>, NestError> {
        self.root
            .write()
            .map_err(|_| NestError::Internal("document lock poisoned".to_string()))
    }

    // ── Core operations ───────────────────────────────────────────────────

    /// Clone of the node at `path`. Absent object keys read as `null`;
    /// an empty path reads the whole document.
    pub fn get(&self, path: &str) -> Result<Value, NestError> {
        let segments = parse_slash_path(path);
        let root = self.read_root()?;
        nav::resolve(&root, &segments).cloned()
    }

    /// Write `value` at `path`, creating missing containers on the way
    /// down. An empty path replaces the whole document. See
    /// [`mutate::set`] for the padding and append rules.
    pub fn set(&self, path: &str, value: impl Into<Value>) -> Result<(), NestError> {
        let segments = parse_slash_path(path);
        let mut root = self.write_root()?;
        mutate::set(&mut root, &segments, value.into())
    }

    /// Delete the node at `path`. An empty path is a no-op. See
    /// [`delete::delete`] for the splice and collapse rules.
    pub fn delete(&self, path: &str) -> Result<(), NestError> {
        let segments = parse_slash_path(path);
        let mut root = self.write_root()?;
        delete::delete(&mut root, &segments)
    }

    /// Reset the document to `null`.
    pub fn clear(&self) -> Result<(), NestError> {
        *self.write_root()? = Value::Null;
        Ok(())
    }

    /// Sub-document at `path`, as a new holder. `serde_json::Value` owns
    /// its tree, so the clone is a deep copy with no aliasing back into
    /// this document.
    pub fn get_nest(&self, path: &str) -> Result<JsonNest, NestError> {
        Ok(JsonNest::from_value(self.get(path)?))
    }

    /// Length of the array at `path`.
    ///
    /// Negative sentinels classify failures without an error branch:
    /// `-1` the path does not resolve, `-2` the node is null, `-3` the
    /// node is not an array.
    pub fn array_len(&self, path: &str) -> i64 {
        let segments = parse_slash_path(path);
        let Ok(root) = self.read_root() else {
            return -1;
        };
        match nav::resolve(&root, &segments) {
            Err(_) => -1,
            Ok(Value::Null) => -2,
            Ok(Value::Array(arr)) => arr.len() as i64,
            Ok(_) => -3,
        }
    }

    /// True when `path` resolves to a non-null node. Any lookup failure
    /// collapses to `false`.
    pub fn exists(&self, path: &str) -> bool {
        let segments = parse_slash_path(path);
        let Ok(root) = self.read_root() else {
            return false;
        };
        json_nest_slash_path::get(&root, &segments)
            .map(|node| !node.is_null())
            .unwrap_or(false)
    }

    /// Keys of the object at `path`.
    ///
    /// With `follow_first_element` set, arrays are followed through their
    /// first element until a non-array is reached; a scalar or an empty
    /// array on the way is an error.
    pub fn keys(&self, path: &str, follow_first_element: bool) -> Result<Vec<String>, NestError> {
        let segments = parse_slash_path(path);
        let root = self.read_root()?;
        let mut node = nav::resolve(&root, &segments)?;
        loop {
            match node {
                Value::Object(map) => return Ok(map.keys().cloned().collect()),
                Value::Array(arr) => {
                    if !follow_first_element {
                        return Err(NestError::type_mismatch(path, NodeKind::Object, node));
                    }
                    match arr.first() {
                        Some(first) => node = first,
                        None => {
                            return Err(NestError::OutOfRange {
                                path: path.to_string(),
                                index: 0,
                                len: 0,
                            });
                        }
                    }
                }
                other => return Err(NestError::type_mismatch(path, NodeKind::Object, other)),
            }
        }
    }

    // ── Typed accessors ───────────────────────────────────────────────────

    /// String form of the node at `path`. Null reads as the empty string;
    /// non-string nodes render as their JSON text.
    pub fn get_string(&self, path: &str) -> Result<String, NestError> {
        match self.get(path)? {
            Value::Null => Ok(String::new()),
            Value::String(text) => Ok(text),
            other => Ok(serde_json::to_string(&other)?),
        }
    }

    /// Integer at `path`. Null reads as 0, floats truncate, strings parse
    /// as integer literals.
    pub fn get_i64(&self, path: &str) -> Result<i64, NestError> {
        match self.get(path)? {
            Value::Null => Ok(0),
            Value::Number(num) => Ok(num
                .as_i64()
                .unwrap_or_else(|| num.as_f64().unwrap_or(0.0) as i64)),
            Value::String(text) => Ok(serde_json::from_str(text.trim())?),
            other => Err(NestError::type_mismatch(path, NodeKind::Number, &other)),
        }
    }

    /// Float at `path`. Null reads as 0.0, strings parse as number
    /// literals.
    pub fn get_f64(&self, path: &str) -> Result<f64, NestError> {
        match self.get(path)? {
            Value::Null => Ok(0.0),
            Value::Number(num) => Ok(num.as_f64().unwrap_or(0.0)),
            Value::String(text) => Ok(serde_json::from_str(text.trim())?),
            other => Err(NestError::type_mismatch(path, NodeKind::Number, &other)),
        }
    }

    /// Timestamp at `path`. Numbers are unix seconds; strings parse as
    /// RFC 3339, or with `format` (chrono `strftime` syntax, interpreted
    /// as UTC) when given.
    pub fn get_datetime(
        &self,
        path: &str,
        format: Option<&str>,
    ) -> Result<DateTime<Utc>, NestError> {
        let timestamp_err = |reason: String| NestError::Timestamp {
            path: path.to_string(),
            reason,
        };
        match self.get(path)? {
            Value::Number(num) => {
                let secs = num
                    .as_i64()
                    .unwrap_or_else(|| num.as_f64().unwrap_or(0.0) as i64);
                DateTime::from_timestamp(secs, 0)
                    .ok_or_else(|| timestamp_err(format!("unix seconds {secs} out of range")))
            }
            Value::String(text) => match format {
                Some(fmt) => NaiveDateTime::parse_from_str(&text, fmt)
                    .map(|naive| naive.and_utc())
                    .map_err(|e| timestamp_err(e.to_string())),
                None => DateTime::parse_from_rfc3339(&text)
                    .map(|fixed| fixed.with_timezone(&Utc))
                    .map_err(|e| timestamp_err(e.to_string())),
            },
            other => Err(NestError::type_mismatch(path, NodeKind::Number, &other)),
        }
    }

    // ── Rendering and copies ──────────────────────────────────────────────

    /// JSON text of the node at `path` (`""` for the whole document),
    /// indented with `indent` when non-empty.
    pub fn to_json_string(&self, path: &str, indent: &str) -> Result<String, NestError> {
        let segments = parse_slash_path(path);
        let root = self.read_root()?;
        let node = nav::resolve(&root, &segments)?;
        pretty::format_json(node, indent)
    }

    /// Copy the listed paths (comma separated) from `src` under
    /// `dest_prefix`. Source paths that do not resolve are skipped. With
    /// `last_component_only`, each copy is stored under the final
    /// component of its source path; otherwise the full source path is
    /// mirrored below the prefix.
    pub fn copy_nodes(
        &self,
        dest_prefix: &str,
        src: &JsonNest,
        src_paths: &str,
        last_component_only: bool,
    ) -> Result<(), NestError> {
        for raw in src_paths.split(',') {
            let src_path = raw.trim();
            if src_path.is_empty() {
                continue;
            }
            let node = match src.get(src_path) {
                Ok(node) => node,
                Err(err) => {
                    log::debug!("copy_nodes: skipping {src_path}: {err}");
                    continue;
                }
            };
            let suffix = if last_component_only {
                src_path
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or(src_path)
            } else {
                src_path.trim_start_matches('/')
            };
            self.set(&format!("{dest_prefix}/{suffix}"), node)?;
        }
        Ok(())
    }
}

impl Default for JsonNest {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for JsonNest {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonNest {
        JsonNest::from_value(json!({
            "name": "widget",
            "count": 3,
            "price": 9.5,
            "tags": ["a", "b"],
            "meta": {"created": "2024-01-02T03:04:05Z", "epoch": 1700000000},
            "empty": null,
        }))
    }

    #[test]
    fn parse_str_round_trips() {
        let doc = JsonNest::parse_str(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(doc.get("").unwrap(), json!({"a": [1, 2]}));
        assert!(matches!(
            JsonNest::parse_str("{nope"),
            Err(NestError::Malformed(_)),
        ));
    }

    #[test]
    fn clear_resets_root() {
        let doc = sample();
        doc.clear().unwrap();
        assert_eq!(doc.get("").unwrap(), Value::Null);
    }

    #[test]
    fn get_nest_is_a_deep_copy() {
        let doc = sample();
        let sub = doc.get_nest("/meta").unwrap();
        sub.set("/epoch", json!(0)).unwrap();
        assert_eq!(doc.get_i64("/meta/epoch").unwrap(), 1700000000);
    }

    #[test]
    fn array_len_sentinels() {
        let doc = sample();
        assert_eq!(doc.array_len("/tags"), 2);
        assert_eq!(doc.array_len("/empty"), -2);
        assert_eq!(doc.array_len("/name"), -3);
        assert_eq!(doc.array_len("/missing"), -2);
        assert_eq!(doc.array_len("/tags/9"), -1);
    }

    #[test]
    fn exists_collapses_errors() {
        let doc = sample();
        assert!(doc.exists("/name"));
        assert!(!doc.exists("/empty"));
        assert!(!doc.exists("/missing"));
        assert!(!doc.exists("/tags/9"));
        assert!(!doc.exists("/name/deeper"));
    }

    #[test]
    fn keys_of_object() {
        let doc = sample();
        let mut keys = doc.keys("/meta", false).unwrap();
        keys.sort();
        assert_eq!(keys, vec!["created", "epoch"]);
    }

    #[test]
    fn keys_follows_first_array_element() {
        let doc = JsonNest::from_value(json!([[{"x": 1, "y": 2}]]));
        assert!(doc.keys("", false).is_err());
        let mut keys = doc.keys("", true).unwrap();
        keys.sort();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn keys_rejects_scalar_and_empty_array() {
        let doc = sample();
        assert!(matches!(
            doc.keys("/name", true),
            Err(NestError::TypeMismatch { .. }),
        ));
        let empty = JsonNest::from_value(json!([]));
        assert!(matches!(
            empty.keys("", true),
            Err(NestError::OutOfRange { .. }),
        ));
    }

    #[test]
    fn string_accessor() {
        let doc = sample();
        assert_eq!(doc.get_string("/name").unwrap(), "widget");
        assert_eq!(doc.get_string("/count").unwrap(), "3");
        assert_eq!(doc.get_string("/empty").unwrap(), "");
        assert_eq!(doc.get_string("/missing").unwrap(), "");
        assert_eq!(doc.get_string("/tags").unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn integer_accessor() {
        let doc = sample();
        assert_eq!(doc.get_i64("/count").unwrap(), 3);
        assert_eq!(doc.get_i64("/price").unwrap(), 9);
        assert_eq!(doc.get_i64("/empty").unwrap(), 0);
        doc.set("/as_text", json!("42")).unwrap();
        assert_eq!(doc.get_i64("/as_text").unwrap(), 42);
        assert!(doc.get_i64("/name").is_err());
        assert!(matches!(
            doc.get_i64("/tags"),
            Err(NestError::TypeMismatch { .. }),
        ));
    }

    #[test]
    fn float_accessor() {
        let doc = sample();
        assert_eq!(doc.get_f64("/price").unwrap(), 9.5);
        assert_eq!(doc.get_f64("/count").unwrap(), 3.0);
        doc.set("/as_text", json!("2.5")).unwrap();
        assert_eq!(doc.get_f64("/as_text").unwrap(), 2.5);
    }

    #[test]
    fn datetime_accessor() {
        let doc = sample();
        let from_epoch = doc.get_datetime("/meta/epoch", None).unwrap();
        assert_eq!(from_epoch.timestamp(), 1700000000);

        let from_text = doc.get_datetime("/meta/created", None).unwrap();
        assert_eq!(from_text.timestamp(), 1704164645);

        doc.set("/meta/compact", json!("2024-01-02 03:04:05")).unwrap();
        let custom = doc
            .get_datetime("/meta/compact", Some("%Y-%m-%d %H:%M:%S"))
            .unwrap();
        assert_eq!(custom, from_text);

        assert!(matches!(
            doc.get_datetime("/name", None),
            Err(NestError::Timestamp { .. }),
        ));
        assert!(matches!(
            doc.get_datetime("/tags", None),
            Err(NestError::TypeMismatch { .. }),
        ));
    }

    #[test]
    fn to_json_string_renders_subtree() {
        let doc = sample();
        assert_eq!(doc.to_json_string("/tags", "").unwrap(), r#"["a","b"]"#);
        assert_eq!(
            doc.to_json_string("/tags", "  ").unwrap(),
            "[\n  \"a\",\n  \"b\"\n]",
        );
    }

    #[test]
    fn copy_nodes_short_names() {
        let src = sample();
        let dest = JsonNest::new();
        dest.copy_nodes("/picked", &src, "/name, /meta/epoch, /nope/deep/x", true)
            .unwrap();
        assert_eq!(
            dest.get("").unwrap(),
            json!({"picked": {"name": "widget", "epoch": 1700000000}}),
        );
    }

    #[test]
    fn copy_nodes_full_paths() {
        let src = sample();
        let dest = JsonNest::new();
        dest.copy_nodes("/picked", &src, "/meta/epoch", false).unwrap();
        assert_eq!(
            dest.get("").unwrap(),
            json!({"picked": {"meta": {"epoch": 1700000000}}}),
        );
    }
}
