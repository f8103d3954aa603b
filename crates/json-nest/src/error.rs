//! Error and value-kind types shared by the engine.

use serde_json::Value;
use thiserror::Error;

// ── Node kinds ────────────────────────────────────────────────────────────

/// The six JSON value kinds, used to name the offending value in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Object,
    Array,
}

impl NodeKind {
    /// Kind of a concrete value.
    pub fn of(val: &Value) -> Self {
        match val {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Object => "object",
            NodeKind::Array => "array",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Error ─────────────────────────────────────────────────────────────────

/// Every way a document operation can fail.
///
/// `path` fields carry the slash-path prefix consumed up to the failing
/// segment, so callers can tell which part of a long path went wrong.
#[derive(Debug, Error)]
pub enum NestError {
    /// Source text or bytes were not valid JSON, or a scalar string could
    /// not be coerced to the requested type.
    #[error("malformed JSON input: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid timestamp at {path}: {reason}")]
    Timestamp { path: String, reason: String },

    /// A path segment expects a container kind the actual node does not
    /// have.
    #[error("type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: NodeKind,
        actual: NodeKind,
    },

    #[error("index {index} out of range at {path} (len {len})")]
    OutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    /// A traversal invariant was violated. Indicates an engine bug, not a
    /// data bug.
    #[error("internal inconsistency: {0}")]
    Internal(String),

    /// The byte source for a document could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NestError {
    pub(crate) fn type_mismatch(path: &str, expected: NodeKind, actual: &Value) -> Self {
        NestError::TypeMismatch {
            path: path.to_string(),
            expected,
            actual: NodeKind::of(actual),
        }
    }
}
