//! Compact and indented JSON rendering.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::NestError;

/// Render `value` as JSON text. An empty `indent` gives the compact form;
/// any other string becomes one indentation level.
pub fn format_json(value: &Value, indent: &str) -> Result<String, NestError> {
    if indent.is_empty() {
        return Ok(serde_json::to_string(value)?);
    }
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|e| NestError::Internal(e.to_string()))
}

/// Re-encode arbitrary JSON text with the given indent.
pub fn format_json_str(text: &str, indent: &str) -> Result<String, NestError> {
    let value: Value = serde_json::from_str(text)?;
    format_json(&value, indent)
}
