//! json-nest — a slash-path addressed JSON document store.
//!
//! A [`JsonNest`] owns one JSON document and lets callers read, write,
//! and delete nested values by slash-delimited path, without a schema:
//!
//! ```
//! use json_nest::JsonNest;
//! use serde_json::json;
//!
//! let doc = JsonNest::new();
//! doc.set("/servers/0/host", json!("db-1")).unwrap();
//! doc.set("/servers/0/port", json!(5432)).unwrap();
//! assert_eq!(
//!     doc.get("").unwrap(),
//!     json!({"servers": [{"host": "db-1", "port": 5432}]}),
//! );
//! assert_eq!(doc.get_i64("/servers/0/port").unwrap(), 5432);
//! ```
//!
//! Path components are split on `/`: an unquoted integer component is an
//! array index, a `""`-quoted component is always an object key, and an
//! empty component is index `0` (see the `json-nest-slash-path` crate).
//! Writes create missing intermediate containers, including null padding
//! of arrays up to the target index; reads treat absent object keys as
//! `null`; deletes splice arrays and collapse a deleted singleton array
//! to `null`.

pub mod delete;
pub mod error;
pub mod holder;
pub mod mutate;
pub mod nav;
pub mod pretty;

pub use error::{NestError, NodeKind};
pub use holder::JsonNest;
pub use pretty::{format_json, format_json_str};

pub use json_nest_slash_path::{format_slash_path, parse_slash_path, Path, Segment};
pub use serde_json::Value;
