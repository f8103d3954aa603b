//! Slash-delimited path syntax for json-nest.
//!
//! A path addresses a node in a JSON document: `/a/b/2` walks object keys
//! `a` and `b`, then array index `2`. Whether a component is an object key
//! or an array index is decided by syntax alone:
//!
//! - an empty component is array index `0`;
//! - a component wrapped in a pair of double quotes is always an object
//!   key, even when it looks numeric (`/"2"` is the key `2`, `/2` is
//!   index 2);
//! - a component that parses as a base-10 unsigned integer is an array
//!   index;
//! - anything else is an object key, verbatim.
//!
//! Leading and trailing slashes are trimmed before splitting; a path that
//! is empty after trimming addresses the document root.
//!
//! # Example
//!
//! ```
//! use json_nest_slash_path::{parse_slash_path, Segment};
//!
//! let path = parse_slash_path("/users/0/\"42\"");
//! assert_eq!(path, vec![
//!     Segment::key("users"),
//!     Segment::Index(0),
//!     Segment::key("42"),
//! ]);
//! ```

pub mod get;
pub mod types;

pub use get::{get, get_mut};
pub use types::{Path, Segment};

/// Parse a slash path into segments.
///
/// # Example
///
/// ```
/// use json_nest_slash_path::{parse_slash_path, Segment};
///
/// assert_eq!(parse_slash_path(""), Vec::<Segment>::new());
/// assert_eq!(parse_slash_path("///"), Vec::<Segment>::new());
/// assert_eq!(
///     parse_slash_path("/a/2"),
///     vec![Segment::key("a"), Segment::Index(2)],
/// );
/// // Interior empty components are index 0.
/// assert_eq!(
///     parse_slash_path("/a//b"),
///     vec![Segment::key("a"), Segment::Index(0), Segment::key("b")],
/// );
/// ```
pub fn parse_slash_path(path: &str) -> Path {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(parse_component).collect()
}

/// Classify one path component.
///
/// # Example
///
/// ```
/// use json_nest_slash_path::{parse_component, Segment};
///
/// assert_eq!(parse_component("2"), Segment::Index(2));
/// assert_eq!(parse_component("\"2\""), Segment::key("2"));
/// assert_eq!(parse_component(""), Segment::Index(0));
/// assert_eq!(parse_component("-2"), Segment::key("-2"));
/// assert_eq!(parse_component("name"), Segment::key("name"));
/// ```
pub fn parse_component(raw: &str) -> Segment {
    if raw.is_empty() {
        return Segment::Index(0);
    }
    if raw.starts_with('"') && raw.ends_with('"') {
        return Segment::Key(raw.trim_matches('"').to_string());
    }
    match raw.parse::<usize>() {
        Ok(idx) => Segment::Index(idx),
        Err(_) => Segment::Key(raw.to_string()),
    }
}

/// Format segments back into a slash path.
///
/// Returns an empty string for the root path. Keys that would re-parse as
/// indices come back quoted, so `parse_slash_path(&format_slash_path(p))`
/// reproduces `p`.
///
/// # Example
///
/// ```
/// use json_nest_slash_path::{format_slash_path, Segment};
///
/// assert_eq!(format_slash_path(&[]), "");
/// assert_eq!(
///     format_slash_path(&[Segment::key("a"), Segment::Index(2)]),
///     "/a/2",
/// );
/// assert_eq!(
///     format_slash_path(&[Segment::key("2")]),
///     "/\"2\"",
/// );
/// ```
pub fn format_slash_path(path: &[Segment]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for segment in path {
        out.push('/');
        out.push_str(&segment.to_string());
    }
    out
}

/// Check if a path addresses the document root.
///
/// # Example
///
/// ```
/// use json_nest_slash_path::{is_root, Segment};
///
/// assert!(is_root(&[]));
/// assert!(!is_root(&[Segment::Index(0)]));
/// ```
pub fn is_root(path: &[Segment]) -> bool {
    path.is_empty()
}

/// Check if a raw component would be read as an array index.
///
/// # Example
///
/// ```
/// use json_nest_slash_path::is_index_literal;
///
/// assert!(is_index_literal("0"));
/// assert!(is_index_literal("123"));
/// assert!(!is_index_literal("-1"));
/// assert!(!is_index_literal("1.5"));
/// assert!(!is_index_literal("abc"));
/// assert!(!is_index_literal(""));
/// ```
pub fn is_index_literal(raw: &str) -> bool {
    raw.parse::<usize>().is_ok()
}
