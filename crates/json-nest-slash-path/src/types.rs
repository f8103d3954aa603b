//! Type definitions for slash paths.

use std::fmt;

/// A single component of a slash path.
///
/// `Key` addresses an object member, `Index` an array element. The
/// classification is purely syntactic (see [`crate::parse_component`])
/// and never consults the shape of the document being addressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// A parsed slash path. An empty path addresses the document root.
pub type Path = Vec<Segment>;

impl Segment {
    /// Build a key segment from anything string-like.
    pub fn key(key: impl Into<String>) -> Self {
        Segment::Key(key.into())
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Segment::Key(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// The object key, if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(key) => Some(key),
            Segment::Index(_) => None,
        }
    }

    /// The array index, if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Key(_) => None,
            Segment::Index(idx) => Some(*idx),
        }
    }
}

impl fmt::Display for Segment {
    /// Renders the segment so that re-parsing yields the same segment:
    /// keys that would read back as indices (or as index `0`, for the
    /// empty key) are wrapped in double quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(idx) => write!(f, "{idx}"),
            Segment::Key(key) => {
                if key.is_empty() || crate::is_index_literal(key) {
                    write!(f, "\"{key}\"")
                } else {
                    f.write_str(key)
                }
            }
        }
    }
}

impl From<usize> for Segment {
    fn from(idx: usize) -> Self {
        Segment::Index(idx)
    }
}

impl From<&str> for Segment {
    fn from(raw: &str) -> Self {
        crate::parse_component(raw)
    }
}
