//! JSON Pointer locations for document traversal.
//!
//! Every traversed node carries a `JsonPointer` describing where it sits in
//! the document. Pointers are immutable: descending into a child derives a
//! new pointer with one more segment and leaves the parent untouched, so
//! sibling branches can never observe each other's positions.
//!
//! # Example
//!
//! ```
//! use yamltraverse::pointer::JsonPointer;
//!
//! let root = JsonPointer::root();
//! let item = root.with_segment("items").with_segment("0");
//!
//! assert!(root.is_root());
//! assert_eq!(item.segments(), ["items", "0"]);
//! assert_eq!(item.to_string(), "/items/0");
//! ```

use std::fmt;

/// An immutable document location expressed as an ordered segment sequence.
///
/// The `Display` form follows RFC 6901: the root pointer renders as the empty
/// string, and each segment is prefixed with `/` with `~` escaped as `~0` and
/// `/` as `~1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPointer {
    segments: Vec<String>,
}

impl JsonPointer {
    /// Creates the root pointer (an empty segment sequence).
    ///
    /// # Example
    ///
    /// ```
    /// use yamltraverse::pointer::JsonPointer;
    ///
    /// let root = JsonPointer::root();
    /// assert!(root.segments().is_empty());
    /// ```
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns a new pointer with `segment` appended.
    ///
    /// The receiver is not modified; callers keep their pointer valid while
    /// children extend it.
    ///
    /// # Example
    ///
    /// ```
    /// use yamltraverse::pointer::JsonPointer;
    ///
    /// let parent = JsonPointer::root().with_segment("a");
    /// let child = parent.with_segment("b");
    ///
    /// assert_eq!(parent.segments(), ["a"]);
    /// assert_eq!(child.segments(), ["a", "b"]);
    /// ```
    pub fn with_segment(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns the pointer's segments in document depth order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if this pointer locates the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/")?;
            for ch in segment.chars() {
                match ch {
                    '~' => write!(f, "~0")?,
                    '/' => write!(f, "~1")?,
                    _ => write!(f, "{}", ch)?,
                }
            }
        }
        Ok(())
    }
}
