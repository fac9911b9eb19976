//! The domain error raised by schema guard utilities.

use crate::pointer::JsonPointer;
use std::fmt;

/// A schema-level complaint about a document value.
///
/// Raised by the `require_*` guards when a node's kind fails an expectation;
/// schema-loading visitors also construct these directly for their own
/// checks. The message is rendered against the location's `#` fragment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    location: JsonPointer,
    message: String,
}

impl SchemaError {
    /// Creates a schema error for the value at `location`.
    pub fn new(location: JsonPointer, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    /// Returns the location the error refers to.
    pub fn location(&self) -> &JsonPointer {
        &self.location
    }

    /// Returns the error message without the location prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.location, self.message)
    }
}

impl std::error::Error for SchemaError {}
