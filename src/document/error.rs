//! Error types for document classification.

use crate::pointer::JsonPointer;
use std::fmt;

/// Errors raised while classifying a raw document value.
///
/// Classification is total over the six supported kinds; these errors cover
/// the raw shapes outside that model. They abort construction of the whole
/// subtree and carry the location of the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The raw value has a shape outside the six supported kinds.
    UnsupportedValue {
        location: JsonPointer,
        found: String,
    },
    /// A mapping key is not a string.
    NonStringKey {
        location: JsonPointer,
        found: String,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalError::UnsupportedValue { location, found } => {
                write!(f, "Unsupported value ({}) at #{}", found, location)
            }
            TraversalError::NonStringKey { location, found } => {
                write!(f, "Mapping key must be a string, found {} at #{}", found, location)
            }
        }
    }
}

impl std::error::Error for TraversalError {}
