//! Guard utilities for schema-loading collaborators.
//!
//! Schema loaders repeatedly expect a node of a particular kind ("the value
//! of `title` must be a string"). The `require_*` guards centralize that
//! check: each returns the typed payload when the kind matches and a
//! [`SchemaError`] naming the expected and found kinds - plus the node's
//! location - when it does not.
//!
//! Guards raise `SchemaError`, not a traversal error: a wrong kind is a
//! complaint about the document's meaning, and it propagates unchanged
//! through `accept` when raised inside a visitor handler.
//!
//! # Example
//!
//! ```
//! use yamltraverse::document::node::TraversalNode;
//! use yamltraverse::pointer::JsonPointer;
//! use yamltraverse::schema::require_string;
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str("quill").unwrap();
//! let node = TraversalNode::new(&raw, JsonPointer::root()).unwrap();
//!
//! assert_eq!(require_string(&node).unwrap(), "quill");
//! ```

pub mod error;

pub use error::SchemaError;

use indexmap::IndexMap;

use crate::document::node::{NodeNumber, NodeValue, TraversalNode};

/// Builds the kind-mismatch error for `node`.
fn mismatch(node: &TraversalNode<'_>, expected: &str) -> SchemaError {
    SchemaError::new(
        node.location().clone(),
        format!("expected {}, found {}", expected, node.kind()),
    )
}

/// Returns the node's string payload, or a [`SchemaError`] for any other kind.
pub fn require_string<'doc>(node: &TraversalNode<'doc>) -> Result<&'doc str, SchemaError> {
    match node.value() {
        NodeValue::String(value) => Ok(*value),
        _ => Err(mismatch(node, "string")),
    }
}

/// Returns the node's boolean payload, or a [`SchemaError`] for any other kind.
pub fn require_boolean(node: &TraversalNode<'_>) -> Result<bool, SchemaError> {
    match node.value() {
        NodeValue::Boolean(value) => Ok(*value),
        _ => Err(mismatch(node, "boolean")),
    }
}

/// Returns the node's integral payload.
///
/// Numbers that only exist as floats fail this guard too; the expectation is
/// an exact integer.
pub fn require_integer(node: &TraversalNode<'_>) -> Result<i64, SchemaError> {
    match node.value() {
        NodeValue::Number(NodeNumber::Integer(value)) => Ok(*value),
        _ => Err(mismatch(node, "integer")),
    }
}

/// Returns the node's child sequence, or a [`SchemaError`] for any other kind.
pub fn require_array<'node, 'doc>(
    node: &'node TraversalNode<'doc>,
) -> Result<&'node [TraversalNode<'doc>], SchemaError> {
    match node.value() {
        NodeValue::Array(items) => Ok(items),
        _ => Err(mismatch(node, "array")),
    }
}

/// Returns the node's child mapping, or a [`SchemaError`] for any other kind.
pub fn require_object<'node, 'doc>(
    node: &'node TraversalNode<'doc>,
) -> Result<&'node IndexMap<String, TraversalNode<'doc>>, SchemaError> {
    match node.value() {
        NodeValue::Object(entries) => Ok(entries),
        _ => Err(mismatch(node, "object")),
    }
}
