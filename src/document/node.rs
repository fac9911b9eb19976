//! Traversal node representation with location tracking.
//!
//! This module provides the core data structures for traversing parsed
//! documents. Each raw value is wrapped in a `TraversalNode` that records its
//! classified kind and its `JsonPointer` location, so visitors always know
//! both the shape of the value they receive and where in the document it
//! came from.
//!
//! Classification happens exactly once, when the node is constructed, and
//! composite values eagerly wrap their children with extended locations.
//! Nodes are never mutated afterwards; equality is structural and includes
//! the location.
//!
//! # Example
//!
//! ```
//! use yamltraverse::document::node::{Kind, TraversalNode};
//! use yamltraverse::pointer::JsonPointer;
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str("{name: quill}").unwrap();
//! let node = TraversalNode::new(&raw, JsonPointer::root()).unwrap();
//!
//! assert_eq!(node.kind(), Kind::Object);
//! ```

use indexmap::IndexMap;
use serde_yaml::Value;
use std::fmt;

use super::error::TraversalError;
use crate::pointer::JsonPointer;
use crate::visitor::Visitor;

/// The six kinds a document value can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Returns the kind name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified document number (integer or float).
///
/// The integral representation is kept whenever the source value is exactly
/// representable as an `i64`; everything else is carried as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeNumber {
    Integer(i64),
    Float(f64),
}

impl NodeNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            NodeNumber::Integer(i) => *i as f64,
            NodeNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, NodeNumber::Integer(_))
    }
}

impl fmt::Display for NodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeNumber::Integer(i) => write!(f, "{}", i),
            NodeNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// The classified payload of a traversal node.
///
/// Composite variants hold pre-built child nodes, so visitors receive
/// traversable children rather than raw values. String payloads borrow from
/// the raw document; the `'doc` lifetime ties every node to it.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue<'doc> {
    Null,
    Boolean(bool),
    Number(NodeNumber),
    String(&'doc str),
    /// Ordered child nodes, one per element.
    Array(Vec<TraversalNode<'doc>>),
    /// Child nodes keyed by their mapping key.
    Object(IndexMap<String, TraversalNode<'doc>>),
}

impl NodeValue<'_> {
    /// Returns the kind this payload classifies as.
    pub fn kind(&self) -> Kind {
        match self {
            NodeValue::Null => Kind::Null,
            NodeValue::Boolean(_) => Kind::Boolean,
            NodeValue::Number(_) => Kind::Number,
            NodeValue::String(_) => Kind::String,
            NodeValue::Array(_) => Kind::Array,
            NodeValue::Object(_) => Kind::Object,
        }
    }
}

/// A classified, located wrapper around one raw document value.
///
/// Construction classifies the raw value into exactly one [`Kind`] and, for
/// arrays and objects, eagerly wraps every child with a location extended by
/// the child's index or key. The node is immutable afterwards: `accept`
/// neither re-classifies nor changes the location.
///
/// # Example
///
/// ```
/// use yamltraverse::document::node::{NodeValue, TraversalNode};
/// use yamltraverse::pointer::JsonPointer;
///
/// let raw: serde_yaml::Value = serde_yaml::from_str("[true]").unwrap();
/// let node = TraversalNode::new(&raw, JsonPointer::root()).unwrap();
///
/// if let NodeValue::Array(items) = node.value() {
///     assert_eq!(items[0].location().segments(), ["0"]);
/// } else {
///     panic!("Expected Array variant");
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalNode<'doc> {
    value: NodeValue<'doc>,
    location: JsonPointer,
}

impl<'doc> TraversalNode<'doc> {
    /// Classifies `raw` and wraps it as a node located at `location`.
    ///
    /// # Errors
    ///
    /// Returns a [`TraversalError`] when the raw value (or any value nested
    /// inside it) falls outside the six supported kinds: tagged values and
    /// non-string mapping keys. The error names the offending shape and its
    /// location, and no node is produced for the subtree.
    pub fn new(raw: &'doc Value, location: JsonPointer) -> Result<Self, TraversalError> {
        let value = classify(raw, &location)?;
        Ok(Self { value, location })
    }

    /// Creates a null node for an absent value.
    ///
    /// Callers that looked a value up and found nothing use this instead of
    /// manufacturing a raw null; visitors cannot tell the two apart.
    pub fn absent(location: JsonPointer) -> Self {
        Self {
            value: NodeValue::Null,
            location,
        }
    }

    /// Classifies an optional raw value, treating `None` like [`absent`].
    ///
    /// [`absent`]: TraversalNode::absent
    pub fn from_optional(
        raw: Option<&'doc Value>,
        location: JsonPointer,
    ) -> Result<Self, TraversalError> {
        match raw {
            Some(value) => Self::new(value, location),
            None => Ok(Self::absent(location)),
        }
    }

    /// Returns the node's classified kind.
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Returns the node's location within the document.
    pub fn location(&self) -> &JsonPointer {
        &self.location
    }

    /// Returns the node's classified payload.
    pub fn value(&self) -> &NodeValue<'doc> {
        &self.value
    }

    /// Dispatches this node to the matching handler of `visitor`.
    ///
    /// Exactly one kind handler runs, receiving the payload and this node's
    /// location. Afterwards `finished_visiting` is invoked exactly once with
    /// the same location; if it returns `Some`, that value replaces the
    /// handler's result. Array and object handlers receive the pre-built
    /// child nodes and recurse themselves if they want to - the engine never
    /// descends on its own.
    ///
    /// # Errors
    ///
    /// Any error returned by a handler or by `finished_visiting` is
    /// propagated unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use yamltraverse::document::node::TraversalNode;
    /// use yamltraverse::pointer::JsonPointer;
    /// use yamltraverse::visitor::Visitor;
    ///
    /// struct KindName;
    ///
    /// impl Visitor for KindName {
    ///     type Output = &'static str;
    ///     type Error = std::convert::Infallible;
    ///
    ///     fn visit_null(&mut self, _: &JsonPointer) -> Result<&'static str, Self::Error> {
    ///         Ok("null")
    ///     }
    ///
    ///     fn visit_boolean(&mut self, _: bool, _: &JsonPointer) -> Result<&'static str, Self::Error> {
    ///         Ok("boolean")
    ///     }
    ///
    ///     fn visit_number(&mut self, _: f64, _: &JsonPointer) -> Result<&'static str, Self::Error> {
    ///         Ok("number")
    ///     }
    ///
    ///     fn visit_string(&mut self, _: &str, _: &JsonPointer) -> Result<&'static str, Self::Error> {
    ///         Ok("string")
    ///     }
    ///
    ///     fn visit_array(
    ///         &mut self,
    ///         _: &[TraversalNode<'_>],
    ///         _: &JsonPointer,
    ///     ) -> Result<&'static str, Self::Error> {
    ///         Ok("array")
    ///     }
    ///
    ///     fn visit_object(
    ///         &mut self,
    ///         _: &IndexMap<String, TraversalNode<'_>>,
    ///         _: &JsonPointer,
    ///     ) -> Result<&'static str, Self::Error> {
    ///         Ok("object")
    ///     }
    /// }
    ///
    /// let raw: serde_yaml::Value = serde_yaml::from_str("true").unwrap();
    /// let node = TraversalNode::new(&raw, JsonPointer::root()).unwrap();
    /// assert_eq!(node.accept(&mut KindName).unwrap(), "boolean");
    /// ```
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        let result = match &self.value {
            NodeValue::Null => visitor.visit_null(&self.location)?,
            NodeValue::Boolean(value) => visitor.visit_boolean(*value, &self.location)?,
            NodeValue::Number(NodeNumber::Integer(value)) => {
                visitor.visit_integer(*value, &self.location)?
            }
            NodeValue::Number(NodeNumber::Float(value)) => {
                visitor.visit_number(*value, &self.location)?
            }
            NodeValue::String(value) => visitor.visit_string(value, &self.location)?,
            NodeValue::Array(items) => visitor.visit_array(items, &self.location)?,
            NodeValue::Object(entries) => visitor.visit_object(entries, &self.location)?,
        };

        match visitor.finished_visiting(&self.location)? {
            Some(overriding) => Ok(overriding),
            None => Ok(result),
        }
    }
}

/// Classifies a raw value, recursing into composites.
fn classify<'doc>(
    raw: &'doc Value,
    location: &JsonPointer,
) -> Result<NodeValue<'doc>, TraversalError> {
    let value = match raw {
        Value::Null => NodeValue::Null,
        Value::Bool(value) => NodeValue::Boolean(*value),
        Value::Number(number) => NodeValue::Number(classify_number(number, location)?),
        Value::String(text) => NodeValue::String(text),
        Value::Sequence(elements) => {
            let mut children = Vec::with_capacity(elements.len());
            for (index, element) in elements.iter().enumerate() {
                let child_location = location.with_segment(index.to_string());
                children.push(TraversalNode::new(element, child_location)?);
            }
            NodeValue::Array(children)
        }
        Value::Mapping(entries) => {
            let mut children = IndexMap::with_capacity(entries.len());
            for (key, entry) in entries {
                let key = match key {
                    Value::String(key) => key,
                    other => {
                        return Err(TraversalError::NonStringKey {
                            location: location.clone(),
                            found: describe(other),
                        })
                    }
                };
                let child = TraversalNode::new(entry, location.with_segment(key.as_str()))?;
                children.insert(key.clone(), child);
            }
            NodeValue::Object(children)
        }
        Value::Tagged(tagged) => {
            return Err(TraversalError::UnsupportedValue {
                location: location.clone(),
                found: format!("tagged value {}", tagged.tag),
            })
        }
    };

    Ok(value)
}

/// Splits a raw number into integer and float representations.
fn classify_number(
    number: &serde_yaml::Number,
    location: &JsonPointer,
) -> Result<NodeNumber, TraversalError> {
    if let Some(integer) = number.as_i64() {
        Ok(NodeNumber::Integer(integer))
    } else if let Some(float) = number.as_f64() {
        Ok(NodeNumber::Float(float))
    } else {
        Err(TraversalError::UnsupportedValue {
            location: location.clone(),
            found: format!("number {}", number),
        })
    }
}

/// Renders a short description of a raw value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(value) => format!("boolean {}", value),
        Value::Number(number) => format!("number {}", number),
        Value::String(text) => format!("string {:?}", text),
        Value::Sequence(_) => "sequence".to_string(),
        Value::Mapping(_) => "mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
