//! yamltraverse - typed visitor traversal over parsed YAML/JSON documents.
//!
//! This crate wraps a parsed document value (a [`serde_yaml::Value`]) in a
//! [`document::node::TraversalNode`] that classifies the value into one of six
//! kinds (null, boolean, number, string, array, object) and carries a
//! [`pointer::JsonPointer`] locating it within the document. A single
//! `accept` call dispatches the node to the matching handler of a
//! [`visitor::Visitor`], so consumers can build schemas, indexes, or reports
//! from a document without re-implementing kind inspection and location
//! bookkeeping at every call site.
//!
//! The engine never recurses into composites on its own: array and object
//! handlers receive the pre-built child nodes and decide themselves whether
//! to call `accept` on them.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use yamltraverse::document::node::TraversalNode;
//! use yamltraverse::pointer::JsonPointer;
//! use yamltraverse::visitor::Visitor;
//!
//! /// Counts the scalar leaves of a document.
//! struct LeafCounter;
//!
//! impl Visitor for LeafCounter {
//!     type Output = usize;
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_null(&mut self, _: &JsonPointer) -> Result<usize, Self::Error> {
//!         Ok(1)
//!     }
//!
//!     fn visit_boolean(&mut self, _: bool, _: &JsonPointer) -> Result<usize, Self::Error> {
//!         Ok(1)
//!     }
//!
//!     fn visit_number(&mut self, _: f64, _: &JsonPointer) -> Result<usize, Self::Error> {
//!         Ok(1)
//!     }
//!
//!     fn visit_string(&mut self, _: &str, _: &JsonPointer) -> Result<usize, Self::Error> {
//!         Ok(1)
//!     }
//!
//!     fn visit_array(
//!         &mut self,
//!         items: &[TraversalNode<'_>],
//!         _: &JsonPointer,
//!     ) -> Result<usize, Self::Error> {
//!         let mut total = 0;
//!         for item in items {
//!             total += item.accept(self)?;
//!         }
//!         Ok(total)
//!     }
//!
//!     fn visit_object(
//!         &mut self,
//!         entries: &IndexMap<String, TraversalNode<'_>>,
//!         _: &JsonPointer,
//!     ) -> Result<usize, Self::Error> {
//!         let mut total = 0;
//!         for child in entries.values() {
//!             total += child.accept(self)?;
//!         }
//!         Ok(total)
//!     }
//! }
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str("{a: [1, 2], b: true}").unwrap();
//! let node = TraversalNode::new(&raw, JsonPointer::root()).unwrap();
//! let leaves = node.accept(&mut LeafCounter).unwrap();
//! assert_eq!(leaves, 3);
//! ```

pub mod document;
pub mod file;
pub mod pointer;
pub mod schema;
pub mod visitor;
