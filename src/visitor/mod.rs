//! The visitor capability consumed by document traversal.
//!
//! A `Visitor` supplies one handler per document kind plus a finishing hook.
//! `TraversalNode::accept` is the only caller: it dispatches exactly one kind
//! handler, then always calls `finished_visiting`, whose `Some` result
//! overrides the handler's. Handlers return `Result`, so a visitor aborts a
//! traversal by returning an error, which propagates out of `accept`
//! untouched.
//!
//! Composite handlers receive pre-built child nodes and recurse by calling
//! `accept` on them; nothing recurses on the visitor's behalf.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use yamltraverse::document::node::TraversalNode;
//! use yamltraverse::pointer::JsonPointer;
//! use yamltraverse::visitor::Visitor;
//!
//! /// Collects the pointer of every string in the document.
//! #[derive(Default)]
//! struct StringLocations {
//!     found: Vec<String>,
//! }
//!
//! impl Visitor for StringLocations {
//!     type Output = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_null(&mut self, _: &JsonPointer) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn visit_boolean(&mut self, _: bool, _: &JsonPointer) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn visit_number(&mut self, _: f64, _: &JsonPointer) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn visit_string(&mut self, _: &str, location: &JsonPointer) -> Result<(), Self::Error> {
//!         self.found.push(location.to_string());
//!         Ok(())
//!     }
//!
//!     fn visit_array(
//!         &mut self,
//!         items: &[TraversalNode<'_>],
//!         _: &JsonPointer,
//!     ) -> Result<(), Self::Error> {
//!         for item in items {
//!             item.accept(self)?;
//!         }
//!         Ok(())
//!     }
//!
//!     fn visit_object(
//!         &mut self,
//!         entries: &IndexMap<String, TraversalNode<'_>>,
//!         _: &JsonPointer,
//!     ) -> Result<(), Self::Error> {
//!         for child in entries.values() {
//!             child.accept(self)?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str("{a: x, b: [y]}").unwrap();
//! let node = TraversalNode::new(&raw, JsonPointer::root()).unwrap();
//!
//! let mut visitor = StringLocations::default();
//! node.accept(&mut visitor).unwrap();
//! assert_eq!(visitor.found, ["/a", "/b/0"]);
//! ```

use indexmap::IndexMap;

use crate::document::node::TraversalNode;
use crate::pointer::JsonPointer;

/// Kind-polymorphic handlers for one traversal step.
///
/// `Output` is whatever the visitor produces per visited node; `Error` is the
/// visitor's own failure type, propagated unchanged through `accept`.
pub trait Visitor {
    type Output;
    type Error;

    /// Handles a null value (including absent values).
    fn visit_null(&mut self, location: &JsonPointer) -> Result<Self::Output, Self::Error>;

    /// Handles a boolean value.
    fn visit_boolean(
        &mut self,
        value: bool,
        location: &JsonPointer,
    ) -> Result<Self::Output, Self::Error>;

    /// Handles a number holding an exact integral value.
    ///
    /// Visitors that do not care about the distinction implement only
    /// `visit_number`; the default forwards the integer as a float.
    fn visit_integer(
        &mut self,
        value: i64,
        location: &JsonPointer,
    ) -> Result<Self::Output, Self::Error> {
        self.visit_number(value as f64, location)
    }

    /// Handles a non-integral number.
    fn visit_number(
        &mut self,
        value: f64,
        location: &JsonPointer,
    ) -> Result<Self::Output, Self::Error>;

    /// Handles a string value.
    fn visit_string(
        &mut self,
        value: &str,
        location: &JsonPointer,
    ) -> Result<Self::Output, Self::Error>;

    /// Handles an array; `items` are the pre-built child nodes in element
    /// order, each already located beneath `location`.
    fn visit_array(
        &mut self,
        items: &[TraversalNode<'_>],
        location: &JsonPointer,
    ) -> Result<Self::Output, Self::Error>;

    /// Handles an object; `entries` maps each key to its pre-built child
    /// node, already located beneath `location`.
    fn visit_object(
        &mut self,
        entries: &IndexMap<String, TraversalNode<'_>>,
        location: &JsonPointer,
    ) -> Result<Self::Output, Self::Error>;

    /// Called exactly once after every kind handler, with the same location.
    ///
    /// Returning `Ok(Some(value))` replaces the kind handler's result as the
    /// outcome of `accept`; `Ok(None)` keeps it. The default never overrides.
    fn finished_visiting(
        &mut self,
        _location: &JsonPointer,
    ) -> Result<Option<Self::Output>, Self::Error> {
        Ok(None)
    }
}
