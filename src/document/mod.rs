//! Document classification and visitor dispatch.
//!
//! This module wraps raw parsed values in `TraversalNode`s that know their
//! own kind and location, and drives the single-step `accept` dispatch to a
//! visitor.

pub mod error;
pub mod node;
