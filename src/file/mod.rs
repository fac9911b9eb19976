//! File I/O operations for documents.
//!
//! This module provides functionality to load YAML or JSON documents from
//! disk into the raw value tree the traversal engine consumes, with
//! transparent handling of gzip-compressed files.

pub mod loader;
