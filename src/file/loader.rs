//! Document loading functionality.
//!
//! This module reads YAML or JSON text from files and parses it into the
//! `serde_yaml::Value` tree that `TraversalNode` classifies. YAML 1.2 is a
//! superset of JSON, so `.json` files parse through the same path as `.yaml`
//! files.
//!
//! # Example
//!
//! ```
//! use yamltraverse::file::loader::parse_document;
//!
//! let raw = parse_document("name: quill\nversion: 1\n").unwrap();
//! assert!(raw.is_mapping());
//! ```

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use serde_yaml::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parses YAML or JSON text into a raw document value.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML (or JSON).
pub fn parse_document(text: &str) -> Result<Value> {
    serde_yaml::from_str(text).context("Failed to parse document")
}

/// Loads and parses a document file from the filesystem.
///
/// Files ending in `.gz` are decompressed before parsing; everything else is
/// read as UTF-8 text.
///
/// # Examples
///
/// ```no_run
/// use yamltraverse::file::loader::load_document;
///
/// let raw = load_document("schema.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip, or decompresses to invalid UTF-8
/// - The contents are not valid YAML or JSON
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let gzipped = path.extension().and_then(|ext| ext.to_str()) == Some("gz");

    let text = if gzipped {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let mut text = String::new();
        GzDecoder::new(file)
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to decompress {}", path.display()))?;
        text
    } else {
        fs::read_to_string(path).context("Failed to read file")?
    };

    parse_document(&text)
}
