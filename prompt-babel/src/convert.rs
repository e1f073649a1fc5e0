//! Single-document conversion
//!
//! Glue between the parser and the envelopes, plus the path conventions that
//! map a source file onto its output file for a given target.

use crate::document::Document;
use crate::target::Target;
use std::path::{Path, PathBuf};

/// Extension of source documents, without the dot.
pub const SOURCE_EXTENSION: &str = "md";

/// A converted document ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Source path relative to the source root, without extension
    pub identifier: String,
    /// Full output path (target directory joined with the relative path)
    pub output: PathBuf,
    /// Rendered envelope
    pub content: String,
}

/// Parse `raw` and render it for `target`.
pub fn convert(raw: &str, target: Target) -> String {
    let doc = Document::parse(raw);
    target.emit(doc.description(), &doc.body)
}

/// Convert a document found at `relative` below the source root.
pub fn convert_document(relative: &Path, raw: &str, target: Target, target_dir: &Path) -> Conversion {
    Conversion {
        identifier: identifier_for(relative),
        output: target_dir.join(output_relative_path(relative, target)),
        content: convert(raw, target),
    }
}

/// Relative path with the `.md` extension dropped, always `/`-separated.
pub fn identifier_for(relative: &Path) -> String {
    let stem = strip_source_extension(relative);
    stem.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Relative output path: the `.md` extension replaced by the target's suffix.
pub fn output_relative_path(relative: &Path, target: Target) -> PathBuf {
    let stem = strip_source_extension(relative);
    let mut name = stem
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(target.extension());
    stem.with_file_name(name)
}

fn strip_source_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == SOURCE_EXTENSION => path.with_extension(""),
        _ => path.to_path_buf(),
    }
}
