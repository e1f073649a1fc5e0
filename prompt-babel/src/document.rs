//! Parsed prompt documents
//!
//! A [`Document`] is built fresh from the raw text of one source file and holds
//! no state beyond it. It is consumed by every selected target and dropped.

use crate::frontmatter::{self, Metadata};

/// Metadata key consumed by every target envelope.
pub const DESCRIPTION_KEY: &str = "description";

/// A prompt document split into metadata fields and body text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Fields from the leading metadata block; empty when there is no block.
    pub metadata: Metadata,
    /// Text after the metadata block, trimmed on both ends.
    pub body: String,
}

impl Document {
    /// Parse raw document text.
    ///
    /// Never fails: text without a well-formed metadata block becomes the body
    /// as a whole (trimmed), with empty metadata.
    pub fn parse(raw: &str) -> Self {
        match frontmatter::split(raw) {
            Some((block, rest)) => Document {
                metadata: frontmatter::parse_fields(block),
                body: rest.trim().to_string(),
            },
            None => Document {
                metadata: Metadata::new(),
                body: raw.trim().to_string(),
            },
        }
    }

    /// The `description` field, or an empty string when absent.
    pub fn description(&self) -> &str {
        self.get(DESCRIPTION_KEY).unwrap_or("")
    }

    /// Look up any metadata field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_metadata() {
        let doc = Document::parse("---\ndescription: Summarize the file\n---\nPlease summarize.\n");
        assert_eq!(doc.description(), "Summarize the file");
        assert_eq!(doc.body, "Please summarize.");
        assert_eq!(doc.metadata.len(), 1);
    }

    #[test]
    fn test_parse_without_metadata_keeps_trimmed_text() {
        let raw = "\n  # Title\n\nSome text.\n\n";
        let doc = Document::parse(raw);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "# Title\n\nSome text.");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Document::parse(""), Document::default());
    }

    #[test]
    fn test_parse_delimiters_only() {
        let doc = Document::parse("---\n---\n");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_parse_unclosed_block_is_body() {
        let raw = "---\ndescription: never closed\nBody";
        let doc = Document::parse(raw);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn test_parse_second_block_belongs_to_body() {
        let raw = "---\ndescription: first\n---\n\nIntro\n\n---\nauthor: someone\n---\n";
        let doc = Document::parse(raw);
        assert_eq!(doc.description(), "first");
        assert_eq!(doc.get("author"), None);
        assert_eq!(doc.body, "Intro\n\n---\nauthor: someone\n---");
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let doc = Document::parse("---\ntitle: Only a title\n---\nBody");
        assert_eq!(doc.description(), "");
        assert_eq!(doc.get("title"), Some("Only a title"));
    }
}
