//! Metadata block scanner
//!
//! Prompt documents may open with a block of flat `key: value` lines fenced by
//! two `---` lines:
//!
//! ```text
//! ---
//! description: Summarize the file
//! ---
//! Please summarize.
//! ```
//!
//! Only single-level string values are understood. Nested values, lists and
//! multi-line scalars are not interpreted; such lines are either split on
//! their first colon or skipped.
//!
//! Only the first fenced block counts. Anything after its closing delimiter,
//! further `---` lines included, is body text.

use std::collections::HashMap;

/// Flat key/value fields read from a metadata block.
pub type Metadata = HashMap<String, String>;

const DELIMITER: &str = "---";

/// Split `raw` into `(block, rest)` when it opens with a metadata block.
///
/// The opening line must be a delimiter line, and the block ends at the first
/// delimiter line after it. `rest` starts right after the closing delimiter's
/// line break (or is empty when the delimiter ends the text). Returns `None`
/// when either delimiter is missing.
///
/// A closing delimiter that ends the text with no line break after it still
/// closes the block. This is more lenient than a strict
/// `---\n...\n---\n` match, which would leave `"---\ndescription: x\n---"`
/// as plain body; here it yields the field and an empty body.
pub fn split(raw: &str) -> Option<(&str, &str)> {
    let (first, after_open) = raw.split_once('\n')?;
    if !is_delimiter(first) {
        return None;
    }

    let mut offset = 0;
    loop {
        let remaining = &after_open[offset..];
        let (line, line_len, terminated) = match remaining.find('\n') {
            Some(pos) => (&remaining[..pos], pos + 1, true),
            None => (remaining, remaining.len(), false),
        };

        if is_delimiter(line) {
            // The separating newline before the closing delimiter is not part of the block.
            let block = after_open[..offset].strip_suffix('\n').unwrap_or("");
            let rest = &after_open[offset + line_len..];
            return Some((block, rest));
        }

        if !terminated {
            return None;
        }
        offset += line_len;
    }
}

/// Parse the lines of a metadata block into fields.
///
/// Each line is split on its first colon; the colon must not be the first
/// character. Keys and values are trimmed. Later keys overwrite earlier ones.
pub fn parse_fields(block: &str) -> Metadata {
    let mut fields = Metadata::new();
    for line in block.split('\n') {
        match line.find(':') {
            Some(idx) if idx > 0 => {
                let key = line[..idx].trim();
                let value = line[idx + 1..].trim();
                fields.insert(key.to_string(), value.to_string());
            }
            _ => {}
        }
    }
    fields
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}
