//! Properties that hold for every document and every target.

use prompt_babel::{Document, Target};
use proptest::prelude::*;

// Text that never opens with a metadata delimiter.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:#*\n]{0,200}"
}

// Body as the parser hands it over: trimmed and free of `---`.
fn body() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9#*]([a-zA-Z0-9 .,:#*\n]{0,200}[a-zA-Z0-9.])?"
}

// Description as the parser hands it over: one trimmed line.
fn description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9\"]([a-zA-Z0-9 .,:\"]{0,40}[a-zA-Z0-9\"])?"
}

fn target() -> impl Strategy<Value = Target> {
    prop::sample::select(Target::ALL.to_vec())
}

proptest! {
    #[test]
    fn text_without_block_is_trimmed_body(text in plain_text()) {
        let doc = Document::parse(&text);
        prop_assert!(doc.metadata.is_empty());
        prop_assert_eq!(doc.body, text.trim());
    }

    #[test]
    fn colon_free_lines_contribute_nothing(
        keys in prop::collection::btree_set("[a-z][a-z_]{0,10}", 0..6),
        noise in prop::collection::vec("[a-z ]{0,20}", 0..6),
    ) {
        let mut block = String::new();
        for (i, key) in keys.iter().enumerate() {
            block.push_str(&format!("{key}: value {i}\n"));
            if let Some(line) = noise.get(i) {
                block.push_str(line);
                block.push('\n');
            }
        }
        let raw = format!("---\n{block}---\nBody");
        let doc = Document::parse(&raw);

        let mut parsed: Vec<_> = doc.metadata.keys().cloned().collect();
        parsed.sort();
        prop_assert_eq!(parsed, keys.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(doc.body, "Body");
    }

    #[test]
    fn claude_code_round_trips(desc in description(), body in body()) {
        let output = Target::ClaudeCode.emit(&desc, &body);
        let doc = Document::parse(&output);
        prop_assert_eq!(doc.description(), desc.as_str());
        prop_assert_eq!(doc.body, body);
    }

    #[test]
    fn claude_code_round_trips_without_description(body in body()) {
        let doc = Document::parse(&Target::ClaudeCode.emit("", &body));
        prop_assert!(doc.metadata.is_empty());
        prop_assert_eq!(doc.body, body);
    }

    #[test]
    fn body_is_copied_verbatim(target in target(), desc in description(), body in body()) {
        let output = target.emit(&desc, &body);
        prop_assert!(output.contains(&body));
    }

    #[test]
    fn empty_description_is_omitted(target in target(), body in body()) {
        let output = target.emit("", &body);
        prop_assert!(!output.contains("description"));
        prop_assert!(!output.contains("<!--"));
    }
}
