use crate::common::load_fixture;
use insta::assert_snapshot;
use prompt_babel::{convert, Document, Target};

#[test]
fn test_summarize_parses_into_description_and_body() {
    let doc = Document::parse(&load_fixture("summarize.md"));
    assert_eq!(doc.metadata.len(), 1);
    assert_eq!(doc.description(), "Summarize the file");
    assert_eq!(doc.body, "Please summarize.");
}

#[test]
fn test_summarize_claude_code() {
    let output = convert(&load_fixture("summarize.md"), Target::ClaudeCode);
    assert_snapshot!(output, @r###"
    ---
    description: Summarize the file
    ---

    Please summarize.
    "###);
}

#[test]
fn test_summarize_github_copilot() {
    let output = convert(&load_fixture("summarize.md"), Target::GithubCopilot);
    assert_snapshot!(output, @r###"
    ---
    mode: agent
    description: Summarize the file
    ---

    Please summarize.
    "###);
}

#[test]
fn test_summarize_gemini() {
    let output = convert(&load_fixture("summarize.md"), Target::Gemini);
    assert_snapshot!(output, @r###"
    description = "Summarize the file"

    prompt = """
    Please summarize.
    """
    "###);
}

#[test]
fn test_summarize_cursor() {
    let output = convert(&load_fixture("summarize.md"), Target::Cursor);
    assert_snapshot!(output, @r###"
    <!-- Summarize the file -->

    Please summarize.
    "###);
}

#[test]
fn test_commit_keeps_other_fields_and_horizontal_rule() {
    let doc = Document::parse(&load_fixture("git/commit.md"));
    assert_eq!(doc.get("argument-hint"), Some("[scope]"));
    assert!(doc.body.starts_with("Look at the staged changes"));
    assert!(doc.body.contains("\n---\n"));
    assert!(doc.body.ends_with("under 72 characters."));
}

#[test]
fn test_commit_gemini_escapes_description_only() {
    let output = convert(&load_fixture("git/commit.md"), Target::Gemini);
    assert_snapshot!(output, @r###"
    description = "Write a \"conventional\" commit message"

    prompt = """
    Look at the staged changes and write a commit message.

    ```bash
    git diff --cached
    ```

    ---

    Keep the subject line under 72 characters.
    """
    "###);
}

#[test]
fn test_plain_document_without_metadata() {
    let raw = load_fixture("plain.md");
    let doc = Document::parse(&raw);
    assert!(doc.metadata.is_empty());
    assert_eq!(doc.body, raw.trim());

    assert_eq!(
        convert(&raw, Target::ClaudeCode),
        "---\n---\n\n# Explain\n\nExplain the selected code step by step."
    );
    assert_eq!(
        convert(&raw, Target::GithubCopilot),
        "---\nmode: agent\n---\n\n# Explain\n\nExplain the selected code step by step."
    );
    assert_eq!(
        convert(&raw, Target::Gemini),
        "prompt = \"\"\"\n# Explain\n\nExplain the selected code step by step.\n\"\"\"\n"
    );
    assert_eq!(
        convert(&raw, Target::Cursor),
        "# Explain\n\nExplain the selected code step by step."
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(convert("", Target::Cursor), "");
    assert_eq!(convert("", Target::ClaudeCode), "---\n---\n\n");
}
