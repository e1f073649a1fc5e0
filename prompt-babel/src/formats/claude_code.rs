//! Claude Code slash commands (`.md` with a metadata block)

/// Wrap `body` in a metadata block carrying the description.
pub fn emit(description: &str, body: &str) -> String {
    let mut output = String::from("---\n");
    if !description.is_empty() {
        output.push_str("description: ");
        output.push_str(description);
        output.push('\n');
    }
    output.push_str("---\n\n");
    output.push_str(body);
    output
}
