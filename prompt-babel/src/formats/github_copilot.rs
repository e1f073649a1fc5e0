//! GitHub Copilot prompt files (`.prompt.md`)

/// Wrap `body` in a metadata block that runs the prompt in agent mode.
pub fn emit(description: &str, body: &str) -> String {
    let mut output = String::from("---\nmode: agent\n");
    if !description.is_empty() {
        output.push_str("description: ");
        output.push_str(description);
        output.push('\n');
    }
    output.push_str("---\n\n");
    output.push_str(body);
    output
}
