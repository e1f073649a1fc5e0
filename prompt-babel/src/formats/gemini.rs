//! Gemini CLI custom commands (`.toml`)
//!
//! The body goes into a multi-line basic string (`"""`), the description into
//! a single-line basic string. Only double quotes in the description are
//! escaped; the body is written as-is.

/// Render the command as a TOML document.
pub fn emit(description: &str, body: &str) -> String {
    let mut output = String::new();
    if !description.is_empty() {
        output.push_str("description = \"");
        output.push_str(&escape_quotes(description));
        output.push_str("\"\n\n");
    }
    output.push_str("prompt = \"\"\"\n");
    output.push_str(body);
    output.push_str("\n\"\"\"\n");
    output
}

fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}
