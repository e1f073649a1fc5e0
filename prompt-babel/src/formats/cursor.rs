//! Cursor commands (plain `.md`)
//!
//! Cursor reads commands as bare markdown, so the description survives only as
//! an HTML comment on top.

pub fn emit(description: &str, body: &str) -> String {
    let mut output = String::new();
    if !description.is_empty() {
        output.push_str("<!-- ");
        output.push_str(description);
        output.push_str(" -->\n\n");
    }
    output.push_str(body);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_with_description() {
        assert_eq!(emit("Explain", "Explain this."), "<!-- Explain -->\n\nExplain this.");
    }

    #[test]
    fn test_emit_without_description_is_body() {
        assert_eq!(emit("", "Explain this."), "Explain this.");
    }
}
