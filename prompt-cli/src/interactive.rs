//! Interactive sync setup.
//!
//! Asks for the source directory, the targets and the output directory, one
//! line each. An empty answer takes the default shown in parentheses.

use prompt_babel::selection::ALL_TARGETS_INDEX;
use prompt_babel::Target;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Line-oriented question/answer session over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question. Returns the trimmed answer, or `default` when blank.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<String> {
        match default {
            Some(value) => write!(self.output, "{question} (default: {value}): ")?,
            None => write!(self.output, "{question}: ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.unwrap_or("").to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    pub fn ask_source(&mut self, default: &str) -> io::Result<PathBuf> {
        self.ask("Enter source prompts directory", Some(default))
            .map(PathBuf::from)
    }

    /// Print the target menu and read a selection such as `1,3` or `5`.
    pub fn ask_selection(&mut self) -> io::Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "Available AI tools:")?;
        for target in Target::ALL {
            writeln!(self.output, "  {}. {}", target.menu_index(), target.display_name())?;
        }
        writeln!(self.output, "  {ALL_TARGETS_INDEX}. All of the above")?;
        writeln!(self.output)?;
        self.ask(
            &format!("Select target(s) (comma-separated numbers or {ALL_TARGETS_INDEX} for all)"),
            None,
        )
    }

    pub fn ask_output(&mut self, default: &str) -> io::Result<PathBuf> {
        writeln!(self.output)?;
        self.ask("Enter base output directory", Some(default))
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn blank_answer_takes_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_source("./prompts").unwrap(), PathBuf::from("./prompts"));
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown, "Enter source prompts directory (default: ./prompts): ");
    }

    #[test]
    fn answer_is_trimmed() {
        let mut p = prompter("  my-prompts  \n");
        assert_eq!(p.ask_source("./prompts").unwrap(), PathBuf::from("my-prompts"));
    }

    #[test]
    fn selection_lists_every_target() {
        let mut p = prompter("1, 3\n");
        assert_eq!(p.ask_selection().unwrap(), "1, 3");
        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.contains("  1. Claude Code\n"));
        assert!(shown.contains("  2. Gemini CLI\n"));
        assert!(shown.contains("  3. GitHub Copilot\n"));
        assert!(shown.contains("  4. Cursor\n"));
        assert!(shown.contains("  5. All of the above\n"));
    }

    #[test]
    fn end_of_input_behaves_like_blank_answers() {
        let mut p = prompter("");
        assert_eq!(p.ask_selection().unwrap(), "");
        assert_eq!(p.ask_output("./output").unwrap(), PathBuf::from("./output"));
    }
}
