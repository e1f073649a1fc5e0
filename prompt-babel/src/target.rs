//! Target format definitions
//!
//! The set of targets is closed: every assistant the tool can write for is a
//! variant of [`Target`], and all per-target knowledge (names, file extension,
//! output directory, envelope) hangs off that enum. Adding a target means
//! adding a variant and an envelope module under `formats/`.

use crate::error::FormatError;
use crate::formats;
use std::fmt;
use std::str::FromStr;

/// An assistant prompt format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// Claude Code slash commands: metadata block + body
    ClaudeCode,
    /// Gemini CLI commands: TOML with a multi-line prompt string
    Gemini,
    /// GitHub Copilot prompt files: metadata block with `mode: agent`
    GithubCopilot,
    /// Cursor commands: plain markdown with an optional comment
    Cursor,
}

impl Target {
    /// All targets in canonical order.
    pub const ALL: [Target; 4] = [
        Target::ClaudeCode,
        Target::Gemini,
        Target::GithubCopilot,
        Target::Cursor,
    ];

    /// Stable machine name (used on the command line and in config files)
    pub fn name(self) -> &'static str {
        match self {
            Target::ClaudeCode => "claude-code",
            Target::Gemini => "gemini",
            Target::GithubCopilot => "github-copilot",
            Target::Cursor => "cursor",
        }
    }

    /// Human-readable tool name
    pub fn display_name(self) -> &'static str {
        match self {
            Target::ClaudeCode => "Claude Code",
            Target::Gemini => "Gemini CLI",
            Target::GithubCopilot => "GitHub Copilot",
            Target::Cursor => "Cursor",
        }
    }

    /// Suffix that replaces `.md` on output files, leading dot included.
    pub fn extension(self) -> &'static str {
        match self {
            Target::ClaudeCode => ".md",
            Target::Gemini => ".toml",
            Target::GithubCopilot => ".prompt.md",
            Target::Cursor => ".md",
        }
    }

    /// Output subdirectory below the base output directory
    pub fn default_subdir(self) -> &'static str {
        match self {
            Target::ClaudeCode => "claude-code/commands",
            Target::Gemini => "gemini/commands",
            Target::GithubCopilot => "github-copilot/prompts",
            Target::Cursor => "cursor/commands",
        }
    }

    /// Position in the interactive menu (1-based).
    pub fn menu_index(self) -> usize {
        match self {
            Target::ClaudeCode => 1,
            Target::Gemini => 2,
            Target::GithubCopilot => 3,
            Target::Cursor => 4,
        }
    }

    /// Where the generated files should be copied to be picked up by the tool.
    pub fn install_hints(self) -> &'static [&'static str] {
        match self {
            Target::ClaudeCode => &[
                "Project: Copy files to .claude/commands/",
                "User: Copy files to ~/.claude/commands/",
            ],
            Target::Gemini => &[
                "Project: Copy files to .gemini/commands/",
                "User: Copy files to ~/.gemini/commands/",
            ],
            Target::GithubCopilot => &[
                "Copy files to .github/prompts/",
                "Use with #prompt: in Copilot Chat",
            ],
            Target::Cursor => &[
                "Project: Copy files to .cursor/commands/",
                "User: Copy files to ~/.cursor/commands/",
                "Usage: Type / in Cursor Agent chat to see all commands",
            ],
        }
    }

    /// Look a target up by its menu position.
    pub fn from_menu_index(index: usize) -> Option<Target> {
        Target::ALL.into_iter().find(|t| t.menu_index() == index)
    }

    /// Wrap a document body in this target's envelope.
    ///
    /// Total over all inputs. `body` appears in the output unchanged and an
    /// empty `description` is left out rather than written as an empty field.
    pub fn emit(self, description: &str, body: &str) -> String {
        match self {
            Target::ClaudeCode => formats::claude_code::emit(description, body),
            Target::Gemini => formats::gemini::emit(description, body),
            Target::GithubCopilot => formats::github_copilot::emit(description, body),
            Target::Cursor => formats::cursor::emit(description, body),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "claude-code" | "claude" => Ok(Target::ClaudeCode),
            "gemini" | "gemini-cli" => Ok(Target::Gemini),
            "github-copilot" | "copilot" | "github" => Ok(Target::GithubCopilot),
            "cursor" => Ok(Target::Cursor),
            _ => Err(FormatError::UnknownTarget(s.trim().to_string())),
        }
    }
}
