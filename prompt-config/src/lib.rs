//! Shared configuration loader for promptsync.
//!
//! `defaults/promptsync.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Applications layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`PromptConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use prompt_babel::selection::resolve_names;
use prompt_babel::{FormatError, Target};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/promptsync.default.toml");

/// Name of the optional project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "promptsync.toml";

/// Top-level configuration consumed by promptsync applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    pub sync: SyncConfig,
    pub targets: TargetDirsConfig,
    pub logging: LoggingConfig,
}

/// Where to read prompts from and where to write them.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub targets: Vec<String>,
}

impl SyncConfig {
    /// Targets configured by default, or `None` when the list is empty.
    pub fn default_targets(&self) -> Option<Result<Vec<Target>, FormatError>> {
        if self.targets.is_empty() {
            None
        } else {
            Some(resolve_names(&self.targets))
        }
    }
}

/// Output subdirectory for each target, relative to [`SyncConfig::output`].
#[derive(Debug, Clone, Deserialize)]
pub struct TargetDirsConfig {
    #[serde(rename = "claude-code")]
    pub claude_code: String,
    pub gemini: String,
    #[serde(rename = "github-copilot")]
    pub github_copilot: String,
    pub cursor: String,
}

impl TargetDirsConfig {
    pub fn subdir_for(&self, target: Target) -> &str {
        match target {
            Target::ClaudeCode => &self.claude_code,
            Target::Gemini => &self.gemini,
            Target::GithubCopilot => &self.github_copilot,
            Target::Cursor => &self.cursor,
        }
    }

    /// Full output directory for `target` below `output_root`.
    pub fn dir_for(&self, output_root: &Path, target: Target) -> PathBuf {
        output_root.join(self.subdir_for(target))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PromptConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
