//! Directory sync pipeline.
//!
//! Converts every `.md` document below a source root into each selected
//! target, mirroring the source layout inside the target's output directory.
//!
//! ```ignore
//! let report = SyncPlan::new("prompts")
//!     .with_targets_under("output", &[Target::ClaudeCode, Target::Gemini])
//!     .run()?;
//! println!("{} file(s) written", report.total_written());
//! ```
//!
//! Documents are handled one at a time and independently of each other: a file
//! that cannot be read or written is logged, recorded in the [`SyncReport`] and
//! skipped. Only a missing or unreadable source root aborts the run.

use crate::convert::{convert_document, SOURCE_EXTENSION};
use crate::error::SyncError;
use crate::target::Target;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A source document found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as found on disk
    pub path: PathBuf,
    /// Path relative to the source root
    pub relative: PathBuf,
}

/// A target together with the directory its files are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutput {
    pub target: Target,
    pub dir: PathBuf,
}

/// Specifies what to sync and where.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    /// Directory scanned for `.md` documents.
    pub source_root: PathBuf,
    /// Selected targets, processed in this order.
    pub outputs: Vec<TargetOutput>,
    /// When set, nothing is written; the report lists what would be.
    pub dry_run: bool,
}

/// One output file produced by a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub target: Target,
    /// Source path relative to the source root
    pub source: PathBuf,
    pub identifier: String,
    pub output: PathBuf,
}

/// Step at which a document failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Read,
    CreateDir,
    Write,
}

/// A document that could not be converted for one target.
#[derive(Debug)]
pub struct FileFailure {
    pub target: Target,
    pub source: PathBuf,
    pub stage: FailureStage,
    pub error: io::Error,
}

/// Outcome of [`SyncPlan::run`].
#[derive(Debug, Default)]
pub struct SyncReport {
    pub written: Vec<Written>,
    pub failures: Vec<FileFailure>,
}

impl SyncReport {
    /// Number of files written for `target`.
    pub fn processed_for(&self, target: Target) -> usize {
        self.written.iter().filter(|w| w.target == target).count()
    }

    pub fn total_written(&self) -> usize {
        self.written.len()
    }

    /// True when no document failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl SyncPlan {
    /// Start a plan reading from `source_root` with no targets yet.
    pub fn new(source_root: impl AsRef<Path>) -> Self {
        Self {
            source_root: source_root.as_ref().to_path_buf(),
            outputs: Vec::new(),
            dry_run: false,
        }
    }

    /// Add a target writing into `dir`.
    pub fn with_target(mut self, target: Target, dir: impl AsRef<Path>) -> Self {
        self.outputs.push(TargetOutput {
            target,
            dir: dir.as_ref().to_path_buf(),
        });
        self
    }

    /// Add targets writing into their default subdirectories of `output_root`.
    pub fn with_targets_under(mut self, output_root: impl AsRef<Path>, targets: &[Target]) -> Self {
        let root = output_root.as_ref();
        for target in targets {
            self = self.with_target(*target, root.join(target.default_subdir()));
        }
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Convert every source document for every target.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] only when the source root cannot be scanned.
    /// Per-document problems end up in [`SyncReport::failures`].
    pub fn run(&self) -> Result<SyncReport, SyncError> {
        let sources = discover_sources(&self.source_root)?;
        let mut report = SyncReport::default();

        for output in &self.outputs {
            debug!(target_format = %output.target, dir = %output.dir.display(), "processing target");
            for source in &sources {
                match self.sync_one(source, output) {
                    Ok(written) => {
                        info!(
                            source = %source.relative.display(),
                            output = %written.output.display(),
                            "converted"
                        );
                        report.written.push(written);
                    }
                    Err(failure) => {
                        warn!(
                            source = %failure.source.display(),
                            target_format = %failure.target,
                            stage = ?failure.stage,
                            error = %failure.error,
                            "skipping document"
                        );
                        report.failures.push(failure);
                    }
                }
            }
        }

        Ok(report)
    }

    fn sync_one(&self, source: &SourceFile, output: &TargetOutput) -> Result<Written, FileFailure> {
        let fail = |stage, error| FileFailure {
            target: output.target,
            source: source.path.clone(),
            stage,
            error,
        };

        let raw = fs::read_to_string(&source.path).map_err(|e| fail(FailureStage::Read, e))?;
        let conversion = convert_document(&source.relative, &raw, output.target, &output.dir);

        if !self.dry_run {
            if let Some(parent) = conversion.output.parent() {
                fs::create_dir_all(parent).map_err(|e| fail(FailureStage::CreateDir, e))?;
            }
            fs::write(&conversion.output, &conversion.content)
                .map_err(|e| fail(FailureStage::Write, e))?;
        }

        Ok(Written {
            target: output.target,
            source: source.relative.clone(),
            identifier: conversion.identifier,
            output: conversion.output,
        })
    }
}

/// Find all `.md` files below `root`, sorted by relative path.
///
/// Symlinks are followed. A linked file keeps its link path, so the same
/// document reached through two links is converted twice.
///
/// # Errors
///
/// Fails when `root` is not a directory or cannot be read. Unreadable entries
/// further down, symlink loops included, are logged and skipped.
pub fn discover_sources(root: &Path) -> Result<Vec<SourceFile>, SyncError> {
    if !root.is_dir() {
        return Err(SyncError::SourceRootMissing(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(SyncError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_source_extension(entry.path()) {
            continue;
        }

        let path = entry.path().to_path_buf();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        files.push(SourceFile { path, relative });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    debug!(root = %root.display(), count = files.len(), "discovered source documents");
    Ok(files)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}
