//! Error types for target selection and sync operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving target formats
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Name or number that does not correspond to any target
    #[error("Target '{0}' not found")]
    UnknownTarget(String),
    /// Selection that resolved to no targets at all
    #[error("No valid target selected")]
    EmptySelection,
}

/// Fatal errors that stop a sync before any document is processed
#[derive(Debug, Error)]
pub enum SyncError {
    /// Source root does not exist or is not a directory
    #[error("Directory '{}' does not exist", .0.display())]
    SourceRootMissing(PathBuf),
    /// Source root could not be walked
    #[error("Failed to scan '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
