use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestampError {
    // Fatal errors
    #[error("Directory walker error: {0}")]
    DirectoryRead(#[from] walkdir::Error),

    #[error("{0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Per-file errors
    #[error("No capture timestamp in metadata of {0}")]
    MetadataNotFound(PathBuf),

    #[error("Failed to read metadata from {path}: {reason}")]
    MetadataRead { path: PathBuf, reason: String },

    #[error("Unparseable timestamp: {0:?}")]
    TimestampParse(String),

    #[error("{tool}: {reason}")]
    ToolInvocation { tool: String, reason: String },

    #[error("Failed to copy {src} to {dest}: {cause}")]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        cause: std::io::Error,
    },

    #[error("Failed to set timestamp on {path}: {cause}")]
    TimestampSet { path: PathBuf, cause: std::io::Error },
}

/// Result type for restamp operations.
pub type Result<T> = std::result::Result<T, RestampError>;
