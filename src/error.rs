//! Error types for cargo-version-table.
//!
//! All operations return `Result<T>` which aliases `Result<T, BumpError>`.

use thiserror::Error;

/// Errors from a version table bump.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Project version cannot be turned into a release line.
    #[error("Invalid version '{0}': {1}")]
    InvalidVersion(String, String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Manifest is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cargo-version-table operations.
pub type Result<T> = std::result::Result<T, BumpError>;
