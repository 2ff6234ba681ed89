//! Error Types
//!
//! Failures raised while scanning the icon directory and writing the manifest.
//! A missing source directory is not an error; see [`crate::generator::Outcome`].

use std::path::PathBuf;

/// Error types for manifest generation
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("collator unavailable: {0}")]
    Collator(String),

    #[error("unknown layout: {0} (expected `flat` or `grouped`)")]
    UnknownLayout(String),
}

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;
