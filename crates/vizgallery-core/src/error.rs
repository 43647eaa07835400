//! Error types for the Visualization Gallery

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Manifest resource could not be read or parsed as a whole
    #[error("Failed to load catalog: {0}")]
    Load(String),

    /// A single manifest record was unusable and has been dropped
    #[error("Malformed item #{index}: {reason}")]
    MalformedItem { index: usize, reason: String },

    /// Viewer was asked to show a position outside the filtered sequence
    #[error("Index {index} out of range for {len} items")]
    Index { index: usize, len: usize },

    /// Clipboard access or write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
