use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the video server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Catalog-specific errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog root itself could not be opened or listed
    #[error("Failed to read catalog root {path:?}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk below the root failed
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// A requested video name is not a single plain path component
    #[error("Invalid video name: {0:?}")]
    InvalidName(String),

    /// No payload exists for the requested video name
    #[error("Video not found: {0}")]
    VideoNotFound(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ServerError>;

/// Result type alias for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
