//! Error types for astro-dataprep operations.
//!
//! Defines error types for the two utilities:
//! - File-list manifest building
//! - MNIST-to-FITS dataset export

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a file-list manifest.
#[derive(Debug, Error)]
pub enum FilelistError {
    #[error("Invalid filename pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during dataset export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("MNIST dataset file not found: {0}")]
    DatasetNotFound(PathBuf),

    #[error("Unexpected MNIST dataset layout: {0}")]
    DatasetLayout(String),

    #[error("FITS error: {0}")]
    Fits(#[from] fitsio::errors::Error),

    #[error("Unexpected FITS image layout: {0}")]
    FitsLayout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
