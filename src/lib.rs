//! astro-dataprep: data preparation utilities for astronomical image
//! classification.
//!
//! This library backs two command-line utilities:
//! - `make-filelist`: builds a JSON manifest of image files found under a
//!   directory tree, ordered canonically by survey band.
//! - `mnist2fits`: exports MNIST digit images as single-HDU FITS files.

pub mod error;
pub mod export;
pub mod filelist;
pub mod fits;
pub mod mnist;

// Re-export commonly used error types
pub use error::{ExportError, FilelistError};
