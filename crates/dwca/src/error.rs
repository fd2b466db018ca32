//! Error types for the dwca library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for archive-building operations.
#[derive(Debug, Error)]
pub enum DwcaError {
    /// A bundled reference resource is malformed, or a declared
    /// encoding label is not recognised.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading or accessing an input file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes in an input file are not valid for its declared encoding.
    #[error("'{path}' contains bytes invalid for encoding {encoding}")]
    Decode { path: PathBuf, encoding: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error compiling a filename pattern from the rule table.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Error creating or writing a destination file.
    #[error("Output error for '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for archive-building operations.
pub type Result<T> = std::result::Result<T, DwcaError>;
