//! Typed errors for initialization and input loading.
//!
//! The geocoding pipeline itself never surfaces errors (every lookup path
//! yields a usable address string); the types here cover the boundaries that
//! legitimately fail hard: resource setup and the input file.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for loading the location-history export.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be read.
    #[error("Failed to read input {path}: {source}")]
    Unreadable {
        /// The path that failed to open
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The top-level JSON value is not an array of activity records.
    #[error("Input is not a JSON array of activity records: {0}")]
    Malformed(#[from] serde_json::Error),
}
