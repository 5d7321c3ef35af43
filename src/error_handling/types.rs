//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Errors returned while building an [`OpenGraph`](crate::OpenGraph) record.
#[derive(Error, Debug)]
pub enum OpenGraphError {
    /// The page URL given at construction could not be parsed.
    ///
    /// Stored on the record and returned by every subsequent `parse` call.
    #[error("Invalid page URL: {0}")]
    InvalidPageUrl(#[from] url::ParseError),

    /// The HTML stream could not be read.
    #[error("Failed to read HTML stream: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
