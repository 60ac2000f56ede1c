//! Error type definitions.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Network or HTTP failure while fetching the page.
///
/// This covers every way the request can fail before a body is in hand:
/// a URL that cannot be requested, connection errors, timeouts, and
/// non-success status codes.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL was rejected before any request was made.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// URL as supplied by the caller
        url: String,
        /// Why the URL was rejected
        reason: String,
    },

    /// The request failed or the server answered with an error status.
    #[error(transparent)]
    Request(#[from] ReqwestError),
}

impl FetchError {
    /// HTTP status code, if the server answered with an error status.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Request(e) => e.status(),
            FetchError::InvalidUrl { .. } => None,
        }
    }
}

/// Failure while fetching and saving the page.
#[derive(Error, Debug)]
pub enum SaveError {
    /// The page could not be downloaded.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The output directory or the page file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Failure while sorting files into destination folders.
///
/// The pass stops at the first failure; files already moved stay where they
/// are.
#[derive(Error, Debug)]
pub enum OrganizeError {
    /// A destination folder could not be created.
    #[error("Failed to create folder {}: {source}", path.display())]
    CreateFolder {
        /// Folder being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory being scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A file could not be moved into its destination folder.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    Move {
        /// Original location
        from: PathBuf,
        /// Intended destination
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
