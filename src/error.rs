//! Error types for the content integrity toolkit.
//!
//! Each subsystem has its own error enum. The split that matters to callers
//! is integrity mismatch vs. I/O failure: an I/O failure may be worth
//! retrying, a mismatch means the content itself cannot be trusted.

use thiserror::Error;

/// Digest computation and verification errors
#[derive(Debug, Error)]
pub enum DigestError {
    /// The computed digest differs from the expected one. Distinct from
    /// `Io`: the bytes were read successfully but are not what was claimed.
    #[error("digest mismatch: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Directory index build errors
#[derive(Debug, Error)]
pub enum IndexError {
    /// Traversal hit an unreadable entry. The whole build is aborted; no
    /// partial index is returned.
    #[error("directory traversal failed: {0}")]
    Traversal(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Digest(#[from] DigestError),
}

/// Fetch pipeline errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection, TLS, non-success status).
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The retrieved payload failed validator comparison. Nothing was
    /// written to the destination.
    #[error("verification failed: expected {expected}, got {actual}")]
    Verification { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors (logging setup)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("invalid log output: {0} (must be 'stdout', 'stderr', or 'file')")]
    InvalidOutput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
