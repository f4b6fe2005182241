//! Verified fetch pipeline
//!
//! Retrieves bytes from a remote source, optionally reports the attempt to
//! a caller-supplied notifier, optionally gates persistence on an injected
//! digest validator, and optionally writes the payload to a destination
//! path. Every stage is explicit: no retries, no timeout policy beyond the
//! transport's own, no hidden state.
//!
//! Cancellation is advisory at the transport layer: dropping a fetch future
//! mid-transfer stops network I/O without touching the destination. A fetch
//! cancelled after the payload is fully retrieved still validates normally.

use crate::error::FetchError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub mod transport;
pub mod validator;

pub use transport::{HttpTransport, Transport};
pub use validator::{Notifier, Sha256Validator, Validator};

/// One fetch attempt: source, destination, and injected capabilities.
pub struct FetchRequest<'a> {
    pub url: &'a str,
    /// Destination file name: reported to the notifier, joined onto
    /// `dest_dir` when persisting.
    pub file_name: &'a str,
    /// When set, the payload is persisted to `dest_dir/file_name` after
    /// validation succeeds.
    pub dest_dir: Option<&'a Path>,
    /// Expected digest handed to the validator. May be empty — a present
    /// validator still runs, and fails, against it.
    pub expected_digest: &'a str,
    /// Absent means no verification at all, regardless of `expected_digest`.
    pub validator: Option<&'a dyn Validator>,
    pub notifier: Option<&'a dyn Notifier>,
}

/// Fetch pipeline over an injectable transport.
pub struct Fetcher {
    transport: Arc<dyn Transport>,
}

impl Fetcher {
    /// Fetcher over the default HTTP transport.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Fetcher over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Plain fetch: raw bytes, no notification, no validation.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.transport.get(url).await
    }

    /// Unvalidated fetch persisted to `dest_dir/file_name`. Returns the
    /// payload as well — the file-writing and byte-returning surfaces are
    /// the same operation.
    pub async fn fetch_to_file(
        &self,
        url: &str,
        file_name: &str,
        dest_dir: &Path,
    ) -> Result<Vec<u8>, FetchError> {
        self.execute(&FetchRequest {
            url,
            file_name,
            dest_dir: Some(dest_dir),
            expected_digest: "",
            validator: None,
            notifier: None,
        })
        .await
    }

    /// Fetch gated on the default SHA-256 validator, persisted to
    /// `dest_dir/file_name` on success.
    pub async fn fetch_validated(
        &self,
        url: &str,
        expected_digest: &str,
        file_name: &str,
        dest_dir: &Path,
    ) -> Result<Vec<u8>, FetchError> {
        self.execute(&FetchRequest {
            url,
            file_name,
            dest_dir: Some(dest_dir),
            expected_digest,
            validator: Some(&Sha256Validator),
            notifier: None,
        })
        .await
    }

    /// Run one full fetch attempt.
    ///
    /// Order: notify (once, before the transfer) → transfer → validate
    /// (iff a validator is present) → persist (iff a destination is
    /// present) → return the payload. On validation failure nothing is
    /// written.
    #[instrument(skip(self, request), fields(url = request.url, file = request.file_name))]
    pub async fn execute(&self, request: &FetchRequest<'_>) -> Result<Vec<u8>, FetchError> {
        if let Some(notifier) = request.notifier {
            notifier.fetch_started(request.file_name);
        }

        let payload = self.transport.get(request.url).await?;
        debug!(bytes = payload.len(), "Transfer complete");

        if let Some(validator) = request.validator {
            validator.validate(&payload, request.expected_digest)?;
        }

        if let Some(dest_dir) = request.dest_dir {
            write_atomic(dest_dir, request.file_name, &payload)?;
            info!(bytes = payload.len(), "Fetch persisted");
        }

        Ok(payload)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the payload to `dir/file_name` through a temporary file in the
/// same directory, renamed into place. A failed write never leaves a
/// partial destination file.
fn write_atomic(dir: &Path, file_name: &str, payload: &[u8]) -> Result<(), FetchError> {
    fs::create_dir_all(dir)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(payload)?;
    temp.persist(dir.join(file_name))
        .map_err(|e| FetchError::Io(e.error))?;

    Ok(())
}
