//! Validator and notifier injection points

use crate::digest::{self, Algorithm};
use crate::error::FetchError;

/// Decides whether a fetched payload matches an expected digest.
///
/// An absent validator means "skip verification entirely". A present
/// validator is always invoked, including against an empty expected string
/// — real content never digests to the empty string, so callers can force
/// a fetch to fail by supplying a validator before integrity data exists.
pub trait Validator: Send + Sync {
    fn validate(&self, data: &[u8], expected: &str) -> Result<(), FetchError>;
}

impl<F> Validator for F
where
    F: Fn(&[u8], &str) -> Result<(), FetchError> + Send + Sync,
{
    fn validate(&self, data: &[u8], expected: &str) -> Result<(), FetchError> {
        self(data, expected)
    }
}

/// Default validator: SHA-256 of the payload, compared as lowercase hex.
pub struct Sha256Validator;

impl Validator for Sha256Validator {
    fn validate(&self, data: &[u8], expected: &str) -> Result<(), FetchError> {
        let actual = digest::hash_bytes(data, Algorithm::Sha256);

        if actual != expected {
            return Err(FetchError::Verification {
                expected: expected.to_string(),
                actual,
            });
        }

        Ok(())
    }
}

/// Observer for fetch starts.
///
/// Invoked exactly once per attempt with the destination file name, before
/// the transfer begins. Observability only — it has no effect on control
/// flow and is never required for correctness.
pub trait Notifier: Send + Sync {
    fn fetch_started(&self, file_name: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn fetch_started(&self, file_name: &str) {
        self(file_name)
    }
}
