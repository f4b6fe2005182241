//! Fetch pipeline validation tests
//!
//! End-to-end pipeline scenarios over the in-memory transport: validator
//! gating, the empty-expectation contract, and notifier observability.

use super::test_utils::InMemoryTransport;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use verity::digest::{self, Algorithm};
use verity::error::FetchError;
use verity::fetch::{FetchRequest, Fetcher, Sha256Validator};

const LICENSE_BODY: &[u8] = b"LICENSE-body";

fn fetcher_serving(payload: &[u8]) -> Fetcher {
    Fetcher::with_transport(Arc::new(InMemoryTransport::new(payload)))
}

#[tokio::test]
async fn test_validator_gating_success() {
    let dest = TempDir::new().unwrap();
    let expected = digest::hash_bytes(LICENSE_BODY, Algorithm::Sha256);
    let fetcher = fetcher_serving(LICENSE_BODY);

    fetcher
        .fetch_validated("https://example.invalid/LICENSE", &expected, "LICENSE", dest.path())
        .await
        .unwrap();

    assert_eq!(fs::read(dest.path().join("LICENSE")).unwrap(), LICENSE_BODY);
}

#[tokio::test]
async fn test_validator_gating_failure_leaves_no_file() {
    let dest = TempDir::new().unwrap();
    let fetcher = fetcher_serving(LICENSE_BODY);

    let err = fetcher
        .fetch_validated("https://example.invalid/LICENSE", "aaabbbccc", "LICENSE", dest.path())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Verification { .. }));
    assert!(!dest.path().join("LICENSE").exists());
}

#[tokio::test]
async fn test_empty_expectation_with_validator_fails_any_content() {
    let dest = TempDir::new().unwrap();

    for payload in [&b""[..], &b"short"[..], LICENSE_BODY] {
        let fetcher = fetcher_serving(payload);
        let err = fetcher
            .fetch_validated("https://example.invalid/f", "", "f.bin", dest.path())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Verification { .. }));
    }

    assert!(!dest.path().join("f.bin").exists());
}

#[tokio::test]
async fn test_absent_validator_succeeds_regardless_of_expectation() {
    let dest = TempDir::new().unwrap();
    let fetcher = fetcher_serving(LICENSE_BODY);

    for expected in ["", "aaabbbccc"] {
        let bytes = fetcher
            .execute(&FetchRequest {
                url: "https://example.invalid/LICENSE",
                file_name: "LICENSE",
                dest_dir: Some(dest.path()),
                expected_digest: expected,
                validator: None,
                notifier: None,
            })
            .await
            .unwrap();
        assert_eq!(bytes, LICENSE_BODY);
    }

    assert_eq!(fs::read(dest.path().join("LICENSE")).unwrap(), LICENSE_BODY);
}

#[tokio::test]
async fn test_notifier_reports_destination_file_name() {
    let fetcher = fetcher_serving(LICENSE_BODY);
    let notified = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&notified);
    let notifier = move |file_name: &str| sink.lock().unwrap().push(file_name.to_string());

    fetcher
        .execute(&FetchRequest {
            url: "https://example.invalid/LICENSE",
            file_name: "LICENSE",
            dest_dir: None,
            expected_digest: "",
            validator: None,
            notifier: Some(&notifier),
        })
        .await
        .unwrap();

    assert_eq!(*notified.lock().unwrap(), vec!["LICENSE".to_string()]);
}

#[tokio::test]
async fn test_byte_and_file_surfaces_validate_identically() {
    let expected = digest::hash_bytes(LICENSE_BODY, Algorithm::Sha256);

    // Byte-returning: no destination, same validator semantics.
    let fetcher = fetcher_serving(LICENSE_BODY);
    let bytes = fetcher
        .execute(&FetchRequest {
            url: "https://example.invalid/LICENSE",
            file_name: "LICENSE",
            dest_dir: None,
            expected_digest: &expected,
            validator: Some(&Sha256Validator),
            notifier: None,
        })
        .await
        .unwrap();
    assert_eq!(bytes, LICENSE_BODY);

    let err = fetcher
        .execute(&FetchRequest {
            url: "https://example.invalid/LICENSE",
            file_name: "LICENSE",
            dest_dir: None,
            expected_digest: "aaabbbccc",
            validator: Some(&Sha256Validator),
            notifier: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Verification { .. }));
}

#[tokio::test]
async fn test_transport_sees_requested_url() {
    let transport = Arc::new(InMemoryTransport::new(LICENSE_BODY));
    let requests = Arc::clone(&transport.requests);
    let fetcher = Fetcher::with_transport(transport);

    fetcher.fetch("https://example.invalid/LICENSE").await.unwrap();

    assert_eq!(
        *requests.lock().unwrap(),
        vec!["https://example.invalid/LICENSE".to_string()]
    );
}
