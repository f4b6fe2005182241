//! Property-based tests for determinism guarantees

use proptest::prelude::*;
use verity::digest::{self, seeded, Algorithm};

/// Hashing any buffer twice under any algorithm yields identical digests.
#[test]
fn test_digest_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<Vec<u8>>(), |content| {
            for algorithm in Algorithm::ALL {
                let digest1 = digest::hash_bytes(&content, algorithm);
                let digest2 = digest::hash_bytes(&content, algorithm);
                assert_eq!(digest1, digest2);
            }
            Ok(())
        })
        .unwrap();
}

/// Distinct buffers produce distinct digests (modulo the vanishing
/// collision probability of the cryptographic algorithms).
#[test]
fn test_digest_content_sensitivity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), any::<Vec<u8>>()),
            |(content1, content2)| {
                if content1 != content2 {
                    let digest1 = digest::hash_bytes(&content1, Algorithm::Sha256);
                    let digest2 = digest::hash_bytes(&content2, Algorithm::Sha256);
                    assert_ne!(digest1, digest2);
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Split-point of a streaming update never affects the digest.
#[test]
fn test_chunking_equivalence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), any::<prop::sample::Index>()),
            |(content, split)| {
                let split_at = if content.is_empty() {
                    0
                } else {
                    split.index(content.len())
                };

                for algorithm in Algorithm::ALL {
                    let mut split_hasher = digest::Hasher::new(algorithm);
                    split_hasher.update(&content[..split_at]);
                    split_hasher.update(&content[split_at..]);

                    assert_eq!(
                        split_hasher.finalize(),
                        digest::hash_bytes(&content, algorithm)
                    );
                }
                Ok(())
            },
        )
        .unwrap();
}

/// The seeded family is a pure function of (seed, input).
#[test]
fn test_seeded_hash_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<i32>(), any::<String>()), |(seed, input)| {
            assert_eq!(
                seeded::murmur3_x64_128(seed, &input),
                seeded::murmur3_x64_128(seed, &input)
            );
            assert_eq!(
                seeded::murmur3_x86_32(seed, &input),
                seeded::murmur3_x86_32(seed, &input)
            );
            assert_eq!(
                seeded::murmur3_x86_128(seed, &input),
                seeded::murmur3_x86_128(seed, &input)
            );
            Ok(())
        })
        .unwrap();
}
