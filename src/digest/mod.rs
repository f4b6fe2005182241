//! Digest computation for byte content
//!
//! A closed set of algorithms behind one streaming interface. Digests are
//! lowercase hexadecimal strings; the same `(content, algorithm)` pair
//! always yields the same digest, whether the content is hashed from a
//! buffer or streamed from a file.

use crate::error::DigestError;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

mod crc64;
pub mod seeded;

use crc64::Crc64;

/// Chunk size for streaming file digests.
const CHUNK_SIZE: usize = 64 * 1024;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    /// CRC-32 with the IEEE polynomial.
    Crc32,
    /// CRC-64 built from the 32-bit IEEE polynomial (see `crc64`).
    Crc64,
}

impl Algorithm {
    /// Every supported algorithm, in declaration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Crc32,
        Algorithm::Crc64,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Crc32 => "crc32",
            Algorithm::Crc64 => "crc64",
        };
        f.write_str(name)
    }
}

enum State {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
    Crc32(crc32fast::Hasher),
    Crc64(Crc64),
}

/// Streaming hasher for a fixed algorithm.
///
/// Feed bytes with [`update`](Hasher::update) in any chunking; the final
/// digest is identical to hashing the concatenated input at once.
pub struct Hasher {
    state: State,
}

impl Hasher {
    pub fn new(algorithm: Algorithm) -> Self {
        let state = match algorithm {
            Algorithm::Md5 => State::Md5(Md5::new()),
            Algorithm::Sha1 => State::Sha1(Sha1::new()),
            Algorithm::Sha256 => State::Sha256(Sha256::new()),
            Algorithm::Sha512 => State::Sha512(Sha512::new()),
            Algorithm::Crc32 => State::Crc32(crc32fast::Hasher::new()),
            Algorithm::Crc64 => State::Crc64(Crc64::new()),
        };
        Self { state }
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            State::Md5(h) => h.update(data),
            State::Sha1(h) => h.update(data),
            State::Sha256(h) => h.update(data),
            State::Sha512(h) => h.update(data),
            State::Crc32(h) => h.update(data),
            State::Crc64(h) => h.update(data),
        }
    }

    /// Finalize into a lowercase hex digest.
    ///
    /// CRC digests are encoded big-endian (8 hex chars for CRC-32, 16 for
    /// CRC-64).
    pub fn finalize(self) -> String {
        match self.state {
            State::Md5(h) => hex::encode(h.finalize()),
            State::Sha1(h) => hex::encode(h.finalize()),
            State::Sha256(h) => hex::encode(h.finalize()),
            State::Sha512(h) => hex::encode(h.finalize()),
            State::Crc32(h) => hex::encode(h.finalize().to_be_bytes()),
            State::Crc64(h) => hex::encode(h.finalize().to_be_bytes()),
        }
    }
}

/// Digest an in-memory buffer.
pub fn hash_bytes(data: &[u8], algorithm: Algorithm) -> String {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(data);
    hasher.finalize()
}

/// Digest a file, streaming its content in fixed-size chunks.
///
/// The file is never resident in memory at once; the digest equals
/// [`hash_bytes`] over the full content. I/O failures propagate unchanged.
pub fn hash_file(path: &Path, algorithm: Algorithm) -> Result<String, DigestError> {
    let mut file = File::open(path)?;
    let mut hasher = Hasher::new(algorithm);
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hasher.finalize())
}

/// Digest a file and compare against an expected lowercase hex digest.
///
/// The comparison is case-sensitive. A mismatch is reported as
/// [`DigestError::Mismatch`], distinct from an I/O failure.
pub fn verify_file(path: &Path, expected: &str, algorithm: Algorithm) -> Result<(), DigestError> {
    let actual = hash_file(path, algorithm)?;

    if actual != expected {
        return Err(DigestError::Mismatch {
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(())
}
