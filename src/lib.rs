//! Verity: Content Integrity Toolkit
//!
//! Deterministic digests of byte content, content-hash indices of directory
//! trees, structural diffs between two such indices, and fetches gated on a
//! digest match before anything is persisted.

pub mod diff;
pub mod digest;
pub mod error;
pub mod fetch;
pub mod index;
pub mod logging;
