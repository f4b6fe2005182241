//! Structural diff between two directory indices
//!
//! Compares two [`DirectoryIndex`](crate::index::DirectoryIndex) snapshots
//! and reports every divergence: files present on one side only, and files
//! present on both sides with different digests. Equal files produce no
//! record. Absence is a normal outcome here, never an error.

use crate::index::DirectoryIndex;
use serde::{Deserialize, Serialize};

/// One record of divergence between two indices.
///
/// `OnlyIn` always names where the file exists and where it is missing,
/// regardless of which index it was discovered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffEntry {
    /// The file exists under `present_label`'s root and not the other.
    OnlyIn {
        path: String,
        present_label: String,
        absent_label: String,
    },
    /// The file exists under both roots with different digests.
    Mismatch {
        path: String,
        label_a: String,
        label_b: String,
        digest_a: String,
        digest_b: String,
    },
}

impl DiffEntry {
    pub fn path(&self) -> &str {
        match self {
            DiffEntry::OnlyIn { path, .. } | DiffEntry::Mismatch { path, .. } => path,
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            DiffEntry::OnlyIn { .. } => 0,
            DiffEntry::Mismatch { .. } => 1,
        }
    }
}

/// Compute the full diff between two indices.
///
/// `label_a`/`label_b` are the display labels of the two roots and are
/// recorded verbatim in the entries. The result is sorted by path (variant
/// tag as tie-break) so output is reproducible and can be compared against
/// recorded baselines.
pub fn diff_indices(
    a: &DirectoryIndex,
    b: &DirectoryIndex,
    label_a: &str,
    label_b: &str,
) -> Vec<DiffEntry> {
    let mut diff = Vec::new();

    // Pass 1: everything known to A. Files missing from B exist under A's
    // label; files present in both with different digests are mismatches.
    for (path, digest_a) in a.iter() {
        match b.get(path) {
            None => diff.push(DiffEntry::OnlyIn {
                path: path.to_string(),
                present_label: label_a.to_string(),
                absent_label: label_b.to_string(),
            }),
            Some(digest_b) if digest_a != digest_b => diff.push(DiffEntry::Mismatch {
                path: path.to_string(),
                label_a: label_a.to_string(),
                label_b: label_b.to_string(),
                digest_a: digest_a.to_string(),
                digest_b: digest_b.to_string(),
            }),
            Some(_) => {}
        }
    }

    // Pass 2: paths only B knows about. Discovered while scanning B, but
    // the record still names B as the side where the file exists.
    for (path, _) in b.iter() {
        if !a.contains(path) {
            diff.push(DiffEntry::OnlyIn {
                path: path.to_string(),
                present_label: label_b.to_string(),
                absent_label: label_a.to_string(),
            });
        }
    }

    diff.sort_by(|x, y| {
        x.path()
            .cmp(y.path())
            .then(x.variant_rank().cmp(&y.variant_rank()))
    });

    diff
}
