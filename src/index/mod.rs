//! Directory hash index
//!
//! Walks a directory tree and records a digest for every regular file,
//! keyed by root-relative path. An index is a point-in-time snapshot: built
//! once, immutable afterwards, and safe to compare against another index
//! built from any other root.

use crate::digest::{self, Algorithm};
use crate::error::IndexError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

pub mod path;
pub mod walker;

use walker::{Entry, Walker, WalkerConfig};

/// Immutable mapping of root-relative file path to digest.
///
/// Keys use forward slashes on every platform; directories are traversed
/// but never recorded. Iteration order is lexicographic by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryIndex {
    root: PathBuf,
    entries: BTreeMap<String, String>,
}

impl DirectoryIndex {
    /// Canonicalized root the index was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Digest recorded for a relative path, if the file was indexed.
    pub fn get(&self, relative_path: &str) -> Option<&str> {
        self.entries.get(relative_path).map(String::as_str)
    }

    pub fn contains(&self, relative_path: &str) -> bool {
        self.entries.contains_key(relative_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(relative_path, digest)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, digest)| (path.as_str(), digest.as_str()))
    }
}

/// Builder for [`DirectoryIndex`]
pub struct IndexBuilder {
    root: PathBuf,
    algorithm: Algorithm,
    walker_config: Option<WalkerConfig>,
}

impl IndexBuilder {
    /// Create a builder for the given root. Files are digested with MD5,
    /// the algorithm used for tree comparison.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            algorithm: Algorithm::Md5,
            walker_config: None,
        }
    }

    /// Override the digest algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set walker config (symlink policy, ignore patterns, max depth).
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Build the index.
    ///
    /// Sequential: every regular file under the root is digested in path
    /// order. The first traversal or digest failure aborts the build — a
    /// partial index is never returned.
    #[instrument(skip(self), fields(root = %self.root.display(), algorithm = %self.algorithm))]
    pub fn build(&self) -> Result<DirectoryIndex, IndexError> {
        let start = Instant::now();

        let root = path::canonicalize_root(&self.root)?;

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(root.clone(), config.clone()),
            None => Walker::new(root.clone()),
        };
        let entries = match walker.walk() {
            Ok(e) => {
                debug!(entry_count = e.len(), "Walked directory tree");
                e
            }
            Err(e) => {
                error!("Directory walk failed: {}", e);
                return Err(e);
            }
        };

        let mut index = BTreeMap::new();

        for entry in entries {
            if let Entry::File { path: file_path, .. } = entry {
                let digest = digest::hash_file(&file_path, self.algorithm).map_err(|e| {
                    error!(path = %file_path.display(), "File digest failed: {}", e);
                    IndexError::from(e)
                })?;
                let key = path::relative_key(&root, &file_path)?;
                index.insert(key, digest);
            }
        }

        info!(
            file_count = index.len(),
            duration_ms = start.elapsed().as_millis(),
            "Index build completed"
        );

        Ok(DirectoryIndex {
            root,
            entries: index,
        })
    }
}
