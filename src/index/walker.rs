//! Filesystem walker for directory index builds

use crate::error::IndexError;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone)]
pub enum Entry {
    /// A regular file with its path and size
    File { path: PathBuf, size: u64 },
    /// A directory entry with its path
    Directory { path: PathBuf },
}

impl Entry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Entry::File { path, .. } | Entry::Directory { path } => path,
        }
    }
}

/// Traversal configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Path components to skip entirely (e.g. ".git", "target"). Empty by
    /// default: an index covers every entry under its root.
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with default configuration for the given root
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree and collect all entries, sorted by path.
    ///
    /// The first unreadable entry aborts the walk; partial results are
    /// never returned.
    pub fn walk(&self) -> Result<Vec<Entry>, IndexError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = entry.map_err(|e| IndexError::Traversal(e.to_string()))?;

            if self.should_ignore(&entry) {
                continue;
            }

            let path = entry.path().to_path_buf();

            // The root itself is not an entry; only its contents are.
            if path == self.root {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| {
                IndexError::Traversal(format!("failed to read metadata for {:?}: {}", path, e))
            })?;

            if metadata.is_file() {
                entries.push(Entry::File {
                    path,
                    size: metadata.len(),
                });
            } else if metadata.is_dir() {
                entries.push(Entry::Directory { path });
            }
            // Symlinks are skipped unless follow_symlinks resolved them.
        }

        entries.sort_by(|a, b| a.path().cmp(b.path()));

        Ok(entries)
    }

    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }

        entry.path().components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                self.config
                    .ignore_patterns
                    .iter()
                    .any(|pattern| name.to_string_lossy() == pattern.as_str())
            } else {
                false
            }
        })
    }
}
