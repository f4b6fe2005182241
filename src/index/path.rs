//! Path normalization for index keys

use crate::error::IndexError;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize an index root for stable prefix stripping.
///
/// Uses `dunce` so Windows paths come back without the verbatim `\\?\`
/// prefix that plain `std::fs::canonicalize` produces.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, IndexError> {
    dunce::canonicalize(root)
        .map_err(|e| IndexError::InvalidPath(format!("failed to canonicalize {:?}: {}", root, e)))
}

/// Derive the index key for a file: its path relative to the root, joined
/// with forward slashes and Unicode-normalized to NFC.
///
/// Forward slashes keep keys comparable across platforms; NFC keeps keys
/// comparable across filesystems that store decomposed names (e.g. APFS).
pub fn relative_key(root: &Path, path: &Path) -> Result<String, IndexError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        IndexError::InvalidPath(format!("{:?} is not under the index root {:?}", path, root))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            std::path::Component::Normal(name) => {
                parts.push(name.to_string_lossy().into_owned());
            }
            other => {
                return Err(IndexError::InvalidPath(format!(
                    "unexpected path component {:?} in {:?}",
                    other, relative
                )));
            }
        }
    }

    Ok(parts.join("/").nfc().collect())
}
