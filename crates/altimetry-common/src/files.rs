//! Recursive file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Default suffix for granule files.
pub const DEFAULT_SUFFIX: &str = ".h5";

/// List files under `path` whose name ends with `endswith`.
///
/// Walks the tree recursively in filesystem traversal order. Only regular
/// files are returned and symlinked directories are not followed. Entries that
/// cannot be read, including a missing root, are skipped with a warning.
pub fn list_files(path: impl AsRef<Path>, endswith: &str) -> Vec<PathBuf> {
    let root = path.as_ref();

    let files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(endswith))
        .map(|entry| entry.into_path())
        .collect();

    debug!(root = %root.display(), suffix = endswith, count = files.len(), "Listed files");
    files
}
