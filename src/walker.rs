use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::ChunkError;
use crate::syntax::language_for_extension;

/// Directory names pruned during traversal unless overridden
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "target",
    ".venv",
    "venv",
    "__pycache__",
];

/// Traversal configuration.
///
/// The skip-set is injected rather than baked in so callers (and tests)
/// can adjust it.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub skip_dirs: HashSet<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Collect the files under `root` that map to a configured language.
///
/// Prunes skip-set and hidden directories, skips hidden files, never
/// follows symlinks. Entries come back in sorted traversal order so runs
/// over the same tree are deterministic.
pub fn collect_source_files(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>, ChunkError> {
    let mut files = Vec::new();
    let walk = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !prune_dir(entry, options));

    for entry in walk {
        let entry = entry.map_err(|e| ChunkError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        if extension_of(entry.path())
            .and_then(|ext| language_for_extension(&ext))
            .is_some()
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn prune_dir(entry: &DirEntry, options: &WalkOptions) -> bool {
    // Never prune the root itself, whatever it is named.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    options.skip_dirs.contains(name.as_ref()) || name.starts_with('.')
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
