//! Recursive directory listing for batch conversion.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Files and subdirectories found under a root directory.
#[derive(Debug, Clone, Default)]
pub struct TreeListing {
    /// All file paths at or below the root.
    pub files: Vec<PathBuf>,

    /// All subdirectory paths below the root (the root itself excluded).
    pub dirs: Vec<PathBuf>,
}

impl TreeListing {
    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.files.len() + self.dirs.len()
    }

    /// Check whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

/// List all files and subdirectories under `root`.
pub fn list_tree<P: AsRef<Path>>(root: P) -> Result<TreeListing> {
    list_tree_filtered(root, &[])
}

/// List files and subdirectories under `root`, keeping only files whose
/// extension matches one of `extensions`.
///
/// Extensions are given without a leading dot and match case-insensitively.
/// An empty filter keeps every file. Subdirectories are always listed.
/// Traversal is depth-first with no ordering guarantee across siblings.
pub fn list_tree_filtered<P: AsRef<Path>>(root: P, extensions: &[&str]) -> Result<TreeListing> {
    let root = root.as_ref();
    let mut listing = TreeListing::default();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            if path != root {
                listing.dirs.push(path.to_path_buf());
            }
        } else if matches_extension(path, extensions) {
            listing.files.push(path.to_path_buf());
        }
    }

    log::debug!(
        "walked {}: {} files, {} dirs",
        root.display(),
        listing.files.len(),
        listing.dirs.len()
    );
    Ok(listing)
}

fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            extensions.iter().any(|e| e.to_lowercase() == ext)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::create_dir_all(dir.path().join("c")).unwrap();
        fs::write(dir.path().join("top.md"), "- x\n").unwrap();
        fs::write(dir.path().join("a/note.MD"), "- y\n").unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), "z").unwrap();
        fs::write(dir.path().join("c/noext"), "w").unwrap();
        dir
    }

    #[test]
    fn test_lists_all_files_and_dirs() {
        let dir = fixture_tree();
        let listing = list_tree(dir.path()).unwrap();

        assert_eq!(listing.files.len(), 4);
        assert_eq!(listing.dirs.len(), 3);
        assert!(!listing.dirs.iter().any(|d| d == dir.path()));
    }

    #[test]
    fn test_extension_filter_case_insensitive() {
        let dir = fixture_tree();
        let listing = list_tree_filtered(dir.path(), &["md"]).unwrap();

        assert_eq!(listing.files.len(), 2);
        // Directories are listed regardless of the file filter.
        assert_eq!(listing.dirs.len(), 3);
    }

    #[test]
    fn test_filter_excludes_extensionless_files() {
        let dir = fixture_tree();
        let listing = list_tree_filtered(dir.path(), &["txt"]).unwrap();

        assert_eq!(listing.files.len(), 1);
        assert!(listing.files[0].ends_with("a/b/deep.txt"));
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let result = list_tree("/nonexistent/path/for/unlogseq");
        assert!(result.is_err());
    }
}
