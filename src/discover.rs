//! Document discovery
//!
//! Enumerates candidate `.ui` files directly under a working directory.
//! Sorted so batch output is stable across runs.

use crate::error::ConvertResult;
use std::fs;
use std::path::{Path, PathBuf};

/// List `.ui` files directly under `dir` (no recursion), sorted by path.
pub fn find_ui_files(dir: &Path) -> ConvertResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "ui") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_only_ui_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.ui"), "<interface/>").unwrap();
        fs::write(dir.path().join("a.ui"), "<interface/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub.ui")).unwrap();

        let files = find_ui_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.ui", "b.ui"]);
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_ui_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        assert!(find_ui_files(Path::new("/nonexistent-dir")).is_err());
    }
}
