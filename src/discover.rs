//! File discovery and loading.
//!
//! The lister accepts a single file or a directory; directories yield their
//! `.py` regular files, non-recursively, in sorted order so runs are
//! deterministic. The loader reads whole files as UTF-8 text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List the files to analyze for `path`.
///
/// A plain file is returned as-is (whatever its extension); a directory
/// yields its immediate `.py` files, sorted by path.
pub fn list_files(path: &Path) -> io::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "py"))
        .collect();
    files.sort();
    Ok(files)
}

/// Read a file's full source text.
pub fn load_source(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Split source into 1-indexable lines with terminators stripped.
pub fn split_lines(source: &str) -> Vec<String> {
    source.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_single_file_listed_verbatim() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("one.py");
        fs::write(&file, "x = 1\n").unwrap();
        let listed = list_files(&file).unwrap();
        assert_eq!(listed, vec![file]);
    }

    #[test]
    fn test_directory_lists_py_files_sorted_non_recursive() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.py"), "").unwrap();
        fs::write(root.join("a.py"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/c.py"), "").unwrap();

        let listed = list_files(root).unwrap();
        assert_eq!(listed, vec![root.join("a.py"), root.join("b.py")]);
    }

    #[test]
    fn test_split_lines_strips_terminators() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert!(split_lines("").is_empty());
    }
}
