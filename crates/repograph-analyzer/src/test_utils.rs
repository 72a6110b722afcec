//! Test utilities for building synthetic repository trees

use std::fs;
use tempfile::TempDir;

/// Create a temporary repository with the given file structure.
///
/// Paths are relative to the temp root; parent directories are created as
/// needed. Directories with no files can be listed with a trailing slash and
/// empty content.
pub fn create_repo_with_structure(structure: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for (path, content) in structure {
        if let Some(dir) = path.strip_suffix('/') {
            fs::create_dir_all(root.join(dir)).unwrap();
            continue;
        }
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    temp_dir
}

/// The sample pipeline tree used by several end-to-end tests.
pub fn create_sample_repo() -> TempDir {
    create_repo_with_structure(&[
        ("ingestion/db_writer.py", "from loader import s3_loader\n"),
        (
            "transformer/data_cleaner.py",
            "import ingestion.db_writer\n\ndef clean():\n    pass\n",
        ),
        ("loader/s3_loader.py", "def load():\n    return []\n"),
        ("README.md", "# sample\n"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_repo_with_structure() {
        let temp_dir = create_repo_with_structure(&[
            ("src/main.py", "print('hi')\n"),
            ("empty/", ""),
        ]);
        let root = temp_dir.path();

        assert!(root.join("src/main.py").is_file());
        assert!(root.join("empty").is_dir());
    }
}
