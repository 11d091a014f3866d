//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use casegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CasegenError, CasegenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CasegenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CasegenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CasegenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("x.ts");

        fs.write_file(&file, "first").unwrap();
        fs.write_file(&file, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "second");
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("missing/x.ts");

        let err = fs.write_file(&file, "x").unwrap_err();
        match err {
            CasegenError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
