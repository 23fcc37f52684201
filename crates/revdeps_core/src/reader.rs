//! The single I/O seam of the resolver.
//!
//! Everything that needs file contents goes through [`FileReader`], so a test
//! can swap the filesystem for a [`MemoryReader`] fixture.

use log::trace;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn path(&self) -> &Path {
        match self {
            ReadError::NotFound { path } | ReadError::Unreadable { path, .. } => path,
        }
    }
}

/// Reads the full text of a file.
///
/// Implementations must be shareable across threads so reads can be fanned out.
pub trait FileReader: Sync {
    fn read(&self, path: &Path) -> Result<String, ReadError>;
}

/// Reads UTF-8 text from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> Result<String, ReadError> {
        trace!("Reading {}", path.display());
        fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path: path.to_path_buf() },
            _ => ReadError::Unreadable { path: path.to_path_buf(), source },
        })
    }
}

/// In-memory file tree keyed by path. Paths that were never inserted are
/// reported as not found.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P, S> FromIterator<(P, S)> for MemoryReader
where
    P: Into<PathBuf>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, S)>>(iter: I) -> Self {
        let mut reader = MemoryReader::new();
        for (path, contents) in iter {
            reader.insert(path, contents);
        }
        reader
    }
}

impl FileReader for MemoryReader {
    fn read(&self, path: &Path) -> Result<String, ReadError> {
        trace!("Reading {} from memory", path.display());
        self.files.get(path).cloned().ok_or_else(|| ReadError::NotFound { path: path.to_path_buf() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_fs_reader_reads_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "a.ts", b"import b = require('./b');");
        assert_eq!(FsReader.read(&file).unwrap(), "import b = require('./b');");
    }

    #[test]
    fn test_fs_reader_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.ts");
        let err = FsReader.read(&missing).unwrap_err();
        assert!(matches!(err, ReadError::NotFound { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_fs_reader_directory_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let err = FsReader.read(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ReadError::Unreadable { .. }));
    }

    #[test]
    fn test_fs_reader_invalid_utf8_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "bin.ts", &[0xff, 0xfe, 0x00, 0x80]);
        let err = FsReader.read(&file).unwrap_err();
        assert!(matches!(err, ReadError::Unreadable { .. }));
    }

    #[test]
    fn test_memory_reader() {
        let reader = MemoryReader::new().with_file("/a.ts", "a").with_file("/b.ts", "");
        assert_eq!(reader.len(), 2);
        assert_eq!(reader.read(Path::new("/a.ts")).unwrap(), "a");
        assert_eq!(reader.read(Path::new("/b.ts")).unwrap(), "");
        assert!(matches!(reader.read(Path::new("/c.ts")), Err(ReadError::NotFound { .. })));
    }

    #[test]
    fn test_memory_reader_from_iter() {
        let reader: MemoryReader = [("/x.ts", "x"), ("/y.ts", "y")].into_iter().collect();
        assert_eq!(reader.len(), 2);
        assert!(!reader.is_empty());
        assert_eq!(reader.read(Path::new("/y.ts")).unwrap(), "y");
    }

    #[test]
    fn test_error_message_names_path() {
        let err = ReadError::NotFound { path: PathBuf::from("/gone.ts") };
        assert_eq!(err.to_string(), "file not found: /gone.ts");
    }
}
