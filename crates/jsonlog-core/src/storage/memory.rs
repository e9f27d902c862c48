//! In-memory file accessor

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::FileAccessor;

/// In-memory accessor for testing and ephemeral use
///
/// Files are lost when the accessor is dropped.
///
/// # Example
///
/// ```
/// use jsonlog_core::storage::MemoryFileAccessor;
/// use std::path::Path;
///
/// let files = MemoryFileAccessor::new();
/// files.insert("log.json", r#"{"log":[]}"#);
/// assert_eq!(files.get(Path::new("log.json")).as_deref(), Some(r#"{"log":[]}"#));
/// ```
#[derive(Debug, Default)]
pub struct MemoryFileAccessor {
    files: RwLock<HashMap<PathBuf, String>>,
}

impl MemoryFileAccessor {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Set a file's contents directly
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut files = self.files.write().unwrap();
        files.insert(path.into(), contents.into());
    }

    /// Current contents of a file, if it exists
    pub fn get(&self, path: &Path) -> Option<String> {
        let files = self.files.read().unwrap();
        files.get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file: {}", path.display()),
        )
    }
}

#[async_trait]
impl FileAccessor for MemoryFileAccessor {
    fn name(&self) -> &str {
        "memory"
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        self.read_blocking(path)
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.write_blocking(path, contents)
    }

    fn read_blocking(&self, path: &Path) -> io::Result<String> {
        self.get(path).ok_or_else(|| Self::not_found(path))
    }

    fn write_blocking(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.insert(path, contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_accessor() {
        let files = MemoryFileAccessor::new();
        let path = Path::new("/virtual/log.json");

        assert!(!files.contains(path));
        assert_eq!(files.read(path).await.unwrap_err().kind(), io::ErrorKind::NotFound);

        files.write(path, "hello").await.unwrap();
        assert!(files.contains(path));
        assert_eq!(files.read(path).await.unwrap(), "hello");
        assert_eq!(files.name(), "memory");
    }
}
