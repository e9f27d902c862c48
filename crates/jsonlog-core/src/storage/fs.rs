//! Filesystem accessor backed by `tokio::fs`

use std::io;
use std::path::Path;

use async_trait::async_trait;

use super::traits::FileAccessor;

/// Accessor for files on the local filesystem
///
/// Writes create missing parent directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileAccessor;

impl TokioFileAccessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileAccessor for TokioFileAccessor {
    fn name(&self) -> &str {
        "filesystem"
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await
    }

    fn read_blocking(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_blocking(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("log.json");
        let accessor = TokioFileAccessor::new();

        let err = accessor.read(&path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        accessor.write(&path, "first").await.unwrap();
        accessor.write(&path, "second").await.unwrap();
        assert_eq!(accessor.read(&path).await.unwrap(), "second");
        assert_eq!(accessor.read_blocking(&path).unwrap(), "second");
    }

    #[test]
    fn test_blocking_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("log.json");

        TokioFileAccessor::new().write_blocking(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
