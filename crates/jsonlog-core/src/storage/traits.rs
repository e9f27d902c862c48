//! File accessor trait definition

use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

/// Reads and replaces the full contents of a file as text
///
/// The async methods back every logging call. The blocking variants are
/// only used while constructing a logger, which heals the document
/// synchronously.
#[async_trait]
pub trait FileAccessor: Send + Sync {
    /// Human-readable name of this accessor
    fn name(&self) -> &str;

    /// Read the whole file
    ///
    /// Fails with `io::ErrorKind::NotFound` if the file does not exist.
    async fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace the whole file
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn read_blocking(&self, path: &Path) -> io::Result<String>;

    fn write_blocking(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Type alias for an Arc-wrapped file accessor
pub type SharedFileAccessor = Arc<dyn FileAccessor>;
