//! Whole-file access for the log document
//!
//! - `TokioFileAccessor`: the local filesystem
//! - `MemoryFileAccessor`: in-memory files for testing and embedding

mod traits;
mod fs;
mod memory;

pub use traits::{FileAccessor, SharedFileAccessor};
pub use fs::TokioFileAccessor;
pub use memory::MemoryFileAccessor;
