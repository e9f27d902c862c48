//! Console trait definition

use std::sync::Arc;

/// A sink for rendered console lines
///
/// Implementations:
/// - `StdoutConsole`: prints to stdout
/// - `MemoryConsole`: collects lines, for tests and embedding
/// - `NoOpConsole`: discards everything
pub trait Console: Send + Sync {
    /// Print one line; the line carries no trailing newline
    fn print(&self, line: &str);
}

/// Type alias for an Arc-wrapped console
pub type SharedConsole = Arc<dyn Console>;
