//! In-memory console that records printed lines

use std::sync::RwLock;

use super::traits::Console;

/// Collects printed lines in order
///
/// # Example
///
/// ```
/// use jsonlog_core::console::{Console, MemoryConsole};
///
/// let console = MemoryConsole::new();
/// console.print("hello");
/// assert_eq!(console.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: RwLock<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().unwrap().clone()
    }

    /// Remove and return everything printed so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.write().unwrap())
    }

    pub fn len(&self) -> usize {
        self.lines.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Console for MemoryConsole {
    fn print(&self, line: &str) {
        self.lines.write().unwrap().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console() {
        let console = MemoryConsole::new();
        assert!(console.is_empty());

        console.print("a");
        console.print("b");
        assert_eq!(console.len(), 2);
        assert_eq!(console.take(), vec!["a", "b"]);
        assert!(console.is_empty());
    }
}
