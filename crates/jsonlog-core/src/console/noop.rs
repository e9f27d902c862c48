//! No-op console implementation

use super::traits::Console;

/// A console that prints nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpConsole;

impl NoOpConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for NoOpConsole {
    fn print(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Logger, MemoryFileAccessor};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_silent_logger_still_persists() {
        let logger = Logger::builder("quiet.json")
            .files(Arc::new(MemoryFileAccessor::new()))
            .console(Arc::new(NoOpConsole::new()))
            .build()
            .unwrap();

        logger.warning("nobody sees this").await.unwrap();
        assert_eq!(logger.read_document().await.unwrap().len(), 1);
    }
}
