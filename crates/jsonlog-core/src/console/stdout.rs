//! Standard output console

use std::io::Write;

use super::traits::Console;

/// A console that writes each line to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn print(&self, line: &str) {
        // A closed stdout must not take the caller down with it
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_console_prints() {
        // Just make sure it doesn't panic
        let console = StdoutConsole::new();
        console.print("line one");
        console.print("");
    }
}
