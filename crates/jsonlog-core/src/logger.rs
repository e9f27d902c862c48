//! The logger: colored console lines plus an append-only JSON log file
//!
//! Every persisting call reads the whole document, appends one entry and
//! writes the document back. Nothing is cached between calls.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::{LoggerConfig, PersistDefaults};
use crate::console::{SharedConsole, StdoutConsole, StyleTable};
use crate::error::LogResult;
use crate::storage::{FileAccessor, SharedFileAccessor, TokioFileAccessor};
use crate::types::{Level, LevelFilter, LogDocument, LogEntry};

/// Console-and-file logger
///
/// Clones share the file accessor, the console and the write lock, so
/// appends issued through any clone are serialized. Loggers created
/// separately for the same path are not coordinated.
///
/// # Example
///
/// ```no_run
/// use jsonlog_core::Logger;
///
/// # async fn run() -> jsonlog_core::LogResult<()> {
/// let logger = Logger::new("app-log.json")?;
/// logger.info("server started").await?;
/// logger.debug("console only").await?;
/// logger.print_log("error").await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Logger {
    path: PathBuf,
    files: SharedFileAccessor,
    console: SharedConsole,
    styles: StyleTable,
    persist: PersistDefaults,
    write_lock: Arc<Mutex<()>>,
}

impl Logger {
    /// Open a logger on the local filesystem, printing to stdout
    ///
    /// Creates the log file if it is missing and resets it to an empty log
    /// if it does not hold a valid document.
    pub fn new(path: impl Into<PathBuf>) -> LogResult<Self> {
        Self::builder(path).build()
    }

    /// Open a logger from configuration
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        Self::builder(&config.path)
            .styles(config.style_table())
            .persist_defaults(config.persist)
            .build()
    }

    pub fn builder(path: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(path)
    }

    /// The backing log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Append an entry to the log file
    ///
    /// A malformed document is returned as an error and left untouched.
    pub async fn write_log_file(&self, entry: LogEntry) -> LogResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        document.push(entry);
        self.files.write(&self.path, &document.to_json()?).await?;

        debug!(path = %self.path.display(), entries = document.len(), "appended log entry");
        Ok(())
    }

    /// Read and parse the current log file
    pub async fn read_document(&self) -> LogResult<LogDocument> {
        let text = self.files.read(&self.path).await?;
        LogDocument::parse(&text)
    }

    /// Entries matching `filter`, oldest first
    pub async fn entries(&self, filter: impl Into<LevelFilter>) -> LogResult<Vec<LogEntry>> {
        let filter = filter.into();
        let document = self.read_document().await?;
        Ok(document
            .log
            .into_iter()
            .filter(|entry| filter.matches(entry.level))
            .collect())
    }

    /// Print matching entries to the console, one JSON object per line
    ///
    /// Accepts a `Level`, a `LevelFilter` or a string; `"all"` and unknown
    /// strings print everything. Read and parse failures are printed
    /// instead of returned. Returns how many entries were printed.
    pub async fn print_log(&self, filter: impl Into<LevelFilter>) -> usize {
        let entries = match self.entries(filter).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to print log");
                self.console.print(&e.to_string());
                return 0;
            }
        };

        for entry in &entries {
            let line = serde_json::to_string(entry).unwrap_or_else(|e| e.to_string());
            self.console.print(&line);
        }
        entries.len()
    }

    /// Print `message` at `level` and, if `persist` is set, append it to the log file
    pub async fn log<M>(&self, level: Level, message: M, persist: bool) -> LogResult<()>
    where
        M: Serialize,
    {
        let entry = LogEntry::new(level, serde_json::to_value(message)?);
        self.console.print(&self.styles.render(level, &entry.message_text()));

        if persist {
            self.write_log_file(entry).await?;
        }
        Ok(())
    }

    /// White `[DEBUG]` line; not written to the log file by default
    pub async fn debug<M: Serialize>(&self, message: M) -> LogResult<()> {
        self.log(Level::Debug, message, self.persist.get(Level::Debug)).await
    }

    /// Magenta line
    pub async fn info<M: Serialize>(&self, message: M) -> LogResult<()> {
        self.log(Level::Info, message, self.persist.get(Level::Info)).await
    }

    /// Green line
    pub async fn success<M: Serialize>(&self, message: M) -> LogResult<()> {
        self.log(Level::Success, message, self.persist.get(Level::Success)).await
    }

    /// Yellow line
    pub async fn warning<M: Serialize>(&self, message: M) -> LogResult<()> {
        self.log(Level::Warning, message, self.persist.get(Level::Warning)).await
    }

    /// Red line
    pub async fn error<M: Serialize>(&self, message: M) -> LogResult<()> {
        self.log(Level::Error, message, self.persist.get(Level::Error)).await
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("files", &self.files.name())
            .field("colors", &self.styles.colors_enabled())
            .field("persist", &self.persist)
            .finish()
    }
}

/// Builder for injecting the file accessor, console and styles
pub struct LoggerBuilder {
    path: PathBuf,
    files: Option<SharedFileAccessor>,
    console: Option<SharedConsole>,
    styles: Option<StyleTable>,
    persist: PersistDefaults,
}

impl LoggerBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            files: None,
            console: None,
            styles: None,
            persist: PersistDefaults::default(),
        }
    }

    /// Where the log document lives (default: the local filesystem)
    pub fn files(mut self, files: SharedFileAccessor) -> Self {
        self.files = Some(files);
        self
    }

    /// Where console lines go (default: stdout)
    pub fn console(mut self, console: SharedConsole) -> Self {
        self.console = Some(console);
        self
    }

    /// Level colors and prefixes (default: the built-in table, colored when
    /// the terminal supports it)
    pub fn styles(mut self, styles: StyleTable) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn persist_defaults(mut self, persist: PersistDefaults) -> Self {
        self.persist = persist;
        self
    }

    /// Build the logger, creating or resetting the log document
    pub fn build(self) -> LogResult<Logger> {
        let files = self.files
            .unwrap_or_else(|| Arc::new(TokioFileAccessor::new()) as SharedFileAccessor);
        ensure_document(&*files, &self.path)?;

        Ok(Logger {
            path: self.path,
            files,
            console: self
                .console
                .unwrap_or_else(|| Arc::new(StdoutConsole::new()) as SharedConsole),
            styles: self.styles.unwrap_or_default(),
            persist: self.persist,
            write_lock: Arc::new(Mutex::new(())),
        })
    }
}

/// Make sure `path` holds a valid document, writing an empty one otherwise
///
/// Only I/O failures other than a missing or non-UTF-8 file are returned.
fn ensure_document(files: &dyn FileAccessor, path: &Path) -> LogResult<()> {
    match files.read_blocking(path) {
        Ok(text) if LogDocument::parse(&text).is_ok() => return Ok(()),
        Ok(_) => {
            warn!(path = %path.display(), "log file is not a valid log document, resetting");
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "creating log file");
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!(path = %path.display(), "log file is not UTF-8, resetting");
        }
        Err(e) => return Err(e.into()),
    }

    files.write_blocking(path, &LogDocument::new().to_json()?)?;
    Ok(())
}
