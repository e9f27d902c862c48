//! jsonlog core
//!
//! A console-and-file logger. Each level method prints a colored line to the
//! console and, when asked, appends a structured entry to a JSON log file:
//!
//! ```text
//! { "log": [ { "message": <any>, "type": "<level>", "timeStamp": "<local time>" }, ... ] }
//! ```
//!
//! The file accessor, the console and the level styles are injected, so the
//! same logger runs against the filesystem and stdout in production and
//! against in-memory stand-ins in tests.
//!
//! ```rust,no_run
//! use jsonlog_core::{Logger, LoggerConfig};
//!
//! # async fn run() -> jsonlog_core::LogResult<()> {
//! let config = LoggerConfig::resolve(None)?;
//! let logger = Logger::from_config(&config)?;
//!
//! logger.success("deployed").await?;
//! logger.warning(serde_json::json!({"queue": "mail", "depth": 812})).await?;
//! logger.print_log("warning").await;
//! # Ok(())
//! # }
//! ```
//!
//! Internal diagnostics (document resets, appends) are emitted as `tracing`
//! events; install a subscriber in the host application to see them.

pub mod error;
pub mod types;
pub mod storage;
pub mod console;
pub mod config;
pub mod logger;

pub use error::{LogError, LogResult};

pub use types::{Level, LevelFilter, LogDocument, LogEntry};

pub use storage::{FileAccessor, MemoryFileAccessor, SharedFileAccessor, TokioFileAccessor};

pub use console::{
    Console, SharedConsole, StdoutConsole, MemoryConsole, NoOpConsole,
    LevelStyle, StyleTable,
};

pub use config::{ColorMode, LoggerConfig, PersistDefaults};

pub use logger::{Logger, LoggerBuilder};
