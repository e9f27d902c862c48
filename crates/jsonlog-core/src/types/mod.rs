//! Core types for log entries and the persisted document

mod level;
mod filter;
mod entry;

pub use level::Level;
pub use filter::LevelFilter;
pub use entry::{LogDocument, LogEntry, TIMESTAMP_FORMAT};
