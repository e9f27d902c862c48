//! Persisted log entries and the document that holds them

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::level::Level;
use crate::error::LogResult;

/// `chrono` format for entry timestamps, e.g. `10/19/2026, 3:04:05 PM`
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One persisted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The logged value; any JSON value, not only text
    pub message: Value,
    /// Severity, stored under the `type` key
    #[serde(rename = "type")]
    pub level: Level,
    /// Local creation time
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
    /// Keys written by other tools, carried through rewrites untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(level: Level, message: impl Into<Value>) -> Self {
        Self::at(level, message, Local::now())
    }

    /// Create an entry stamped with a specific time
    pub fn at(level: Level, message: impl Into<Value>, time: DateTime<Local>) -> Self {
        Self {
            message: message.into(),
            level,
            time_stamp: time.format(TIMESTAMP_FORMAT).to_string(),
            extra: Map::new(),
        }
    }

    /// The message as console text: strings verbatim, other values as JSON
    pub fn message_text(&self) -> String {
        match &self.message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// The whole contents of a log file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogDocument {
    /// Entries in the order they were appended
    pub log: Vec<LogEntry>,
    /// Top-level keys other than `log`, preserved on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> LogResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
