//! Error types

use thiserror::Error;

/// Errors that can occur while logging
#[derive(Error, Debug)]
pub enum LogError {
    /// Reading or writing the log file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The log document or a message could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A level name that is not one of debug, info, success, warning, error
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type LogResult<T> = Result<T, LogError>;
