//! Logger configuration
//!
//! Sources, lowest to highest precedence:
//! - built-in defaults
//! - a YAML file (`LoggerConfig::load`)
//! - environment variables (`JSONLOG_PATH`, `JSONLOG_COLOR`, `NO_COLOR`)

mod settings;

pub use settings::{ColorMode, LoggerConfig, PersistDefaults, ENV_COLOR, ENV_NO_COLOR, ENV_PATH};
