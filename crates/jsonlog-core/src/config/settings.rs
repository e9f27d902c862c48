//! Configuration structure, file loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::console::StyleTable;
use crate::error::{LogError, LogResult};
use crate::types::Level;

/// Overrides the log file path
pub const ENV_PATH: &str = "JSONLOG_PATH";
/// `auto`, `always` or `never`
pub const ENV_COLOR: &str = "JSONLOG_COLOR";
/// Any non-empty value disables colors (https://no-color.org)
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// When console lines get ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colors when stdout looks like a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "true" | "1" => Ok(ColorMode::Always),
            "never" | "false" | "0" => Ok(ColorMode::Never),
            other => Err(LogError::config(format!("invalid color mode: {}", other))),
        }
    }
}

/// Whether each level is written to the log file when the caller does not say
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistDefaults {
    pub debug: bool,
    pub info: bool,
    pub success: bool,
    pub warning: bool,
    pub error: bool,
}

impl Default for PersistDefaults {
    fn default() -> Self {
        Self {
            debug: Level::Debug.persisted_by_default(),
            info: Level::Info.persisted_by_default(),
            success: Level::Success.persisted_by_default(),
            warning: Level::Warning.persisted_by_default(),
            error: Level::Error.persisted_by_default(),
        }
    }
}

impl PersistDefaults {
    pub fn get(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Success => self.success,
            Level::Warning => self.warning,
            Level::Error => self.error,
        }
    }
}

/// Logger settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file path
    pub path: PathBuf,
    /// Console colors
    pub color: ColorMode,
    /// Per-level default for writing to the log file
    pub persist: PersistDefaults,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: Self::default_log_path(),
            color: ColorMode::default(),
            persist: PersistDefaults::default(),
        }
    }
}

impl LoggerConfig {
    /// Defaults for a specific log file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// `<data dir>/jsonlog/log.json`, e.g. `~/.local/share/jsonlog/log.json` on Linux
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".local").join("share"));
        data_dir.join("jsonlog").join("log.json")
    }

    /// Load from a YAML file; missing keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> LogResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LogError::config(format!("Failed to parse YAML: {}", e)))
    }

    /// Defaults, then the YAML file if given, then the process environment
    pub fn resolve(file: Option<&Path>) -> LogResult<Self> {
        let config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_env()
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> LogResult<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_env_from<F>(mut self, lookup: F) -> LogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(path) = non_empty(ENV_PATH) {
            self.path = PathBuf::from(path);
        }
        if let Some(mode) = non_empty(ENV_COLOR) {
            self.color = mode.parse()?;
        }
        if non_empty(ENV_NO_COLOR).is_some() {
            self.color = ColorMode::Never;
        }
        Ok(self)
    }

    /// The style table this configuration asks for
    pub fn style_table(&self) -> StyleTable {
        StyleTable::colored().with_colors(self.color.enabled())
    }
}
