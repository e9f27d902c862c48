//! Log severity levels

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Severity of a log entry
///
/// Serialized lowercase, which is also the value stored in the `type`
/// field of a persisted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// All levels, in declaration order
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Success,
        Level::Warning,
        Level::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Whether messages at this level are written to the log file when the
    /// caller does not say otherwise
    ///
    /// Debug output is console-only by default; everything else is persisted.
    pub fn persisted_by_default(&self) -> bool {
        !matches!(self, Level::Debug)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "success" => Ok(Level::Success),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert!(matches!("fatal".parse::<Level>(), Err(LogError::UnknownLevel(_))));
    }

    #[test]
    fn test_level_serialization() {
        let json = serde_json::to_string(&Level::Success).unwrap();
        assert_eq!(json, "\"success\"");

        let level: Level = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, Level::Warning);
        assert!(serde_json::from_str::<Level>("\"warn\"").is_err());
    }

    #[test]
    fn test_default_persistence() {
        assert!(!Level::Debug.persisted_by_default());
        for level in &Level::ALL[1..] {
            assert!(level.persisted_by_default(), "{} should persist", level);
        }
    }
}
