//! Level filters for printing and querying entries

use super::level::Level;

/// Selects which entries `print_log` and `entries` return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// Every entry
    #[default]
    All,
    /// Only entries of one level
    Only(Level),
}

impl LevelFilter {
    /// Parse a filter name, falling back to `All`
    ///
    /// Only the exact lowercase level names select a single level; `"all"`
    /// and anything else (other casing, aliases, padding) select every entry.
    /// Use `Level::from_str` for forgiving parsing.
    pub fn parse_lenient(s: &str) -> Self {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .map(LevelFilter::Only)
            .unwrap_or(LevelFilter::All)
    }

    pub fn matches(&self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(wanted) => *wanted == level,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter::Only(level)
    }
}

impl From<&str> for LevelFilter {
    fn from(s: &str) -> Self {
        LevelFilter::parse_lenient(s)
    }
}

impl From<String> for LevelFilter {
    fn from(s: String) -> Self {
        LevelFilter::parse_lenient(&s)
    }
}

impl From<&String> for LevelFilter {
    fn from(s: &String) -> Self {
        LevelFilter::parse_lenient(s)
    }
}

impl std::fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelFilter::All => f.write_str("all"),
            LevelFilter::Only(level) => write!(f, "{}", level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(LevelFilter::parse_lenient("all"), LevelFilter::All);
        assert_eq!(LevelFilter::parse_lenient("error"), LevelFilter::Only(Level::Error));
        assert_eq!(LevelFilter::parse_lenient("nonsense"), LevelFilter::All);
        assert_eq!(LevelFilter::parse_lenient(""), LevelFilter::All);
    }

    #[test]
    fn test_parse_lenient_is_exact() {
        for name in ["ERROR", "warn", " info ", "Debug"] {
            assert_eq!(LevelFilter::parse_lenient(name), LevelFilter::All, "{:?}", name);
        }
        for level in Level::ALL {
            assert_eq!(LevelFilter::parse_lenient(level.as_str()), LevelFilter::Only(level));
        }
    }

    #[test]
    fn test_from_owned_string() {
        let name = String::from("success");
        assert_eq!(LevelFilter::from(&name), LevelFilter::Only(Level::Success));
        assert_eq!(LevelFilter::from(name), LevelFilter::Only(Level::Success));
    }

    #[test]
    fn test_matches() {
        assert!(LevelFilter::All.matches(Level::Debug));
        let only_errors = LevelFilter::from(Level::Error);
        assert!(only_errors.matches(Level::Error));
        assert!(!only_errors.matches(Level::Info));
    }
}
