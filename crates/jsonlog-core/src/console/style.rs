//! Level to color/prefix lookup

use colored::{Color, Colorize};
use once_cell::sync::Lazy;

use crate::config::ColorMode;
use crate::types::Level;

/// How one level is drawn on the console
#[derive(Debug, Clone, PartialEq)]
pub struct LevelStyle {
    /// Text color; `None` leaves the line uncolored
    pub color: Option<Color>,
    /// Text placed before the message
    pub prefix: String,
}

impl LevelStyle {
    pub fn new(color: Option<Color>, prefix: impl Into<String>) -> Self {
        Self {
            color,
            prefix: prefix.into(),
        }
    }

    pub fn colored(color: Color) -> Self {
        Self::new(Some(color), "")
    }
}

/// The built-in level styles, indexed by `Level`
///
/// | level   | color   | prefix      |
/// |---------|---------|-------------|
/// | debug   | white   | `[DEBUG] `  |
/// | info    | magenta |             |
/// | success | green   |             |
/// | warning | yellow  |             |
/// | error   | red     |             |
pub static DEFAULT_STYLES: Lazy<[LevelStyle; 5]> = Lazy::new(|| Level::ALL.map(default_style));

fn default_style(level: Level) -> LevelStyle {
    match level {
        Level::Debug => LevelStyle::new(Some(Color::White), "[DEBUG] "),
        Level::Info => LevelStyle::colored(Color::Magenta),
        Level::Success => LevelStyle::colored(Color::Green),
        Level::Warning => LevelStyle::colored(Color::Yellow),
        Level::Error => LevelStyle::colored(Color::Red),
    }
}

/// Styles for every level, injected into a logger
#[derive(Debug, Clone)]
pub struct StyleTable {
    styles: [LevelStyle; 5],
    colors_enabled: bool,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTable {
    /// The built-in table, colored only when the terminal supports it
    ///
    /// Follows `colored`'s detection, which honors `NO_COLOR`,
    /// `CLICOLOR`/`CLICOLOR_FORCE` and whether stdout is a terminal.
    pub fn new() -> Self {
        Self::colored().with_colors(ColorMode::Auto.enabled())
    }

    /// The built-in table with colors forced on
    pub fn colored() -> Self {
        Self {
            styles: DEFAULT_STYLES.clone(),
            colors_enabled: true,
        }
    }

    /// The built-in prefixes without any ANSI color codes
    pub fn plain() -> Self {
        Self::colored().with_colors(false)
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Replace the style for one level
    pub fn with_style(mut self, level: Level, style: LevelStyle) -> Self {
        self.styles[slot(level)] = style;
        self
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    pub fn style(&self, level: Level) -> &LevelStyle {
        &self.styles[slot(level)]
    }

    /// Render a message as a console line for `level`
    ///
    /// When colors are enabled the escape codes are always written, even
    /// if `colored` itself would have suppressed them.
    pub fn render(&self, level: Level, text: &str) -> String {
        let style = self.style(level);
        let line = format!("{}{}", style.prefix, text);
        match (self.colors_enabled, style.color) {
            (true, Some(color)) => paint(&line, color),
            _ => line,
        }
    }
}

/// Position of `level` in `Level::ALL` and in every style array
fn slot(level: Level) -> usize {
    level as usize
}

fn paint(text: &str, color: Color) -> String {
    let painted = text.color(color);
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        painted.to_string()
    } else {
        // ColoredString honors the global switch; build the escape by hand
        format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
    }
}
