//! # Output Configuration
//!
//! Controls how the CLI decorates its messages. Colors and emoji markers are
//! used on capable terminals; plain bracketed tags are used otherwise.
//!
//! The following are respected, in order:
//! - `--color=always|never|auto`
//! - `NO_COLOR` (any value disables colors, see https://no-color.org/)
//! - `CLICOLOR=0` / `CLICOLOR_FORCE=1`
//! - `TERM=dumb`
//! - whether stdout is a terminal

use std::env;

use console::style;

/// Kinds of status line the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Changed,
    Warning,
    Error,
    Info,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Ok => "✅",
            Status::Changed => "✏️",
            Status::Warning => "⚠️",
            Status::Error => "❌",
            Status::Info => "🔍",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Changed => "[CHANGED]",
            Status::Warning => "[WARN]",
            Status::Error => "[ERR]",
            Status::Info => "[INFO]",
        }
    }
}

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the `--color` flag and the
    /// environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Marker for a status line.
    pub fn marker(&self, status: Status) -> String {
        if !self.use_color {
            return status.plain().to_string();
        }
        status.emoji().to_string()
    }

    /// Format `message` as a status line.
    pub fn line(&self, status: Status, message: &str) -> String {
        let marker = self.marker(status);
        if !self.use_color {
            return format!("{} {}", marker, message);
        }

        let styled = match status {
            Status::Ok => style(message).green(),
            Status::Changed => style(message).cyan(),
            Status::Warning => style(message).yellow(),
            Status::Error => style(message).red().bold(),
            Status::Info => style(message),
        };
        format!("{} {}", marker, styled.force_styling(true))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_environment() {
        assert!(OutputConfig::from_env_and_flag("always").use_color);
        assert!(!OutputConfig::from_env_and_flag("never").use_color);
        assert!(OutputConfig::from_env_and_flag("ALWAYS").use_color);
    }

    #[test]
    fn test_plain_markers() {
        let out = OutputConfig { use_color: false };
        assert_eq!(out.marker(Status::Ok), "[OK]");
        assert_eq!(out.marker(Status::Error), "[ERR]");
        assert_eq!(out.line(Status::Changed, "Added import"), "[CHANGED] Added import");
    }

    #[test]
    fn test_colored_line_contains_message() {
        let out = OutputConfig { use_color: true };
        let line = out.line(Status::Warning, "order");
        assert!(line.starts_with("⚠️"));
        assert!(line.contains("order"));
        assert!(line.contains('\u{1b}'));
    }
}
