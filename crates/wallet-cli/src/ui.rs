//! Terminal output: mode routing, key/value lines, errors.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain `key=value` text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from the `output` option and environment.
    ///
    /// `json` wins outright; otherwise pretty only on a TTY that is not
    /// `TERM=dumb`.
    pub fn resolve(output: Option<&str>, is_tty: bool, term_is_dumb: bool) -> Self {
        if output.is_some_and(|o| o.eq_ignore_ascii_case("json")) {
            return Self::Json;
        }
        if is_tty && !term_is_dumb {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Terminal context for output decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and the `output` option.
    pub fn from_env(output: Option<&str>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        let mode = OutputMode::resolve(output, is_tty, term_is_dumb);
        Self {
            color: mode.is_pretty() && !no_color_env,
            mode,
        }
    }
}

/// Render a key-value line.
///
/// Pretty mode: "Key: value" with a dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = format!("{}:", key);
        if ctx.color {
            format!("{} {}", label.dimmed(), value)
        } else {
            format!("{} {}", label, value)
        }
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "Error: message" with optional "Hint: ..." on the next line
/// Plain/JSON mode: "error=message" with optional "hint=..."
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        if ctx.color {
            lines.push(format!("{} {}", "Error:".red().bold(), message));
        } else {
            lines.push(format!("Error: {}", message));
        }
        if let Some(h) = error_hint {
            lines.push(h.to_string());
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h.trim_start_matches("Hint: ")));
        }
    }
    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
