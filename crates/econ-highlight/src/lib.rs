//! Terminal output styling for econ.
//!
//! Provides ANSI style helpers for headers and status messages, rendering of
//! marker-wrapped search matches, and syntax highlighting for TOML and JSON output.

#![warn(missing_docs)]

mod markers;
mod syntax;

pub use markers::{render_markers, strip_markers};
pub use syntax::Highlighter;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings and matches).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (for errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Formats text as an error (red).
pub fn error(text: &str) -> String {
    format!("{}{}{}", colors::RED, text, colors::RESET)
}

/// Formats a matched span (bold yellow).
pub fn matched(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::YELLOW, text, colors::RESET)
}

/// Returns a dimmed horizontal rule for visual separation.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_formatting() {
        let h = header("Data matches");
        assert!(h.starts_with(colors::BOLD));
        assert!(h.contains(colors::CYAN));
        assert!(h.ends_with(colors::RESET));
        assert!(h.contains("Data matches"));
    }

    #[test]
    fn status_styles() {
        assert!(warning("no keywords").contains(colors::YELLOW));
        assert!(error("no data").contains(colors::RED));
        assert!(success("ok").contains(colors::GREEN));
        assert!(dim("faint").contains(colors::DIM));
    }

    #[test]
    fn matched_is_bold_yellow() {
        assert_eq!(matched("GDP"), "\x1b[1m\x1b[33mGDP\x1b[0m");
    }

    #[test]
    fn rule_width() {
        let r = rule(4);
        assert!(r.contains("────"));
        assert!(!r.contains("─────"));
    }
}
