//! Marker splicing for matched keywords.
//!
//! These functions only insert marker strings around matches. How a marker is displayed
//! (bold in a terminal, checked for presence in a test) is left to the caller.

use regex::{Captures, NoExpand, Regex, RegexBuilder};
use serde::Serialize;

/// Default marker placed on both sides of a match.
pub const DEFAULT_MARKER: &str = "**";

/// Strings placed before and after each highlighted match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightMarker {
    /// Inserted before a match.
    pub open: String,
    /// Inserted after a match.
    pub close: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self::symmetric(DEFAULT_MARKER)
    }
}

impl HighlightMarker {
    /// Creates a marker with distinct opening and closing strings.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Creates a marker that uses the same string on both sides.
    pub fn symmetric(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        Self {
            open: marker.clone(),
            close: marker,
        }
    }

    /// Wraps `text` in this marker.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

/// Builds a case-insensitive literal pattern for a keyword.
fn keyword_pattern(keyword: &str) -> Option<Regex> {
    if keyword.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Wraps every case-insensitive occurrence of `keyword` in `line` with `marker`.
///
/// The matched text keeps its original case and the rest of the line is unchanged.
pub fn highlight(line: &str, keyword: &str, marker: &HighlightMarker) -> String {
    match keyword_pattern(keyword) {
        Some(pattern) => pattern
            .replace_all(line, |caps: &Captures<'_>| marker.wrap(&caps[0]))
            .into_owned(),
        None => line.to_string(),
    }
}

/// Replaces every occurrence of each keyword with the upper-cased keyword in markers.
///
/// Keywords are applied in order, so later keywords also see the output of earlier ones.
pub fn emphasize_keywords(text: &str, keywords: &[String], marker: &HighlightMarker) -> String {
    keywords.iter().fold(text.to_string(), |acc, keyword| {
        match keyword_pattern(keyword) {
            Some(pattern) => {
                let replacement = marker.wrap(&keyword.to_uppercase());
                pattern
                    .replace_all(&acc, NoExpand(&replacement))
                    .into_owned()
            }
            None => acc,
        }
    })
}
