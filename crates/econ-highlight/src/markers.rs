//! Rendering of marker-wrapped match spans.

use crate::matched;

/// Replaces each `open ... close` span in `text` with a bold-yellow rendering of its
/// contents.
///
/// An opening marker without a matching close is left as-is, as is everything outside
/// marker pairs. Empty markers disable rendering.
pub fn render_markers(text: &str, open: &str, close: &str) -> String {
    transform_spans(text, open, close, matched)
}

/// Removes marker pairs from `text`, keeping the wrapped contents.
pub fn strip_markers(text: &str, open: &str, close: &str) -> String {
    transform_spans(text, open, close, str::to_string)
}

/// Applies `render` to the contents of each complete marker pair.
fn transform_spans(text: &str, open: &str, close: &str, render: impl Fn(&str) -> String) -> String {
    if open.is_empty() || close.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            break;
        };
        output.push_str(&rest[..start]);
        output.push_str(&render(&after_open[..end]));
        rest = &after_open[end + close.len()..];
    }
    output.push_str(rest);
    output
}
