//! Display helpers for indicator values.

/// Suffix thresholds, largest first.
const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Formats a number with a `T`/`B`/`M`/`K` suffix and one decimal place.
pub fn format_large_number(num: f64) -> String {
    for (threshold, suffix) in SCALES {
        if num.abs() >= threshold {
            return format!("{:.1}{suffix}", num / threshold);
        }
    }
    format!("{num:.1}")
}

/// Formats a percentage with one decimal place.
pub fn format_percentage(num: f64) -> String {
    format!("{num:.1}%")
}
