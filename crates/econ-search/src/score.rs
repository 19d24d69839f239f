//! Frequency and position heuristics for match relevance.

/// Multiplier applied when the text starts with the keyword.
const POSITION_BONUS: f64 = 2.0;

/// Multiplier applied when the keyword occurs as a standalone word.
const WORD_BONUS: f64 = 1.5;

/// Scores how relevant `haystack` is for `keyword`.
///
/// Both arguments are expected to be lowercased already. The score is the number of
/// non-overlapping occurrences, doubled when the haystack starts with the keyword and
/// multiplied by 1.5 when the keyword appears as a space-delimited word. A haystack that
/// does not contain the keyword scores `0.0`, as does an empty keyword.
pub fn score(haystack: &str, keyword: &str) -> f64 {
    if keyword.is_empty() {
        return 0.0;
    }

    let count = haystack.matches(keyword).count();
    if count == 0 {
        return 0.0;
    }

    let position_bonus = if haystack.starts_with(keyword) {
        POSITION_BONUS
    } else {
        1.0
    };
    let word_bonus = if format!(" {haystack} ").contains(&format!(" {keyword} ")) {
        WORD_BONUS
    } else {
        1.0
    };

    count as f64 * position_bonus * word_bonus
}
