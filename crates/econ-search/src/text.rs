//! Line-oriented search over free text.

use serde::Serialize;
use tracing::debug;

use crate::{HighlightMarker, highlight, score};

/// A keyword occurrence on one line of a text report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMatch {
    /// The keyword that matched.
    pub keyword: String,
    /// 1-based line number.
    pub line_number: usize,
    /// The line with every occurrence of the keyword wrapped in the highlight marker.
    pub matched_line: String,
    /// Raw lines surrounding the match, including the matching line.
    pub context: Vec<String>,
    /// Relevance of the line for the keyword.
    pub relevance_score: f64,
}

impl TextMatch {
    /// Returns the 1-based line number of the first context line.
    pub fn context_start(&self, context_lines: usize) -> usize {
        self.line_number.saturating_sub(context_lines).max(1)
    }
}

/// Result of searching a text report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextResults {
    /// Keywords derived from the query.
    pub keywords: Vec<String>,
    /// Matches ordered by descending relevance.
    pub matches: Vec<TextMatch>,
}

impl TextResults {
    /// Returns true if the query had no searchable keywords.
    pub fn is_empty_query(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Searches `content` line by line.
///
/// Each (line, keyword) pair where the lowercased line contains the keyword yields one
/// match, so a line can appear once per keyword. The context window spans up to
/// `context_lines` raw lines on each side, clipped at the content boundaries. Matches
/// are sorted by descending relevance; the sort is stable, so equal scores stay in line
/// order.
pub fn search_text(
    content: &str,
    keywords: Vec<String>,
    context_lines: usize,
    marker: &HighlightMarker,
) -> TextResults {
    if keywords.is_empty() {
        return TextResults::default();
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let mut matches = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();
        for keyword in &keywords {
            if !lowered.contains(keyword.as_str()) {
                continue;
            }
            let start = index.saturating_sub(context_lines);
            let end = lines.len().min(index + context_lines + 1);
            matches.push(TextMatch {
                keyword: keyword.clone(),
                line_number: index + 1,
                matched_line: highlight(line, keyword, marker),
                context: lines[start..end].iter().map(|l| (*l).to_string()).collect(),
                relevance_score: score(&lowered, keyword),
            });
        }
    }

    matches.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    debug!(keywords = ?keywords, matches = matches.len(), "text search complete");

    TextResults { keywords, matches }
}
