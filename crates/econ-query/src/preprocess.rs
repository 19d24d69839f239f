//! Query tokenization and keyword filtering.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::Stopwords;

/// Word tokens: runs of alphanumerics and underscores.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Default minimum keyword length in characters. Shorter tokens are dropped.
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 3;

/// Turns raw query text into an ordered list of search keywords.
///
/// The stopword set is bound at construction and never changes afterwards, so a single
/// preprocessor can be shared by every search in a session.
#[derive(Debug, Clone)]
pub struct QueryPreprocessor {
    /// Words removed from every query.
    stopwords: Stopwords,
    /// Tokens with fewer characters than this are removed.
    min_length: usize,
}

impl Default for QueryPreprocessor {
    fn default() -> Self {
        Self::new(Stopwords::new(), DEFAULT_MIN_KEYWORD_LENGTH)
    }
}

impl QueryPreprocessor {
    /// Creates a preprocessor with an explicit stopword set and minimum keyword length.
    pub fn new(stopwords: Stopwords, min_length: usize) -> Self {
        Self {
            stopwords,
            min_length,
        }
    }

    /// Returns the bound stopword set.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Returns the minimum keyword length in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Extracts keywords from a query.
    ///
    /// The query is lowercased and split into `\w+` tokens. Stopwords and tokens shorter
    /// than the minimum length are removed. Surviving tokens keep their left-to-right
    /// order and duplicates are preserved.
    pub fn preprocess(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();
        let keywords: Vec<String> = WORD_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| token.chars().count() >= self.min_length)
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect();
        trace!(query, ?keywords, "preprocessed query");
        keywords
    }
}

/// Extracts keywords from a query using the default stopwords and minimum length.
pub fn preprocess(query: &str) -> Vec<String> {
    QueryPreprocessor::default().preprocess(query)
}
