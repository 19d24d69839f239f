//! Stopword filtering for query keywords.
//!
//! The stopword set is a fixed list of common English function words: articles,
//! conjunctions, prepositions, auxiliary verbs and demonstratives. It is built once and
//! never mutated afterwards; callers that need additional words build a new set with
//! [`Stopwords::with_extra`].

use std::collections::HashSet;

/// An immutable stopword filter.
///
/// All words are stored lowercase for case-insensitive matching.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates the default English function-word stopword set.
    pub fn new() -> Self {
        Self {
            words: ENGLISH_FUNCTION_WORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        }
    }

    /// Creates the default set extended with additional words.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::new();
        stopwords
            .words
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        stopwords
    }

    /// Checks if a term is a stopword.
    pub fn contains(&self, term: &str) -> bool {
        if self.words.contains(term) {
            return true;
        }
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// English function words removed from every query.
static ENGLISH_FUNCTION_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the", // Conjunctions
    "and", "or", "but", // Prepositions
    "in", "on", "at", "to", "for", "of", "with", "by", // Auxiliary verbs
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", // Demonstratives
    "this", "that", "these", "those",
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_function_words() {
        let sw = Stopwords::new();
        for word in ["the", "and", "of", "with", "been", "might", "those"] {
            assert!(sw.contains(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn case_insensitive() {
        let sw = Stopwords::new();
        assert!(sw.contains("The"));
        assert!(sw.contains("THESE"));
    }

    #[test]
    fn domain_terms_are_not_stopwords() {
        let sw = Stopwords::new();
        assert!(!sw.contains("gdp"));
        assert!(!sw.contains("inflation"));
        assert!(!sw.contains("india"));
        assert!(!sw.contains("not"));
    }

    #[test]
    fn has_exact_default_count() {
        let sw = Stopwords::new();
        assert_eq!(sw.len(), 37);
        assert!(!sw.is_empty());
    }

    #[test]
    fn extra_words_are_lowercased() {
        let sw = Stopwords::with_extra(["Report", "DATA"]);
        assert!(sw.contains("report"));
        assert!(sw.contains("data"));
        assert!(sw.contains("the"));
        assert_eq!(sw.len(), 39);
    }
}
