//! The entry point tying query preprocessing to the search engines.

use econ_data::Table;
use econ_query::QueryPreprocessor;
use serde_json::Value as JsonValue;

use crate::{
    HighlightMarker, JsonResults, TableResults, TextResults, json::search_json,
    tabular::search_table, text::search_text,
};

/// Default number of context lines on each side of a text match.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Options applied to every search made through a [`Searcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Substring matching for table cells; exact cell equality when false.
    pub fuzzy: bool,
    /// Lines of context on each side of a text match.
    pub context_lines: usize,
    /// Marker wrapped around matches in text lines.
    pub marker: HighlightMarker,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            context_lines: DEFAULT_CONTEXT_LINES,
            marker: HighlightMarker::default(),
        }
    }
}

/// Runs keyword searches over tables, text and JSON documents.
///
/// Every call derives keywords from the raw query and scans the given content; nothing
/// is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    /// Turns raw queries into keywords.
    preprocessor: QueryPreprocessor,
    /// Search options.
    options: SearchOptions,
}

impl Searcher {
    /// Creates a searcher with a custom preprocessor and options.
    pub fn new(preprocessor: QueryPreprocessor, options: SearchOptions) -> Self {
        Self {
            preprocessor,
            options,
        }
    }

    /// Returns the search options.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Returns the keywords a query reduces to.
    pub fn keywords(&self, query: &str) -> Vec<String> {
        self.preprocessor.preprocess(query)
    }

    /// Searches every column of a table using the configured matching mode.
    pub fn search_table(&self, table: &Table, query: &str) -> TableResults {
        self.search_table_with(table, query, self.options.fuzzy)
    }

    /// Searches every column of a table with an explicit matching mode.
    pub fn search_table_with(&self, table: &Table, query: &str, fuzzy: bool) -> TableResults {
        search_table(table, self.keywords(query), fuzzy)
    }

    /// Searches text line by line using the configured context window.
    pub fn search_text(&self, content: &str, query: &str) -> TextResults {
        self.search_text_with(content, query, self.options.context_lines)
    }

    /// Searches text line by line with an explicit context window.
    pub fn search_text_with(&self, content: &str, query: &str, context_lines: usize) -> TextResults {
        search_text(
            content,
            self.keywords(query),
            context_lines,
            &self.options.marker,
        )
    }

    /// Searches every leaf of a JSON document.
    pub fn search_json(&self, document: &JsonValue, query: &str) -> JsonResults {
        search_json(document, self.keywords(query))
    }
}
