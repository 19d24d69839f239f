//! Keyword search and ranking for econ.
//!
//! A [`Searcher`] reduces a raw query to keywords and runs one of three engines:
//!
//! - tables: every column is searched through its rendered text, returning the distinct
//!   matching rows and per-keyword, per-column match counts
//! - text reports: each matching (line, keyword) pair becomes a [`TextMatch`] with a
//!   highlighted line, a context window and a relevance score
//! - JSON reports: leaves are walked recursively and reported by path as [`JsonMatch`]es
//!
//! All engines are pure functions of their inputs. A query that reduces to no keywords
//! yields an empty result whose `is_empty_query()` is true, which lets callers tell it
//! apart from a search that matched nothing.
//!
//! # Example
//!
//! ```
//! use econ_search::Searcher;
//!
//! let searcher = Searcher::default();
//! let results = searcher.search_text("Exports fell.\nIndia's GDP grew.", "the GDP");
//!
//! assert_eq!(results.matches.len(), 1);
//! assert_eq!(results.matches[0].line_number, 2);
//! assert_eq!(results.matches[0].matched_line, "India's **GDP** grew.");
//! ```

#![warn(missing_docs)]

mod filters;
mod format;
mod highlight;
mod json;
mod score;
mod searcher;
mod stats;
mod tabular;
mod text;

pub use filters::{COUNTRY_COLUMN, YEAR_COLUMN, filter_by_country, filter_by_range, filter_by_year};
pub use format::{format_large_number, format_percentage};
pub use highlight::{DEFAULT_MARKER, HighlightMarker, emphasize_keywords, highlight};
pub use json::{JsonMatch, JsonResults, leaf_text};
pub use score::score;
pub use searcher::{DEFAULT_CONTEXT_LINES, SearchOptions, Searcher};
pub use stats::{SummaryStats, summary_stats};
pub use tabular::{ColumnCount, KeywordStats, MatchStats, TableResults};
pub use text::{TextMatch, TextResults};
