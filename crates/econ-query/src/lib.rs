//! Query preprocessing for econ searches.
//!
//! A raw query string is reduced to an ordered list of lowercase keywords: the text is
//! split into word tokens, then common English function words and very short tokens are
//! removed. Every search engine derives its keywords through [`QueryPreprocessor`].

#![warn(missing_docs)]

mod preprocess;
mod stopwords;

pub use preprocess::{DEFAULT_MIN_KEYWORD_LENGTH, QueryPreprocessor, preprocess};
pub use stopwords::Stopwords;
