//! Configuration system for econ.
//!
//! econ uses TOML configuration files named `.econ.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.econ.toml` files found, then loading `~/.econ.toml` as the global config with lowest
//! precedence.
//!
//! A configuration names *collections*: directories of corpus files (tables, text reports
//! and JSON reports) together with include/exclude glob patterns. When no collection is
//! configured, callers fall back to [`Config::default_collections`], the `data/` and
//! `reports/` directories next to the working directory.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{DEFAULT_INCLUDE_PATTERNS, ParsedConfig, merge_configs};
use merge::default_include_patterns;
pub use parse::{
    RawCollection, RawConfig, RawDisplaySettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
pub use patterns::CompiledPatterns;
pub use resolve::resolve_collection_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default directory holding tabular data files.
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default directory holding text and JSON reports.
pub const DEFAULT_REPORTS_DIR: &str = "reports";

/// Top-level merged configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Search-related settings.
    pub search: SearchSettings,
    /// Output settings.
    pub display: DisplaySettings,
    /// Resolved collections, sorted by name.
    pub collections: Vec<Collection>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.econ.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the configured collections, or the default `data/` and `reports/`
    /// collections under `cwd` when none are configured.
    ///
    /// Default collections are not required to exist.
    pub fn effective_collections(&self, cwd: &Path) -> Vec<Collection> {
        if self.collections.is_empty() {
            Self::default_collections(cwd)
        } else {
            self.collections.clone()
        }
    }

    /// The `data/` and `reports/` collections under a directory.
    pub fn default_collections(cwd: &Path) -> Vec<Collection> {
        [DEFAULT_DATA_DIR, DEFAULT_REPORTS_DIR]
            .into_iter()
            .map(|name| Collection {
                name: name.to_string(),
                path: cwd.join(name),
                is_global: false,
                include: default_include_patterns(),
                exclude: Vec::new(),
            })
            .collect()
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Collections are not included since they carry resolved paths.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            search: &self.search,
            display: &self.display,
        };
        // Plain structs of scalars and string lists always serialize.
        toml::to_string_pretty(&serializable).unwrap_or_default()
    }
}

/// Search-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Substring (true) or whole-cell (false) matching for tables.
    pub fuzzy: bool,
    /// Lines of context before and after each text match.
    pub context_lines: usize,
    /// Query tokens shorter than this many characters are dropped.
    pub min_keyword_length: usize,
    /// Stopwords added to the built-in English function words.
    pub extra_stopwords: Vec<String>,
    /// Marker placed on both sides of highlighted matches.
    pub highlight_marker: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            fuzzy: true,
            context_lines: 3,
            min_keyword_length: 3,
            extra_stopwords: Vec::new(),
            highlight_marker: String::from("**"),
        }
    }
}

/// Output-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Matching rows shown per data file.
    pub max_rows: usize,
    /// Match records shown per report.
    pub max_matches: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_rows: 5,
            max_matches: 10,
        }
    }
}

/// Borrowed view of the settings for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Search settings.
    search: &'a SearchSettings,
    /// Display settings.
    display: &'a DisplaySettings,
}

/// A named directory of corpus files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Name of the collection.
    pub name: String,
    /// Directory path (absolute and canonical when loaded from a config file).
    pub path: PathBuf,
    /// Whether this collection was defined in the global `~/.econ.toml`.
    pub is_global: bool,
    /// Include patterns, relative to the collection directory.
    pub include: Vec<String>,
    /// Exclude patterns, relative to the collection directory.
    pub exclude: Vec<String>,
}
