//! Configuration file parsing.
//!
//! Parses individual `.econ.toml` files into `RawConfig` structures whose fields are all
//! optional, so that partial files can be merged afterwards.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Display settings section.
    pub display: Option<RawDisplaySettings>,
    /// Collection definitions: name -> collection config.
    pub collection: Option<BTreeMap<String, RawCollection>>,
}

/// Raw collection definition from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCollection {
    /// Path to the collection directory.
    pub path: String,
    /// Include patterns. Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub include: Option<Vec<String>>,
    /// Exclude patterns. Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Substring (true) or whole-cell (false) table matching.
    pub fuzzy: Option<bool>,
    /// Lines of context around text matches.
    pub context_lines: Option<usize>,
    /// Minimum keyword length in characters.
    pub min_keyword_length: Option<usize>,
    /// Additional stopwords.
    pub extra_stopwords: Option<Vec<String>>,
    /// Marker wrapped around highlighted matches.
    pub highlight_marker: Option<String>,
}

/// Raw display settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawDisplaySettings {
    /// Matching rows shown per data file.
    pub max_rows: Option<usize>,
    /// Match records shown per report.
    pub max_matches: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.search.is_none());
        assert!(config.display.is_none());
        assert!(config.collection.is_none());
    }

    #[test]
    fn minimal_collection() {
        let toml = r#"
[collection.data]
path = "./data"
"#;
        let config = parse_config(toml).unwrap();
        let collections = config.collection.unwrap();
        let data = &collections["data"];
        assert_eq!(data.path, "./data");
        assert!(data.include.is_none());
        assert!(data.exclude.is_none());
    }

    #[test]
    fn include_accepts_single_string() {
        let toml = r#"
[collection.reports]
path = "./reports"
include = "**/*.json"
exclude = ["**/drafts/**"]
"#;
        let config = parse_config(toml).unwrap();
        let reports = &config.collection.unwrap()["reports"];
        assert_eq!(reports.include.as_deref(), Some(&["**/*.json".to_string()][..]));
        assert_eq!(reports.exclude.as_deref(), Some(&["**/drafts/**".to_string()][..]));
    }

    #[test]
    fn search_and_display_sections() {
        let toml = r#"
root = true

[search]
fuzzy = false
context_lines = 1
min_keyword_length = 4
extra_stopwords = ["report", "annual"]
highlight_marker = "__"

[display]
max_rows = 3
max_matches = 20
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.root, Some(true));
        let search = config.search.unwrap();
        assert_eq!(search.fuzzy, Some(false));
        assert_eq!(search.context_lines, Some(1));
        assert_eq!(search.min_keyword_length, Some(4));
        assert_eq!(
            search.extra_stopwords,
            Some(vec!["report".to_string(), "annual".to_string()])
        );
        assert_eq!(search.highlight_marker.as_deref(), Some("__"));
        let display = config.display.unwrap();
        assert_eq!(display.max_rows, Some(3));
        assert_eq!(display.max_matches, Some(20));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config_str("[search]\nstemmer = \"english\"\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("x.toml"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[search\nfuzzy = ").is_err());
    }

    #[test]
    fn root_detection() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root.toml");
        fs::write(&root, "root = true\n").unwrap();
        let plain = dir.path().join("plain.toml");
        fs::write(&plain, "[display]\nmax_rows = 2\n").unwrap();
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "root = ").unwrap();

        assert!(is_root_config(&root));
        assert!(!is_root_config(&plain));
        assert!(!is_root_config(&broken));
        assert!(!is_root_config(&dir.path().join("missing.toml")));
    }
}
