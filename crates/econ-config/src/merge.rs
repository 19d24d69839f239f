//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying
//! precedence rules and resolving collection paths.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use crate::{
    Collection, Config, ConfigError, DisplaySettings, SearchSettings,
    discovery::is_global_config,
    parse::{RawCollection, RawConfig, RawDisplaySettings, RawSearchSettings},
    resolve::resolve_collection_path,
};

/// Default include patterns when a collection specifies none.
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["**/*.csv", "**/*.tsv", "**/*.txt", "**/*.json"];

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs must be in precedence order, highest first.
///
/// - Scalar settings: first defined value wins
/// - `extra_stopwords`: accumulated across all files
/// - Collections: merged by name, first definition wins completely
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let search = merge_search_settings(configs);
    let display = merge_display_settings(configs);
    let collections = merge_collections(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        search,
        display,
        collections,
        config_root,
    })
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    let mut seen = HashSet::new();
    result.extra_stopwords.retain(|w| seen.insert(w.clone()));
    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.fuzzy {
        result.fuzzy = v;
    }
    if let Some(v) = raw.context_lines {
        result.context_lines = v;
    }
    if let Some(v) = raw.min_keyword_length {
        result.min_keyword_length = v;
    }
    if let Some(ref v) = raw.extra_stopwords {
        result
            .extra_stopwords
            .extend(v.iter().map(|w| w.to_lowercase()));
    }
    if let Some(ref v) = raw.highlight_marker {
        result.highlight_marker = v.clone();
    }
}

/// Merges display settings.
fn merge_display_settings(configs: &[ParsedConfig]) -> DisplaySettings {
    let mut result = DisplaySettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref display) = parsed.config.display {
            apply_raw_display(&mut result, display);
        }
    }

    result
}

/// Applies raw display settings to result.
fn apply_raw_display(result: &mut DisplaySettings, raw: &RawDisplaySettings) {
    if let Some(v) = raw.max_rows {
        result.max_rows = v;
    }
    if let Some(v) = raw.max_matches {
        result.max_matches = v;
    }
}

/// Merges collections from all configs, resolving paths.
///
/// `is_global` is set for collections defined in `~/.econ.toml`.
fn merge_collections(configs: &[ParsedConfig]) -> Result<Vec<Collection>, ConfigError> {
    let mut seen: HashMap<String, Collection> = HashMap::new();

    for parsed in configs {
        let Some(ref collections) = parsed.config.collection else {
            continue;
        };

        let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
        let is_global = is_global_config(&parsed.path);

        for (name, raw) in collections {
            if seen.contains_key(name) {
                continue;
            }
            let resolved_path = resolve_collection_path(&raw.path, config_dir)?;
            seen.insert(
                name.clone(),
                convert_collection(name, raw, resolved_path, is_global),
            );
        }
    }

    let mut collections: Vec<Collection> = seen.into_values().collect();
    collections.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(collections)
}

/// Converts a raw collection to the resolved type with defaults applied.
fn convert_collection(
    name: &str,
    raw: &RawCollection,
    path: PathBuf,
    is_global: bool,
) -> Collection {
    let include = raw.include.clone().unwrap_or_else(default_include_patterns);

    Collection {
        name: name.to_string(),
        path,
        is_global,
        include,
        exclude: raw.exclude.clone().unwrap_or_default(),
    }
}

/// Returns the default include patterns as owned strings.
pub fn default_include_patterns() -> Vec<String> {
    DEFAULT_INCLUDE_PATTERNS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse::parse_config_str, test_support::TestDir};

    fn parsed(path: PathBuf, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path,
            config: parse_config_str(toml, Path::new("test")).unwrap(),
        }
    }

    #[test]
    fn empty_list_gives_defaults() {
        let result = merge_configs(&[]).unwrap();
        assert!(result.search.fuzzy);
        assert_eq!(result.search.context_lines, 3);
        assert!(result.collections.is_empty());
        assert!(result.config_root.is_none());
    }

    #[test]
    fn single_config_with_collection() {
        let test_dir = TestDir::new();
        let data = test_dir.create_dir("data");

        let result = merge_configs(&[parsed(
            test_dir.path().join(".econ.toml"),
            r#"
[display]
max_rows = 10

[collection.data]
path = "./data"
"#,
        )])
        .unwrap();

        assert_eq!(result.display.max_rows, 10);
        assert_eq!(result.display.max_matches, 10);
        assert_eq!(result.collections.len(), 1);
        assert_eq!(result.collections[0].name, "data");
        assert_eq!(result.collections[0].path, data.canonicalize().unwrap());
        assert_eq!(result.collections[0].include, DEFAULT_INCLUDE_PATTERNS);
        assert_eq!(result.config_root.as_deref(), Some(test_dir.path()));
    }

    #[test]
    fn closest_scalar_wins() {
        let test_dir = TestDir::new();
        let high = parsed(
            test_dir.path().join("project/.econ.toml"),
            "[search]\ncontext_lines = 1\n",
        );
        let low = parsed(
            test_dir.path().join(".econ.toml"),
            "[search]\ncontext_lines = 5\nfuzzy = false\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(result.search.context_lines, 1);
        assert!(!result.search.fuzzy);
    }

    #[test]
    fn extra_stopwords_accumulate() {
        let test_dir = TestDir::new();
        let high = parsed(
            test_dir.path().join("a/.econ.toml"),
            "[search]\nextra_stopwords = [\"Report\", \"annual\"]\n",
        );
        let low = parsed(
            test_dir.path().join(".econ.toml"),
            "[search]\nextra_stopwords = [\"annual\", \"summary\"]\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(
            result.search.extra_stopwords,
            vec!["annual", "summary", "report"]
        );
    }

    #[test]
    fn first_collection_definition_wins() {
        let test_dir = TestDir::new();
        let near = test_dir.create_dir("project/data");
        test_dir.create_dir("data");

        let high = parsed(
            test_dir.path().join("project/.econ.toml"),
            "[collection.data]\npath = \"./data\"\ninclude = [\"**/*.csv\"]\n",
        );
        let low = parsed(
            test_dir.path().join(".econ.toml"),
            "[collection.data]\npath = \"./data\"\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(result.collections.len(), 1);
        assert_eq!(result.collections[0].path, near.canonicalize().unwrap());
        assert_eq!(result.collections[0].include, vec!["**/*.csv"]);
    }

    #[test]
    fn collections_sorted_by_name() {
        let test_dir = TestDir::new();
        test_dir.create_dir("reports");
        test_dir.create_dir("data");

        let result = merge_configs(&[parsed(
            test_dir.path().join(".econ.toml"),
            "[collection.reports]\npath = \"reports\"\n[collection.data]\npath = \"data\"\n",
        )])
        .unwrap();

        let names: Vec<_> = result.collections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["data", "reports"]);
    }

    #[test]
    fn missing_collection_path_fails() {
        let test_dir = TestDir::new();
        let result = merge_configs(&[parsed(
            test_dir.path().join(".econ.toml"),
            "[collection.data]\npath = \"./missing\"\n",
        )]);
        assert!(matches!(result, Err(ConfigError::PathResolution { .. })));
    }
}
