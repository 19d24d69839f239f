//! Include/exclude pattern compilation and matching.

use std::{collections::HashMap, path::Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{Collection, ConfigError};

/// Compiled glob patterns, organized per collection.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Compiled include patterns per collection name.
    include_patterns: HashMap<String, GlobSet>,
    /// Compiled exclude patterns per collection name.
    exclude_patterns: HashMap<String, GlobSet>,
}

impl CompiledPatterns {
    /// Compiles include/exclude patterns for every collection.
    pub fn compile(collections: &[Collection]) -> Result<Self, ConfigError> {
        let mut include_patterns = HashMap::new();
        let mut exclude_patterns = HashMap::new();

        for collection in collections {
            include_patterns.insert(
                collection.name.clone(),
                build_set(&collection.include, &collection.name, "include")?,
            );
            exclude_patterns.insert(
                collection.name.clone(),
                build_set(&collection.exclude, &collection.name, "exclude")?,
            );
        }

        Ok(Self {
            include_patterns,
            exclude_patterns,
        })
    }

    /// Checks if a path, relative to the collection root, belongs to a collection.
    ///
    /// A file matches if it matches at least one include pattern and no exclude pattern.
    /// Unknown collections match nothing.
    pub fn matches(&self, collection: &str, path: &Path) -> bool {
        let included = self
            .include_patterns
            .get(collection)
            .is_some_and(|p| p.is_match(path));
        let excluded = self
            .exclude_patterns
            .get(collection)
            .is_some_and(|p| p.is_match(path));

        included && !excluded
    }
}

/// Builds a glob set from a pattern list.
fn build_set(patterns: &[String], collection: &str, kind: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|source| ConfigError::InvalidPattern {
        pattern: format!("<combined {kind} patterns for {collection}>"),
        source,
    })
}

/// Compiles a single glob pattern.
pub fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn collection(name: &str, include: &[&str], exclude: &[&str]) -> Collection {
        Collection {
            name: name.into(),
            path: PathBuf::from("/tmp"),
            is_global: false,
            include: include.iter().map(|s| (*s).to_string()).collect(),
            exclude: exclude.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn include_and_exclude() {
        let patterns = CompiledPatterns::compile(&[collection(
            "reports",
            &["**/*.txt", "**/*.json"],
            &["**/drafts/**"],
        )])
        .unwrap();

        assert!(patterns.matches("reports", Path::new("india_2022.txt")));
        assert!(patterns.matches("reports", Path::new("europe/germany_2023.json")));
        assert!(!patterns.matches("reports", Path::new("gdp.csv")));
        assert!(!patterns.matches("reports", Path::new("drafts/brazil.txt")));
    }

    #[test]
    fn collections_are_independent() {
        let patterns = CompiledPatterns::compile(&[
            collection("data", &["**/*.csv"], &[]),
            collection("reports", &["**/*.txt"], &[]),
        ])
        .unwrap();

        assert!(patterns.matches("data", Path::new("gdp.csv")));
        assert!(!patterns.matches("reports", Path::new("gdp.csv")));
        assert!(!patterns.matches("unknown", Path::new("gdp.csv")));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = CompiledPatterns::compile(&[collection("data", &["[unclosed"], &[])])
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed")
        );
    }
}
