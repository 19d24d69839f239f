//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs, path::Path};

use globset::GlobMatcher;

use crate::{Collection, Config, patterns::compile_glob};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No collections are defined.
    NoCollectionsDefined,
    /// A collection path does not exist.
    CollectionPathMissing {
        /// Name of the collection.
        collection: String,
        /// Path that doesn't exist.
        path: String,
    },
    /// A collection path exists but is not a directory.
    CollectionPathNotDirectory {
        /// Name of the collection.
        collection: String,
        /// Path that is not a directory.
        path: String,
    },
    /// An include pattern doesn't match any files.
    IncludePatternMatchesNothing {
        /// Name of the collection.
        collection: String,
        /// Pattern that matched nothing.
        pattern: String,
    },
    /// The highlight marker is empty, so matches would not be visible.
    EmptyHighlightMarker,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCollectionsDefined => {
                write!(f, "no collections are defined in configuration")
            }
            Self::CollectionPathMissing { collection, path } => {
                write!(f, "collection '{collection}' path does not exist: {path}")
            }
            Self::CollectionPathNotDirectory { collection, path } => {
                write!(f, "collection '{collection}' path is not a directory: {path}")
            }
            Self::IncludePatternMatchesNothing {
                collection,
                pattern,
            } => {
                write!(
                    f,
                    "include pattern '{pattern}' for collection '{collection}' matches no files"
                )
            }
            Self::EmptyHighlightMarker => write!(f, "search.highlight_marker is empty"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.search.highlight_marker.is_empty() {
        warnings.push(ConfigWarning::EmptyHighlightMarker);
    }

    if config.collections.is_empty() {
        warnings.push(ConfigWarning::NoCollectionsDefined);
        return warnings;
    }

    for collection in &config.collections {
        warnings.extend(validate_collection(collection));
    }

    warnings
}

/// Validates a single collection and its include patterns.
fn validate_collection(collection: &Collection) -> Vec<ConfigWarning> {
    if !collection.path.exists() {
        return vec![ConfigWarning::CollectionPathMissing {
            collection: collection.name.clone(),
            path: collection.path.display().to_string(),
        }];
    }

    if !collection.path.is_dir() {
        return vec![ConfigWarning::CollectionPathNotDirectory {
            collection: collection.name.clone(),
            path: collection.path.display().to_string(),
        }];
    }

    collection
        .include
        .iter()
        .filter(|pattern| !pattern_matches_any_file(&collection.path, pattern))
        .map(|pattern| ConfigWarning::IncludePatternMatchesNothing {
            collection: collection.name.clone(),
            pattern: pattern.clone(),
        })
        .collect()
}

/// Checks if a glob pattern matches any file below a directory.
fn pattern_matches_any_file(root: &Path, pattern: &str) -> bool {
    // Invalid patterns surface as errors when patterns are compiled.
    let Ok(glob) = compile_glob(pattern) else {
        return false;
    };
    walk_and_match(root, root, &glob.compile_matcher())
}

/// Recursively walks a directory and checks if any file matches the pattern.
fn walk_and_match(root: &Path, current: &Path, matcher: &GlobMatcher) -> bool {
    let Ok(entries) = fs::read_dir(current) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        if path.is_file() && matcher.is_match(relative) {
            return true;
        }
        if path.is_dir() && walk_and_match(root, &path, matcher) {
            return true;
        }
    }

    false
}
