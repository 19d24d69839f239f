//! Loading every file of a set of collections into memory.

use std::path::PathBuf;

use econ_config::{Collection, CompiledPatterns};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::{DataError, Document, Table, discover_files, load_document};

/// A corpus file that was loaded successfully.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    /// Collection the file came from.
    pub collection: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Display name: the path relative to its collection directory.
    pub name: String,
    /// Parsed content.
    pub document: Document,
}

/// A corpus file that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    /// Path to the file.
    pub path: PathBuf,
    /// Why loading failed.
    pub error: DataError,
}

/// All files loaded from a set of collections.
///
/// A file that fails to parse does not abort the load; it is recorded in
/// [`Corpus::failures`] and the remaining files are still available.
#[derive(Debug, Default)]
pub struct Corpus {
    /// Successfully loaded files, in discovery order.
    pub files: Vec<LoadedFile>,
    /// Files that were discovered but failed to load.
    pub failures: Vec<LoadFailure>,
}

impl Corpus {
    /// Discovers and loads every matching file in the given collections.
    pub fn load(collections: &[Collection]) -> Result<Self, DataError> {
        let patterns = CompiledPatterns::compile(collections)?;
        let discovered = discover_files(collections, &patterns)?;

        let mut corpus = Self::default();
        for file in discovered {
            match load_document(&file.abs_path) {
                Ok(document) => corpus.files.push(LoadedFile {
                    collection: file.collection,
                    name: file.rel_path.to_string_lossy().into_owned(),
                    path: file.abs_path,
                    document,
                }),
                Err(error) => {
                    warn!(path = %file.abs_path.display(), %error, "skipping unreadable file");
                    corpus.failures.push(LoadFailure {
                        path: file.abs_path,
                        error,
                    });
                }
            }
        }

        debug!(
            loaded = corpus.files.len(),
            failed = corpus.failures.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Iterates over loaded tables with their display names.
    pub fn tables(&self) -> impl Iterator<Item = (&LoadedFile, &Table)> {
        self.files.iter().filter_map(|f| match &f.document {
            Document::Table(table) => Some((f, table)),
            _ => None,
        })
    }

    /// Iterates over loaded text reports.
    pub fn text_reports(&self) -> impl Iterator<Item = (&LoadedFile, &str)> {
        self.files.iter().filter_map(|f| match &f.document {
            Document::Text(text) => Some((f, text.as_str())),
            _ => None,
        })
    }

    /// Iterates over loaded JSON reports.
    pub fn json_reports(&self) -> impl Iterator<Item = (&LoadedFile, &JsonValue)> {
        self.files.iter().filter_map(|f| match &f.document {
            Document::Json(json) => Some((f, json)),
            _ => None,
        })
    }

    /// Finds a loaded table by display name or file stem.
    pub fn find_table(&self, name: &str) -> Option<(&LoadedFile, &Table)> {
        self.tables().find(|(file, _)| {
            file.name == name
                || file
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|stem| stem == name)
        })
    }

    /// Returns true if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
