//! Corpus file discovery.
//!
//! Walks collection directories to find loadable files, applying include/exclude
//! patterns and skipping hidden entries and symlinks.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use econ_config::{Collection, CompiledPatterns};
use tracing::debug;
use walkdir::WalkDir;

use crate::{DataError, DocumentKind};

/// A corpus file found in a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Collection this file belongs to.
    pub collection: String,
    /// Full path to the file.
    pub abs_path: PathBuf,
    /// Path relative to the collection directory.
    pub rel_path: PathBuf,
    /// Content kind derived from the extension.
    pub kind: DocumentKind,
}

/// Discovers loadable files in the given collections.
///
/// Collections whose directory does not exist are skipped. Files are returned sorted by
/// collection order, then relative path, so output is deterministic.
pub fn discover_files(
    collections: &[Collection],
    patterns: &CompiledPatterns,
) -> Result<Vec<DiscoveredFile>, DataError> {
    let mut files = Vec::new();

    for collection in collections {
        if !collection.path.is_dir() {
            debug!(collection = %collection.name, path = %collection.path.display(), "collection directory missing");
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(&collection.path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        {
            let entry = entry.map_err(|source| DataError::Walk {
                path: collection.path.clone(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let abs_path = entry.path().to_path_buf();
            let Ok(rel_path) = abs_path.strip_prefix(&collection.path).map(Path::to_path_buf)
            else {
                continue;
            };

            if !patterns.matches(&collection.name, &rel_path) {
                continue;
            }

            let Some(kind) = DocumentKind::from_path(&abs_path) else {
                continue;
            };

            found.push(DiscoveredFile {
                collection: collection.name.clone(),
                abs_path,
                rel_path,
                kind,
            });
        }

        found.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        debug!(collection = %collection.name, files = found.len(), "discovered files");
        files.extend(found);
    }

    Ok(files)
}

/// Checks if a file name is hidden (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn collection(name: &str, path: &Path, include: &[&str], exclude: &[&str]) -> Collection {
        Collection {
            name: name.to_string(),
            path: path.to_path_buf(),
            is_global: false,
            include: include.iter().map(|s| (*s).to_string()).collect(),
            exclude: exclude.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn finds_matching_files_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "reports/z_brazil.txt");
        write(root, "reports/a/india.json");
        write(root, "reports/notes.md");
        write(root, "reports/drafts/wip.txt");
        write(root, "reports/.hidden/secret.txt");
        write(root, "reports/.dotfile.txt");

        let collections = vec![collection(
            "reports",
            &root.join("reports"),
            &["**/*.txt", "**/*.json"],
            &["drafts/**"],
        )];
        let patterns = CompiledPatterns::compile(&collections).unwrap();
        let files = discover_files(&collections, &patterns).unwrap();

        let rel: Vec<_> = files.iter().map(|f| f.rel_path.clone()).collect();
        assert_eq!(
            rel,
            vec![PathBuf::from("a/india.json"), PathBuf::from("z_brazil.txt")]
        );
        assert_eq!(files[0].kind, DocumentKind::Json);
        assert_eq!(files[1].kind, DocumentKind::Text);
        assert_eq!(files[1].collection, "reports");
    }

    #[test]
    fn skips_unsupported_extensions_even_when_included() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "data/gdp.csv");
        write(temp.path(), "data/chart.png");

        let collections = vec![collection("data", &temp.path().join("data"), &["**/*"], &[])];
        let patterns = CompiledPatterns::compile(&collections).unwrap();
        let files = discover_files(&collections, &patterns).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].kind, DocumentKind::Table);
    }

    #[test]
    fn missing_collection_directory_is_skipped() {
        let temp = TempDir::new().unwrap();
        let collections = vec![collection(
            "data",
            &temp.path().join("absent"),
            &["**/*.csv"],
            &[],
        )];
        let patterns = CompiledPatterns::compile(&collections).unwrap();
        assert!(discover_files(&collections, &patterns).unwrap().is_empty());
    }

    #[test]
    fn hidden_names() {
        assert!(is_hidden(OsStr::new(".git")));
        assert!(!is_hidden(OsStr::new("gdp.csv")));
    }
}
