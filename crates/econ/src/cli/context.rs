//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use econ_config::{Collection, Config};
use econ_data::{Corpus, LoadedFile, Table};
use econ_query::{QueryPreprocessor, Stopwords};
use econ_search::{HighlightMarker, SearchOptions, Searcher};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns the configured collections, or `data/` and `reports/` under the working
    /// directory when none are configured.
    pub fn collections(&self) -> Vec<Collection> {
        self.config.effective_collections(&self.cwd)
    }

    /// Loads every file of the effective collections.
    pub fn load_corpus(&self) -> Result<Corpus, ExitCode> {
        Corpus::load(&self.collections()).map_err(|e| {
            eprintln!("error: failed to load files: {e}");
            ExitCode::FAILURE
        })
    }

    /// Builds a searcher from the search settings.
    pub fn searcher(&self) -> Searcher {
        let search = &self.config.search;
        let preprocessor = QueryPreprocessor::new(
            Stopwords::with_extra(&search.extra_stopwords),
            search.min_keyword_length,
        );
        Searcher::new(
            preprocessor,
            SearchOptions {
                fuzzy: search.fuzzy,
                context_lines: search.context_lines,
                marker: self.marker(),
            },
        )
    }

    /// Returns the configured highlight marker.
    pub fn marker(&self) -> HighlightMarker {
        HighlightMarker::symmetric(self.config.search.highlight_marker.as_str())
    }
}

/// Finds a table in the corpus, printing an error if it is not loaded.
pub fn require_table<'a>(corpus: &'a Corpus, name: &str) -> Result<(&'a LoadedFile, &'a Table), ExitCode> {
    corpus.find_table(name).ok_or_else(|| {
        eprintln!("error: no data file named '{name}'");
        let available: Vec<&str> = corpus.tables().map(|(file, _)| file.name.as_str()).collect();
        if !available.is_empty() {
            eprintln!("available: {}", available.join(", "));
        }
        ExitCode::FAILURE
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
