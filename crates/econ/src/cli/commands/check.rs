//! Implementation of `econ check`.

use std::process::ExitCode;

use econ_config::{ConfigWarning, discover_config_files};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Validates configuration and reports warnings with hints.
///
/// Exits with failure when there are warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("econ init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("{}", success("No issues found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::NoCollectionsDefined => {
                "Add [collection.NAME] sections to .econ.toml, or remove the file to use data/ and reports/."
            }
            ConfigWarning::CollectionPathMissing { .. } => {
                "Create the missing directory or update the collection path."
            }
            ConfigWarning::CollectionPathNotDirectory { .. } => {
                "Collection paths must point to directories, not files."
            }
            ConfigWarning::IncludePatternMatchesNothing { .. } => {
                "Check that the pattern matches files in the collection directory."
            }
            ConfigWarning::EmptyHighlightMarker => {
                "Set search.highlight_marker to a visible string such as \"**\"."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(&format!("Hint: {hint}")));
    }
}
