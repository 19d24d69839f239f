//! Implementation of `econ init`.

use std::{fs, path::Path, process::ExitCode};

use econ_config::{
    CONFIG_FILENAME, DEFAULT_DATA_DIR, DEFAULT_REPORTS_DIR, global_config_path, global_template,
    local_template,
};
use econ_highlight::Highlighter;

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{indent_content, subheader},
};

/// Initializes a `.econ.toml` configuration file.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;

    let is_home_dir = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);

    let use_global = cmd.global || is_home_dir;

    let config_path = if use_global {
        match global_config_path() {
            Some(path) => path,
            None => {
                eprintln!("error: could not determine home directory");
                return ExitCode::FAILURE;
            }
        }
    } else {
        cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };

    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());

    if cmd.dirs
        && let Err(code) = create_corpus_dirs(cwd)
    {
        return code;
    }

    let highlighter = Highlighter::new();
    println!();
    println!("{}", subheader("Configuration written:"));
    let highlighted = highlighter.highlight_toml(&template);
    println!("{}", indent_content(&highlighted));

    ExitCode::SUCCESS
}

/// Creates the default `data/` and `reports/` directories under `cwd`.
fn create_corpus_dirs(cwd: &Path) -> Result<(), ExitCode> {
    for name in [DEFAULT_DATA_DIR, DEFAULT_REPORTS_DIR] {
        let dir = cwd.join(name);
        if dir.is_dir() {
            continue;
        }
        fs::create_dir_all(&dir).map_err(|e| {
            eprintln!("error: failed to create {}: {e}", dir.display());
            ExitCode::FAILURE
        })?;
        println!("Created {}/", dir.display());
    }
    Ok(())
}
