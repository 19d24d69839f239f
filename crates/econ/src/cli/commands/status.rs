//! Implementation of `econ status`.

use std::process::ExitCode;

use econ_config::discover_config_files;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, collections and what was loaded from them.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found; using default collections."));
        println!(
            "Run {} to create a configuration file.",
            subheader("econ init")
        );
    } else {
        println!("{}", subheader("Config files:"));
        for path in &config_files {
            println!("   {}", path.display());
        }
    }
    println!();

    let collections = ctx.collections();
    println!("{}", subheader("Collections:"));
    for collection in &collections {
        let scope = if collection.is_global { "global" } else { "local" };
        let line = format!(
            "   {} {} {}",
            collection.name,
            dim(&format!("({scope})")),
            dim(&format!("-> {}", collection.path.display()))
        );
        if collection.path.is_dir() {
            println!("{line}");
        } else {
            println!("{line} {}", warning("[missing]"));
        }
        for pattern in &collection.include {
            println!("      + {pattern}");
        }
        for pattern in &collection.exclude {
            println!("      - {pattern}");
        }
    }
    println!();

    let corpus = match ctx.load_corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    println!("{}", subheader("Loaded files:"));
    println!("   data tables:  {}", corpus.tables().count());
    println!("   text reports: {}", corpus.text_reports().count());
    println!("   JSON reports: {}", corpus.json_reports().count());

    if !corpus.failures.is_empty() {
        println!();
        println!(
            "{}",
            subheader(&format!("Unreadable files ({}):", corpus.failures.len()))
        );
        for failure in &corpus.failures {
            println!("   {}", warning(&failure.error.to_string()));
        }
    }

    ExitCode::SUCCESS
}
