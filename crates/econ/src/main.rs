//! econ: keyword search over economic data.
//!
//! econ searches a local corpus of indicator tables (CSV/TSV) and reports (plain text and
//! JSON) for keywords, printing ranked, highlighted matches. Corpus directories are
//! configured as collections in `.econ.toml`; without configuration, `data/` and
//! `reports/` in the working directory are searched.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{CommandContext, args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
