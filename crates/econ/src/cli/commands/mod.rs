//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod data;
pub mod filter;
pub mod init;
pub mod reports;
pub mod stats;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Data(cmd) => data::run(ctx, &cmd),
        Commands::Reports(cmd) => reports::run(ctx, &cmd),
        Commands::Filter(cmd) => filter::run(ctx, &cmd),
        Commands::Stats(cmd) => stats::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
