//! Implementation of `econ stats`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use econ_search::{SummaryStats, format_large_number, summary_stats};

use crate::cli::{
    args::StatsCommand,
    context::{CommandContext, require_table},
    output::{dim, header, print_json},
};

/// Prints summary statistics for one column of a table.
pub fn run(ctx: &CommandContext, cmd: &StatsCommand) -> ExitCode {
    let corpus = match ctx.load_corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };
    let (file, table) = match require_table(&corpus, &cmd.file) {
        Ok(found) => found,
        Err(code) => return code,
    };

    if !table.has_column(&cmd.column) {
        eprintln!("error: {} has no column '{}'", file.name, cmd.column);
        let columns: Vec<&str> = table.column_names().collect();
        eprintln!("columns: {}", columns.join(", "));
        return ExitCode::FAILURE;
    }

    let stats = summary_stats(table, &cmd.column);
    if cmd.output.json {
        return print_json(&stats);
    }

    println!("{}", header(&format!("{} / {}", file.name, cmd.column)));
    match stats {
        Some(stats) => println!("{}", stats_table(&stats)),
        None => println!("{}", dim("No numeric values in this column.")),
    }
    ExitCode::SUCCESS
}

/// Lays out statistics as a two-column table.
fn stats_table(stats: &SummaryStats) -> Table {
    let std = stats
        .std
        .map_or_else(|| "n/a".to_string(), format_large_number);
    let rows = [
        ("Count", stats.count.to_string()),
        ("Mean", format_large_number(stats.mean)),
        ("Median", format_large_number(stats.median)),
        ("Std dev", std),
        ("Min", format_large_number(stats.min)),
        ("25%", format_large_number(stats.q25)),
        ("75%", format_large_number(stats.q75)),
        ("Max", format_large_number(stats.max)),
    ];

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Statistic", "Value"]);
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table
}
