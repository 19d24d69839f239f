//! Implementation of `econ filter`.

use std::process::ExitCode;

use econ_search::{filter_by_country, filter_by_range, filter_by_year};

use crate::cli::{
    args::FilterCommand,
    context::{CommandContext, require_table},
    output::{dim, grid, header, print_json},
};

/// Applies country, year and range filters to a table, in that order.
pub fn run(ctx: &CommandContext, cmd: &FilterCommand) -> ExitCode {
    let corpus = match ctx.load_corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };
    let (file, table) = match require_table(&corpus, &cmd.file) {
        Ok(found) => found,
        Err(code) => return code,
    };

    let mut filtered = table.clone();
    if let Some(country) = &cmd.country {
        filtered = filter_by_country(&filtered, country);
    }
    if let Some(year) = cmd.year {
        filtered = filter_by_year(&filtered, year);
    }
    if let Some(range) = &cmd.range {
        filtered = filter_by_range(&filtered, &range.column, range.min, range.max);
    }

    if cmd.output.json {
        return print_json(&filtered.to_records());
    }

    println!("{}", header(&file.name));
    if filtered.is_empty() {
        println!("{}", dim("No rows match the filters."));
    } else {
        println!("{}", grid(&filtered, filtered.rows()));
    }
    println!("{}", dim(&format!("{} of {} rows", filtered.len(), table.len())));
    ExitCode::SUCCESS
}
