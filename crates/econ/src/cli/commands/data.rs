//! Implementation of `econ data`.

use std::process::ExitCode;

use econ_data::LoadedFile;
use econ_search::{MatchStats, TableResults};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::cli::{
    args::DataCommand,
    context::CommandContext,
    output::{dim, error, header, print_json, print_rows, subheader, summary_line, warning},
};

/// JSON output for one table with matches.
#[derive(Serialize)]
struct JsonTableMatches<'a> {
    /// Display name of the data file.
    file: &'a str,
    /// Collection the file belongs to.
    collection: &'a str,
    /// Number of distinct matching rows.
    total_rows: usize,
    /// Per-keyword, per-column match counts.
    stats: &'a MatchStats,
    /// Matching rows keyed by column name.
    rows: Vec<Map<String, JsonValue>>,
}

/// JSON output for `econ data`.
#[derive(Serialize)]
struct JsonDataOutput<'a> {
    /// The query as given.
    query: &'a str,
    /// Keywords the query reduced to.
    keywords: &'a [String],
    /// Tables with at least one matching row.
    files: Vec<JsonTableMatches<'a>>,
    /// Distinct matching rows summed over files.
    total_rows: usize,
}

/// Searches every data table and prints matching rows.
pub fn run(ctx: &CommandContext, cmd: &DataCommand) -> ExitCode {
    let corpus = match ctx.load_corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    if corpus.tables().next().is_none() {
        eprintln!("{}", error("No data files found."));
        eprintln!("Add CSV or TSV files to a data collection, or run 'econ status'.");
        return ExitCode::FAILURE;
    }

    let query = cmd.query.join(" ");
    let searcher = ctx.searcher();
    let keywords = searcher.keywords(&query);
    let fuzzy = ctx.config.search.fuzzy && !cmd.exact;
    let limit = cmd.rows.unwrap_or(ctx.config.display.max_rows);

    let matched: Vec<(&LoadedFile, TableResults)> = corpus
        .tables()
        .map(|(file, table)| (file, searcher.search_table_with(table, &query, fuzzy)))
        .filter(|(_, results)| !results.is_empty())
        .collect();
    let total_rows: usize = matched.iter().map(|(_, results)| results.rows.len()).sum();

    if cmd.output.json {
        let output = JsonDataOutput {
            query: &query,
            keywords: &keywords,
            files: matched
                .iter()
                .map(|(file, results)| JsonTableMatches {
                    file: &file.name,
                    collection: &file.collection,
                    total_rows: results.rows.len(),
                    stats: &results.stats,
                    rows: results.rows.to_records(),
                })
                .collect(),
            total_rows,
        };
        return print_json(&output);
    }

    if keywords.is_empty() {
        println!(
            "{}",
            warning(&format!(
                "No searchable keywords in '{query}'. Common words and words shorter than {} characters are ignored.",
                ctx.config.search.min_keyword_length
            ))
        );
        return ExitCode::SUCCESS;
    }

    if matched.is_empty() {
        println!("{}", dim(&format!("No matches for {}.", keywords.join(", "))));
        return ExitCode::SUCCESS;
    }

    for (file, results) in &matched {
        println!("{}", header(&file.name));
        for entry in results.stats.iter() {
            println!("{}", subheader(&format!("'{}'", entry.keyword)));
            for column in &entry.columns {
                println!("   {}: {}", column.column, plural_rows(column.count));
            }
        }
        print_rows(&results.rows, limit);
        println!();
    }

    println!("{}", summary_line(total_rows, "matching row", matched.len(), "file"));
    ExitCode::SUCCESS
}

/// Formats a row count.
fn plural_rows(count: usize) -> String {
    if count == 1 {
        "1 row".to_string()
    } else {
        format!("{count} rows")
    }
}
