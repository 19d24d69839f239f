//! Implementation of `econ reports`.

use std::process::ExitCode;

use econ_search::{JsonMatch, TextMatch, highlight};
use serde::Serialize;

use crate::cli::{
    args::ReportsCommand,
    context::CommandContext,
    output::{
        dim, error, header, print_json, render_matches, subheader, summary_line, warning,
    },
};

/// Matches found in one report.
#[derive(Serialize)]
struct ReportMatches<'a, M> {
    /// Display name of the report.
    file: &'a str,
    /// Collection the report belongs to.
    collection: &'a str,
    /// Matches ordered by descending relevance.
    matches: Vec<M>,
}

/// JSON output for `econ reports`.
#[derive(Serialize)]
struct JsonReportsOutput<'a> {
    /// The query as given.
    query: &'a str,
    /// Keywords the query reduced to.
    keywords: &'a [String],
    /// Matches in text reports.
    text: &'a [ReportMatches<'a, TextMatch>],
    /// Matches in JSON reports.
    json: &'a [ReportMatches<'a, JsonMatch>],
}

/// Searches text and JSON reports and prints ranked matches.
pub fn run(ctx: &CommandContext, cmd: &ReportsCommand) -> ExitCode {
    let corpus = match ctx.load_corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    if corpus.text_reports().next().is_none() && corpus.json_reports().next().is_none() {
        eprintln!("{}", error("No report files found."));
        eprintln!("Add text or JSON reports to a reports collection, or run 'econ status'.");
        return ExitCode::FAILURE;
    }

    let query = cmd.query.join(" ");
    let searcher = ctx.searcher();
    let keywords = searcher.keywords(&query);
    let context_lines = cmd.context.unwrap_or(ctx.config.search.context_lines);
    let limit = cmd.matches.unwrap_or(ctx.config.display.max_matches);

    let text: Vec<ReportMatches<'_, TextMatch>> = corpus
        .text_reports()
        .map(|(file, content)| ReportMatches {
            file: &file.name,
            collection: &file.collection,
            matches: searcher
                .search_text_with(content, &query, context_lines)
                .matches,
        })
        .filter(|report| !report.matches.is_empty())
        .collect();
    let json: Vec<ReportMatches<'_, JsonMatch>> = corpus
        .json_reports()
        .map(|(file, document)| ReportMatches {
            file: &file.name,
            collection: &file.collection,
            matches: searcher.search_json(document, &query).matches,
        })
        .filter(|report| !report.matches.is_empty())
        .collect();

    if cmd.output.json {
        return print_json(&JsonReportsOutput {
            query: &query,
            keywords: &keywords,
            text: &text,
            json: &json,
        });
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

    if text.is_empty() && json.is_empty() {
        println!("{}", dim(&format!("No matches for {}.", keywords.join(", "))));
        return ExitCode::SUCCESS;
    }

    let marker = ctx.marker();
    for report in &text {
        println!("{}", header(&report.file));
        for m in report.matches.iter().take(limit) {
            println!(
                "{} {}",
                subheader(&format!("Line {}", m.line_number)),
                dim(&format!("('{}', score {:.1})", m.keyword, m.relevance_score))
            );
            let first = m.context_start(context_lines);
            for (offset, line) in m.context.iter().enumerate() {
                let number = first + offset;
                if number == m.line_number {
                    println!("   {number:>4} > {}", render_matches(&m.matched_line, &marker));
                } else {
                    println!("   {}", dim(&format!("{number:>4} | {line}")));
                }
            }
        }
        print_hidden(report.matches.len(), limit);
        println!();
    }

    for report in &json {
        println!("{}", header(&report.file));
        for m in report.matches.iter().take(limit) {
            let value = highlight(&m.value, &m.keyword, &marker);
            println!(
                "   {} = {} {}",
                subheader(&m.path),
                render_matches(&value, &marker),
                dim(&format!("('{}', score {:.1})", m.keyword, m.relevance_score))
            );
        }
        print_hidden(report.matches.len(), limit);
        println!();
    }

    let total: usize = text.iter().map(|r| r.matches.len()).sum::<usize>()
        + json.iter().map(|r| r.matches.len()).sum::<usize>();
    println!("{}", summary_line(total, "match", text.len() + json.len(), "report"));
    ExitCode::SUCCESS
}

/// Prints how many matches were left out of a report listing.
fn print_hidden(total: usize, limit: usize) {
    let hidden = total.saturating_sub(limit);
    if hidden > 0 {
        println!("{}", dim(&format!("   ... and {hidden} more matches")));
    }
}
