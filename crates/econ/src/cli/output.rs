//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use econ_data::{Row, Table as DataTable};
pub use econ_highlight::{dim, error, header, subheader, success, warning};
use econ_highlight::render_markers;
use econ_search::HighlightMarker;
use serde::Serialize;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds a terminal table from the columns of `table` and the given rows.
pub fn grid<'a>(table: &DataTable, rows: impl IntoIterator<Item = &'a Row>) -> Table {
    let mut grid = Table::new();
    grid.load_preset(UTF8_FULL_CONDENSED);
    grid.set_header(table.column_names().collect::<Vec<_>>());
    for row in rows {
        grid.add_row(row.values().iter().map(|v| Cell::new(v.render())).collect::<Vec<_>>());
    }
    grid
}

/// Prints up to `limit` rows of a table, followed by a count of the rows left out.
pub fn print_rows(table: &DataTable, limit: usize) {
    println!("{}", grid(table, table.rows().iter().take(limit)));
    let hidden = table.len().saturating_sub(limit);
    if hidden > 0 {
        println!("{}", dim(&format!("... and {hidden} more rows")));
    }
}

/// Renders marker-wrapped matches in a line for the terminal.
pub fn render_matches(line: &str, marker: &HighlightMarker) -> String {
    render_markers(line, &marker.open, &marker.close)
}

/// Indents every line of `content` by three spaces.
pub fn indent_content(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("   {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a "matches in files" summary line.
pub fn summary_line(count: usize, noun: &str, files: usize, file_noun: &str) -> String {
    dim(&format!(
        "─── {count} {} in {files} {} ───",
        plural(count, noun),
        plural(files, file_noun)
    ))
}

/// Returns the plural of `noun` unless `count` is one.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else if noun.ends_with("ch") || noun.ends_with('s') {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}
