//! Keyword search across every column of a table.

use std::collections::HashSet;

use econ_data::{Row, Table};
use serde::Serialize;
use tracing::debug;

/// Number of rows matching a keyword in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCount {
    /// Column name.
    pub column: String,
    /// Rows whose value in this column matched.
    pub count: usize,
}

/// Per-column match counts for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordStats {
    /// The keyword.
    pub keyword: String,
    /// Columns where the keyword matched, in table column order.
    pub columns: Vec<ColumnCount>,
}

impl KeywordStats {
    /// Returns the match count for a column, if the keyword matched there.
    pub fn count(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.count)
    }
}

/// Match counts for every keyword that matched at least one cell.
///
/// Entries keep the order in which keywords appeared in the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchStats {
    /// Keywords with their column counts.
    entries: Vec<KeywordStats>,
}

impl MatchStats {
    /// Returns the count for a keyword in a column.
    pub fn get(&self, keyword: &str, column: &str) -> Option<usize> {
        self.entry(keyword)?.count(column)
    }

    /// Returns the stats for one keyword.
    pub fn entry(&self, keyword: &str) -> Option<&KeywordStats> {
        self.entries.iter().find(|e| e.keyword == keyword)
    }

    /// Iterates over keywords that matched, in query order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &KeywordStats> {
        self.entries.iter()
    }

    /// Returns the number of keywords that matched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keyword matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of searching a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableResults {
    /// Keywords derived from the query.
    pub keywords: Vec<String>,
    /// Distinct matching rows, with the same columns as the searched table.
    pub rows: Table,
    /// Per-keyword, per-column match counts.
    pub stats: MatchStats,
}

impl TableResults {
    /// Creates the result for a query that produced no keywords.
    pub fn empty_query() -> Self {
        Self {
            keywords: Vec::new(),
            rows: Table::default(),
            stats: MatchStats::default(),
        }
    }

    /// Returns true if the query had no searchable keywords.
    pub fn is_empty_query(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns true if no row matched.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Checks one lowercased cell against a keyword.
fn cell_matches(cell: &str, keyword: &str, fuzzy: bool) -> bool {
    if fuzzy {
        cell.contains(keyword)
    } else {
        cell == keyword
    }
}

/// Searches all columns of `table` for each keyword.
///
/// Every cell is compared through its rendered, lowercased form, so numeric columns are
/// searched as text. With `fuzzy` a cell matches when it contains the keyword, otherwise
/// only when it equals it. Matching rows are collected keyword by keyword and column by
/// column, then reduced to structurally distinct rows keeping the first occurrence.
pub fn search_table(table: &Table, keywords: Vec<String>, fuzzy: bool) -> TableResults {
    if keywords.is_empty() {
        return TableResults::empty_query();
    }

    let cells: Vec<Vec<String>> = (0..table.columns().len())
        .map(|col| {
            table
                .rows()
                .iter()
                .map(|row| row[col].render().to_lowercase())
                .collect()
        })
        .collect();

    let mut searched = HashSet::new();
    let mut entries = Vec::new();
    let mut candidates = Vec::new();

    for keyword in &keywords {
        if !searched.insert(keyword.as_str()) {
            continue;
        }

        let mut columns = Vec::new();
        for (column, values) in table.columns().iter().zip(&cells) {
            let hits: Vec<usize> = values
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell_matches(cell, keyword, fuzzy))
                .map(|(index, _)| index)
                .collect();
            if hits.is_empty() {
                continue;
            }
            columns.push(ColumnCount {
                column: column.name.clone(),
                count: hits.len(),
            });
            candidates.extend(hits);
        }

        if !columns.is_empty() {
            entries.push(KeywordStats {
                keyword: keyword.clone(),
                columns,
            });
        }
    }

    let mut seen: HashSet<&Row> = HashSet::new();
    let distinct: Vec<usize> = candidates
        .into_iter()
        .filter(|&index| seen.insert(&table.rows()[index]))
        .collect();

    debug!(
        keywords = ?keywords,
        rows = distinct.len(),
        "table search complete"
    );

    TableResults {
        rows: table.select(&distinct),
        keywords,
        stats: MatchStats { entries },
    }
}
