//! In-memory tables of typed columns.

use std::ops::Index;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::{DataError, Value};

/// Declared type of a column.
///
/// Typing is per column, not per cell. Search ignores it and treats every column as text;
/// numeric helpers use it only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Text column.
    Text,
    /// Numeric column.
    Numeric,
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column header.
    pub name: String,
    /// Declared type.
    pub kind: ColumnKind,
}

impl Column {
    /// Creates a text column.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Text,
        }
    }

    /// Creates a numeric column.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Numeric,
        }
    }
}

/// One table row, holding a value per column in column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    /// Cell values aligned with the table's columns.
    values: Vec<Value>,
}

impl Row {
    /// Returns the value at a column index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns all values in column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Index<usize> for Row {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

/// An ordered sequence of rows sharing one set of named columns.
///
/// The constructor and [`Table::push_row`] guarantee that every row has exactly one value
/// per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column definitions.
    columns: Vec<Column>,
    /// Rows in load order.
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from columns and row values.
    pub fn from_rows(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Result<Self, DataError> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends a row, rejecting rows whose width does not match the column count.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<(), DataError> {
        if values.len() != self.columns.len() {
            return Err(DataError::RowWidth {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(Row { values });
        Ok(())
    }

    /// Returns the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns a column definition by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns true if the table has a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterates the values of one column, or returns `None` if it does not exist.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row.values[index]))
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds a new table with the same columns and the rows at `indices`, in that order.
    ///
    /// Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }

    /// Builds a new table with the same columns and the rows matching a predicate.
    pub fn filter(&self, mut predicate: impl FnMut(&Row) -> bool) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| predicate(*r)).cloned().collect(),
        }
    }

    /// Converts rows into JSON objects keyed by column name.
    pub fn to_records(&self) -> Vec<Map<String, JsonValue>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(&row.values)
                    .map(|(column, value)| {
                        let json = serde_json::to_value(value).unwrap_or(JsonValue::Null);
                        (column.name.clone(), json)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            vec![Column::text("Country"), Column::numeric("GDP")],
            vec![
                vec!["India".into(), 3385.1.into()],
                vec!["Brazil".into(), 1920.0.into()],
                vec!["Germany".into(), Value::Missing],
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut table = Table::new(vec![Column::text("A"), Column::text("B")]);
        let err = table.push_row(vec!["x".into()]).unwrap_err();
        assert!(matches!(
            err,
            DataError::RowWidth {
                expected: 2,
                actual: 1
            }
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn column_lookup() {
        let table = sample();
        assert_eq!(table.column_index("GDP"), Some(1));
        assert!(table.has_column("Country"));
        assert!(!table.has_column("country"));
        assert_eq!(table.column("GDP").unwrap().kind, ColumnKind::Numeric);
        let names: Vec<_> = table.column_names().collect();
        assert_eq!(names, vec!["Country", "GDP"]);
    }

    #[test]
    fn column_values_in_row_order() {
        let table = sample();
        let gdp: Vec<_> = table.column_values("GDP").unwrap().collect();
        assert_eq!(gdp.len(), 3);
        assert!(gdp[2].is_missing());
        assert!(table.column_values("Year").is_none());
    }

    #[test]
    fn select_and_filter_keep_columns() {
        let table = sample();
        let picked = table.select(&[2, 0, 9]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.rows()[0][0], Value::from("Germany"));
        assert_eq!(picked.columns(), table.columns());

        let filtered = table.filter(|row| row[1].as_f64().is_some_and(|v| v > 2000.0));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows()[0][0], Value::from("India"));
    }

    #[test]
    fn records_are_keyed_by_column() {
        let records = sample().to_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["Country"], "India");
        assert_eq!(records[0]["GDP"], 3385.1);
        assert!(records[2]["GDP"].is_null());
    }
}
