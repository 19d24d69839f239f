//! Row filters for indicator tables.
//!
//! Filters never fail: a missing column yields an empty table, and cells that cannot be
//! compared are treated as non-matching.

use econ_data::{Table, Value};

/// Column consulted by [`filter_by_country`].
pub const COUNTRY_COLUMN: &str = "Country";

/// Column consulted by [`filter_by_year`].
pub const YEAR_COLUMN: &str = "Year";

/// Keeps rows whose `Country` cell contains `country`, ignoring case.
///
/// Only text cells are considered.
pub fn filter_by_country(table: &Table, country: &str) -> Table {
    let Some(index) = table.column_index(COUNTRY_COLUMN) else {
        return Table::default();
    };
    let needle = country.to_lowercase();
    table.filter(|row| {
        row[index]
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

/// Keeps rows whose `Year` cell is numerically equal to `year`.
pub fn filter_by_year(table: &Table, year: i64) -> Table {
    let Some(index) = table.column_index(YEAR_COLUMN) else {
        return Table::default();
    };
    table.filter(|row| match &row[index] {
        Value::Integer(value) => *value == year,
        Value::Float(value) => *value == year as f64,
        _ => false,
    })
}

/// Keeps rows whose `column` value, coerced to a number, lies in `min..=max`.
///
/// Cells that do not coerce to a number are dropped.
pub fn filter_by_range(table: &Table, column: &str, min: f64, max: f64) -> Table {
    let Some(index) = table.column_index(column) else {
        return Table::default();
    };
    table.filter(|row| {
        row[index]
            .as_f64()
            .is_some_and(|value| (min..=max).contains(&value))
    })
}
