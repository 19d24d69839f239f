//! Loading corpus files into tables, text and JSON documents.

use std::{fs, path::Path};

use csv::ReaderBuilder;
use serde_json::Value as JsonValue;

use crate::{Column, DataError, Table, Value};

/// The kind of content a corpus file holds, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Delimited rows and columns (`.csv`, `.tsv`).
    Table,
    /// Line-oriented free text (`.txt`, `.md`, `.text`).
    Text,
    /// Nested JSON report (`.json`).
    Json,
}

impl DocumentKind {
    /// Determines the document kind from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" | "tsv" => Some(Self::Table),
            "txt" | "md" | "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Loaded content of a corpus file.
#[derive(Debug, Clone)]
pub enum Document {
    /// A parsed table.
    Table(Table),
    /// Raw text content.
    Text(String),
    /// A parsed JSON document.
    Json(JsonValue),
}

impl Document {
    /// Returns the kind of this document.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Table(_) => DocumentKind::Table,
            Self::Text(_) => DocumentKind::Text,
            Self::Json(_) => DocumentKind::Json,
        }
    }
}

/// Loads a file, choosing the parser from its extension.
pub fn load_document(path: &Path) -> Result<Document, DataError> {
    match DocumentKind::from_path(path) {
        Some(DocumentKind::Table) => load_table(path).map(Document::Table),
        Some(DocumentKind::Text) => load_text(path).map(Document::Text),
        Some(DocumentKind::Json) => load_json(path).map(Document::Json),
        None => Err(DataError::UnsupportedFileType {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads a text file fully into memory.
pub fn load_text(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses a JSON file.
pub fn load_json(path: &Path) -> Result<JsonValue, DataError> {
    let contents = load_text(path)?;
    serde_json::from_str(&contents).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a delimited file with a header row into a typed table.
///
/// `.tsv` files are tab-separated, everything else is comma-separated.
pub fn load_table(path: &Path) -> Result<Table, DataError> {
    let contents = load_text(path)?;
    let delimiter = if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"))
    {
        b'\t'
    } else {
        b','
    };
    parse_table(&contents, delimiter, path)
}

/// Parses delimited text with a header row into a typed table.
///
/// Each column is typed from its non-empty cells: all integers gives an integer column,
/// all numbers a float column, all `true`/`false` a boolean column, anything else text.
/// Empty cells become [`Value::Missing`].
fn parse_table(contents: &str, delimiter: u8, path: &Path) -> Result<Table, DataError> {
    let csv_error = |source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(contents.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        raw_rows.push(record.map_err(csv_error)?.iter().map(str::to_string).collect());
    }

    let inferred: Vec<CellType> = (0..headers.len())
        .map(|i| infer_cell_type(raw_rows.iter().map(|row| row[i].as_str())))
        .collect();

    let columns = headers
        .into_iter()
        .zip(&inferred)
        .map(|(name, cell_type)| match cell_type {
            CellType::Integer | CellType::Float => Column::numeric(name),
            CellType::Bool | CellType::Text => Column::text(name),
        })
        .collect();

    let mut table = Table::new(columns);
    for raw in raw_rows {
        let values = raw
            .into_iter()
            .zip(&inferred)
            .map(|(cell, cell_type)| convert_cell(cell, *cell_type))
            .collect();
        table.push_row(values)?;
    }
    Ok(table)
}

/// Cell type shared by every non-empty cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellType {
    /// Whole numbers.
    Integer,
    /// Any numbers.
    Float,
    /// `true` / `false`.
    Bool,
    /// Anything else.
    Text,
}

/// Picks the narrowest cell type that fits every non-empty cell.
fn infer_cell_type<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> CellType {
    let mut non_empty = cells.filter(|c| !c.trim().is_empty()).peekable();
    if non_empty.peek().is_none() {
        return CellType::Text;
    }
    if non_empty.clone().all(|c| c.trim().parse::<i64>().is_ok()) {
        CellType::Integer
    } else if non_empty.clone().all(|c| c.trim().parse::<f64>().is_ok()) {
        CellType::Float
    } else if non_empty.all(|c| parse_bool(c).is_some()) {
        CellType::Bool
    } else {
        CellType::Text
    }
}

/// Parses `true` / `false` case-insensitively.
fn parse_bool(cell: &str) -> Option<bool> {
    let cell = cell.trim();
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Converts a raw cell to a value of the column's type.
fn convert_cell(cell: String, cell_type: CellType) -> Value {
    if cell.trim().is_empty() {
        return Value::Missing;
    }
    let parsed = match cell_type {
        CellType::Integer => cell.trim().parse().ok().map(Value::Integer),
        CellType::Float => cell.trim().parse().ok().map(Value::Float),
        CellType::Bool => parse_bool(&cell).map(Value::Bool),
        CellType::Text => None,
    };
    parsed.unwrap_or(Value::Text(cell))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::ColumnKind;

    const GDP_CSV: &str = "\
Country,Year,GDP_Billion_USD,Developed
India,2022,3385.1,false
Brazil,2022,1920,false
Germany,2022,,true
";

    #[test]
    fn infers_column_types() {
        let table = parse_table(GDP_CSV, b',', Path::new("gdp.csv")).unwrap();
        let kinds: Vec<_> = table.columns().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::Text,
                ColumnKind::Numeric,
                ColumnKind::Numeric,
                ColumnKind::Text
            ]
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0][1], Value::Integer(2022));
        assert_eq!(table.rows()[1][2], Value::Float(1920.0));
        assert!(table.rows()[2][2].is_missing());
        assert_eq!(table.rows()[2][3], Value::Bool(true));
    }

    #[test]
    fn mixed_column_stays_text() {
        let table = parse_table("Code,Value\nA,1\nB,n/a\n", b',', Path::new("codes.csv")).unwrap();
        assert_eq!(table.columns()[1].kind, ColumnKind::Text);
        assert_eq!(table.rows()[0][1], Value::from("1"));
    }

    #[test]
    fn ragged_rows_are_errors() {
        assert!(matches!(
            parse_table("A,B\n1,2,3\n", b',', Path::new("ragged.csv")),
            Err(DataError::Csv { .. })
        ));
    }

    #[test]
    fn kind_from_extension() {
        assert_eq!(
            DocumentKind::from_path(Path::new("data/gdp.CSV")),
            Some(DocumentKind::Table)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("reports/india.txt")),
            Some(DocumentKind::Text)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("reports/germany.json")),
            Some(DocumentKind::Json)
        );
        assert_eq!(DocumentKind::from_path(Path::new("image.png")), None);
        assert_eq!(DocumentKind::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn loads_each_document_kind() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("gdp.tsv");
        fs::write(&csv, "Country\tGDP\nIndia\t3385.1\n").unwrap();
        let txt = dir.path().join("india.txt");
        fs::write(&txt, "GDP grew\nquickly").unwrap();
        let json = dir.path().join("germany.json");
        fs::write(&json, r#"{"z": 1, "a": 2}"#).unwrap();

        let Document::Table(table) = load_document(&csv).unwrap() else {
            panic!("expected table");
        };
        assert_eq!(table.columns()[1].kind, ColumnKind::Numeric);

        let text = load_document(&txt).unwrap();
        assert_eq!(text.kind(), DocumentKind::Text);

        let Document::Json(value) = load_document(&json).unwrap() else {
            panic!("expected json");
        };
        // Object keys keep document order.
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(matches!(
            load_document(&missing),
            Err(DataError::ReadFile { .. })
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert!(matches!(load_document(&bad), Err(DataError::Json { .. })));

        let other = dir.path().join("image.png");
        fs::write(&other, "x").unwrap();
        assert!(matches!(
            load_document(&other),
            Err(DataError::UnsupportedFileType { .. })
        ));
    }
}
