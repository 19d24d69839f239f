//! Data model and loaders for econ.
//!
//! Tables hold typed cells ([`Value`]) under named columns. Text reports are kept as raw
//! strings and JSON reports as [`serde_json::Value`] trees. Loaders turn corpus files into
//! these shapes, and [`Corpus`] loads whole collections at once.
//!
//! # Example
//!
//! ```
//! use econ_data::{Column, Table, Value};
//!
//! let table = Table::from_rows(
//!     vec![Column::text("Country"), Column::numeric("GDP")],
//!     vec![
//!         vec![Value::from("India"), Value::from(3.4)],
//!         vec![Value::from("Brazil"), Value::from(1.9)],
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.rows()[0][1].render(), "3.4");
//! ```

#![warn(missing_docs)]

mod corpus;
mod discovery;
mod error;
mod load;
mod table;
mod value;

pub use corpus::{Corpus, LoadFailure, LoadedFile};
pub use discovery::{DiscoveredFile, discover_files};
pub use error::DataError;
pub use load::{Document, DocumentKind, load_document, load_json, load_table, load_text};
pub use table::{Column, ColumnKind, Row, Table};
pub use value::Value;
