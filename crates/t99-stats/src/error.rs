// File: crates/t99-stats/src/error.rs
// Summary: Schema and value errors raised while reading game columns.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("column '{0}' not found")]
    MissingColumn(String),
    #[error("row {row}: column '{column}' expected a whole number, found '{value}'")]
    NotAnInteger { column: String, row: usize, value: String },
}
