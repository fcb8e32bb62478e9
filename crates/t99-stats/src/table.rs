// File: crates/t99-stats/src/table.rs
// Summary: In-memory row/column table with missing cells normalized to empty values.

use std::fmt;

use crate::error::TableError;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// A missing value; reads as the empty string.
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Classify a raw text field: blank becomes `Empty`, numerics become `Number`.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else if let Ok(n) = trimmed.parse::<f64>() {
            Cell::Number(n)
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Exact text match; numbers and booleans never match.
    pub fn text_eq(&self, other: &str) -> bool {
        matches!(self, Cell::Text(s) if s == other)
    }

    /// Non-negative whole number, if the cell holds one.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Cell::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 => Some(*n as u32),
            Cell::Text(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One data row plus its 0-based position among the sheet's data rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub source_index: usize,
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Build from raw rows, numbering them in order and padding short rows with
    /// `Cell::Empty` so every row is exactly as wide as the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(source_index, mut cells)| {
                cells.resize(width.max(cells.len()), Cell::Empty);
                Row { source_index, cells }
            })
            .collect();
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Copy of the table holding only rows accepted by `keep`, order preserved.
    pub fn retain_rows(&self, mut keep: impl FnMut(&Row) -> bool) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

static EMPTY: Cell = Cell::Empty;

impl Row {
    pub fn cell(&self, col: usize) -> &Cell {
        self.cells.get(col).unwrap_or(&EMPTY)
    }

    /// Whole-number value of `col`, reporting `column` and this row on failure.
    pub fn u32_at(&self, col: usize, column: &str) -> Result<u32, TableError> {
        let cell = self.cell(col);
        cell.as_u32().ok_or_else(|| TableError::NotAnInteger {
            column: column.to_string(),
            row: self.source_index,
            value: cell.to_string(),
        })
    }
}
