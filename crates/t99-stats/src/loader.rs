// File: crates/t99-stats/src/loader.rs
// Summary: Reads one sheet of a workbook (or a CSV file) into a `Table`.
// Notes:
// - The first row supplies column names; blank header cells become "Unnamed: <i>".
// - Missing cells become `Cell::Empty`; rows with no values at all are skipped.
// - Reader errors are returned as-is.

use std::path::Path;

use anyhow::Result;
use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::{debug, info};

use crate::table::{Cell, Table};

/// Load `sheet` from the spreadsheet at `path`. CSV files have a single
/// implicit sheet, so `sheet` is ignored for them.
pub fn load_table(path: &Path, sheet: &str) -> Result<Table> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let table = if is_csv {
        debug!(path = %path.display(), "reading CSV");
        read_csv(path)?
    } else {
        debug!(path = %path.display(), sheet, "reading workbook sheet");
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook.worksheet_range(sheet)?;
        table_from_range(&range)
    };

    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "loaded sheet"
    );
    Ok(table)
}

/// Convert a worksheet range: first row is the header, the rest are data.
pub fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|header| header.iter().map(cell_from_data).collect::<Vec<_>>())
        .unwrap_or_default();
    let data = rows.map(|r| r.iter().map(cell_from_data).collect()).collect();
    build_table(headers, data)
}

fn read_csv(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.iter().map(Cell::from_text).collect::<Vec<_>>();
    let mut data = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        data.push(rec.iter().map(Cell::from_text).collect());
    }
    Ok(build_table(headers, data))
}

fn build_table(header_cells: Vec<Cell>, data: Vec<Vec<Cell>>) -> Table {
    let headers = header_cells
        .iter()
        .enumerate()
        .map(|(i, c)| if c.is_empty() { format!("Unnamed: {i}") } else { c.to_string() })
        .collect();
    let data = data
        .into_iter()
        .filter(|row: &Vec<Cell>| !row.iter().all(Cell::is_empty))
        .collect();
    Table::new(headers, data)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        let mut r = Range::new((0, 0), (height - 1, width - 1));
        for (y, row) in rows.into_iter().enumerate() {
            for (x, v) in row.into_iter().enumerate() {
                r.set_value((y as u32, x as u32), v);
            }
        }
        r
    }

    #[test]
    fn range_header_and_cells_convert() {
        let r = range(vec![
            vec![Data::String("Rank".into()), Data::String("KOs".into()), Data::String("VIP".into())],
            vec![Data::Float(5.0), Data::Int(3), Data::String("Y".into())],
            vec![Data::Float(40.0), Data::Empty, Data::Empty],
        ]);
        let t = table_from_range(&r);
        assert_eq!(t.headers, vec!["Rank", "KOs", "VIP"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows[0].cells, vec![Cell::Number(5.0), Cell::Number(3.0), Cell::Text("Y".into())]);
        assert_eq!(t.rows[1].cell(2), &Cell::Empty);
    }

    #[test]
    fn blank_rows_are_skipped_and_headers_named() {
        let r = range(vec![
            vec![Data::String("Rank".into()), Data::Empty],
            vec![Data::Empty, Data::Empty],
            vec![Data::Float(9.0), Data::String(String::new())],
        ]);
        let t = table_from_range(&r);
        assert_eq!(t.headers, vec!["Rank", "Unnamed: 1"]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.rows[0].source_index, 0);
    }

    #[test]
    fn empty_range_gives_empty_table() {
        let t = table_from_range(&Range::<Data>::empty());
        assert!(t.headers.is_empty());
        assert!(t.is_empty());
    }
}
