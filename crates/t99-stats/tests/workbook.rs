// File: crates/t99-stats/tests/workbook.rs
// Purpose: Read named sheets out of a two-sheet .xlsx fixture.

use std::path::PathBuf;

use t99_stats::{analyze, load_table, run, Cell, Config, OVERALL_PNG, PLACEMENTS_PNG};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/stats.xlsx")
}

#[test]
fn loads_the_named_sheet() {
    let table = load_table(&fixture(), "Sheet2").expect("load Sheet2");
    assert_eq!(table.headers, ["Date", "Rank", "KOs", "VIP", "Notes"]);
    assert_eq!(table.len(), 3);

    let first = &table.rows[0];
    assert_eq!(first.source_index, 0);
    assert_eq!(first.cells[0], Cell::Text("2024-02-01".into()));
    assert_eq!(first.cells[1], Cell::Number(5.0));
    assert_eq!(first.cells[3], Cell::Text("Y".into()));
    assert_eq!(first.cells[4], Cell::Empty);

    // Row without VIP or Notes
    assert_eq!(table.rows[1].cells[3], Cell::Empty);
    assert_eq!(table.rows[1].cells[4], Cell::Empty);
    assert_eq!(table.rows[1].cell(3).to_string(), "");

    assert_eq!(table.rows[2].cells[4], Cell::Text("close one".into()));
}

#[test]
fn other_sheet_is_independent() {
    let table = load_table(&fixture(), "Sheet1").expect("load Sheet1");
    assert_eq!(table.headers, ["Rank", "KOs", "VIP"]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].cells, vec![Cell::Number(99.0), Cell::Number(0.0), Cell::Text("Y".into())]);
}

#[test]
fn missing_sheet_returns_reader_error() {
    let err = load_table(&fixture(), "Nope").expect_err("no such sheet");
    assert!(err.downcast_ref::<calamine::Error>().is_some(), "unexpected error: {err:#}");
}

#[test]
fn vip_games_from_workbook_keep_sheet_positions() {
    let table = load_table(&fixture(), "Sheet2").expect("load Sheet2");
    let analysis = analyze(&table, &Config::default()).expect("analyze");
    let picked: Vec<_> = analysis.games.iter().map(|g| (g.overall_index, g.game_index, g.rank, g.kos)).collect();
    assert_eq!(picked, vec![(0, 1, 5, 3), (2, 2, 2, 7)]);
    assert_eq!(analysis.frequency.get(2), 1);
    assert_eq!(analysis.frequency.get(5), 1);
}

#[test]
fn run_on_missing_sheet_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(run(&fixture(), "Nope", dir.path(), &Config::default()).is_err());
    assert!(!dir.path().join(OVERALL_PNG).exists());

    run(&fixture(), "Sheet2", dir.path(), &Config::default()).expect("run Sheet2");
    assert!(dir.path().join(OVERALL_PNG).exists());
    assert!(dir.path().join(PLACEMENTS_PNG).exists());
}
