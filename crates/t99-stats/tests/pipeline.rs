// File: crates/t99-stats/tests/pipeline.rs
// Purpose: End-to-end runs over CSV sheets written to a scratch directory.

use std::path::{Path, PathBuf};

use t99_stats::{analyze, load_table, run, Cell, Config, TableError, OVERALL_PNG, PLACEMENTS_PNG};

fn write_sheet(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("stats.csv");
    std::fs::write(&path, body).expect("write csv");
    path
}

const SHEET: &str = "\
Date,Rank,KOs,VIP,Notes
2024-01-01,12,4,,warmup
2024-01-02,5,3,Y,
2024-01-03,44,1,,
2024-01-04,20,0,Y,close one
2024-01-05,19,7,Y,
";

#[test]
fn vip_run_writes_both_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(dir.path(), SHEET);

    let analysis = run(&input, "Sheet1", dir.path(), &Config::default()).expect("run");
    assert_eq!(analysis.games.len(), 3);

    for name in [OVERALL_PNG, PLACEMENTS_PNG] {
        let bytes = std::fs::read(dir.path().join(name)).expect("chart written");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{name} should be a PNG");
        let img = image_size(&bytes);
        assert!(img.0 > 0 && img.0 <= 1875 && img.1 <= 625, "{name} is {img:?}");
    }
}

#[test]
fn normal_mode_takes_the_complement() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = load_table(&write_sheet(dir.path(), SHEET), "ignored").expect("load");

    let config = Config { vip_only: false, ..Config::default() };
    let analysis = analyze(&table, &config).expect("analyze");
    let ranks: Vec<u32> = analysis.games.iter().map(|g| g.rank).collect();
    assert_eq!(ranks, vec![12, 44]);
    let positions: Vec<(usize, usize)> = analysis.games.iter().map(|g| (g.overall_index, g.game_index)).collect();
    assert_eq!(positions, vec![(0, 1), (2, 2)]);
}

#[test]
fn empty_cells_in_other_columns_load_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = load_table(&write_sheet(dir.path(), SHEET), "ignored").expect("load");
    let notes = table.column_index("Notes").expect("notes column");
    assert_eq!(table.rows[1].cell(notes), &Cell::Empty);
    assert_eq!(table.rows[1].cell(notes).to_string(), "");
}

#[test]
fn no_matching_rows_still_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(dir.path(), "Rank,KOs,VIP\n3,1,\n70,0,N\n");

    let analysis = run(&input, "Sheet1", dir.path(), &Config::default()).expect("empty run");
    assert!(analysis.games.is_empty());
    assert_eq!(analysis.frequency.len(), 99);
    assert_eq!(analysis.frequency.total(), 0);
    assert!(dir.path().join(OVERALL_PNG).exists());
    assert!(dir.path().join(PLACEMENTS_PNG).exists());
}

#[test]
fn single_vip_game() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = load_table(&write_sheet(dir.path(), "Rank,KOs,VIP\n5,3,Y\n"), "x").expect("load");
    let analysis = analyze(&table, &Config::default()).expect("analyze");

    assert_eq!(analysis.games.len(), 1);
    assert_eq!(analysis.games[0].game_index, 1);
    assert_eq!(analysis.frequency.get(5), 1);
    assert_eq!(analysis.frequency.iter().filter(|&(p, _)| p != 5).map(|(_, c)| c).sum::<u32>(), 0);
}

#[test]
fn repeated_analysis_is_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(dir.path(), SHEET);
    let first = analyze(&load_table(&input, "s").expect("load"), &Config::default()).expect("first");
    let second = analyze(&load_table(&input, "s").expect("load"), &Config::default()).expect("second");
    assert_eq!(first, second);
}

#[test]
fn missing_column_is_a_schema_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = load_table(&write_sheet(dir.path(), "Rank,VIP\n5,Y\n"), "x").expect("load");
    let err = analyze(&table, &Config::default()).unwrap_err();
    assert_eq!(err, TableError::MissingColumn("KOs".into()));
}

#[test]
fn unreadable_workbook_propagates_reader_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.xlsx");
    assert!(load_table(&missing, "Sheet1").is_err());

    let not_a_workbook = dir.path().join("garbage.xlsx");
    std::fs::write(&not_a_workbook, b"definitely not a zip").expect("write");
    assert!(run(&not_a_workbook, "Sheet1", dir.path(), &Config::default()).is_err());
    assert!(!dir.path().join(OVERALL_PNG).exists());
}

/// Width/height from the PNG IHDR chunk.
fn image_size(png: &[u8]) -> (u32, u32) {
    let be = |b: &[u8]| u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
    (be(&png[16..20]), be(&png[20..24]))
}
