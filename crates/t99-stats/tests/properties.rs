// File: crates/t99-stats/tests/properties.rs
// Purpose: Property checks for the filter partition, index contiguity and frequency table.

use proptest::prelude::*;
use t99_stats::{analyze, filter_games, Cell, Columns, Config, Table, VIP_MARKER};

fn marker() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Text(VIP_MARKER.to_string())),
        Just(Cell::Text("y".to_string())),
        Just(Cell::Text("N".to_string())),
        Just(Cell::Empty),
        Just(Cell::Number(1.0)),
    ]
}

fn sheet() -> impl Strategy<Value = Table> {
    prop::collection::vec((1u32..=99, 0u32..=25, marker()), 0..60).prop_map(|rows| {
        Table::new(
            vec!["Rank".into(), "KOs".into(), "VIP".into()],
            rows.into_iter()
                .map(|(r, k, v)| vec![Cell::Number(r as f64), Cell::Number(k as f64), v])
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn vip_and_normal_partition_the_sheet(table in sheet()) {
        let cols = Columns::default();
        let vip = filter_games(&table, &cols, true).unwrap();
        let normal = filter_games(&table, &cols, false).unwrap();

        prop_assert!(vip.rows.iter().all(|r| r.cell(2).text_eq(VIP_MARKER)));
        prop_assert!(normal.rows.iter().all(|r| !r.cell(2).text_eq(VIP_MARKER)));

        let mut seen: Vec<usize> = vip.rows.iter().chain(normal.rows.iter()).map(|r| r.source_index).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..table.len()).collect::<Vec<_>>());
    }

    #[test]
    fn game_index_is_one_to_n(table in sheet(), vip_only in any::<bool>()) {
        let config = Config { vip_only, ..Config::default() };
        let analysis = analyze(&table, &config).unwrap();
        let idx: Vec<usize> = analysis.games.iter().map(|g| g.game_index).collect();
        prop_assert_eq!(idx, (1..=analysis.games.len()).collect::<Vec<_>>());
        prop_assert!(analysis.games.windows(2).all(|w| w[0].overall_index < w[1].overall_index));
    }

    #[test]
    fn frequency_covers_all_placements(table in sheet(), vip_only in any::<bool>()) {
        let config = Config { vip_only, ..Config::default() };
        let analysis = analyze(&table, &config).unwrap();
        prop_assert_eq!(analysis.frequency.len(), 99);
        prop_assert_eq!(analysis.frequency.iter().count(), 99);
        prop_assert_eq!(analysis.frequency.total() as usize, analysis.games.len());
    }
}
