// File: crates/t99-stats/src/games.rs
// Summary: VIP filter, game indexing and the placement frequency table.

use tracing::{info, warn};

use crate::config::Columns;
use crate::error::TableError;
use crate::table::Table;

/// The only VIP column value treated as "VIP".
// TODO: accept other truthy markers ("yes", "x", TRUE) once sheets settle on a convention.
pub const VIP_MARKER: &str = "Y";

/// Best and worst possible placement in a 99-player match.
pub const BEST_PLACE: u32 = 1;
pub const WORST_PLACE: u32 = 99;

/// One analyzed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// 0-based position among all data rows of the sheet, before filtering.
    pub overall_index: usize,
    /// 1-based position within the filtered series.
    pub game_index: usize,
    pub rank: u32,
    pub kos: u32,
}

/// Keep rows whose VIP column is exactly [`VIP_MARKER`] (`vip_only`) or anything
/// else (`!vip_only`). Row order and source positions are preserved.
pub fn filter_games(table: &Table, columns: &Columns, vip_only: bool) -> Result<Table, TableError> {
    let vip = table.column_index(&columns.vip)?;
    let kept = table.retain_rows(|row| row.cell(vip).text_eq(VIP_MARKER) == vip_only);
    info!(
        mode = if vip_only { "vip" } else { "normal" },
        kept = kept.len(),
        total = table.len(),
        "filtered games"
    );
    Ok(kept)
}

/// Turn filtered rows into game records numbered 1..=N.
pub fn index_games(filtered: &Table, columns: &Columns) -> Result<Vec<GameRecord>, TableError> {
    let rank = filtered.column_index(&columns.rank)?;
    let kos = filtered.column_index(&columns.kos)?;
    filtered
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Ok(GameRecord {
                overall_index: row.source_index,
                game_index: i + 1,
                rank: row.u32_at(rank, &columns.rank)?,
                kos: row.u32_at(kos, &columns.kos)?,
            })
        })
        .collect()
}

/// Count of games at every placement from 1 to 99, zeros included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementFrequency {
    counts: [u32; WORST_PLACE as usize],
}

impl PlacementFrequency {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let mut counts = [0u32; WORST_PLACE as usize];
        for g in games {
            match counts.get_mut((g.rank as usize).wrapping_sub(1)) {
                Some(c) => *c += 1,
                None => warn!(rank = g.rank, game = g.game_index, "placement outside 1..=99 not counted"),
            }
        }
        Self { counts }
    }

    /// Count at `place`; zero outside 1..=99.
    pub fn get(&self, place: u32) -> u32 {
        (place as usize)
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// `(place, count)` pairs in ascending placement order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (BEST_PLACE..=WORST_PLACE).zip(self.counts.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
