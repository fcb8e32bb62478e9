// File: crates/t99-stats/src/pipeline.rs
// Summary: Load -> filter -> index -> aggregate -> render, in that order.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::charts::{overall_chart, placements_chart};
use crate::config::Config;
use crate::error::TableError;
use crate::games::{filter_games, index_games, GameRecord, PlacementFrequency};
use crate::loader::load_table;
use crate::summary::Summary;
use crate::table::Table;

pub const OVERALL_PNG: &str = "overall.png";
pub const PLACEMENTS_PNG: &str = "placements.png";

/// Everything derived from one sheet; the charts are pure functions of this.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub games: Vec<GameRecord>,
    pub frequency: PlacementFrequency,
    pub summary: Summary,
}

pub fn analyze(table: &Table, config: &Config) -> Result<Analysis, TableError> {
    let filtered = filter_games(table, &config.columns, config.vip_only)?;
    let games = index_games(&filtered, &config.columns)?;
    let frequency = PlacementFrequency::from_games(&games);
    let summary = Summary::from_games(&games);
    Ok(Analysis { games, frequency, summary })
}

/// Write `overall.png` and `placements.png` into `out_dir`.
pub fn render(analysis: &Analysis, config: &Config, out_dir: &Path) -> Result<()> {
    let opts = config.render_options();

    let overall = out_dir.join(OVERALL_PNG);
    overall_chart(&analysis.games, config).render_to_png(&opts, &overall)?;
    info!(path = %overall.display(), "wrote overall chart");

    let placements = out_dir.join(PLACEMENTS_PNG);
    placements_chart(&analysis.frequency, config).render_to_png(&opts, &placements)?;
    info!(path = %placements.display(), "wrote placements chart");
    Ok(())
}

/// Full run for one workbook sheet.
pub fn run(input: &Path, sheet: &str, out_dir: &Path, config: &Config) -> Result<Analysis> {
    let table = load_table(input, sheet)?;
    let analysis = analyze(&table, config)?;
    render(&analysis, config, out_dir)?;
    info!(summary = %analysis.summary, "done");
    Ok(analysis)
}
