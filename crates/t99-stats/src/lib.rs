// File: crates/t99-stats/src/lib.rs
// Summary: Match-result pipeline entry point; exports loading, filtering, indexing and chart building.

pub mod config;
pub mod error;
pub mod table;
pub mod loader;
pub mod games;
pub mod summary;
pub mod charts;
pub mod pipeline;

pub use config::{Columns, Config};
pub use error::TableError;
pub use table::{Cell, Row, Table};
pub use loader::load_table;
pub use games::{filter_games, index_games, GameRecord, PlacementFrequency, VIP_MARKER};
pub use summary::Summary;
pub use charts::{overall_chart, placements_chart, LabelSide};
pub use pipeline::{analyze, render, run, Analysis, OVERALL_PNG, PLACEMENTS_PNG};
