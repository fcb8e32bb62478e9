// File: crates/t99-stats/src/config.rs
// Summary: Pipeline configuration: filter mode, figure geometry, colors and column names.

use t99_chart::types::{DPI, FIG_HEIGHT_IN, FIG_WIDTH_IN};
use t99_chart::{FigureSize, Palette, RenderOptions};

/// Names of the sheet columns the pipeline reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    pub rank: String,
    pub kos: String,
    pub vip: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            rank: "Rank".to_string(),
            kos: "KOs".to_string(),
            vip: "VIP".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// `true`: VIP games only. `false`: every other game.
    pub vip_only: bool,
    pub fig_width: f32,
    pub fig_height: f32,
    pub dpi: f32,
    pub palette: Palette,
    pub columns: Columns,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vip_only: true,
            fig_width: FIG_WIDTH_IN,
            fig_height: FIG_HEIGHT_IN,
            dpi: DPI,
            palette: Palette::default(),
            columns: Columns::default(),
        }
    }
}

impl Config {
    pub fn figure(&self) -> FigureSize {
        FigureSize::new(self.fig_width, self.fig_height, self.dpi)
    }

    /// Render options shared by both charts.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::for_figure(self.figure(), self.palette.background)
    }
}
