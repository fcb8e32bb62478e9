// File: crates/t99-stats/src/charts.rs
// Summary: Declarative chart descriptions for the overall line chart and placement bar chart.

use t99_chart::{Axis, AxisSide, Chart, Series};

use crate::config::Config;
use crate::games::{GameRecord, PlacementFrequency, BEST_PLACE, WORST_PLACE};

/// Placement tick labels and gridlines on the overall chart.
pub const PLACE_TICKS: [f64; 6] = [1.0, 21.0, 41.0, 61.0, 81.0, 99.0];
/// Labelled placements on the bar chart.
pub const BAR_TICKS: [f64; 6] = [1.0, 10.0, 25.0, 50.0, 75.0, 99.0];
pub const KO_AXIS_MAX: f64 = 25.0;

const LINE_WIDTH_PT: f32 = 2.5;
const MARKER_PT: f32 = 7.5;
const BAR_WIDTH: f64 = 0.5;
/// Headroom above the tallest bar.
const BAR_MARGIN: f64 = 0.05;

/// Where a placement label goes relative to its point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSide {
    Above,
    Below,
}

impl LabelSide {
    /// Placements better than 20th sit near the top edge, so their labels go below.
    pub fn for_placement(rank: u32) -> Self {
        if rank < 20 { LabelSide::Below } else { LabelSide::Above }
    }

    /// Baseline offset in points; positive is up.
    pub fn offset_pt(self) -> f32 {
        match self {
            LabelSide::Above => 8.0,
            LabelSide::Below => -15.0,
        }
    }
}

/// Placement (inverted, with drop shadow) and knockouts per game.
pub fn overall_chart(games: &[GameRecord], config: &Config) -> Chart {
    let p = &config.palette;
    let n = games.len();

    let x_axis = Axis::new("Game", 0.0, (n + 1) as f64)
        .on(AxisSide::Top)
        .integer_ticks()
        .hide_tick(0.0)
        .label_color(p.axis)
        .tick_color(Some(p.axis))
        .tick_label_color(Some(p.axis));
    let y_axis = Axis::new("Place", BEST_PLACE as f64, WORST_PLACE as f64)
        .on(AxisSide::Left)
        .inverted()
        .fixed_ticks(&PLACE_TICKS)
        .with_gridlines(p.axis)
        .label_color(p.place)
        .tick_color(None)
        .tick_label_color(Some(p.axis));
    let ko_axis = Axis::new("K.O.", 0.0, KO_AXIS_MAX)
        .on(AxisSide::Right)
        .label_color(p.ko)
        .tick_color(None)
        .tick_label_color(None);

    // One placement unit lower on the inverted axis
    let shadow = Series::line(games.iter().map(|g| (g.game_index as f64, g.rank as f64 + 1.0)).collect())
        .color(p.shadow)
        .stroke_width(LINE_WIDTH_PT)
        .square_markers(MARKER_PT);

    let mut place = Series::line(games.iter().map(|g| (g.game_index as f64, g.rank as f64)).collect())
        .color(p.place)
        .stroke_width(LINE_WIDTH_PT)
        .square_markers(MARKER_PT)
        .annotation_color(p.annotation);
    for g in games {
        let side = LabelSide::for_placement(g.rank);
        place = place.annotate(g.game_index as f64, g.rank as f64, g.rank.to_string(), side.offset_pt());
    }

    let mut kos = Series::line(games.iter().map(|g| (g.game_index as f64, g.kos as f64)).collect())
        .color(p.ko)
        .stroke_width(LINE_WIDTH_PT)
        .square_markers(MARKER_PT)
        .annotation_color(p.annotation)
        .on_secondary_axis();
    for g in games {
        kos = kos.annotate(g.game_index as f64, g.kos as f64, g.kos.to_string(), LabelSide::Above.offset_pt());
    }

    Chart::new()
        .with_x_axis(x_axis)
        .with_y_axis(y_axis)
        .with_secondary_y_axis(ko_axis)
        .with_series(shadow)
        .with_series(place)
        .with_series(kos)
}

/// Games per placement over the full 1..=99 range.
pub fn placements_chart(frequency: &PlacementFrequency, config: &Config) -> Chart {
    let p = &config.palette;
    let top = match frequency.max_count() {
        0 => 1.0,
        m => m as f64 * (1.0 + BAR_MARGIN),
    };

    let x_axis = Axis::new("Place", BEST_PLACE as f64 - 0.5, WORST_PLACE as f64 + 0.5)
        .fixed_ticks(&BAR_TICKS)
        .label_color(p.axis)
        .tick_color(Some(p.axis))
        .tick_label_color(Some(p.axis));
    let y_axis = Axis::new("Total", 0.0, top)
        .on(AxisSide::Left)
        .integer_ticks()
        .label_color(p.axis)
        .tick_color(Some(p.axis))
        .tick_label_color(Some(p.axis));

    let bars = Series::bars(frequency.iter().map(|(place, count)| (place as f64, count as f64)).collect())
        .color(p.place)
        .bar_width(BAR_WIDTH);

    Chart::new()
        .with_x_axis(x_axis)
        .with_y_axis(y_axis)
        .with_spines(p.axis)
        .with_series(bars)
}
