// File: crates/t99-chart/src/theme.rs
// Summary: Color palette shared by the stat charts.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: skia::Color,
    /// Tick labels, axis titles, gridlines and frame.
    pub axis: skia::Color,
    /// Placement line and placement bars.
    pub place: skia::Color,
    /// Knockout line.
    pub ko: skia::Color,
    /// Drop shadow under the placement line.
    pub shadow: skia::Color,
    /// Point annotations.
    pub annotation: skia::Color,
}

impl Palette {
    /// Navy scheme used for published stat cards.
    pub fn navy() -> Self {
        Self {
            background: skia::Color::from_rgb(0x0c, 0x23, 0x59),
            axis: skia::Color::from_rgb(0x5c, 0x73, 0xa9),
            place: skia::Color::from_rgb(0x56, 0xab, 0xfb),
            ko: skia::Color::from_rgb(0xd6, 0x27, 0x28), // tab:red
            shadow: skia::Color::BLACK,
            annotation: skia::Color::WHITE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::navy()
    }
}
