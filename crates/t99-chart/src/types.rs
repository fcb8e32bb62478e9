// File: crates/t99-chart/src/types.rs
// Summary: Shared types and constants (figure geometry, paddings, point/pixel conversion).

/// Points per inch, the unit used for stroke widths, marker sizes and text offsets.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f32 = 15.0;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f32 = 5.0;
/// Default output resolution.
pub const DPI: f32 = 125.0;

/// Physical figure size plus resolution; pixel dimensions derive from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self { width_in, height_in, dpi }
    }

    /// Canvas width in whole pixels (at least 1).
    pub fn width_px(&self) -> i32 {
        ((self.width_in * self.dpi).round() as i32).max(1)
    }

    /// Canvas height in whole pixels (at least 1).
    pub fn height_px(&self) -> i32 {
        ((self.height_in * self.dpi).round() as i32).max(1)
    }

    /// Convert a length in points to pixels at this figure's resolution.
    #[inline]
    pub fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.dpi / POINTS_PER_INCH
    }

    /// Insets that reproduce the customary subplot margins
    /// (12.5% left, 10% right, 12% top, 11% bottom).
    pub fn default_insets(&self) -> Insets {
        let w = self.width_px() as f32;
        let h = self.height_px() as f32;
        Insets::new(
            (w * 0.125).round() as u32,
            (w * 0.10).round() as u32,
            (h * 0.12).round() as u32,
            (h * 0.11).round() as u32,
        )
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(FIG_WIDTH_IN, FIG_HEIGHT_IN, DPI)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        FigureSize::default().default_insets()
    }
}
