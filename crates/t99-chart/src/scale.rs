// File: crates/t99-chart/src/scale.rs
// Summary: Linear data-to-pixel transform shared by the X and Y axes.

/// Maps the data interval `[vmin, vmax]` onto the pixel interval `[px_from, px_to]`.
///
/// The pixel interval may run in either direction: a Y axis maps `vmin` to the
/// bottom edge (`px_from > px_to`), an inverted Y axis maps it to the top edge.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_from: f32,
    pub px_to: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_from: f32, px_to: f32) -> Self {
        let mut s = Self { vmin, vmax, px_from, px_to };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = ((v - self.vmin) / (self.vmax - self.vmin)) as f32;
        self.px_from + t * (self.px_to - self.px_from)
    }
}
