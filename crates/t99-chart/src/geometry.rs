// File: crates/t99-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and content cropping.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Grow by `pad` on every side, then clip to `[0, w) x [0, h)`.
    pub fn padded_within(&self, pad: i32, w: i32, h: i32) -> Self {
        Self {
            left: clamp(self.left - pad, 0, w),
            top: clamp(self.top - pad, 0, h),
            right: clamp(self.right + pad, 0, w),
            bottom: clamp(self.bottom + pad, 0, h),
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Smallest rectangle (right/bottom exclusive) holding every RGBA pixel whose
/// color differs from `background`. `None` when the buffer is uniform.
pub fn content_bounds(rgba: &[u8], width: u32, height: u32, background: [u8; 4]) -> Option<RectI32> {
    let (w, h) = (width as usize, height as usize);
    if rgba.len() < w * h * 4 {
        return None;
    }
    let mut bounds: Option<RectI32> = None;
    for y in 0..h {
        let row = &rgba[y * w * 4..(y + 1) * w * 4];
        let first = row.chunks_exact(4).position(|px| px != background);
        let Some(first) = first else { continue };
        let last = row.chunks_exact(4).rposition(|px| px != background).unwrap_or(first);
        let (x0, x1, yy) = (first as i32, last as i32 + 1, y as i32);
        bounds = Some(match bounds {
            None => RectI32::from_ltrb(x0, yy, x1, yy + 1),
            Some(b) => RectI32::from_ltrb(b.left.min(x0), b.top, b.right.max(x1), yy + 1),
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32, bg: [u8; 4]) -> Vec<u8> {
        bg.iter().copied().cycle().take((w * h * 4) as usize).collect()
    }

    fn set(buf: &mut [u8], w: u32, x: u32, y: u32, px: [u8; 4]) {
        let i = ((y * w + x) * 4) as usize;
        buf[i..i + 4].copy_from_slice(&px);
    }

    #[test]
    fn bounds_enclose_all_foreground_pixels() {
        let bg = [12, 35, 89, 255];
        let mut buf = canvas(10, 8, bg);
        set(&mut buf, 10, 2, 3, [255, 255, 255, 255]);
        set(&mut buf, 10, 7, 5, [0, 0, 0, 255]);
        let b = content_bounds(&buf, 10, 8, bg).expect("content present");
        assert_eq!(b, RectI32::from_ltrb(2, 3, 8, 6));
        assert_eq!((b.width(), b.height()), (6, 3));
    }

    #[test]
    fn uniform_buffer_has_no_bounds() {
        let bg = [0, 0, 0, 255];
        assert_eq!(content_bounds(&canvas(4, 4, bg), 4, 4, bg), None);
    }

    #[test]
    fn padding_is_clipped_to_canvas() {
        let r = RectI32::from_ltrb(1, 1, 4, 4).padded_within(5, 6, 6);
        assert_eq!(r, RectI32::from_ltrb(0, 0, 6, 6));
    }
}
