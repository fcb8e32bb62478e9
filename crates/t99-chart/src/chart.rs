// File: crates/t99-chart/src/chart.rs
// Summary: Chart description and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use image::RgbaImage;
use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, AxisSide};
use crate::error::RenderError;
use crate::geometry::content_bounds;
use crate::scale::LinearScale;
use crate::series::{Series, SeriesType, YAxisRef};
use crate::text::{HAlign, TextShaper};
use crate::types::{FigureSize, Insets};

/// Tick mark length and the gap between tick and label, in points.
const TICK_LEN_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;

pub struct RenderOptions {
    pub figure: FigureSize,
    pub insets: Insets,
    pub background: skia::Color,
    /// Size of tick labels, axis titles and annotations, in points.
    pub font_pt: f32,
    pub draw_labels: bool,
    /// Trim background-colored borders, keeping `crop_pad_in` of margin.
    pub tight_crop: bool,
    pub crop_pad_in: f32,
}

impl RenderOptions {
    pub fn for_figure(figure: FigureSize, background: skia::Color) -> Self {
        Self {
            figure,
            insets: figure.default_insets(),
            background,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        let figure = FigureSize::default();
        Self {
            figure,
            insets: figure.default_insets(),
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            font_pt: 10.0,
            draw_labels: true,
            tight_crop: true,
            crop_pad_in: 0.1,
        }
    }
}

/// Declarative description of one figure: axes, series and frame.
/// Nothing is drawn until one of the `render_*` methods is called.
#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Independent right-hand Y axis for series marked `YAxisRef::Secondary`.
    pub y2_axis: Option<Axis>,
    /// Frame around the plot area; no frame when `None`.
    pub spine_color: Option<skia::Color>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: None,
            spine_color: None,
        }
    }

    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = axis;
        self
    }

    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = axis;
        self
    }

    pub fn with_secondary_y_axis(mut self, axis: Axis) -> Self {
        self.y2_axis = Some(axis);
        self
    }

    pub fn with_spines(mut self, color: skia::Color) -> Self {
        self.spine_color = Some(color);
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Render and return `(pixels, width, height, stride)` in RGBA8 order.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let img = self.rasterize(opts)?;
        let (w, h) = img.dimensions();
        Ok((img.into_raw(), w, h, w as usize * 4))
    }

    /// Render to an in-memory PNG tagged with the figure's DPI.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let img = self.rasterize(opts)?;
        Ok(encode_png(&img, opts.figure.dpi)?)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data)?;
        debug!(path = %path.display(), bytes = data.len(), "wrote chart");
        Ok(())
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<RgbaImage, RenderError> {
        let (w, h) = (opts.figure.width_px(), opts.figure.height_px());
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;

        self.paint(surface.canvas(), opts);

        // Read back as straight RGBA so the buffer can go to the PNG encoder as-is
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        let img = RgbaImage::from_raw(w as u32, h as u32, pixels)
            .ok_or(RenderError::Buffer { width: w as u32, height: h as u32 })?;

        Ok(if opts.tight_crop { crop_to_content(img, opts) } else { img })
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.background);

        let fig = &opts.figure;
        let plot = PlotRect {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (fig.width_px() - opts.insets.right as i32) as f32,
            b: (fig.height_px() - opts.insets.bottom as i32) as f32,
        };

        let xs = plot.scale_for(&self.x_axis);
        let ys = plot.scale_for(&self.y_axis);
        let y2s = self.y2_axis.as_ref().map(|a| plot.scale_for(a));

        // Grid & frame
        draw_gridlines(canvas, fig, &plot, &self.x_axis, &xs);
        draw_gridlines(canvas, fig, &plot, &self.y_axis, &ys);
        if let (Some(axis), Some(scale)) = (self.y2_axis.as_ref(), y2s.as_ref()) {
            draw_gridlines(canvas, fig, &plot, axis, scale);
        }
        if let Some(color) = self.spine_color {
            draw_spines(canvas, fig, &plot, color);
        }

        // Series
        for s in &self.series {
            let sy = match s.y_axis {
                YAxisRef::Secondary => y2s.as_ref().unwrap_or(&ys),
                YAxisRef::Primary => &ys,
            };
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, fig, &xs, sy, s),
                SeriesType::Bar => draw_bar_series(canvas, &xs, sy, s),
            }
        }

        let shaper = opts.draw_labels.then(TextShaper::new);
        let font_px = fig.pt_to_px(opts.font_pt);

        // Annotations sit on top of every series
        if let Some(shaper) = shaper.as_ref() {
            for s in &self.series {
                let sy = match s.y_axis {
                    YAxisRef::Secondary => y2s.as_ref().unwrap_or(&ys),
                    YAxisRef::Primary => &ys,
                };
                for a in &s.annotations {
                    let x = xs.to_px(a.x);
                    let y = sy.to_px(a.y) - fig.pt_to_px(a.offset_pt);
                    shaper.draw(canvas, &a.text, x, y, font_px, s.annotation_color, HAlign::Center);
                }
            }
        }

        // Axes
        let ctx = AxisContext { canvas, fig, plot: &plot, shaper: shaper.as_ref(), font_px };
        draw_axis(&ctx, &self.x_axis, &xs);
        draw_axis(&ctx, &self.y_axis, &ys);
        if let (Some(axis), Some(scale)) = (self.y2_axis.as_ref(), y2s.as_ref()) {
            draw_axis(&ctx, axis, scale);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotRect {
    fn scale_for(&self, axis: &Axis) -> LinearScale {
        let (from, to) = match (axis.is_vertical(), axis.inverted) {
            (false, false) => (self.l, self.r),
            (false, true) => (self.r, self.l),
            (true, false) => (self.b, self.t),
            (true, true) => (self.t, self.b),
        };
        LinearScale::new(axis.min, axis.max, from, to)
    }
}

struct AxisContext<'a> {
    canvas: &'a skia::Canvas,
    fig: &'a FigureSize,
    plot: &'a PlotRect,
    shaper: Option<&'a TextShaper>,
    font_px: f32,
}

fn stroke_paint(color: skia::Color, width_px: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width_px);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_gridlines(canvas: &skia::Canvas, fig: &FigureSize, plot: &PlotRect, axis: &Axis, scale: &LinearScale) {
    let Some(color) = axis.grid_color else { return };
    let paint = stroke_paint(color, fig.pt_to_px(1.5));
    for tick in axis.visible_ticks() {
        let p = scale.to_px(tick.value);
        if axis.is_vertical() {
            canvas.draw_line((plot.l, p), (plot.r, p), &paint);
        } else {
            canvas.draw_line((p, plot.t), (p, plot.b), &paint);
        }
    }
}

fn draw_spines(canvas: &skia::Canvas, fig: &FigureSize, plot: &PlotRect, color: skia::Color) {
    let paint = stroke_paint(color, fig.pt_to_px(0.8));
    let rect = skia::Rect::from_ltrb(plot.l, plot.t, plot.r, plot.b);
    canvas.draw_rect(rect, &paint);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    fig: &FigureSize,
    xs: &LinearScale,
    ys: &LinearScale,
    series: &Series,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        let mut builder = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        builder.move_to((xs.to_px(x0), ys.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            builder.line_to((xs.to_px(x), ys.to_px(y)));
        }
        let path = builder.detach();

        let mut stroke = stroke_paint(series.color, fig.pt_to_px(series.stroke_width_pt));
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        canvas.draw_path(&path, &stroke);
    }

    if let Some(marker_pt) = series.marker_pt {
        let half = fig.pt_to_px(marker_pt) * 0.5;
        let fill = fill_paint(series.color);
        for &(x, y) in data {
            let (px, py) = (xs.to_px(x), ys.to_px(y));
            canvas.draw_rect(skia::Rect::from_ltrb(px - half, py - half, px + half, py + half), &fill);
        }
    }
}

/// pHYs stores density per meter.
fn dpi_to_ppm(dpi: f32) -> u32 {
    (dpi as f64 / 0.0254).round() as u32
}

fn encode_png(img: &RgbaImage, dpi: f32) -> Result<Vec<u8>, RenderError> {
    let (w, h) = img.dimensions();
    let ppm = dpi_to_ppm(dpi);
    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, w, h);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions { xppu: ppm, yppu: ppm, unit: png::Unit::Meter }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.as_raw())?;
    writer.finish()?;
    Ok(bytes)
}

fn draw_bar_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series) {
    let fill = fill_paint(series.color);
    let half = series.bar_width * 0.5;
    let base = ys.to_px(0.0);
    for &(x, y) in &series.data_xy {
        let (x0, x1) = (xs.to_px(x - half), xs.to_px(x + half));
        let top = ys.to_px(y);
        let rect = skia::Rect::from_ltrb(x0.min(x1), top.min(base), x0.max(x1), top.max(base));
        canvas.draw_rect(rect, &fill);
    }
}

fn draw_axis(ctx: &AxisContext<'_>, axis: &Axis, scale: &LinearScale) {
    let AxisContext { canvas, fig, plot, shaper, font_px } = *ctx;
    let tick_len = fig.pt_to_px(TICK_LEN_PT);
    let pad = fig.pt_to_px(TICK_PAD_PT);
    let ticks = axis.visible_ticks();

    if let Some(color) = axis.tick_color {
        let paint = stroke_paint(color, fig.pt_to_px(0.8));
        for tick in &ticks {
            let p = scale.to_px(tick.value);
            let (from, to) = match axis.side {
                AxisSide::Bottom => ((p, plot.b), (p, plot.b + tick_len)),
                AxisSide::Top => ((p, plot.t), (p, plot.t - tick_len)),
                AxisSide::Left => ((plot.l, p), (plot.l - tick_len, p)),
                AxisSide::Right => ((plot.r, p), (plot.r + tick_len, p)),
            };
            canvas.draw_line(from, to, &paint);
        }
    }

    let Some(shaper) = shaper else { return };

    let mut label_extent = 0.0f32;
    if let Some(color) = axis.tick_label_color {
        for tick in &ticks {
            let p = scale.to_px(tick.value);
            match axis.side {
                AxisSide::Bottom => shaper.draw(canvas, &tick.label, p, plot.b + tick_len + pad + font_px * 0.8, font_px, color, HAlign::Center),
                AxisSide::Top => shaper.draw(canvas, &tick.label, p, plot.t - tick_len - pad - font_px * 0.2, font_px, color, HAlign::Center),
                AxisSide::Left => shaper.draw(canvas, &tick.label, plot.l - tick_len - pad, p + font_px * 0.35, font_px, color, HAlign::Right),
                AxisSide::Right => shaper.draw(canvas, &tick.label, plot.r + tick_len + pad, p + font_px * 0.35, font_px, color, HAlign::Left),
            }
        }
        label_extent = if axis.is_vertical() {
            ticks.iter().map(|t| shaper.measure_width(&t.label, font_px)).fold(0.0, f32::max)
        } else if ticks.is_empty() {
            0.0
        } else {
            font_px
        };
    }

    if axis.label.is_empty() {
        return;
    }
    let offset = tick_len + pad + label_extent + pad;
    let (mid_x, mid_y) = ((plot.l + plot.r) * 0.5, (plot.t + plot.b) * 0.5);
    match axis.side {
        AxisSide::Bottom => shaper.draw(canvas, &axis.label, mid_x, plot.b + offset + font_px * 0.8, font_px, axis.label_color, HAlign::Center),
        AxisSide::Top => shaper.draw(canvas, &axis.label, mid_x, plot.t - offset - font_px * 0.2, font_px, axis.label_color, HAlign::Center),
        AxisSide::Left => shaper.draw_vertical(canvas, &axis.label, plot.l - offset - font_px * 0.5, mid_y, font_px, axis.label_color),
        AxisSide::Right => shaper.draw_vertical(canvas, &axis.label, plot.r + offset + font_px * 0.5, mid_y, font_px, axis.label_color),
    }
}

fn crop_to_content(img: RgbaImage, opts: &RenderOptions) -> RgbaImage {
    let bg = opts.background;
    let background = [bg.r(), bg.g(), bg.b(), 255];
    let (w, h) = img.dimensions();
    let Some(bounds) = content_bounds(img.as_raw(), w, h, background) else {
        return img;
    };
    let pad = (opts.crop_pad_in * opts.figure.dpi).round() as i32;
    let r = bounds.padded_within(pad, w as i32, h as i32);
    image::imageops::crop_imm(&img, r.left as u32, r.top as u32, r.width() as u32, r.height() as u32).to_image()
}
