// File: crates/t99-chart/src/series.rs
// Summary: Series model for line and bar data, with markers and per-point annotations.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar, // (x, y) bars rising from the baseline (0.0)
}

/// Which Y axis a series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YAxisRef {
    Primary,
    Secondary,
}

/// Text pinned to a data point.
/// `offset_pt` moves the text baseline vertically on screen; positive is up.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub offset_pt: f32,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub color: skia::Color,
    pub stroke_width_pt: f32,
    /// Side length of a square marker at each point, in points.
    pub marker_pt: Option<f32>,
    /// Bar width in data units.
    pub bar_width: f64,
    pub y_axis: YAxisRef,
    pub annotations: Vec<Annotation>,
    pub annotation_color: skia::Color,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            color: skia::Color::from_argb(255, 64, 160, 255),
            stroke_width_pt: 1.5,
            marker_pt: None,
            bar_width: 0.5,
            y_axis: YAxisRef::Primary,
            annotations: Vec::new(),
            annotation_color: skia::Color::WHITE,
        }
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Line, data)
    }

    pub fn bars(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Bar, data)
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn stroke_width(mut self, pt: f32) -> Self {
        self.stroke_width_pt = pt;
        self
    }

    pub fn square_markers(mut self, size_pt: f32) -> Self {
        self.marker_pt = Some(size_pt);
        self
    }

    pub fn bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.y_axis = YAxisRef::Secondary;
        self
    }

    pub fn annotate(mut self, x: f64, y: f64, text: impl Into<String>, offset_pt: f32) -> Self {
        self.annotations.push(Annotation { x, y, text: text.into(), offset_pt });
        self
    }

    pub fn annotation_color(mut self, color: skia::Color) -> Self {
        self.annotation_color = color;
        self
    }
}
