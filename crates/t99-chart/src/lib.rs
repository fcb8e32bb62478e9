// File: crates/t99-chart/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::{Annotation, Series, SeriesType, YAxisRef};
pub use axis::{Axis, AxisSide, Tick, TickSpec};
pub use types::{FigureSize, Insets};
pub use theme::Palette;
pub use text::TextShaper;
pub use error::RenderError;

/// Re-exported so callers can name colors without depending on Skia directly.
pub use skia_safe::Color;
