// File: crates/t99-chart/src/axis.rs
// Summary: Axis model with labels, ranges, placement, tick layout and colors.

use skia_safe as skia;

use crate::grid::{integer_ticks, linspace};

/// Edge of the plot area an axis is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Top,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }
}

/// How tick positions are chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum TickSpec {
    /// Evenly spaced ticks; `integer` restricts them to whole numbers.
    Auto { integer: bool },
    /// Exactly these ticks, in order.
    Fixed(Vec<Tick>),
}

/// Upper bound on automatically generated ticks.
const MAX_AUTO_TICKS: usize = 12;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// When set, `min` is drawn at the top (Y) or right (X) edge.
    pub inverted: bool,
    pub side: AxisSide,
    pub ticks: TickSpec,
    /// Tick values that are laid out but not drawn.
    pub hidden_ticks: Vec<f64>,
    /// Full-width reference lines at each tick, in this color.
    pub grid_color: Option<skia::Color>,
    pub label_color: skia::Color,
    /// Tick marks are skipped when `None`.
    pub tick_color: Option<skia::Color>,
    /// Tick labels are skipped when `None`.
    pub tick_label_color: Option<skia::Color>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        let fg = skia::Color::from_argb(255, 180, 180, 190);
        Self {
            label: label.into(),
            min,
            max,
            inverted: false,
            side: AxisSide::Bottom,
            ticks: TickSpec::Auto { integer: false },
            hidden_ticks: Vec::new(),
            grid_color: None,
            label_color: fg,
            tick_color: Some(fg),
            tick_label_color: Some(fg),
        }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0).on(AxisSide::Left)
    }

    pub fn on(mut self, side: AxisSide) -> Self {
        self.side = side;
        self
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn integer_ticks(mut self) -> Self {
        self.ticks = TickSpec::Auto { integer: true };
        self
    }

    /// Fixed ticks labelled with their integer value.
    pub fn fixed_ticks(mut self, values: &[f64]) -> Self {
        self.ticks = TickSpec::Fixed(values.iter().map(|&v| Tick::new(v, format_tick(v))).collect());
        self
    }

    pub fn hide_tick(mut self, value: f64) -> Self {
        self.hidden_ticks.push(value);
        self
    }

    pub fn with_gridlines(mut self, color: skia::Color) -> Self {
        self.grid_color = Some(color);
        self
    }

    pub fn label_color(mut self, color: skia::Color) -> Self {
        self.label_color = color;
        self
    }

    pub fn tick_color(mut self, color: Option<skia::Color>) -> Self {
        self.tick_color = color;
        self
    }

    pub fn tick_label_color(mut self, color: Option<skia::Color>) -> Self {
        self.tick_label_color = color;
        self
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self.side, AxisSide::Left | AxisSide::Right)
    }

    /// Ticks that should be drawn: inside `[min, max]` and not hidden.
    pub fn visible_ticks(&self) -> Vec<Tick> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        let all = match &self.ticks {
            TickSpec::Fixed(ticks) => ticks.clone(),
            TickSpec::Auto { integer: true } => integer_ticks(lo, hi, MAX_AUTO_TICKS)
                .into_iter()
                .map(|v| Tick::new(v, format_tick(v)))
                .collect(),
            TickSpec::Auto { integer: false } => linspace(lo, hi, 6)
                .into_iter()
                .map(|v| Tick::new(v, format_tick(v)))
                .collect(),
        };
        all.into_iter()
            .filter(|t| t.value >= lo - 1e-9 && t.value <= hi + 1e-9)
            .filter(|t| !self.hidden_ticks.iter().any(|h| (h - t.value).abs() < 1e-9))
            .collect()
    }
}

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_tick_is_dropped() {
        let axis = Axis::new("Game", 0.0, 4.0).integer_ticks().hide_tick(0.0);
        let values: Vec<f64> = axis.visible_ticks().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn fixed_ticks_keep_labels() {
        let axis = Axis::new("Place", 1.0, 99.0).fixed_ticks(&[1.0, 21.0, 99.0]);
        let labels: Vec<String> = axis.visible_ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["1", "21", "99"]);
    }

    #[test]
    fn out_of_range_ticks_are_skipped() {
        let axis = Axis::new("Y", 0.0, 10.0).fixed_ticks(&[-1.0, 5.0, 11.0]);
        assert_eq!(axis.visible_ticks().len(), 1);
    }

    #[test]
    fn auto_ticks_span_range() {
        let axis = Axis::new("Y", 0.0, 1.0);
        let ticks = axis.visible_ticks();
        assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("1"));
    }
}
