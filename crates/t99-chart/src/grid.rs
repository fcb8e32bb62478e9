// File: crates/t99-chart/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Whole-number tick positions covering `[min, max]` using a 1/2/5 x 10^k step,
/// choosing the smallest step that yields at most `max_ticks` ticks.
pub fn integer_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let max_ticks = max_ticks.max(2);
    let span = (max - min).max(1.0);

    let mut magnitude = 1.0f64;
    let step = loop {
        let found = [1.0, 2.0, 5.0]
            .iter()
            .map(|m| m * magnitude)
            .find(|step| ((span / step).floor() as usize) < max_ticks);
        if let Some(step) = found {
            break step;
        }
        magnitude *= 10.0;
    };

    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut v = first;
    while v <= max + 1e-9 {
        ticks.push(v);
        v += step;
    }
    ticks
}
