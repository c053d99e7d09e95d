//! Pure layout math for the SVG charts.
//!
//! Everything here works in SVG user units with the origin at the top-left,
//! so larger values map to smaller `y`.

/// Drawable area of a chart inside its view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Frame {
    /// Frame with room for a y-axis on the left and x labels underneath.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pad_left: 44.0,
            pad_right: 16.0,
            pad_top: 12.0,
            pad_bottom: 28.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.pad_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.pad_right
    }

    pub fn top(&self) -> f64 {
        self.pad_top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }

    /// Vertical position of `value` on an axis running from 0 to `max`.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.bottom() - ratio * self.plot_height()
    }
}

/// Largest value in the series, or 0 for an empty series.
pub fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Evenly spaced "nice" tick values from 0 up to at least `max`.
///
/// Steps are 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn axis_ticks(max: f64, count: usize) -> Vec<f64> {
    if max <= 0.0 || count == 0 {
        return vec![0.0];
    }
    let raw = max / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 2.5 {
        2.5
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    let steps = (max / step).ceil() as usize;
    (0..=steps).map(|i| i as f64 * step).collect()
}

/// Vertex positions for a line series, spread across the full plot width.
pub fn line_points(values: &[f64], frame: &Frame, max: f64) -> Vec<(f64, f64)> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![(
            frame.left() + frame.plot_width() / 2.0,
            frame.y_for(values[0], max),
        )],
        n => {
            let step = frame.plot_width() / (n - 1) as f64;
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (frame.left() + i as f64 * step, frame.y_for(*v, max)))
                .collect()
        }
    }
}

/// Format vertices for an SVG `points` attribute.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A bar's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fraction of each category band left empty around its bar.
const BAR_GAP: f64 = 0.2;

/// One bar per value, each centered in an equal-width category band.
pub fn bar_rects(values: &[f64], frame: &Frame, max: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let band = frame.plot_width() / values.len() as f64;
    let width = band * (1.0 - BAR_GAP);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = frame.y_for(*v, max);
            BarRect {
                x: frame.left() + i as f64 * band + band * BAR_GAP / 2.0,
                y,
                width,
                height: frame.bottom() - y,
            }
        })
        .collect()
}

/// Horizontal center of each category band.
pub fn band_centers(count: usize, frame: &Frame) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let band = frame.plot_width() / count as f64;
    (0..count)
        .map(|i| frame.left() + (i as f64 + 0.5) * band)
        .collect()
}

/// One slice of a donut: its angular extent and the SVG path that draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutArc {
    /// Degrees clockwise from 12 o'clock.
    pub start_deg: f64,
    pub end_deg: f64,
    pub path: String,
}

impl DonutArc {
    pub fn sweep(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    // 0 degrees points up; SVG angles start at 3 o'clock.
    let rad = (deg - 90.0).to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Path for a ring segment between `inner` and `outer` radii.
pub fn annular_sector(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let (ox1, oy1) = polar(cx, cy, outer, start);
    let (ox2, oy2) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, start);
    let (ix2, iy2) = polar(cx, cy, inner, end);
    let large = if end - start > 180.0 { 1 } else { 0 };
    format!(
        "M {ox1:.2} {oy1:.2} A {outer} {outer} 0 {large} 1 {ox2:.2} {oy2:.2} \
         L {ix2:.2} {iy2:.2} A {inner} {inner} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
    )
}

/// Largest sweep a single arc may take; a full circle has coincident endpoints.
const MAX_SWEEP: f64 = 359.99;

/// Lay out donut slices proportionally to `values`, separated by
/// `padding_deg` of empty ring after each slice.
pub fn donut_arcs(
    values: &[f64],
    center: (f64, f64),
    inner: f64,
    outer: f64,
    padding_deg: f64,
) -> Vec<DonutArc> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let available = (360.0 - padding_deg * values.len() as f64).max(0.0);
    let mut cursor = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = (v.max(0.0) / total * available).min(MAX_SWEEP);
            let start = cursor;
            let end = start + sweep;
            cursor = end + padding_deg;
            DonutArc {
                start_deg: start,
                end_deg: end,
                path: annular_sector(center.0, center.1, inner, outer, start, end),
            }
        })
        .collect()
}
