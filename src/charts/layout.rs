//! Chart geometry.
//!
//! Pure functions from a chart configuration and a surface size to plot
//! coordinates. Everything here is relative to the surface's top-left corner
//! so a renderer can translate it to wherever the surface ended up.

use super::{ChartConfig, LegendPosition, Surface};

/// Height of a legend swatch row, excluding padding.
const LEGEND_ROW: f32 = 12.0;
/// Space below the plot for category labels.
const X_AXIS_HEIGHT: f32 = 24.0;
/// Rough width of one tick-label glyph at the axis font size.
const APPROX_CHAR_WIDTH: f32 = 7.0;
const AXIS_GAP: f32 = 8.0;
const RIGHT_PADDING: f32 = 12.0;
/// Preferred vertical distance between y ticks.
const TICK_SPACING: f32 = 50.0;
/// Share of a category band a bar occupies (category 0.8 x bar 0.9).
const BAR_FRACTION: f32 = 0.72;

/// Rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// One labelled y-axis gridline.
#[derive(Debug, Clone, PartialEq)]
pub struct YTick {
    pub value: f64,
    pub label: String,
    pub y: f32,
}

/// Geometry of a chart on a particular surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub surface: Surface,
    pub plot: PlotArea,
    pub y_max: f64,
    pub y_ticks: Vec<YTick>,
    category_count: usize,
    offset: bool,
}

impl ChartLayout {
    /// Lays out axes and plot area for `config` on `surface`.
    pub fn compute(config: &ChartConfig, surface: Surface) -> Self {
        let legend_space = config.legend.padding + LEGEND_ROW;
        let (top, bottom_reserved) = match config.legend.position {
            LegendPosition::Top => (legend_space, X_AXIS_HEIGHT),
            LegendPosition::Bottom => (AXIS_GAP, X_AXIS_HEIGHT + legend_space),
        };
        let plot_height = (surface.height - top - bottom_reserved).max(0.0);

        let target_ticks = ((plot_height / TICK_SPACING).floor() as usize).max(2);
        let data_max = match config.max_value() {
            m if m > 0.0 => m,
            _ => 1.0,
        };
        let step = nice_step(data_max / target_ticks as f64);
        let y_max = (data_max / step).ceil() * step;
        let tick_count = (y_max / step).round() as usize;

        let labels: Vec<(f64, String)> = (0..=tick_count)
            .map(|i| {
                let value = i as f64 * step;
                (value, config.tick_format.format(value))
            })
            .collect();
        let widest = labels
            .iter()
            .map(|(_, label)| label.chars().count())
            .max()
            .unwrap_or(0);
        let left = widest as f32 * APPROX_CHAR_WIDTH + AXIS_GAP;

        let plot = PlotArea {
            left,
            top,
            right: (surface.width - RIGHT_PADDING).max(left),
            bottom: top + plot_height,
        };

        let mut layout = Self {
            surface,
            plot,
            y_max,
            y_ticks: Vec::with_capacity(labels.len()),
            category_count: config.values.len(),
            offset: config.kind.offset_categories(),
        };
        layout.y_ticks = labels
            .into_iter()
            .map(|(value, label)| YTick {
                y: layout.value_y(value),
                value,
                label,
            })
            .collect();
        layout
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// Vertical position of a value.
    pub fn value_y(&self, value: f64) -> f32 {
        if self.y_max <= 0.0 {
            return self.plot.bottom;
        }
        let ratio = (value / self.y_max).clamp(0.0, 1.0) as f32;
        self.plot.bottom - ratio * self.plot.height()
    }

    /// Horizontal position of a category.
    pub fn category_x(&self, index: usize) -> f32 {
        let n = self.category_count;
        let width = self.plot.width();
        if n == 0 {
            return self.plot.left;
        }
        if self.offset {
            self.plot.left + (index as f32 + 0.5) * width / n as f32
        } else if n == 1 {
            self.plot.left + width / 2.0
        } else {
            self.plot.left + index as f32 * width / (n - 1) as f32
        }
    }

    /// Category nearest to a pointer position, by x only.
    ///
    /// The pointer need not touch a point or bar, only the plot area.
    pub fn nearest_index(&self, x: f32, y: f32) -> Option<usize> {
        let n = self.category_count;
        if n == 0 || !self.plot.contains(x, y) {
            return None;
        }
        let width = self.plot.width();
        if width <= 0.0 || n == 1 {
            return Some(0);
        }
        let rel = x - self.plot.left;
        let index = if self.offset {
            (rel / (width / n as f32)).floor()
        } else {
            (rel / (width / (n - 1) as f32)).round()
        };
        Some((index.max(0.0) as usize).min(n - 1))
    }

    /// Bar rectangle for a category value.
    pub fn bar_rect(&self, index: usize, value: f64) -> PlotArea {
        let n = self.category_count.max(1);
        let bar_width = self.plot.width() / n as f32 * BAR_FRACTION;
        let center = self.category_x(index);
        PlotArea {
            left: center - bar_width / 2.0,
            top: self.value_y(value),
            right: center + bar_width / 2.0,
            bottom: self.plot.bottom,
        }
    }
}

/// Smallest 1, 2 or 5 times a power of ten that is at least `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Samples a smooth curve through `points`.
///
/// Control points follow the monotone-distance spline used by common web
/// charting libraries; `tension` 0 returns the input unchanged. Control
/// points are clamped to `y_bounds` so the curve never leaves the plot.
pub fn smooth_path(
    points: &[(f32, f32)],
    tension: f32,
    segments: usize,
    y_bounds: (f32, f32),
) -> Vec<(f32, f32)> {
    let n = points.len();
    if n < 3 || tension <= 0.0 || segments == 0 {
        return points.to_vec();
    }

    let clamp_y = |(x, y): (f32, f32)| (x, y.clamp(y_bounds.0, y_bounds.1));
    let dist = |a: (f32, f32), b: (f32, f32)| ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();

    let controls: Vec<((f32, f32), (f32, f32))> = (0..n)
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let cur = points[i];
            let next = points[(i + 1).min(n - 1)];

            let d01 = dist(prev, cur);
            let d12 = dist(cur, next);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
            let fa = tension * s01;
            let fb = tension * s12;
            let dx = next.0 - prev.0;
            let dy = next.1 - prev.1;

            (
                clamp_y((cur.0 - fa * dx, cur.1 - fa * dy)),
                clamp_y((cur.0 + fb * dx, cur.1 + fb * dy)),
            )
        })
        .collect();

    let mut out = Vec::with_capacity(1 + (n - 1) * segments);
    out.push(points[0]);
    for i in 0..n - 1 {
        let p0 = points[i];
        let c1 = controls[i].1;
        let c2 = controls[i + 1].0;
        let p3 = points[i + 1];
        for k in 1..=segments {
            let t = k as f32 / segments as f32;
            let u = 1.0 - t;
            let a = u * u * u;
            let b = 3.0 * u * u * t;
            let c = 3.0 * u * t * t;
            let d = t * t * t;
            out.push((
                a * p0.0 + b * c1.0 + c * c2.0 + d * p3.0,
                a * p0.1 + b * c1.1 + c * c2.1 + d * p3.1,
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::ContentCatalogue;
    use crate::charts::ChartConfig;

    fn revenue_layout(width: f32, height: f32) -> ChartLayout {
        let config = ChartConfig::revenue(&ContentCatalogue::builtin());
        ChartLayout::compute(&config, Surface::new(width, height))
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(12_000.0), 20_000.0);
        assert_eq!(nice_step(300.0), 500.0);
        assert_eq!(nice_step(100.0), 100.0);
    }

    #[test]
    fn test_ticks_cover_data() {
        let layout = revenue_layout(600.0, 300.0);
        assert!(layout.y_max >= 67_000.0);
        assert_eq!(layout.y_ticks.first().map(|t| t.value), Some(0.0));
        assert_eq!(layout.y_ticks.first().map(|t| t.label.as_str()), Some("$0k"));
        assert_eq!(layout.y_ticks.last().map(|t| t.value), Some(layout.y_max));
        assert!(layout.plot.top > 0.0, "legend space reserved at top");
    }

    #[test]
    fn test_value_y_maps_range() {
        let layout = revenue_layout(600.0, 300.0);
        assert_eq!(layout.value_y(0.0), layout.plot.bottom);
        assert_eq!(layout.value_y(layout.y_max), layout.plot.top);
    }

    #[test]
    fn test_line_categories_span_edges() {
        let layout = revenue_layout(600.0, 300.0);
        assert_eq!(layout.category_x(0), layout.plot.left);
        assert!((layout.category_x(5) - layout.plot.right).abs() < 0.01);
    }

    #[test]
    fn test_bar_categories_are_centered() {
        let config = ChartConfig::user_growth(&ContentCatalogue::builtin());
        let layout = ChartLayout::compute(&config, Surface::new(600.0, 300.0));
        let band = layout.plot.width() / 6.0;
        assert!((layout.category_x(0) - (layout.plot.left + band / 2.0)).abs() < 0.01);

        let bar = layout.bar_rect(5, 1543.0);
        assert!(bar.width() < band);
        assert_eq!(bar.bottom, layout.plot.bottom);
        assert!(bar.top < bar.bottom);
    }

    #[test]
    fn test_nearest_index_without_intersection() {
        let layout = revenue_layout(600.0, 300.0);
        let y = (layout.plot.top + layout.plot.bottom) / 2.0;

        assert_eq!(layout.nearest_index(layout.plot.left, y), Some(0));
        assert_eq!(layout.nearest_index(layout.category_x(2) + 3.0, y), Some(2));
        assert_eq!(layout.nearest_index(layout.plot.right, y), Some(5));
        assert_eq!(layout.nearest_index(layout.plot.left - 1.0, y), None);
        assert_eq!(layout.nearest_index(layout.plot.left + 5.0, layout.plot.bottom + 1.0), None);
    }

    #[test]
    fn test_zero_surface_degenerates_safely() {
        let layout = revenue_layout(0.0, 0.0);
        assert_eq!(layout.plot.height(), 0.0);
        assert!(layout.plot.width() >= 0.0);
        assert_eq!(layout.nearest_index(0.0, 0.0), None);
    }

    #[test]
    fn test_smooth_path_keeps_endpoints() {
        let points = [(0.0, 10.0), (10.0, 0.0), (20.0, 10.0), (30.0, 5.0)];
        let path = smooth_path(&points, 0.4, 8, (0.0, 10.0));
        assert_eq!(path.len(), 1 + 3 * 8);
        assert_eq!(path[0], points[0]);
        let last = path[path.len() - 1];
        assert!((last.0 - 30.0).abs() < 1e-4 && (last.1 - 5.0).abs() < 1e-4);
        assert!(path.iter().all(|&(_, y)| (0.0..=10.0).contains(&y)));
    }

    #[test]
    fn test_smooth_path_zero_tension_is_identity() {
        let points = [(0.0, 1.0), (1.0, 2.0), (2.0, 0.5)];
        assert_eq!(smooth_path(&points, 0.0, 8, (0.0, 10.0)), points.to_vec());
    }
}
