//! Chart painting
//!
//! Draws a [`CanvasChart`] from its cached layout: legend, y gridlines with
//! tick labels, category labels, the dataset itself and a tooltip for the
//! category under the pointer.

use eframe::egui;
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke};
use pulseboard::charts::{smooth_path, ChartKind, LegendPosition};
use pulseboard::utils::format_thousands;
use pulseboard::{with_alpha, CanvasChart, ChartLayout, ThemeColors};

/// Samples per curve segment for smoothed lines.
const CURVE_SEGMENTS: usize = 12;
const AXIS_FONT_SIZE: f32 = 11.0;
const LEGEND_FONT_SIZE: f32 = 12.0;
const LEGEND_SWATCH: f32 = 10.0;

/// Paints `chart` into `rect`.
///
/// The layout may have been computed for a different size than `rect`
/// (between a window resize and the debounced chart resize), so drawing is
/// clipped to `rect`.
pub fn render_chart(ui: &mut egui::Ui, rect: Rect, chart: &CanvasChart, colors: &ThemeColors) {
    let painter = ui.painter_at(rect);
    let layout = chart.layout();
    let config = chart.config();
    let origin = rect.min;
    let at = |x: f32, y: f32| pos2(origin.x + x, origin.y + y);

    render_legend(&painter, rect, chart, colors);
    render_axes(&painter, layout, &config.labels, colors, at);

    let color = config.style.color;
    let points: Vec<(f32, f32)> = config
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| (layout.category_x(i), layout.value_y(v)))
        .collect();

    let hovered = ui
        .ctx()
        .pointer_hover_pos()
        .filter(|pos| rect.contains(*pos))
        .filter(|_| config.interaction.by_index && !config.interaction.intersect)
        .and_then(|pos| layout.nearest_index(pos.x - origin.x, pos.y - origin.y));

    match config.kind {
        ChartKind::Line => {
            let path: Vec<Pos2> = smooth_path(
                &points,
                config.style.tension,
                CURVE_SEGMENTS,
                (layout.plot.top, layout.plot.bottom),
            )
            .into_iter()
            .map(|(x, y)| at(x, y))
            .collect();

            if let Some(alpha) = config.style.fill_alpha {
                let fill = with_alpha(color, alpha);
                let floor = origin.y + layout.plot.bottom;
                // Trapezoids under each segment keep every polygon convex
                for pair in path.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    painter.add(Shape::convex_polygon(
                        vec![a, b, pos2(b.x, floor), pos2(a.x, floor)],
                        fill,
                        Stroke::NONE,
                    ));
                }
            }

            painter.add(Shape::line(path, Stroke::new(config.style.border_width, color)));

            for (i, &(x, y)) in points.iter().enumerate() {
                let radius = if hovered == Some(i) {
                    config.style.point_hover_radius
                } else {
                    config.style.point_radius
                };
                painter.circle(at(x, y), radius, color, Stroke::new(2.0, colors.card_background));
            }
        }
        ChartKind::Bar => {
            for (i, &value) in config.values.iter().enumerate() {
                let bar = layout.bar_rect(i, value);
                let bar_rect = Rect::from_min_max(at(bar.left, bar.top), at(bar.right, bar.bottom));
                let fill = if hovered == Some(i) {
                    color.gamma_multiply(0.85)
                } else {
                    color
                };
                painter.rect_filled(bar_rect, config.style.corner_radius, fill);
            }
        }
    }

    if let Some(index) = hovered {
        if let (Some(label), Some(&value), Some(&(x, y))) =
            (config.labels.get(index), config.values.get(index), points.get(index))
        {
            let body = format!("{}: {}", config.dataset_label, format_thousands(value));
            render_tooltip(&painter, rect, at(x, y), label, &body, color);
        }
    }
}

fn render_legend(painter: &egui::Painter, rect: Rect, chart: &CanvasChart, colors: &ThemeColors) {
    let config = chart.config();
    let font = FontId::proportional(LEGEND_FONT_SIZE);
    let galley = painter.layout_no_wrap(config.dataset_label.clone(), font, colors.text);

    let total_width = LEGEND_SWATCH + 6.0 + galley.size().x;
    let center_y = match config.legend.position {
        LegendPosition::Top => rect.top() + config.legend.padding / 2.0 + LEGEND_SWATCH / 2.0,
        LegendPosition::Bottom => rect.bottom() - config.legend.padding / 2.0 - LEGEND_SWATCH / 2.0,
    };
    let left = rect.center().x - total_width / 2.0;
    let swatch_center = pos2(left + LEGEND_SWATCH / 2.0, center_y);

    if config.legend.point_style {
        painter.circle_filled(swatch_center, LEGEND_SWATCH / 2.0, config.style.color);
    } else {
        painter.rect_filled(
            Rect::from_center_size(swatch_center, vec2(LEGEND_SWATCH, LEGEND_SWATCH)),
            0.0,
            config.style.color,
        );
    }

    let text_pos = pos2(left + LEGEND_SWATCH + 6.0, center_y - galley.size().y / 2.0);
    painter.galley(text_pos, galley, colors.text);
}

fn render_axes(
    painter: &egui::Painter,
    layout: &ChartLayout,
    labels: &[String],
    colors: &ThemeColors,
    at: impl Fn(f32, f32) -> Pos2,
) {
    let font = FontId::proportional(AXIS_FONT_SIZE);
    let grid = Stroke::new(1.0, colors.grid);
    let plot = layout.plot;

    for tick in &layout.y_ticks {
        painter.line_segment([at(plot.left, tick.y), at(plot.right, tick.y)], grid);
        painter.text(
            at(plot.left - 6.0, tick.y),
            Align2::RIGHT_CENTER,
            &tick.label,
            font.clone(),
            colors.text_dim,
        );
    }

    for (i, label) in labels.iter().enumerate() {
        let x = layout.category_x(i);
        painter.line_segment([at(x, plot.top), at(x, plot.bottom)], grid);
        painter.text(
            at(x, plot.bottom + 4.0),
            Align2::CENTER_TOP,
            label,
            font.clone(),
            colors.text_dim,
        );
    }
}

fn render_tooltip(
    painter: &egui::Painter,
    bounds: Rect,
    anchor: Pos2,
    title: &str,
    body: &str,
    swatch: Color32,
) {
    let title_galley = painter.layout_no_wrap(title.to_owned(), FontId::proportional(12.0), Color32::WHITE);
    let body_galley = painter.layout_no_wrap(body.to_owned(), FontId::proportional(12.0), Color32::WHITE);

    let padding = 6.0;
    let width = title_galley.size().x.max(body_galley.size().x + LEGEND_SWATCH + 4.0) + padding * 2.0;
    let height = title_galley.size().y + body_galley.size().y + padding * 3.0;

    // Prefer the right of the point, flip left near the edge
    let mut min = pos2(anchor.x + 10.0, anchor.y - height / 2.0);
    if min.x + width > bounds.right() {
        min.x = anchor.x - 10.0 - width;
    }
    min.y = min.y.clamp(bounds.top(), (bounds.bottom() - height).max(bounds.top()));
    let rect = Rect::from_min_size(min, vec2(width, height));

    painter.rect_filled(rect, 4.0, Color32::from_black_alpha(200));

    let title_pos = pos2(rect.left() + padding, rect.top() + padding);
    let body_y = title_pos.y + title_galley.size().y + padding;
    painter.galley(title_pos, title_galley, Color32::WHITE);

    let swatch_rect = Rect::from_min_size(
        pos2(rect.left() + padding, body_y + 2.0),
        vec2(LEGEND_SWATCH, LEGEND_SWATCH),
    );
    painter.rect_filled(swatch_rect, 0.0, swatch);
    painter.galley(pos2(swatch_rect.right() + 4.0, body_y), body_galley, Color32::WHITE);
}
