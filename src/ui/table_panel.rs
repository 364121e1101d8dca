//! Users table
//!
//! Rows are painted by hand so the whole row is one click target. At most
//! one row is highlighted as selected.

use eframe::egui;
use egui::{pos2, vec2, Align2, FontId, Rect, RichText, Sense, Stroke};
use pulseboard::{with_alpha, TableRow, ThemeColors};

use super::panel_manager::AppDashboard;
use crate::rendering::text_utils::fit_text;

const HEADER_HEIGHT: f32 = 36.0;
const ROW_HEIGHT: f32 = 44.0;
const CELL_PADDING: f32 = 12.0;

/// Column titles and their share of the table width.
const COLUMNS: [(&str, f32); 5] = [
    ("ID", 0.08),
    ("Name", 0.22),
    ("Email", 0.36),
    ("Role", 0.16),
    ("Status", 0.18),
];

/// Renders the table and returns the index of a clicked row.
pub fn render_table(ui: &mut egui::Ui, dashboard: &AppDashboard, colors: &ThemeColors) -> Option<usize> {
    let mut clicked = None;

    egui::Frame::default()
        .fill(colors.card_background)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Recent Users").strong().size(16.0));
            ui.add_space(8.0);

            let width = ui.available_width();
            let column_x = column_offsets(width);

            let (header_rect, _) = ui.allocate_exact_size(vec2(width, HEADER_HEIGHT), Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(header_rect, 0.0, colors.hover);
            for ((title, _), x) in COLUMNS.iter().zip(&column_x) {
                painter.text(
                    pos2(header_rect.left() + x + CELL_PADDING, header_rect.center().y),
                    Align2::LEFT_CENTER,
                    *title,
                    FontId::proportional(12.0),
                    colors.text_dim,
                );
            }

            for (index, row) in dashboard.catalogue().table_data.iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(vec2(width, ROW_HEIGHT), Sense::click());
                let selected = dashboard.interaction().is_row_selected(index);

                let painter = ui.painter();
                if selected {
                    painter.rect_filled(rect, 0.0, colors.selection);
                } else if response.hovered() {
                    painter.rect_filled(rect, 0.0, colors.hover);
                }
                painter.line_segment(
                    [rect.left_bottom(), rect.right_bottom()],
                    Stroke::new(1.0, colors.border),
                );
                render_cells(painter, rect, row, &column_x, colors);

                if response.clicked() {
                    clicked = Some(index);
                }
            }
        });

    clicked
}

fn column_offsets(width: f32) -> Vec<f32> {
    COLUMNS
        .iter()
        .scan(0.0, |x, (_, share)| {
            let start = *x;
            *x += share * width;
            Some(start)
        })
        .collect()
}

fn render_cells(painter: &egui::Painter, rect: Rect, row: &TableRow, column_x: &[f32], colors: &ThemeColors) {
    let font = FontId::proportional(14.0);
    let y = rect.center().y;
    let cells = [row.id.to_string(), row.name.clone(), row.email.clone(), row.role.clone()];

    for (i, text) in cells.iter().enumerate() {
        let max_width = COLUMNS[i].1 * rect.width() - CELL_PADDING * 2.0;
        let shown = fit_text(painter, text, max_width, &font);
        painter.text(
            pos2(rect.left() + column_x[i] + CELL_PADDING, y),
            Align2::LEFT_CENTER,
            shown,
            font.clone(),
            colors.text,
        );
    }

    // Status badge
    let color = if row.is_active() { colors.success } else { colors.danger };
    let galley = painter.layout_no_wrap(row.status.clone(), FontId::proportional(12.0), color);
    let badge = Rect::from_min_size(
        pos2(rect.left() + column_x[4] + CELL_PADDING, y - galley.size().y / 2.0 - 3.0),
        galley.size() + vec2(16.0, 6.0),
    );
    painter.rect_filled(badge, badge.height() / 2.0, with_alpha(color, 38));
    painter.galley(badge.min + vec2(8.0, 3.0), galley, color);
}
