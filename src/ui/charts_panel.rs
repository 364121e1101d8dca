//! Chart cards
//!
//! Allocates a surface for each declared chart and records its size, so the
//! next tick can construct or resize handles against a completed layout.

use eframe::egui;
use egui::{vec2, Align2, FontId, RichText, Sense, Stroke};
use pulseboard::{ChartId, Surface, SurfaceMap, ThemeColors};

use super::panel_manager::AppDashboard;
use crate::rendering::chart_renderer::render_chart;

const CHART_HEIGHT: f32 = 300.0;
/// Below this content width the charts stack vertically.
const TWO_COLUMN_MIN_WIDTH: f32 = 720.0;
const CHART_GAP: f32 = 16.0;

pub fn render_charts(
    ui: &mut egui::Ui,
    dashboard: &AppDashboard,
    colors: &ThemeColors,
    surfaces: &mut SurfaceMap,
) {
    if ui.available_width() >= TWO_COLUMN_MIN_WIDTH {
        ui.columns(ChartId::ALL.len(), |columns| {
            for (column, id) in columns.iter_mut().zip(ChartId::ALL) {
                render_chart_card(column, id, dashboard, colors, surfaces);
            }
        });
    } else {
        for id in ChartId::ALL {
            render_chart_card(ui, id, dashboard, colors, surfaces);
            ui.add_space(CHART_GAP);
        }
    }
}

fn render_chart_card(
    ui: &mut egui::Ui,
    id: ChartId,
    dashboard: &AppDashboard,
    colors: &ThemeColors,
    surfaces: &mut SurfaceMap,
) {
    egui::Frame::default()
        .fill(colors.card_background)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.label(RichText::new(id.title()).strong().size(16.0));
            ui.add_space(8.0);

            let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), CHART_HEIGHT), Sense::hover());
            surfaces.insert(id, Surface::new(rect.width(), rect.height()));

            match dashboard.charts().handle(id) {
                Some(chart) => render_chart(ui, rect, chart, colors),
                None => {
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        "Loading chart…",
                        FontId::proportional(13.0),
                        colors.text_dim,
                    );
                }
            }
        });
}
