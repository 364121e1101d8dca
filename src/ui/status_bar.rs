//! Status bar UI rendering
//!
//! Shows the active theme, live viewport class and chart readiness.

use eframe::egui;
use egui::RichText;
use pulseboard::{ChartId, ViewportClass};

use super::panel_manager::AppDashboard;

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, dashboard: &AppDashboard) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Theme: {}", dashboard.theme().document_attribute())).strong());
        ui.label(RichText::new("|").strong());

        let class = match dashboard.viewport_class() {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Desktop => "desktop",
        };
        ui.label(RichText::new(format!("Viewport: {:.0}px ({})", dashboard.viewport_width(), class)).strong());
        ui.label(RichText::new("|").strong());

        ui.label(RichText::new(format!(
            "Charts: {} / {}",
            dashboard.charts().len(),
            ChartId::ALL.len()
        )).strong());

        if dashboard.resize_pending() {
            ui.label(RichText::new("| resizing…").strong().color(egui::Color32::YELLOW));
        }

        if let Some(row) = dashboard
            .interaction()
            .selected_row()
            .and_then(|index| dashboard.catalogue().table_data.get(index))
        {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Selected: {}", row.name)).strong());
        }
    });
}
