//! Header panel UI rendering
//!
//! Hamburger toggle (mobile only), title, catalogue picker and theme toggle.

use eframe::egui;
use egui::{Rect, RichText};
use std::path::PathBuf;

use super::panel_manager::AppDashboard;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the hamburger toggle
    ToggleSidebar,
    /// User clicked the theme icon
    ToggleTheme,
    /// User picked a catalogue file
    OpenCatalogueRequested(PathBuf),
}

/// What the header produced this frame.
#[derive(Default)]
pub struct HeaderOutput {
    pub interaction: Option<HeaderInteraction>,
    /// Screen rect of the hamburger toggle, when it is shown
    pub toggle_rect: Option<Rect>,
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `dashboard` - Current dashboard state
/// * `error_message` - Last load error, shown under the controls
pub fn render_header(ui: &mut egui::Ui, dashboard: &AppDashboard, error_message: Option<&str>) -> HeaderOutput {
    let mut output = HeaderOutput::default();

    ui.horizontal(|ui| {
        if dashboard.sidebar().toggle_visible() {
            let response = ui
                .button(RichText::new("☰").size(18.0))
                .on_hover_text("Toggle navigation");
            output.toggle_rect = Some(response.rect);
            if response.clicked() {
                output.interaction = Some(HeaderInteraction::ToggleSidebar);
            }
        }

        ui.heading("Dashboard");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme = dashboard.theme();
            // The icon slot is always mounted here, but the controller tolerates its absence
            let icon = theme.icon().unwrap_or("Theme");
            if ui
                .button(RichText::new(icon).size(16.0))
                .on_hover_text(theme.current_theme().toggle_hint())
                .clicked()
            {
                output.interaction = Some(HeaderInteraction::ToggleTheme);
            }

            if ui.button("📂 Open Catalogue").clicked() {
                let mut dialog = rfd::FileDialog::new().add_filter("Dashboard Catalogue", &["json"]);

                if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }

                if let Some(path) = dialog.pick_file() {
                    output.interaction = Some(HeaderInteraction::OpenCatalogueRequested(path));
                }
            }
        });
    });

    if let Some(err) = error_message {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    output
}
