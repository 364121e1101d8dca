//! Panel orchestration and layout management.
//!
//! Lays out header, status bar, sidebar and the scrolling content area, and
//! collects everything the user did this frame as messages for the app.

use eframe::egui;
use std::path::PathBuf;

use pulseboard::{palette, CanvasBackend, Dashboard, DashboardMessage, SurfaceMap};

use crate::ui::input::pointer_input::{self, PointerRegions};
use crate::ui::{charts_panel, header, metrics_panel, sidebar_panel, status_bar, table_panel};

/// The dashboard as driven by the GUI, drawing with the built-in chart backend.
pub type AppDashboard = Dashboard<CanvasBackend>;

const SECTION_GAP: f32 = 24.0;

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// Forward to the dashboard as-is
    Dashboard(DashboardMessage),
    /// User picked a catalogue file to load
    OpenCatalogueRequested(PathBuf),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Chart surfaces laid out this frame are recorded into `surfaces`.
    /// Interactions are returned in the order they happened on screen.
    pub fn render_all_panels(
        ctx: &egui::Context,
        dashboard: &AppDashboard,
        surfaces: &mut SurfaceMap,
        error_message: Option<&str>,
    ) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();
        let mut regions = PointerRegions::default();
        let colors = palette(dashboard.theme().current_theme());

        let header = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| header::render_header(ui, dashboard, error_message));
        regions.toggle = header.inner.toggle_rect;
        if let Some(header_interaction) = header.inner.interaction {
            interactions.push(match header_interaction {
                header::HeaderInteraction::ToggleSidebar => {
                    PanelInteraction::Dashboard(DashboardMessage::ToggleSidebar)
                }
                header::HeaderInteraction::ToggleTheme => {
                    PanelInteraction::Dashboard(DashboardMessage::ToggleTheme)
                }
                header::HeaderInteraction::OpenCatalogueRequested(path) => {
                    PanelInteraction::OpenCatalogueRequested(path)
                }
            });
        }

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, dashboard);
        });

        let sidebar = sidebar_panel::render_sidebar(ctx, dashboard, colors, header.response.rect.bottom());
        regions.sidebar = sidebar.rect;
        interactions.extend(sidebar.messages.into_iter().map(PanelInteraction::Dashboard));

        let content_frame = egui::Frame::default()
            .inner_margin(SECTION_GAP)
            .fill(colors.background);

        egui::CentralPanel::default()
            .frame(content_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .enable_scrolling(!sidebar_panel::drawer_shown(dashboard))
                    .show(ui, |ui| {
                        metrics_panel::render_metrics(ui, &dashboard.catalogue().metrics, colors);
                        ui.add_space(SECTION_GAP);

                        charts_panel::render_charts(ui, dashboard, colors, surfaces);
                        ui.add_space(SECTION_GAP);

                        if let Some(index) = table_panel::render_table(ui, dashboard, colors) {
                            interactions.push(PanelInteraction::Dashboard(DashboardMessage::RowSelected(index)));
                        }
                    });
            });

        if let Some(click) = pointer_input::detect_click(ctx, &regions) {
            interactions.push(PanelInteraction::Dashboard(click));
        }

        interactions
    }
}
