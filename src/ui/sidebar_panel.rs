//! Navigation sidebar
//!
//! Desktop widths get an inline side panel. Mobile widths get a drawer over
//! a dimming overlay, shown only while the sidebar is open.

use eframe::egui;
use egui::{pos2, Order, Rect, RichText, Sense, Stroke};
use pulseboard::{DashboardMessage, ThemeColors};

use super::panel_manager::AppDashboard;

const SIDEBAR_WIDTH: f32 = 240.0;
const NAV_ITEM_PADDING: f32 = 8.0;

/// What the sidebar produced this frame.
#[derive(Default)]
pub struct SidebarOutput {
    pub messages: Vec<DashboardMessage>,
    /// Screen rect of the sidebar, when it is on screen
    pub rect: Option<Rect>,
}

/// Whether the mobile drawer and its overlay are on screen.
///
/// The drawer follows the live viewport class, so it hides as soon as the
/// window is wide again even before the debounced reclassification closes it.
pub fn drawer_shown(dashboard: &AppDashboard) -> bool {
    dashboard.viewport_class().is_mobile() && dashboard.sidebar().overlay_active()
}

/// Renders the sidebar in whichever form the viewport calls for.
///
/// Must run before the central panel so the inline panel takes its space.
pub fn render_sidebar(
    ctx: &egui::Context,
    dashboard: &AppDashboard,
    colors: &ThemeColors,
    content_top: f32,
) -> SidebarOutput {
    let mut output = SidebarOutput::default();

    if !dashboard.viewport_class().is_mobile() {
        let frame = egui::Frame::default()
            .inner_margin(12.0)
            .fill(colors.panel_background)
            .stroke(Stroke::new(1.0, colors.border));

        let response = egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| render_nav(ui, dashboard, colors));

        output.rect = Some(response.response.rect);
        output.messages.extend(response.inner.map(DashboardMessage::NavActivated));
        return output;
    }

    if !drawer_shown(dashboard) {
        return output;
    }

    let screen = ctx.content_rect();
    let below_header = Rect::from_min_max(pos2(screen.left(), content_top), screen.max);

    let overlay = egui::Area::new(egui::Id::new("sidebar_overlay"))
        .order(Order::Middle)
        .fixed_pos(below_header.min)
        .show(ctx, |ui| {
            ui.painter().rect_filled(below_header, 0.0, colors.overlay);
            ui.allocate_rect(below_header, Sense::click())
        });
    if overlay.inner.clicked() {
        output.messages.push(DashboardMessage::DismissOverlay);
    }

    let drawer = egui::Area::new(egui::Id::new("sidebar_drawer"))
        .order(Order::Foreground)
        .fixed_pos(below_header.min)
        .show(ctx, |ui| {
            egui::Frame::default()
                .inner_margin(12.0)
                .fill(colors.panel_background)
                .stroke(Stroke::new(1.0, colors.border))
                .show(ui, |ui| {
                    ui.set_width(SIDEBAR_WIDTH);
                    ui.set_min_height(below_header.height() - 24.0);
                    render_nav(ui, dashboard, colors)
                })
                .inner
        });

    output.rect = Some(drawer.response.rect);
    output.messages.extend(drawer.inner.map(DashboardMessage::NavActivated));
    output
}

/// Renders the navigation list and returns the index of a clicked item.
fn render_nav(ui: &mut egui::Ui, dashboard: &AppDashboard, colors: &ThemeColors) -> Option<usize> {
    let mut clicked = None;

    ui.label(RichText::new("Navigation").small().color(colors.text_dim));
    ui.add_space(8.0);

    ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
        ui.spacing_mut().button_padding = egui::vec2(12.0, NAV_ITEM_PADDING);

        for (index, item) in dashboard.catalogue().navigation_items.iter().enumerate() {
            let active = dashboard.sidebar().is_nav_active(index);
            let mut text = RichText::new(format!("{}  {}", item.icon, item.name)).size(15.0);
            if active {
                text = text.strong().color(colors.primary);
            }

            if ui.selectable_label(active, text).clicked() {
                clicked = Some(index);
            }
        }
    });

    clicked
}
