//! Window-wide pointer click detection.
//!
//! Widgets only see clicks that land on them. Dismissing the mobile sidebar
//! needs every click in the window, classified against the regions laid out
//! this frame.

use eframe::egui;
use egui::Rect;
use pulseboard::DashboardMessage;

/// Screen regions recorded while the panels were laid out.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerRegions {
    /// The sidebar, when it is on screen
    pub sidebar: Option<Rect>,
    /// The hamburger toggle, when it is shown
    pub toggle: Option<Rect>,
}

/// Returns a click message if the primary button was clicked this frame.
pub fn detect_click(ctx: &egui::Context, regions: &PointerRegions) -> Option<DashboardMessage> {
    let (clicked, pos) = ctx.input(|i| (i.pointer.primary_clicked(), i.pointer.interact_pos()));
    if !clicked {
        return None;
    }
    let pos = pos?;

    Some(DashboardMessage::PointerClicked {
        inside_sidebar: regions.sidebar.is_some_and(|r| r.contains(pos)),
        on_toggle: regions.toggle.is_some_and(|r| r.contains(pos)),
    })
}
