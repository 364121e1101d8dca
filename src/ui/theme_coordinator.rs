//! Applies the active palette to egui.

use eframe::egui;
use pulseboard::{apply_theme, ThemeController, ThemeState};

/// Pushes theme changes into egui visuals.
///
/// Visuals are only rebuilt when the controller reports a new layout flush.
/// A flush after the first one also requests a repaint, since it usually
/// lands after the panels were already drawn in the old palette.
#[derive(Default)]
pub struct ThemeCoordinator {
    applied: Option<(ThemeState, u64)>,
}

impl ThemeCoordinator {
    /// Forgets what was applied; call when the dashboard is rebuilt.
    pub fn reset(&mut self) {
        self.applied = None;
    }

    pub fn apply(&mut self, ctx: &egui::Context, theme: &ThemeController) {
        let current = (theme.current_theme(), theme.layout_flushes());
        if self.applied == Some(current) {
            return;
        }

        let mut visuals = match current.0 {
            ThemeState::Light => egui::Visuals::light(),
            ThemeState::Dark => egui::Visuals::dark(),
        };
        apply_theme(current.0, &mut visuals);
        ctx.set_visuals(visuals);

        if self.applied.is_some() {
            ctx.request_repaint();
        }
        self.applied = Some(current);
    }
}
