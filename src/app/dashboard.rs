//! Composition root.
//!
//! [`Dashboard`] is built once per page load. It constructs the controllers
//! in a fixed order (theme, sidebar, charts, interaction), arms the deferred
//! chart construction and owns the resize debouncer. Hosts feed it messages
//! as they happen and call [`Dashboard::tick`] once per frame, after the
//! layout pass that records chart surfaces.

use crate::app::{
    ChartRegistry, DashboardMessage, InteractionDecorator, SidebarController, ThemeController,
};
use crate::catalogue::ContentCatalogue;
use crate::charts::{ChartBackend, SurfaceLookup};
use crate::config::DashboardConfig;
use crate::timers::{Debouncer, OneShot};
use crate::viewport::{classify, ViewportClass};
use std::time::Duration;

/// Work done by one [`Dashboard::tick`], in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Deferred chart construction ran and created this many handles
    ChartsConstructed(usize),
    /// Debounced resize: sidebar adapted to this viewport class
    ViewportReclassified(ViewportClass),
    /// Debounced resize: this many chart handles were resized
    ChartsResized(usize),
}

/// Ordered list of actions taken during a tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub actions: Vec<TickAction>,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of debounced resize flushes in this tick (0 or 1).
    pub fn resize_flushes(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, TickAction::ChartsResized(_)))
            .count()
    }
}

/// The running dashboard: controllers plus the timers that sequence them.
pub struct Dashboard<B: ChartBackend> {
    catalogue: ContentCatalogue,
    theme: ThemeController,
    sidebar: SidebarController,
    charts: ChartRegistry<B>,
    interaction: InteractionDecorator,
    chart_init: OneShot,
    resize: Debouncer,
    /// Live viewport width; the class is derived from it on demand
    viewport_width: f32,
    loaded: bool,
}

impl<B: ChartBackend> Dashboard<B> {
    /// Starts a fresh dashboard. The theme always starts light.
    pub fn bootstrap(
        catalogue: ContentCatalogue,
        backend: B,
        config: &DashboardConfig,
        viewport_width: f32,
        now: Duration,
    ) -> Self {
        let theme = ThemeController::new(true);
        let sidebar = SidebarController::new(
            catalogue.navigation_items.len(),
            catalogue.initial_nav_index(),
            classify(viewport_width),
        );
        let charts = ChartRegistry::new(backend);
        let chart_init = OneShot::new(now, config.chart_init_delay());
        let interaction = InteractionDecorator::new(catalogue.metrics.len(), catalogue.table_data.len());

        let mut dashboard = Self {
            catalogue,
            theme,
            sidebar,
            charts,
            interaction,
            chart_init,
            resize: Debouncer::new(config.resize_debounce()),
            viewport_width,
            loaded: false,
        };
        dashboard.loaded = true;

        tracing::info!(
            width = viewport_width,
            metrics = dashboard.catalogue.metrics.len(),
            nav_items = dashboard.catalogue.navigation_items.len(),
            rows = dashboard.catalogue.table_data.len(),
            "Dashboard initialized"
        );
        dashboard
    }

    /// Routes a message to the controller that owns the affected state.
    pub fn dispatch(&mut self, message: DashboardMessage, now: Duration) {
        match message {
            DashboardMessage::ToggleTheme => {
                self.theme.toggle();
            }
            DashboardMessage::ToggleSidebar => self.sidebar.toggle(),
            DashboardMessage::DismissOverlay => self.sidebar.close(),
            DashboardMessage::ViewportResized(width) => {
                self.viewport_width = width;
                self.resize.trigger(now);
            }
            DashboardMessage::NavActivated(index) => {
                let viewport = self.viewport_class();
                self.sidebar.activate_nav_item(index, viewport);
            }
            DashboardMessage::RowSelected(index) => {
                self.interaction.select_row(index);
            }
            DashboardMessage::PointerClicked { inside_sidebar, on_toggle } => {
                let viewport = self.viewport_class();
                self.sidebar.on_outside_interaction(inside_sidebar, on_toggle, viewport);
            }
        }
    }

    /// Runs whichever timers are due.
    ///
    /// `surfaces` must reflect a completed layout pass. Within a debounced
    /// resize the sidebar is reclassified before charts are resized, since
    /// the sidebar changes the width left for the charts.
    pub fn tick(&mut self, now: Duration, surfaces: &dyn SurfaceLookup) -> TickReport {
        let mut report = TickReport::default();

        if self.chart_init.poll(now) {
            let created = self.charts.initialize(&self.catalogue, surfaces);
            report.actions.push(TickAction::ChartsConstructed(created));
        }

        if self.resize.poll(now) {
            let viewport = self.viewport_class();
            self.sidebar.on_viewport_change(viewport);
            report.actions.push(TickAction::ViewportReclassified(viewport));

            let resized = self.charts.resize_all(surfaces);
            report.actions.push(TickAction::ChartsResized(resized));
            tracing::debug!(width = self.viewport_width, ?viewport, resized, "Resize flushed");
        }

        report
    }

    /// Earliest pending timer deadline, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.chart_init.deadline(), self.resize.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ===== Queries =====

    pub fn catalogue(&self) -> &ContentCatalogue {
        &self.catalogue
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn sidebar(&self) -> &SidebarController {
        &self.sidebar
    }

    pub fn charts(&self) -> &ChartRegistry<B> {
        &self.charts
    }

    pub fn interaction(&self) -> &InteractionDecorator {
        &self.interaction
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Class of the current viewport width, computed fresh.
    pub fn viewport_class(&self) -> ViewportClass {
        classify(self.viewport_width)
    }

    /// True once bootstrap has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True while a debounced resize is waiting for its quiet period.
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{CanvasBackend, ChartId, Surface, SurfaceMap};
    use crate::state::ThemeState;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn all_surfaces() -> SurfaceMap {
        ChartId::ALL
            .iter()
            .map(|&id| (id, Surface::new(500.0, 300.0)))
            .collect()
    }

    fn dashboard(width: f32) -> Dashboard<CanvasBackend> {
        Dashboard::bootstrap(
            ContentCatalogue::builtin(),
            CanvasBackend::new(),
            &DashboardConfig::default(),
            width,
            ms(0),
        )
    }

    #[test]
    fn test_bootstrap_defaults() {
        let dash = dashboard(1024.0);
        assert!(dash.is_loaded());
        assert_eq!(dash.theme().current_theme(), ThemeState::Light);
        assert_eq!(dash.sidebar().active_nav_index(), Some(0));
        assert!(dash.charts().is_empty());
        assert_eq!(dash.next_deadline(), Some(ms(100)));
    }

    #[test]
    fn test_charts_wait_for_delay() {
        let mut dash = dashboard(1024.0);
        assert!(dash.tick(ms(50), &all_surfaces()).is_idle());
        assert!(dash.charts().is_empty());

        let report = dash.tick(ms(100), &all_surfaces());
        assert_eq!(report.actions, vec![TickAction::ChartsConstructed(2)]);
        assert_eq!(dash.charts().len(), 2);

        // Runs exactly once
        assert!(dash.tick(ms(500), &all_surfaces()).is_idle());
        assert_eq!(dash.next_deadline(), None);
    }

    #[test]
    fn test_resize_reclassifies_before_resizing_charts() {
        let mut dash = dashboard(1024.0);
        dash.tick(ms(100), &all_surfaces());

        dash.dispatch(DashboardMessage::ViewportResized(500.0), ms(200));
        assert!(dash.resize_pending());
        assert!(!dash.sidebar().toggle_visible(), "toggle waits for the debounce");

        let report = dash.tick(ms(450), &all_surfaces());
        assert_eq!(
            report.actions,
            vec![
                TickAction::ViewportReclassified(ViewportClass::Mobile),
                TickAction::ChartsResized(2),
            ]
        );
        assert!(dash.sidebar().toggle_visible());
    }

    #[test]
    fn test_nav_uses_live_width() {
        let mut dash = dashboard(500.0);
        dash.dispatch(DashboardMessage::ToggleSidebar, ms(10));
        assert!(dash.sidebar().is_open());

        // Width already desktop but debounce has not fired: nav must not auto-close
        dash.dispatch(DashboardMessage::ViewportResized(1200.0), ms(20));
        dash.dispatch(DashboardMessage::NavActivated(2), ms(30));
        assert!(dash.sidebar().is_open());
        assert_eq!(dash.sidebar().active_nav_index(), Some(2));
    }

    #[test]
    fn test_overlay_and_outside_click_are_idempotent() {
        let mut dash = dashboard(500.0);
        dash.dispatch(DashboardMessage::ToggleSidebar, ms(10));
        dash.dispatch(DashboardMessage::DismissOverlay, ms(20));
        dash.dispatch(
            DashboardMessage::PointerClicked { inside_sidebar: false, on_toggle: false },
            ms(20),
        );
        assert!(!dash.sidebar().is_open());
    }
}
