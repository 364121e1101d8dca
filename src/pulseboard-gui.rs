#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Pulseboard GUI Application
//!
//! An analytics dashboard built on the `pulseboard` coordination layer with
//! the egui framework. The viewer features:
//! - Light/dark theme toggle (always starts light)
//! - Responsive sidebar that becomes a drawer with overlay below 768px
//! - Revenue and user-growth charts, constructed after the first layout
//!   and resized after window resizing settles
//! - Metric cards with hover lift and a users table with row selection
//!
//! The binary only owns presentation:
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level chart painting and text utilities

use eframe::egui;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod rendering;
mod ui;

use pulseboard::{CanvasBackend, ContentCatalogue, Dashboard, DashboardConfig, DashboardMessage, SurfaceMap};
use ui::panel_manager::{AppDashboard, PanelInteraction, PanelManager};
use ui::theme_coordinator::ThemeCoordinator;

/// Main application entry point that initializes logging and launches the dashboard GUI.
fn main() -> eframe::Result {
    init_logging();

    let config = DashboardConfig::load_or_default(DashboardConfig::default_path().as_deref());

    // A catalogue given on the command line wins over the configured one
    let catalogue_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.catalogue_path.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([320.0, 480.0])
            .with_title("Pulseboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Pulseboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PulseboardApp::new(config, catalogue_path)))),
    )
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pulseboard=info,pulseboard_gui=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// The Pulseboard application.
///
/// Owns the dashboard and the per-frame glue around it:
/// - `Dashboard` holds all UI state and timers
/// - `ThemeCoordinator` pushes the palette into egui
/// - `PanelManager` lays out and renders every panel
struct PulseboardApp {
    config: DashboardConfig,
    /// Built on the first frame, once the window width is known
    dashboard: Option<AppDashboard>,
    /// Catalogue waiting to (re)bootstrap the dashboard on the next frame
    pending_catalogue: Option<ContentCatalogue>,
    /// Chart surfaces recorded by the last completed layout pass
    surfaces: SurfaceMap,
    last_width: Option<f32>,
    theme: ThemeCoordinator,
    error_message: Option<String>,
}

impl PulseboardApp {
    fn new(config: DashboardConfig, catalogue_path: Option<PathBuf>) -> Self {
        let mut error_message = None;
        let catalogue = match catalogue_path {
            Some(path) => match ContentCatalogue::load(&path) {
                Ok(catalogue) => catalogue,
                Err(e) => {
                    tracing::error!(error = %format!("{e:#}"), "Falling back to built-in catalogue");
                    error_message = Some(format!("Error loading catalogue: {e:#}"));
                    ContentCatalogue::builtin()
                }
            },
            None => ContentCatalogue::builtin(),
        };

        Self {
            config,
            dashboard: None,
            pending_catalogue: Some(catalogue),
            surfaces: SurfaceMap::new(),
            last_width: None,
            theme: ThemeCoordinator::default(),
            error_message,
        }
    }

    /// Loads a catalogue picked by the user; the dashboard restarts with it next frame.
    fn open_catalogue(&mut self, path: &Path, ctx: &egui::Context) {
        match ContentCatalogue::load(path) {
            Ok(catalogue) => {
                self.pending_catalogue = Some(catalogue);
                self.error_message = None;
                ctx.request_repaint();
            }
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "Catalogue load failed");
                self.error_message = Some(format!("Error loading catalogue: {e:#}"));
            }
        }
    }
}

impl eframe::App for PulseboardApp {
    /// Main update loop.
    ///
    /// 1. Bootstrap the dashboard if a catalogue is pending
    /// 2. Report width changes and run due timers against last frame's layout
    /// 3. Apply theme, render all panels via PanelManager
    /// 4. Dispatch interactions, flush a theme change, schedule the next wake-up
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        let width = ctx.content_rect().width();

        if let Some(catalogue) = self.pending_catalogue.take() {
            self.dashboard = Some(Dashboard::bootstrap(
                catalogue,
                CanvasBackend::new(),
                &self.config,
                width,
                now,
            ));
            self.surfaces.clear();
            self.theme.reset();
            self.last_width = Some(width);
        }

        let Some(dashboard) = self.dashboard.as_mut() else {
            return;
        };

        if self.last_width != Some(width) {
            self.last_width = Some(width);
            dashboard.dispatch(DashboardMessage::ViewportResized(width), now);
        }

        let report = dashboard.tick(now, &self.surfaces);
        if !report.is_idle() {
            tracing::debug!(actions = ?report.actions, "Tick");
        }

        self.theme.apply(ctx, dashboard.theme());

        self.surfaces.clear();
        let interactions = PanelManager::render_all_panels(
            ctx,
            dashboard,
            &mut self.surfaces,
            self.error_message.as_deref(),
        );

        let mut requested_catalogue = None;
        for interaction in interactions {
            match interaction {
                PanelInteraction::Dashboard(message) => {
                    dashboard.dispatch(message, now);
                    ctx.request_repaint();
                }
                PanelInteraction::OpenCatalogueRequested(path) => requested_catalogue = Some(path),
            }
        }

        // Picks up a theme toggled this frame
        self.theme.apply(ctx, dashboard.theme());

        if !report.is_idle() {
            ctx.request_repaint();
        }
        if let Some(deadline) = dashboard.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_sub(now));
        }

        if let Some(path) = requested_catalogue {
            self.open_catalogue(&path, ctx);
        }
    }
}
