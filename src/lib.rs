pub mod catalogue;
pub mod theme;
pub mod viewport;
pub mod timers;
pub mod state;
pub mod charts;
pub mod app;
pub mod config;
pub mod utils;

// Export content model
pub use catalogue::{ContentCatalogue, Metric, NavItem, TableRow, ChartSeries, Trend};

// Export theme support
pub use theme::{ThemeColors, palette, apply_theme, hex_to_color32, with_alpha};

// Export viewport classification
pub use viewport::{ViewportClass, classify, MOBILE_BREAKPOINT};

// Export timers
pub use timers::{Debouncer, OneShot};

// Export state records
pub use state::{ThemeState, SidebarState, RowSelection};

// Export chart model and capability seam
pub use charts::{
    ChartId, ChartKind, ChartConfig, TickFormat, InteractionMode, LegendPosition,
    ChartBackend, SurfaceLookup, Surface, SurfaceMap,
    CanvasBackend, CanvasChart, ChartLayout,
};

// Export controllers and composition root
pub use app::{
    Dashboard, DashboardMessage, TickAction, TickReport,
    ThemeController, SidebarController, ChartRegistry, InteractionDecorator, CARD_HOVER_LIFT,
};

pub use config::DashboardConfig;
