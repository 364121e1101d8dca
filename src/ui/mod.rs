//! UI panel rendering subsystem
//!
//! - Header panel (sidebar toggle, catalogue picker, theme toggle)
//! - Sidebar panel (inline on desktop, drawer with overlay on mobile)
//! - Metrics panel (summary cards with hover lift)
//! - Charts panel (chart surfaces and their rendering)
//! - Table panel (users table with single-row selection)
//! - Status bar (theme, viewport class, chart readiness)
//! - Theme coordinator (pushes the palette into egui visuals)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (window-wide pointer clicks)

pub mod header;
pub mod sidebar_panel;
pub mod metrics_panel;
pub mod charts_panel;
pub mod table_panel;
pub mod status_bar;
pub mod theme_coordinator;
pub mod panel_manager;
pub mod input;
