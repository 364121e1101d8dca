//! Controllers and the composition root for the dashboard.
//!
//! Each controller owns one piece of UI state and the presentation flags
//! derived from it; no two controllers write the same flag. [`Dashboard`]
//! wires them together, routes [`DashboardMessage`]s to their owners and
//! runs the two timers (deferred chart construction, debounced resize).

mod theme_controller;
mod sidebar_controller;
mod chart_registry;
mod interaction_decorator;
mod messages;
mod dashboard;

pub use theme_controller::ThemeController;
pub use sidebar_controller::SidebarController;
pub use chart_registry::ChartRegistry;
pub use interaction_decorator::{InteractionDecorator, CARD_HOVER_LIFT};
pub use messages::DashboardMessage;
pub use dashboard::{Dashboard, TickAction, TickReport};
