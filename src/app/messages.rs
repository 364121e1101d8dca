//! Input events routed to the controllers.

/// A discrete user or host event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardMessage {
    /// Theme toggle clicked
    ToggleTheme,
    /// Sidebar toggle clicked
    ToggleSidebar,
    /// Dimming overlay behind the open sidebar clicked
    DismissOverlay,
    /// Viewport content width changed, in logical pixels
    ViewportResized(f32),
    /// Navigation entry clicked
    NavActivated(usize),
    /// Table row clicked
    RowSelected(usize),
    /// Primary pointer clicked somewhere in the window
    PointerClicked {
        inside_sidebar: bool,
        on_toggle: bool,
    },
}
