//! Responsive sidebar behaviour.
//!
//! On mobile the sidebar is an overlay: a toggle opens it, and picking a
//! destination, tapping the overlay, or tapping anywhere outside closes it.
//! On desktop it is shown inline, so it is forced closed and the toggle hidden.
//!
//! Methods that depend on the viewport take the class as an argument; the
//! caller classifies the live width each time instead of the controller
//! caching it.

use crate::state::SidebarState;
use crate::viewport::ViewportClass;

/// Owns [`SidebarState`] and the toggle's visibility.
#[derive(Debug, Clone)]
pub struct SidebarController {
    state: SidebarState,
    nav_count: usize,
    toggle_visible: bool,
}

impl SidebarController {
    /// Creates a closed sidebar and adapts it to the initial viewport.
    ///
    /// An out-of-range `initial_active` is ignored.
    pub fn new(nav_count: usize, initial_active: Option<usize>, viewport: ViewportClass) -> Self {
        let mut controller = Self {
            state: SidebarState::new(initial_active.filter(|&i| i < nav_count)),
            nav_count,
            toggle_visible: false,
        };
        controller.on_viewport_change(viewport);
        controller
    }

    // ===== Queries =====

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn active_nav_index(&self) -> Option<usize> {
        self.state.active_nav_index()
    }

    pub fn is_nav_active(&self, index: usize) -> bool {
        self.state.is_nav_active(index)
    }

    /// Whether the toggle control is shown.
    pub fn toggle_visible(&self) -> bool {
        self.toggle_visible
    }

    /// Whether the dimming overlay behind the sidebar is active.
    pub fn overlay_active(&self) -> bool {
        self.state.is_open()
    }

    /// Whether page content scrolling is suspended.
    pub fn scroll_locked(&self) -> bool {
        self.state.is_open()
    }

    // ===== Transitions =====

    pub fn open(&mut self) {
        self.state.set_open(true);
    }

    pub fn close(&mut self) {
        self.state.set_open(false);
    }

    pub fn toggle(&mut self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Adapts to a new viewport class.
    pub fn on_viewport_change(&mut self, viewport: ViewportClass) {
        match viewport {
            ViewportClass::Desktop => {
                self.toggle_visible = false;
                self.close();
            }
            ViewportClass::Mobile => {
                self.toggle_visible = true;
            }
        }
    }

    /// Makes `index` the only active entry; on mobile also dismisses the overlay.
    ///
    /// Returns false and changes nothing when `index` is out of range.
    pub fn activate_nav_item(&mut self, index: usize, viewport: ViewportClass) -> bool {
        if index >= self.nav_count {
            tracing::debug!(index, nav_count = self.nav_count, "Ignoring out-of-range nav index");
            return false;
        }
        self.state.set_active(index);
        if viewport.is_mobile() {
            self.close();
        }
        true
    }

    /// Tap-away dismissal. Returns true if the sidebar was closed.
    pub fn on_outside_interaction(
        &mut self,
        inside_sidebar: bool,
        on_toggle: bool,
        viewport: ViewportClass,
    ) -> bool {
        if viewport.is_mobile() && self.state.is_open() && !inside_sidebar && !on_toggle {
            self.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ViewportClass::{Desktop, Mobile};

    #[test]
    fn test_desktop_start_hides_toggle() {
        let sidebar = SidebarController::new(5, Some(0), Desktop);
        assert!(!sidebar.toggle_visible());
        assert!(!sidebar.is_open());
        assert_eq!(sidebar.active_nav_index(), Some(0));
    }

    #[test]
    fn test_mobile_start_shows_toggle_closed() {
        let sidebar = SidebarController::new(5, None, Mobile);
        assert!(sidebar.toggle_visible());
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_initial_active_out_of_range_dropped() {
        let sidebar = SidebarController::new(2, Some(7), Mobile);
        assert_eq!(sidebar.active_nav_index(), None);
    }

    #[test]
    fn test_toggle_and_presentation_flags() {
        let mut sidebar = SidebarController::new(5, None, Mobile);
        sidebar.toggle();
        assert!(sidebar.is_open());
        assert!(sidebar.overlay_active());
        assert!(sidebar.scroll_locked());
        sidebar.toggle();
        assert!(!sidebar.is_open());
        assert!(!sidebar.overlay_active());
        assert!(!sidebar.scroll_locked());
    }

    #[test]
    fn test_desktop_forces_closed() {
        let mut sidebar = SidebarController::new(5, None, Mobile);
        sidebar.open();
        sidebar.on_viewport_change(Desktop);
        assert!(!sidebar.is_open());
        assert!(!sidebar.toggle_visible());
    }

    #[test]
    fn test_mobile_transition_keeps_open_flag() {
        let mut sidebar = SidebarController::new(5, None, Mobile);
        sidebar.open();
        sidebar.on_viewport_change(Mobile);
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_open_on_desktop_still_sets_flag() {
        let mut sidebar = SidebarController::new(5, None, Desktop);
        sidebar.open();
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_nav_activation_is_exclusive() {
        let mut sidebar = SidebarController::new(5, Some(0), Desktop);
        assert!(sidebar.activate_nav_item(1, Desktop));
        assert!(sidebar.activate_nav_item(3, Desktop));
        assert_eq!(sidebar.active_nav_index(), Some(3));
        assert_eq!((0..5).filter(|&i| sidebar.is_nav_active(i)).count(), 1);
    }

    #[test]
    fn test_nav_activation_closes_only_on_mobile() {
        let mut sidebar = SidebarController::new(5, None, Mobile);
        sidebar.open();
        sidebar.activate_nav_item(2, Mobile);
        assert!(!sidebar.is_open());

        sidebar.open();
        sidebar.activate_nav_item(1, Desktop);
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_out_of_range_nav_is_ignored() {
        let mut sidebar = SidebarController::new(5, Some(1), Mobile);
        sidebar.open();
        assert!(!sidebar.activate_nav_item(5, Mobile));
        assert_eq!(sidebar.active_nav_index(), Some(1));
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_outside_interaction_rules() {
        let mut sidebar = SidebarController::new(5, None, Mobile);
        sidebar.open();

        assert!(!sidebar.on_outside_interaction(true, false, Mobile));
        assert!(!sidebar.on_outside_interaction(false, true, Mobile));
        assert!(!sidebar.on_outside_interaction(false, false, Desktop));
        assert!(sidebar.is_open());

        assert!(sidebar.on_outside_interaction(false, false, Mobile));
        assert!(!sidebar.is_open());

        // Closing again is a no-op
        assert!(!sidebar.on_outside_interaction(false, false, Mobile));
        assert!(!sidebar.is_open());
    }
}
