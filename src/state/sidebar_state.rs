//! Sidebar open flag and active navigation entry.

/// State of the sidebar.
///
/// Invariant: at most one navigation entry is active; activating an entry
/// replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    is_open: bool,
    active_nav_index: Option<usize>,
}

impl SidebarState {
    /// Creates a closed sidebar with an optional pre-selected entry.
    pub fn new(active_nav_index: Option<usize>) -> Self {
        Self {
            is_open: false,
            active_nav_index,
        }
    }

    // ===== Queries =====

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn active_nav_index(&self) -> Option<usize> {
        self.active_nav_index
    }

    pub fn is_nav_active(&self, index: usize) -> bool {
        self.active_nav_index == Some(index)
    }

    // ===== Mutations =====

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Makes `index` the only active entry.
    pub fn set_active(&mut self, index: usize) {
        self.active_nav_index = Some(index);
    }
}
