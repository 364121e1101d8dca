//! Plain UI state records.
//!
//! Each record is owned by exactly one controller in [`crate::app`]:
//! - Theme state (light or dark)
//! - Sidebar state (open flag, active navigation entry)
//! - Row selection (at most one selected table row)

mod theme_state;
mod sidebar_state;
mod selection;

pub use theme_state::ThemeState;
pub use sidebar_state::SidebarState;
pub use selection::RowSelection;
