//! Input handling subsystem for UI interactions.
//!
//! - Pointer clicks anywhere in the window (outside-click dismissal of the sidebar)

pub mod pointer_input;
