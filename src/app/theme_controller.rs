//! Theme toggling and application.

use crate::state::ThemeState;

/// Owns the theme and everything the document shows about it.
///
/// Applying a theme writes the color-scheme attribute, requests a layout
/// flush so cached transitions are discarded, and refreshes the toggle icon
/// when the icon slot is mounted.
#[derive(Debug, Clone)]
pub struct ThemeController {
    state: ThemeState,
    /// Document color-scheme attribute
    attribute: &'static str,
    /// Icon text; `None` while no icon slot is mounted
    icon: Option<&'static str>,
    icon_mounted: bool,
    layout_flushes: u64,
}

impl ThemeController {
    /// Creates the controller and applies the default light theme.
    pub fn new(icon_mounted: bool) -> Self {
        let mut controller = Self {
            state: ThemeState::Light,
            attribute: ThemeState::Light.attribute_value(),
            icon: None,
            icon_mounted,
            layout_flushes: 0,
        };
        controller.apply();
        controller
    }

    // ===== Queries =====

    pub fn current_theme(&self) -> ThemeState {
        self.state
    }

    /// Value of the document's color-scheme attribute.
    pub fn document_attribute(&self) -> &'static str {
        self.attribute
    }

    /// Glyph shown in the toggle, if the icon slot exists.
    pub fn icon(&self) -> Option<&'static str> {
        self.icon
    }

    /// How many layout flushes have been requested so far.
    pub fn layout_flushes(&self) -> u64 {
        self.layout_flushes
    }

    // ===== Mutations =====

    /// Flips between light and dark and returns the new theme.
    pub fn toggle(&mut self) -> ThemeState {
        self.state = self.state.toggled();
        self.apply();
        tracing::debug!(theme = self.attribute, "Theme toggled");
        self.state
    }

    fn apply(&mut self) {
        self.attribute = self.state.attribute_value();
        self.layout_flushes += 1;
        self.update_icon();
    }

    fn update_icon(&mut self) {
        if !self.icon_mounted {
            tracing::debug!("Theme icon slot not mounted, skipping icon update");
            return;
        }
        self.icon = Some(self.state.icon());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_light() {
        let theme = ThemeController::new(true);
        assert_eq!(theme.current_theme(), ThemeState::Light);
        assert_eq!(theme.document_attribute(), "light");
        assert_eq!(theme.icon(), Some("🌙"));
        assert_eq!(theme.layout_flushes(), 1);
    }

    #[test]
    fn test_toggle_updates_attribute_and_icon() {
        let mut theme = ThemeController::new(true);
        assert_eq!(theme.toggle(), ThemeState::Dark);
        assert_eq!(theme.document_attribute(), "dark");
        assert_eq!(theme.icon(), Some("☀️"));
        assert_eq!(theme.layout_flushes(), 2);
    }

    #[test]
    fn test_double_toggle_restores_state_and_icon() {
        let mut theme = ThemeController::new(true);
        let before = (theme.current_theme(), theme.document_attribute(), theme.icon());
        theme.toggle();
        theme.toggle();
        assert_eq!((theme.current_theme(), theme.document_attribute(), theme.icon()), before);
    }

    #[test]
    fn test_missing_icon_slot_is_skipped() {
        let mut theme = ThemeController::new(false);
        assert_eq!(theme.icon(), None);
        theme.toggle();
        assert_eq!(theme.current_theme(), ThemeState::Dark);
        assert_eq!(theme.document_attribute(), "dark");
        assert_eq!(theme.icon(), None);
    }
}
