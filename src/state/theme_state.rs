//! Two-valued color theme.

/// The document-wide color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    /// Value written to the document's color-scheme attribute.
    pub fn attribute_value(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    /// Parses a color-scheme attribute value.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeState::Light),
            "dark" => Some(ThemeState::Dark),
            _ => None,
        }
    }

    /// Glyph shown on the theme toggle: it offers the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeState::Light => "🌙",
            ThemeState::Dark => "☀️",
        }
    }

    /// Hover text for the theme toggle.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            ThemeState::Light => "Switch to dark theme",
            ThemeState::Dark => "Switch to light theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for theme in [ThemeState::Light, ThemeState::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_attribute_roundtrip() {
        for theme in [ThemeState::Light, ThemeState::Dark] {
            assert_eq!(ThemeState::from_attribute(theme.attribute_value()), Some(theme));
        }
        assert_eq!(ThemeState::from_attribute("sepia"), None);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeState::default(), ThemeState::Light);
        assert_eq!(ThemeState::Light.icon(), "🌙");
        assert_eq!(ThemeState::Dark.icon(), "☀️");
    }
}
