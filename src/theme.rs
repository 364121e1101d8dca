//! Color palettes for the dashboard.
//!
//! Two palettes exist, one per [`ThemeState`]. The theme controller decides
//! which one is active; this module only knows what each one looks like and
//! how to push it into egui's visuals.

use crate::state::ThemeState;
use egui::Color32;
use once_cell::sync::Lazy;

static LIGHT: Lazy<ThemeColors> = Lazy::new(light_palette);
static DARK: Lazy<ThemeColors> = Lazy::new(dark_palette);

/// Complete color palette for one theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Surfaces
    pub background: Color32,
    pub panel_background: Color32,
    pub card_background: Color32,
    pub overlay: Color32,

    // Foreground
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive
    pub primary: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub grid: Color32,

    // Semantic
    pub success: Color32,
    pub danger: Color32,
}

/// Returns the palette for a theme.
pub fn palette(theme: ThemeState) -> &'static ThemeColors {
    match theme {
        ThemeState::Light => &LIGHT,
        ThemeState::Dark => &DARK,
    }
}

/// Applies a palette on top of egui's base visuals for the same theme.
pub fn apply_theme(theme: ThemeState, visuals: &mut egui::Visuals) {
    let colors = palette(theme);

    visuals.panel_fill = colors.panel_background;
    visuals.window_fill = colors.card_background;
    visuals.extreme_bg_color = colors.background;
    visuals.faint_bg_color = colors.hover;
    visuals.override_text_color = Some(colors.text);

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = colors.primary;

    visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    visuals.widgets.inactive.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.active.bg_fill = colors.selection;

    visuals.hyperlink_color = colors.primary;
    visuals.error_fg_color = colors.danger;
}

fn light_palette() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#fcfcf9"),
        panel_background: hex_to_color32("#fcfcf9"),
        card_background: hex_to_color32("#fffffd"),
        overlay: Color32::from_black_alpha(128),

        text: hex_to_color32("#13343b"),
        text_dim: hex_to_color32("#626c71"),

        primary: hex_to_color32("#21808d"),
        selection: with_alpha(hex_to_color32("#21808d"), 40),
        hover: hex_to_color32("#ece9e2"),
        border: hex_to_color32("#d6d3cc"),
        grid: Color32::from_black_alpha(26),

        success: hex_to_color32("#21808d"),
        danger: hex_to_color32("#c0152f"),
    }
}

fn dark_palette() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#1f2121"),
        panel_background: hex_to_color32("#1f2121"),
        card_background: hex_to_color32("#262828"),
        overlay: Color32::from_black_alpha(160),

        text: hex_to_color32("#f5f5f5"),
        text_dim: hex_to_color32("#a7a9a9"),

        primary: hex_to_color32("#32b8c6"),
        selection: with_alpha(hex_to_color32("#32b8c6"), 48),
        hover: hex_to_color32("#333636"),
        border: hex_to_color32("#3d4040"),
        grid: Color32::from_white_alpha(26),

        success: hex_to_color32("#32b8c6"),
        danger: hex_to_color32("#ff5459"),
    }
}

/// Converts a hex color string (like "#1FB8CD") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::BLACK
    }
}

/// Returns the color with its alpha replaced (unmultiplied).
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#1FB8CD"), Color32::from_rgb(0x1f, 0xb8, 0xcd));
        assert_eq!(hex_to_color32("ffc185"), Color32::from_rgb(0xff, 0xc1, 0x85));
        assert_eq!(hex_to_color32("#abc"), Color32::BLACK);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(palette(ThemeState::Light).background, palette(ThemeState::Dark).background);
        assert_ne!(palette(ThemeState::Light).text, palette(ThemeState::Dark).text);
    }

    #[test]
    fn test_apply_overrides_text() {
        let mut visuals = egui::Visuals::dark();
        apply_theme(ThemeState::Dark, &mut visuals);
        assert_eq!(visuals.override_text_color, Some(palette(ThemeState::Dark).text));
        assert_eq!(visuals.panel_fill, palette(ThemeState::Dark).panel_background);
    }
}
