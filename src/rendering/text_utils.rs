//! Text measurement helpers.

use eframe::egui;

/// Shortens `text` with a trailing ellipsis until it fits in `max_width`.
///
/// Returns the text unchanged when it already fits, and an empty string when
/// not even the ellipsis fits.
pub fn fit_text(painter: &egui::Painter, text: &str, max_width: f32, font_id: &egui::FontId) -> String {
    let width_of = |s: &str| {
        painter
            .layout_no_wrap(s.to_owned(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if width_of(text) <= max_width {
        return text.to_owned();
    }

    const ELLIPSIS: &str = "…";
    let budget = max_width - width_of(ELLIPSIS);
    if budget <= 0.0 {
        return String::new();
    }

    // Largest prefix (in chars) that fits the budget
    let chars: Vec<char> = text.chars().collect();
    let (mut low, mut high) = (0usize, chars.len());
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = chars[..mid].iter().collect();
        if width_of(&prefix) <= budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = chars[..low].iter().collect();
    result.push_str(ELLIPSIS);
    result
}
