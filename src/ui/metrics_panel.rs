//! Metric cards
//!
//! A responsive grid of summary cards. Hovered cards lift slightly.

use eframe::egui;
use egui::{vec2, Align2, Color32, FontId, Sense, Stroke, StrokeKind};
use pulseboard::{InteractionDecorator, Metric, ThemeColors, Trend};

const CARD_HEIGHT: f32 = 112.0;
const CARD_MIN_WIDTH: f32 = 220.0;
const CARD_GAP: f32 = 16.0;
const CARD_PADDING: f32 = 16.0;
const CARD_RADIUS: f32 = 8.0;

pub fn render_metrics(ui: &mut egui::Ui, metrics: &[Metric], colors: &ThemeColors) {
    if metrics.is_empty() {
        return;
    }

    let available = ui.available_width();
    let columns = (((available + CARD_GAP) / (CARD_MIN_WIDTH + CARD_GAP)).floor() as usize)
        .clamp(1, metrics.len());
    let card_width = (available - CARD_GAP * (columns - 1) as f32) / columns as f32;

    for row in metrics.chunks(columns) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CARD_GAP;
            for metric in row {
                render_card(ui, metric, card_width, colors);
            }
        });
        ui.add_space(CARD_GAP);
    }
}

fn render_card(ui: &mut egui::Ui, metric: &Metric, width: f32, colors: &ThemeColors) {
    let (rect, response) = ui.allocate_exact_size(vec2(width, CARD_HEIGHT), Sense::hover());

    let t = ui.ctx().animate_bool(response.id, response.hovered());
    let lift = InteractionDecorator::card_lift(true) * t;
    let card = rect.translate(vec2(0.0, -lift));

    let painter = ui.painter();
    if lift > 0.0 {
        painter.rect_filled(
            card.translate(vec2(0.0, lift)),
            CARD_RADIUS,
            Color32::from_black_alpha((24.0 * t) as u8),
        );
    }
    painter.rect_filled(card, CARD_RADIUS, colors.card_background);
    painter.rect_stroke(card, CARD_RADIUS, Stroke::new(1.0, colors.border), StrokeKind::Inside);

    let inner = card.shrink(CARD_PADDING);
    painter.text(inner.left_top(), Align2::LEFT_TOP, &metric.title, FontId::proportional(13.0), colors.text_dim);
    painter.text(inner.right_top(), Align2::RIGHT_TOP, &metric.icon, FontId::proportional(22.0), colors.text);
    painter.text(
        inner.left_center() + vec2(0.0, 2.0),
        Align2::LEFT_CENTER,
        &metric.value,
        FontId::proportional(26.0),
        colors.text,
    );

    let (arrow, color) = match metric.trend {
        Trend::Up => ("▲", colors.success),
        Trend::Down => ("▼", colors.danger),
    };
    painter.text(
        inner.left_bottom(),
        Align2::LEFT_BOTTOM,
        format!("{arrow} {}", metric.change),
        FontId::proportional(12.0),
        color,
    );
}
