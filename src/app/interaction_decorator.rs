//! Hover and selection affordances for metric cards and table rows.

use crate::state::RowSelection;

/// Vertical lift, in logical pixels, of a hovered metric card.
pub const CARD_HOVER_LIFT: f32 = 4.0;

/// Card hover is purely presentational; the only state kept is the selected row.
#[derive(Debug, Clone, Default)]
pub struct InteractionDecorator {
    card_count: usize,
    row_count: usize,
    selection: RowSelection,
}

impl InteractionDecorator {
    pub fn new(card_count: usize, row_count: usize) -> Self {
        Self {
            card_count,
            row_count,
            selection: RowSelection::new(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Upward offset for a card given its hover state.
    pub fn card_lift(hovered: bool) -> f32 {
        if hovered {
            CARD_HOVER_LIFT
        } else {
            0.0
        }
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    /// Marks a row selected, clearing the previous one.
    ///
    /// Returns false for rows that do not exist.
    pub fn select_row(&mut self, index: usize) -> bool {
        if index >= self.row_count {
            tracing::debug!(index, rows = self.row_count, "Ignoring click on unknown row");
            return false;
        }
        self.selection.select(index);
        true
    }
}
