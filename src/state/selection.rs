//! Table row selection.

/// Single-row selection over the table.
///
/// Selecting a row clears whichever row was selected before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: Option<usize>,
}

impl RowSelection {
    /// Creates a selection with nothing selected.
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Returns the selected row index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Selects a row, replacing any previous selection.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
