use crate::row::RowId;

/// How many rows may be selected at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RowSelectionMode {
    /// Selecting a row clears any other selection.
    #[default]
    Single,

    /// Rows are toggled independently.
    Multi,
}

/// Which rows are selected, keyed by [`RowId`].
///
/// Only selected rows are stored.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RowSelectionState {
    rows: ahash::HashMap<RowId, bool>,
}

impl RowSelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_selected(&self, row: &RowId) -> bool {
        self.rows.get(row).copied().unwrap_or(false)
    }

    /// Number of selected rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected row ids, in no particular order.
    pub fn selected(&self) -> impl Iterator<Item = &RowId> {
        self.rows.keys()
    }

    /// Select or deselect one row.
    ///
    /// In [`RowSelectionMode::Single`], selecting a row deselects every other row first.
    pub fn set_selected(&mut self, row: RowId, selected: bool, mode: RowSelectionMode) {
        if !selected {
            self.rows.remove(&row);
            return;
        }
        if mode == RowSelectionMode::Single {
            self.rows.clear();
        }
        self.rows.insert(row, true);
    }

    /// Flip the selection of one row. Returns the new selection state of that row.
    pub fn toggle(&mut self, row: RowId, mode: RowSelectionMode) -> bool {
        let selected = !self.is_selected(&row);
        self.set_selected(row, selected, mode);
        selected
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Drop selections for rows that no longer exist.
    pub fn retain(&mut self, mut exists: impl FnMut(&RowId) -> bool) {
        self.rows.retain(|row, _| exists(row));
    }
}
