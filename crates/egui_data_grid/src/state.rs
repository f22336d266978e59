use egui::{Id, Rect, Ui, Vec2};

use crate::{
    column::{ID_COLUMN_ID, SELECT_COLUMN_ID},
    pagination::{DEFAULT_PAGE_SIZE, PaginationState},
    pinning::ColumnPinningState,
    selection::{RowSelectionMode, RowSelectionState},
    sizing::{ColumnResizeMode, ColumnSizingState},
};

/// Configuration of a [`crate::DataGrid`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GridOptions {
    pub selection_mode: RowSelectionMode,

    /// Can columns be resized at all? Individual columns may still opt out.
    pub column_resizing: bool,

    pub resize_mode: ColumnResizeMode,

    /// Pinning the grid starts out with, before the user changes anything.
    pub initial_pinning: ColumnPinningState,

    pub initial_page_size: usize,

    /// Choices offered by [`crate::Pagination`].
    pub page_size_options: Vec<usize>,

    pub header_height: f32,
    pub row_height: f32,

    /// Height of the "No results." row shown for an empty table.
    pub empty_row_height: f32,

    /// Horizontal padding inside each cell.
    pub cell_padding: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            selection_mode: RowSelectionMode::Single,
            column_resizing: true,
            resize_mode: ColumnResizeMode::Deferred,
            initial_pinning: ColumnPinningState::left([SELECT_COLUMN_ID, ID_COLUMN_ID]),
            initial_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 30, 40, 50],
            header_height: 40.0,
            row_height: 40.0,
            empty_row_height: 96.0,
            cell_padding: 8.0,
        }
    }
}

impl GridOptions {
    #[inline]
    pub fn selection_mode(mut self, selection_mode: RowSelectionMode) -> Self {
        self.selection_mode = selection_mode;
        self
    }

    #[inline]
    pub fn column_resizing(mut self, column_resizing: bool) -> Self {
        self.column_resizing = column_resizing;
        self
    }

    #[inline]
    pub fn resize_mode(mut self, resize_mode: ColumnResizeMode) -> Self {
        self.resize_mode = resize_mode;
        self
    }

    #[inline]
    pub fn initial_pinning(mut self, pinning: ColumnPinningState) -> Self {
        self.initial_pinning = pinning;
        self
    }

    #[inline]
    pub fn initial_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }

    #[inline]
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    #[inline]
    pub fn row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    #[inline]
    pub fn header_height(mut self, header_height: f32) -> Self {
        self.header_height = header_height;
        self
    }

    #[inline]
    pub fn empty_row_height(mut self, empty_row_height: f32) -> Self {
        self.empty_row_height = empty_row_height;
        self
    }

    #[inline]
    pub fn cell_padding(mut self, cell_padding: f32) -> Self {
        self.cell_padding = cell_padding;
        self
    }

    /// A fresh [`GridState`] for these options.
    pub fn initial_state(&self) -> GridState {
        GridState {
            row_selection: RowSelectionState::default(),
            column_pinning: self.initial_pinning.clone(),
            column_sizing: ColumnSizingState::default(),
            pagination: PaginationState::new(self.initial_page_size),
        }
    }
}

// ----------------------------------------------------------------------------

/// Everything a grid remembers between frames.
///
/// [`crate::DataGrid::show`] keeps this in egui memory. Use
/// [`crate::DataGrid::show_with_state`] to own it yourself.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GridState {
    pub row_selection: RowSelectionState,
    pub column_pinning: ColumnPinningState,
    pub column_sizing: ColumnSizingState,
    pub pagination: PaginationState,
}

impl GridState {
    pub(crate) fn load(ui: &Ui, state_id: Id, options: &GridOptions) -> Self {
        let rect = Rect::from_min_size(ui.available_rect_before_wrap().min, Vec2::ZERO);
        ui.ctx().check_for_id_clash(state_id, rect, "DataGrid");

        #[cfg(feature = "serde")]
        let state = ui.data_mut(|d| d.get_persisted::<Self>(state_id));
        #[cfg(not(feature = "serde"))]
        let state = ui.data_mut(|d| d.get_temp::<Self>(state_id));

        state.unwrap_or_else(|| options.initial_state())
    }

    pub(crate) fn store(self, ui: &Ui, state_id: Id) {
        #![expect(clippy::needless_return)]
        #[cfg(feature = "serde")]
        {
            return ui.data_mut(|d| d.insert_persisted(state_id, self));
        }
        #[cfg(not(feature = "serde"))]
        {
            return ui.data_mut(|d| d.insert_temp(state_id, self));
        }
    }

    pub(crate) fn reset(ui: &Ui, state_id: Id) {
        ui.data_mut(|d| d.remove::<Self>(state_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinning::PinSide;

    #[test]
    fn default_options_pin_selector_and_id() {
        let state = GridOptions::default().initial_state();
        let left: Vec<_> = state
            .column_pinning
            .columns(PinSide::Left)
            .iter()
            .map(|c| c.as_str())
            .collect();
        assert_eq!(left, [SELECT_COLUMN_ID, ID_COLUMN_ID]);
        assert!(state.column_pinning.columns(PinSide::Right).is_empty());
        assert_eq!(state.pagination.page_size(), 10);
        assert!(state.row_selection.is_empty());
    }

    #[test]
    fn layout_setters() {
        let options = GridOptions::default()
            .header_height(32.0)
            .row_height(28.0)
            .empty_row_height(120.0)
            .cell_padding(4.0);
        assert_eq!(options.header_height, 32.0);
        assert_eq!(options.row_height, 28.0);
        assert_eq!(options.empty_row_height, 120.0);
        assert_eq!(options.cell_padding, 4.0);
    }

    #[test]
    fn initial_page_size_is_respected() {
        let state = GridOptions::default().initial_page_size(25).initial_state();
        assert_eq!(state.pagination.page_size(), 25);
    }
}
