//! The headless table model behind [`crate::DataGrid`].

use crate::{
    column::{ColumnDef, ColumnId},
    pinning::PinSide,
    row::{RowId, RowRef},
    selection::RowSelectionMode,
    sizing::ResizeDrag,
    state::{GridOptions, GridState},
};

pub(crate) type RowIdFn<R> = dyn Fn(&R, usize) -> RowId;

/// A fully configured table: columns, data, state and options together.
///
/// This is what the grid lays out from, and what [`crate::Pagination`] drives.
/// All the derived values (visible row range, column order, pinned offsets)
/// are computed from the borrowed state on demand, so they always agree with it.
///
/// ```
/// use egui_data_grid::{ColumnDef, DataTable, GridOptions};
///
/// let columns = vec![
///     ColumnDef::selection(),
///     ColumnDef::accessor("title", "Title", |row: &String| row.clone()),
///     ColumnDef::accessor("id", "Id", |row: &String| row.len().to_string()).size(80.0),
/// ];
/// let rows: Vec<String> = (0..25).map(|i| format!("row {i}")).collect();
/// let options = GridOptions::default();
/// let mut state = options.initial_state();
///
/// let mut table = DataTable::new(&columns, &rows, &mut state, &options);
/// assert_eq!(table.page_rows().len(), 10);
/// assert_eq!(table.page_count(), 3);
///
/// // Pinned columns come first, in pin order.
/// let order: Vec<_> = table.visible_columns().iter().map(|c| c.id().as_str()).collect();
/// assert_eq!(order, ["select", "id", "title"]);
/// assert_eq!(table.column_start(&"id".into()), Some(40.0));
///
/// table.next_page();
/// assert_eq!(table.page_rows()[0].index, 10);
/// ```
pub struct DataTable<'a, R> {
    columns: &'a [ColumnDef<R>],
    data: &'a [R],
    state: &'a mut GridState,
    options: &'a GridOptions,
    row_id: Option<&'a RowIdFn<R>>,
}

impl<'a, R> DataTable<'a, R> {
    pub fn new(
        columns: &'a [ColumnDef<R>],
        data: &'a [R],
        state: &'a mut GridState,
        options: &'a GridOptions,
    ) -> Self {
        Self {
            columns,
            data,
            state,
            options,
            row_id: None,
        }
    }

    /// Key rows by `row_id(row, index)` instead of by their index.
    pub fn with_row_id(mut self, row_id: &'a RowIdFn<R>) -> Self {
        self.row_id = Some(row_id);
        self
    }

    #[inline]
    pub fn state(&self) -> &GridState {
        self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut GridState {
        self.state
    }

    #[inline]
    pub fn options(&self) -> &GridOptions {
        self.options
    }

    /// All column definitions, in the order they were given.
    #[inline]
    pub fn columns(&self) -> &'a [ColumnDef<R>] {
        self.columns
    }

    pub fn column(&self, id: &ColumnId) -> Option<&'a ColumnDef<R>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    // ------------------------------------------------------------------------
    // Rows

    #[inline]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn row_id(&self, index: usize) -> RowId {
        match (self.row_id, self.data.get(index)) {
            (Some(row_id), Some(row)) => row_id(row, index),
            _ => RowId::from(index),
        }
    }

    /// The rows of the current page, in data order.
    pub fn page_rows(&self) -> Vec<RowRef<'a, R>> {
        let data = self.data;
        self.state
            .pagination
            .page_range(data.len())
            .map(|index| RowRef {
                index,
                id: self.row_id(index),
                data: &data[index],
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Columns

    /// Columns in layout order: left-pinned (in pin order), unpinned
    /// (in definition order), then right-pinned (in pin order).
    pub fn visible_columns(&self) -> Vec<&'a ColumnDef<R>> {
        let pinning = &self.state.column_pinning;
        let left = pinning
            .columns(PinSide::Left)
            .iter()
            .filter_map(|id| self.column(id));
        let center = self
            .columns
            .iter()
            .filter(|c| !pinning.is_pinned(c.id()));
        let right = pinning
            .columns(PinSide::Right)
            .iter()
            .filter_map(|id| self.column(id));
        left.chain(center).chain(right).collect()
    }

    #[inline]
    pub fn pin_side(&self, column: &ColumnId) -> Option<PinSide> {
        self.state
            .column_pinning
            .side_of(column)
            .filter(|_| self.column(column).is_some())
    }

    #[inline]
    pub fn is_pinned(&self, column: &ColumnId) -> bool {
        self.pin_side(column).is_some()
    }

    /// Pin `column` to a side, or unpin it with `None`.
    pub fn pin_column(&mut self, column: &ColumnId, side: Option<PinSide>) {
        if self.column(column).is_none() {
            crate::log_or_panic!("Tried to pin unknown column {column:?}");
            return;
        }
        self.state.column_pinning.pin(column.clone(), side);
    }

    /// Current width of a column in points. Zero for unknown columns.
    pub fn column_size(&self, column: &ColumnId) -> f32 {
        self.column(column).map_or(0.0, |def| self.def_size(def))
    }

    fn def_size(&self, def: &ColumnDef<R>) -> f32 {
        self.state
            .column_sizing
            .size(def.id(), def.default_size(), def.size_range())
    }

    /// Distance from the left edge of the grid to a left-pinned column.
    pub fn column_start(&self, column: &ColumnId) -> Option<f32> {
        if self.pin_side(column)? != PinSide::Left {
            return None;
        }
        self.state
            .column_pinning
            .offset(column, |id| self.column(id).map(|def| self.def_size(def)))
    }

    /// Distance from the right edge of the grid to a right-pinned column.
    pub fn column_after(&self, column: &ColumnId) -> Option<f32> {
        if self.pin_side(column)? != PinSide::Right {
            return None;
        }
        self.state
            .column_pinning
            .offset(column, |id| self.column(id).map(|def| self.def_size(def)))
    }

    /// Width of all columns together.
    pub fn total_size(&self) -> f32 {
        self.columns.iter().map(|def| self.def_size(def)).sum()
    }

    fn side_size(&self, side: PinSide) -> f32 {
        self.state
            .column_pinning
            .columns(side)
            .iter()
            .filter_map(|id| self.column(id))
            .map(|def| self.def_size(def))
            .sum()
    }

    /// Width of the columns pinned left.
    #[inline]
    pub fn left_total_size(&self) -> f32 {
        self.side_size(PinSide::Left)
    }

    /// Width of the columns pinned right.
    #[inline]
    pub fn right_total_size(&self) -> f32 {
        self.side_size(PinSide::Right)
    }

    // ------------------------------------------------------------------------
    // Resizing

    pub fn can_resize(&self, column: &ColumnId) -> bool {
        self.options.column_resizing && self.column(column).is_some_and(|def| def.is_resizable())
    }

    /// Start resizing `column` from pointer position `pointer_x`.
    pub fn begin_resize(&mut self, column: &ColumnId, pointer_x: f32) {
        if !self.can_resize(column) {
            return;
        }
        let size = self.column_size(column);
        self.state
            .column_sizing
            .begin(column.clone(), pointer_x, size);
    }

    /// Move the active resize handle to `pointer_x`.
    pub fn drag_resize(&mut self, pointer_x: f32) {
        let Some(range) = self.drag_range() else {
            return;
        };
        self.state
            .column_sizing
            .update(pointer_x, self.options.resize_mode, range);
    }

    /// Release the active resize handle, committing the new width.
    pub fn finish_resize(&mut self) -> Option<(ColumnId, f32)> {
        let Some(range) = self.drag_range() else {
            // The column went away mid-drag.
            self.state.column_sizing.cancel();
            return None;
        };
        let committed = self.state.column_sizing.finish(range);
        if let Some((column, size)) = &committed {
            log::debug!("Column {column} resized to {size}");
        }
        committed
    }

    fn drag_range(&self) -> Option<egui::Rangef> {
        let drag = self.state.column_sizing.drag()?;
        self.column(&drag.column).map(|def| def.size_range())
    }

    /// The resize drag in progress, if any.
    #[inline]
    pub fn resize_drag(&self) -> Option<&ResizeDrag> {
        self.state.column_sizing.drag()
    }

    #[inline]
    pub fn is_resizing(&self, column: &ColumnId) -> bool {
        self.state.column_sizing.is_resizing(column)
    }

    /// How far the handle of `column` has been dragged, `0.0` when it isn't.
    #[inline]
    pub fn resize_delta(&self, column: &ColumnId) -> f32 {
        self.state.column_sizing.delta(column)
    }

    /// Go back to the width the column was defined with.
    pub fn reset_column_size(&mut self, column: &ColumnId) {
        self.state.column_sizing.reset(column);
    }

    // ------------------------------------------------------------------------
    // Selection

    #[inline]
    pub fn is_row_selected(&self, row: &RowId) -> bool {
        self.state.row_selection.is_selected(row)
    }

    /// Flip the selection of a row, honoring the selection mode.
    pub fn toggle_row_selected(&mut self, row: &RowId) {
        let selected = self
            .state
            .row_selection
            .toggle(row.clone(), self.options.selection_mode);
        log::debug!("Row {row} selected: {selected}");
    }

    /// Number of selected rows that are still in the data.
    ///
    /// Selections of rows that went away are kept, but not counted.
    pub fn selected_row_count(&self) -> usize {
        let selection = &self.state.row_selection;
        if selection.is_empty() {
            return 0;
        }
        (0..self.row_count())
            .filter(|&index| selection.is_selected(&self.row_id(index)))
            .count()
    }

    pub fn is_all_page_rows_selected(&self) -> bool {
        let rows = self.page_rows();
        !rows.is_empty() && rows.iter().all(|row| self.is_row_selected(&row.id))
    }

    pub fn is_some_page_rows_selected(&self) -> bool {
        let rows = self.page_rows();
        let selected = rows.iter().filter(|row| self.is_row_selected(&row.id)).count();
        selected > 0 && selected < rows.len()
    }

    /// Select every row of the current page, or deselect them if they all are.
    ///
    /// Does nothing in [`RowSelectionMode::Single`].
    pub fn toggle_all_page_rows_selected(&mut self) {
        if self.options.selection_mode == RowSelectionMode::Single {
            return;
        }
        let select = !self.is_all_page_rows_selected();
        for row in self.page_rows() {
            self.state
                .row_selection
                .set_selected(row.id, select, RowSelectionMode::Multi);
        }
    }

    // ------------------------------------------------------------------------
    // Pagination

    #[inline]
    pub fn page_index(&self) -> usize {
        self.state.pagination.page_index()
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.state.pagination.page_size()
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.state.pagination.page_count(self.row_count())
    }

    #[inline]
    pub fn can_previous_page(&self) -> bool {
        self.state.pagination.can_previous_page()
    }

    #[inline]
    pub fn can_next_page(&self) -> bool {
        self.state.pagination.can_next_page(self.row_count())
    }

    pub fn previous_page(&mut self) {
        self.state.pagination.previous_page();
        self.log_page();
    }

    pub fn next_page(&mut self) {
        let row_count = self.row_count();
        self.state.pagination.next_page(row_count);
        self.log_page();
    }

    pub fn first_page(&mut self) {
        self.state.pagination.first_page();
        self.log_page();
    }

    pub fn last_page(&mut self) {
        let row_count = self.row_count();
        self.state.pagination.last_page(row_count);
        self.log_page();
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        let row_count = self.row_count();
        self.state.pagination.set_page_index(page_index, row_count);
        self.log_page();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.pagination.set_page_size(page_size);
        self.log_page();
    }

    fn log_page(&self) {
        log::debug!(
            "Showing page {} of {} ({} rows per page)",
            self.page_index() + 1,
            self.page_count(),
            self.page_size()
        );
    }

    /// Bring the state in line with the current data: the page index must point
    /// at an existing page.
    pub(crate) fn sync_with_data(&mut self) {
        let row_count = self.row_count();
        if self.state.pagination.clamp(row_count) {
            log::debug!("Row count shrank to {row_count}, moved to the last page");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnResizeMode, ColumnPinningState};

    struct Task {
        key: &'static str,
    }

    fn columns() -> Vec<ColumnDef<Task>> {
        vec![
            ColumnDef::accessor("title", "Title", |t: &Task| t.key.to_owned()).size(200.0),
            ColumnDef::accessor("id", "Task", |t: &Task| t.key.to_owned()).size(100.0),
            ColumnDef::selection(),
            ColumnDef::accessor("status", "Status", |t: &Task| t.key.to_owned()),
        ]
    }

    fn tasks(n: usize) -> Vec<Task> {
        const KEYS: [&str; 4] = ["a", "b", "c", "d"];
        (0..n).map(|i| Task { key: KEYS[i % 4] }).collect()
    }

    fn ids<R>(columns: &[&ColumnDef<R>]) -> Vec<String> {
        columns.iter().map(|c| c.id().to_string()).collect()
    }

    #[test]
    fn pinned_columns_lead_regardless_of_definition_order() {
        let columns = columns();
        let data = tasks(3);
        let options = GridOptions::default();
        let mut state = options.initial_state();
        let table = DataTable::new(&columns, &data, &mut state, &options);

        assert_eq!(ids(&table.visible_columns()), ["select", "id", "title", "status"]);
        assert_eq!(table.column_start(&"select".into()), Some(0.0));
        assert_eq!(table.column_start(&"id".into()), Some(40.0));
        assert_eq!(table.column_start(&"title".into()), None);
        assert_eq!(table.left_total_size(), 140.0);
        assert_eq!(table.total_size(), 40.0 + 100.0 + 200.0 + 150.0);
    }

    #[test]
    fn right_pinned_columns_trail() {
        let columns = columns();
        let data = tasks(3);
        let options = GridOptions::default()
            .initial_pinning(ColumnPinningState::left(["select"]).with_right(["title", "id"]));
        let mut state = options.initial_state();
        let table = DataTable::new(&columns, &data, &mut state, &options);

        assert_eq!(ids(&table.visible_columns()), ["select", "status", "title", "id"]);
        assert_eq!(table.column_after(&"id".into()), Some(0.0));
        assert_eq!(table.column_after(&"title".into()), Some(100.0));
        assert_eq!(table.right_total_size(), 300.0);
    }

    #[test]
    fn single_selection_across_clicks() {
        let columns = columns();
        let data = tasks(5);
        let options = GridOptions::default();
        let mut state = options.initial_state();
        let mut table = DataTable::new(&columns, &data, &mut state, &options);

        table.toggle_row_selected(&RowId::from(1));
        table.toggle_row_selected(&RowId::from(4));

        assert_eq!(table.selected_row_count(), 1);
        assert!(table.is_row_selected(&RowId::from(4)));
        assert!(!table.is_row_selected(&RowId::from(1)));

        table.toggle_all_page_rows_selected();
        assert_eq!(table.selected_row_count(), 1, "select-all is a no-op in single mode");
    }

    #[test]
    fn selection_of_removed_rows_is_not_counted() {
        let columns = columns();
        let options = GridOptions::default();
        let mut state = options.initial_state();

        let data = tasks(5);
        let mut table = DataTable::new(&columns, &data, &mut state, &options);
        table.toggle_row_selected(&RowId::from(4));
        assert_eq!(table.selected_row_count(), 1);

        let data = tasks(3);
        let mut table = DataTable::new(&columns, &data, &mut state, &options);
        table.sync_with_data();
        assert_eq!(table.selected_row_count(), 0);

        let data = tasks(0);
        let mut table = DataTable::new(&columns, &data, &mut state, &options);
        table.sync_with_data();
        assert!(table.selected_row_count() <= table.row_count());

        let data = tasks(5);
        let table = DataTable::new(&columns, &data, &mut state, &options);
        assert_eq!(table.selected_row_count(), 1, "the row is selected again once it is back");
    }

    #[test]
    fn multi_selection_select_all_page() {
        let columns = columns();
        let data = tasks(15);
        let options = GridOptions::default().selection_mode(RowSelectionMode::Multi);
        let mut state = options.initial_state();
        let mut table = DataTable::new(&columns, &data, &mut state, &options);

        table.toggle_row_selected(&RowId::from(0));
        assert!(table.is_some_page_rows_selected());

        table.toggle_all_page_rows_selected();
        assert!(table.is_all_page_rows_selected());
        assert_eq!(table.selected_row_count(), 10);

        table.toggle_all_page_rows_selected();
        assert_eq!(table.selected_row_count(), 0);
    }

    #[test]
    fn custom_row_ids() {
        let columns = columns();
        let data = tasks(3);
        let options = GridOptions::default();
        let mut state = options.initial_state();
        let row_id = |task: &Task, _index: usize| RowId::from(task.key);
        let table = DataTable::new(&columns, &data, &mut state, &options).with_row_id(&row_id);

        let page: Vec<_> = table.page_rows().into_iter().map(|r| r.id).collect();
        assert_eq!(page, [RowId::from("a"), RowId::from("b"), RowId::from("c")]);
    }

    #[test]
    fn resize_changes_only_the_dragged_column() {
        let columns = columns();
        let data = tasks(3);
        let options = GridOptions::default();
        let mut state = options.initial_state();
        let mut table = DataTable::new(&columns, &data, &mut state, &options);

        let before: Vec<f32> = columns.iter().map(|c| table.column_size(c.id())).collect();

        let title = ColumnId::from("title");
        table.begin_resize(&title, 500.0);
        table.drag_resize(530.0);
        assert_eq!(table.resize_delta(&title), 30.0);
        assert_eq!(table.column_size(&title), 200.0, "deferred mode waits for release");

        assert_eq!(table.finish_resize(), Some((title.clone(), 230.0)));

        for (column, before) in columns.iter().zip(before) {
            let expected = if column.id() == &title { before + 30.0 } else { before };
            assert_eq!(table.column_size(column.id()), expected);
        }
    }

    #[test]
    fn pinned_offsets_follow_resized_widths() {
        let columns = columns();
        let data = tasks(3);
        let options = GridOptions::default().resize_mode(ColumnResizeMode::Live);
        let mut state = options.initial_state();
        let mut table = DataTable::new(&columns, &data, &mut state, &options);

        table.begin_resize(&"id".into(), 0.0);
        table.drag_resize(-30.0);
        assert_eq!(table.column_size(&"id".into()), 70.0);
        table.finish_resize();

        table.pin_column(&"title".into(), Some(PinSide::Left));
        assert_eq!(table.column_start(&"title".into()), Some(40.0 + 70.0));
    }

    #[test]
    fn non_resizable_columns_ignore_drags() {
        let columns = columns();
        let data = tasks(3);
        let options = GridOptions::default();
        let mut state = options.initial_state();
        let mut table = DataTable::new(&columns, &data, &mut state, &options);

        table.begin_resize(&"select".into(), 10.0);
        assert!(table.resize_drag().is_none());

        let options = GridOptions::default().column_resizing(false);
        let mut state = options.initial_state();
        let mut table = DataTable::new(&columns, &data, &mut state, &options);
        table.begin_resize(&"title".into(), 10.0);
        assert!(table.resize_drag().is_none());
    }

    #[test]
    fn page_rows_respect_page_size() {
        let columns = columns();
        let data = tasks(23);
        let options = GridOptions::default();
        let mut state = options.initial_state();
        let mut table = DataTable::new(&columns, &data, &mut state, &options);

        assert_eq!(table.page_rows().len(), 10);
        table.last_page();
        let last: Vec<_> = table.page_rows().iter().map(|r| r.index).collect();
        assert_eq!(last, (20..23).collect::<Vec<_>>());

        table.set_page_size(20);
        assert_eq!(table.page_index(), 1);
        assert_eq!(table.page_rows().len(), 3);
    }

    #[test]
    fn page_index_is_clamped_when_data_shrinks() {
        let columns = columns();
        let data = tasks(40);
        let options = GridOptions::default();
        let mut state = options.initial_state();
        DataTable::new(&columns, &data, &mut state, &options).last_page();
        assert_eq!(state.pagination.page_index(), 3);

        let fewer = tasks(12);
        let mut table = DataTable::new(&columns, &fewer, &mut state, &options);
        table.sync_with_data();
        assert_eq!(table.page_index(), 1);
        assert_eq!(table.page_rows().len(), 2);
    }
}
