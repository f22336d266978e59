use std::fmt;

use egui::{Rangef, Ui};

use crate::row::RowId;

/// Identifier of the built-in checkbox column, see [`ColumnDef::selection`].
pub const SELECT_COLUMN_ID: &str = "select";

/// Identifier conventionally used for the row identifier column.
///
/// [`crate::GridOptions::default`] pins this column and [`SELECT_COLUMN_ID`] to the left.
pub const ID_COLUMN_ID: &str = "id";

/// Width of a column that never specified one.
pub(crate) const DEFAULT_COLUMN_SIZE: f32 = 150.0;

/// A column can never be resized below this.
pub(crate) const DEFAULT_MIN_COLUMN_SIZE: f32 = 20.0;

const SELECT_COLUMN_SIZE: f32 = 40.0;

// ----------------------------------------------------------------------------

/// Identifies a column. Pinning and sizing state refer to columns by this id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ColumnId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ColumnId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColumnId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ----------------------------------------------------------------------------

/// What a header renderer gets to see, and how it asks for changes.
///
/// Requests are applied by the grid after the header row has been painted.
pub struct HeaderContext<'a> {
    column: &'a ColumnId,
    multi_row_selection: bool,
    all_page_rows_selected: bool,
    some_page_rows_selected: bool,
    toggle_all_page_rows: bool,
}

impl<'a> HeaderContext<'a> {
    pub(crate) fn new(
        column: &'a ColumnId,
        multi_row_selection: bool,
        all_page_rows_selected: bool,
        some_page_rows_selected: bool,
    ) -> Self {
        Self {
            column,
            multi_row_selection,
            all_page_rows_selected,
            some_page_rows_selected,
            toggle_all_page_rows: false,
        }
    }

    #[inline]
    pub fn column(&self) -> &ColumnId {
        self.column
    }

    /// Can more than one row be selected at a time?
    #[inline]
    pub fn multi_row_selection(&self) -> bool {
        self.multi_row_selection
    }

    #[inline]
    pub fn all_page_rows_selected(&self) -> bool {
        self.all_page_rows_selected
    }

    /// At least one, but not every, row on the current page is selected.
    #[inline]
    pub fn some_page_rows_selected(&self) -> bool {
        self.some_page_rows_selected
    }

    /// Select every row on the current page, or clear them if they already are.
    ///
    /// Ignored unless [`Self::multi_row_selection`] is `true`.
    #[inline]
    pub fn request_toggle_all_page_rows(&mut self) {
        self.toggle_all_page_rows = true;
    }

    pub(crate) fn wants_toggle_all_page_rows(&self) -> bool {
        self.toggle_all_page_rows
    }
}

/// What a cell renderer gets to see, and how it asks for changes.
pub struct CellContext<'a, R> {
    row: &'a R,
    row_id: &'a RowId,
    row_index: usize,
    column: &'a ColumnId,
    selected: bool,
    toggle_selected: bool,
}

impl<'a, R> CellContext<'a, R> {
    pub(crate) fn new(
        row: &'a R,
        row_id: &'a RowId,
        row_index: usize,
        column: &'a ColumnId,
        selected: bool,
    ) -> Self {
        Self {
            row,
            row_id,
            row_index,
            column,
            selected,
            toggle_selected: false,
        }
    }

    #[inline]
    pub fn row(&self) -> &'a R {
        self.row
    }

    #[inline]
    pub fn row_id(&self) -> &RowId {
        self.row_id
    }

    /// Index of the row in the full data slice, not in the current page.
    #[inline]
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    #[inline]
    pub fn column(&self) -> &ColumnId {
        self.column
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Flip the selection of this cell's row once the row has been painted.
    #[inline]
    pub fn request_toggle_selected(&mut self) {
        self.toggle_selected = true;
    }

    pub(crate) fn wants_toggle_selected(&self) -> bool {
        self.toggle_selected
    }
}

type HeaderFn = Box<dyn Fn(&mut Ui, &mut HeaderContext<'_>)>;
type CellFn<R> = Box<dyn for<'c> Fn(&mut Ui, &mut CellContext<'c, R>)>;

// ----------------------------------------------------------------------------

/// Describes one column of a [`crate::DataGrid`]: its id, how to render its header
/// and cells, and how wide it may be.
///
/// ```
/// use egui_data_grid::ColumnDef;
///
/// struct Task {
///     status: &'static str,
/// }
///
/// let status = ColumnDef::<Task>::new("status")
///     .header(|ui, _ctx| {
///         ui.strong("Status");
///     })
///     .cell(|ui, ctx| {
///         ui.label(ctx.row().status);
///     })
///     .size(120.0)
///     .range(80.0..=240.0);
/// assert_eq!(status.id(), &"status");
/// ```
pub struct ColumnDef<R> {
    id: ColumnId,
    header: Option<HeaderFn>,
    cell: Option<CellFn<R>>,
    size: f32,
    size_range: Rangef,
    resizable: bool,
}

impl<R: 'static> ColumnDef<R> {
    /// A column with no header and empty cells. Add renderers with [`Self::header`] and [`Self::cell`].
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            header: None,
            cell: None,
            size: DEFAULT_COLUMN_SIZE,
            size_range: Rangef::new(DEFAULT_MIN_COLUMN_SIZE, f32::INFINITY),
            resizable: true,
        }
    }

    /// A column showing the text returned by `accessor`, under a plain `label` header.
    pub fn accessor(
        id: impl Into<ColumnId>,
        label: impl Into<String>,
        accessor: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self::new(id)
            .header_label(label)
            .cell(move |ui, ctx| {
                ui.label(accessor(ctx.row()));
            })
    }

    /// The checkbox column used to select rows, with id [`SELECT_COLUMN_ID`].
    ///
    /// The header checkbox toggles the whole page and is only shown when
    /// multi-row selection is enabled.
    pub fn selection() -> Self {
        Self::new(SELECT_COLUMN_ID)
            .header(|ui, ctx| {
                if !ctx.multi_row_selection() {
                    return;
                }
                let mut checked = ctx.all_page_rows_selected();
                let checkbox = egui::Checkbox::new(&mut checked, "")
                    .indeterminate(ctx.some_page_rows_selected());
                if ui.add(checkbox).on_hover_text("Select all").changed() {
                    ctx.request_toggle_all_page_rows();
                }
            })
            .cell(|ui, ctx| {
                let mut checked = ctx.is_selected();
                if ui
                    .checkbox(&mut checked, "")
                    .on_hover_text("Select row")
                    .changed()
                {
                    ctx.request_toggle_selected();
                }
            })
            .exact(SELECT_COLUMN_SIZE)
    }

    #[inline]
    pub fn header(mut self, add_contents: impl Fn(&mut Ui, &mut HeaderContext<'_>) + 'static) -> Self {
        self.header = Some(Box::new(add_contents));
        self
    }

    /// Use a bold text label as header.
    #[inline]
    pub fn header_label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.header(move |ui, _ctx| {
            ui.strong(label.as_str());
        })
    }

    #[inline]
    pub fn cell(
        mut self,
        add_contents: impl for<'c> Fn(&mut Ui, &mut CellContext<'c, R>) + 'static,
    ) -> Self {
        self.cell = Some(Box::new(add_contents));
        self
    }

    /// Initial width in points, used until the user resizes the column.
    ///
    /// Default: 150.
    #[inline]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Won't shrink below this width (in points).
    ///
    /// Raises the maximum too if it was smaller.
    ///
    /// Default: 20.
    #[inline]
    pub fn at_least(mut self, minimum: f32) -> Self {
        self.size_range.min = minimum;
        self.size_range.max = self.size_range.max.max(minimum);
        self
    }

    /// Won't grow above this width (in points).
    ///
    /// Lowers the minimum too if it was larger.
    ///
    /// Default: [`f32::INFINITY`]
    #[inline]
    pub fn at_most(mut self, maximum: f32) -> Self {
        self.size_range.max = maximum;
        self.size_range.min = self.size_range.min.min(maximum);
        self
    }

    /// Allowed range of widths, in points.
    pub fn range(mut self, range: impl Into<Rangef>) -> Self {
        let range = range.into();
        if range.min > range.max {
            crate::log_or_panic!("Column {} got an inverted size range {range:?}", self.id);
            self.size_range = Rangef::new(range.max, range.min);
        } else {
            self.size_range = range;
        }
        self
    }

    /// Always this exact width, never resizable.
    #[inline]
    pub fn exact(self, size: f32) -> Self {
        self.size(size).range(size..=size).resizable(false)
    }

    /// Can this column be resized by dragging its header handle?
    ///
    /// Default: `true`.
    #[inline]
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

}

impl<R> ColumnDef<R> {
    #[inline]
    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// The width this column starts out with, within its range.
    #[inline]
    pub fn default_size(&self) -> f32 {
        self.size_range.clamp(self.size)
    }

    #[inline]
    pub fn size_range(&self) -> Rangef {
        self.size_range
    }

    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.resizable && self.size_range.min < self.size_range.max
    }

    pub(crate) fn show_header(&self, ui: &mut Ui, ctx: &mut HeaderContext<'_>) {
        if let Some(header) = &self.header {
            header(ui, ctx);
        }
    }

    pub(crate) fn show_cell(&self, ui: &mut Ui, ctx: &mut CellContext<'_, R>) {
        if let Some(cell) = &self.cell {
            cell(ui, ctx);
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("size_range", &self.size_range)
            .field("resizable", &self.resizable)
            .finish_non_exhaustive()
    }
}
