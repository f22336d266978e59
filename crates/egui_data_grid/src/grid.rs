//! Grid widget with pinned columns, resizable headers and one page of selectable rows.
//! Column widths and pinned offsets come from [`DataTable`]; this module only turns
//! them into rectangles, fills and interactions.
//! Horizontal scrolling moves the unpinned columns; pinned columns are painted last,
//! on an opaque background, at their sticky position in the viewport.

use std::hash::Hash;

use egui::{
    Align, CursorIcon, Id, Layout, Rect, Response, RichText, ScrollArea, Sense, TextWrapMode,
    Ui, UiBuilder, pos2, vec2,
};

use crate::{
    column::{CellContext, ColumnDef, ColumnId, HeaderContext},
    pager::Pagination,
    pinning::PinSide,
    row::{RowId, RowRef},
    selection::RowSelectionMode,
    sizing::ColumnResizeMode,
    state::{GridOptions, GridState},
    style::{GridStyle, ResolvedStyle},
    table::{DataTable, RowIdFn},
};

const EMPTY_TEXT: &str = "No results.";

/// Gap between the grid and the pagination controls.
const PAGINATION_GAP: f32 = 16.0;

// ----------------------------------------------------------------------------

/// What happened during one frame of a [`DataGrid`].
#[derive(Debug)]
pub struct DataGridOutput {
    /// Response of the framed grid area.
    pub response: Response,

    /// A row was selected or deselected.
    pub selection_changed: bool,

    /// A resize drag ended this frame: the column and its committed width.
    pub resized_column: Option<(ColumnId, f32)>,

    /// The page index or page size changed.
    pub page_changed: bool,
}

/// A paginated, row-selectable grid with pinned and resizable columns.
///
/// If you have multiple grids in the same [`Ui`]
/// you will need to give them unique id:s with the `id_salt` passed to [`Self::new`].
///
/// ### Example
/// ```
/// # egui::__run_test_ui(|ui| {
/// use egui_data_grid::{ColumnDef, DataGrid, GridOptions, RowId};
///
/// struct Task {
///     key: String,
///     title: String,
/// }
///
/// let columns = vec![
///     ColumnDef::selection(),
///     ColumnDef::accessor("id", "Task", |t: &Task| t.key.clone()).size(90.0),
///     ColumnDef::accessor("title", "Title", |t: &Task| t.title.clone()).at_least(120.0),
/// ];
/// let tasks = vec![Task { key: "TASK-1".into(), title: "Fix the build".into() }];
///
/// let output = DataGrid::new("tasks", &columns, &tasks)
///     .options(GridOptions::default().row_height(32.0))
///     .row_id(|task: &Task, _| RowId::new(task.key.as_str()))
///     .show(ui);
/// assert!(!output.selection_changed);
/// # });
/// ```
pub struct DataGrid<'a, R> {
    id_salt: Id,
    columns: &'a [ColumnDef<R>],
    data: &'a [R],
    options: GridOptions,
    style: GridStyle,
    row_id: Option<Box<RowIdFn<R>>>,
    pagination: bool,
    scroll_offset_x: Option<f32>,
}

impl<'a, R> DataGrid<'a, R> {
    pub fn new(id_salt: impl Hash, columns: &'a [ColumnDef<R>], data: &'a [R]) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            columns,
            data,
            options: GridOptions::default(),
            style: GridStyle::default(),
            row_id: None,
            pagination: true,
            scroll_offset_x: None,
        }
    }

    #[inline]
    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the grid style for customizing colors and strokes.
    #[inline]
    pub fn style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Identify rows by their content instead of by their index in the data.
    ///
    /// Selections then follow a row when the data is reordered.
    #[inline]
    pub fn row_id(mut self, row_id: impl Fn(&R, usize) -> RowId + 'static) -> Self {
        self.row_id = Some(Box::new(row_id));
        self
    }

    /// Show the [`Pagination`] controls below the grid (default: `true`).
    #[inline]
    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the horizontal scroll offset position, in points.
    #[inline]
    pub fn horizontal_scroll_offset(mut self, offset: f32) -> Self {
        self.scroll_offset_x = Some(offset);
        self
    }

    /// The state stored for the grid with this `id_salt`, if it has been shown before.
    pub fn load_state(ui: &Ui, id_salt: impl Hash) -> Option<GridState> {
        let state_id = ui.id().with(Id::new(id_salt));
        #[cfg(feature = "serde")]
        {
            ui.data_mut(|d| d.get_persisted::<GridState>(state_id))
        }
        #[cfg(not(feature = "serde"))]
        {
            ui.data(|d| d.get_temp::<GridState>(state_id))
        }
    }

    /// Forget selection, pinning, widths and page of this grid.
    pub fn reset(&self, ui: &Ui) {
        GridState::reset(ui, ui.id().with(self.id_salt));
    }

    /// Show the grid, keeping its [`GridState`] in egui memory.
    pub fn show(self, ui: &mut Ui) -> DataGridOutput {
        let state_id = ui.id().with(self.id_salt);
        let mut state = GridState::load(ui, state_id, &self.options);
        let output = self.show_with_state(ui, &mut state);
        state.store(ui, state_id);
        output
    }

    /// Show the grid with state owned by the caller.
    pub fn show_with_state(self, ui: &mut Ui, state: &mut GridState) -> DataGridOutput {
        profiling::function_scope!();

        let Self {
            id_salt,
            columns,
            data,
            options,
            style,
            row_id,
            pagination,
            scroll_offset_x,
        } = self;

        let state_id = ui.id().with(id_salt);
        let style = style.resolve(ui.visuals());

        let mut table = DataTable::new(columns, data, state, &options);
        if let Some(row_id) = &row_id {
            table = table.with_row_id(row_id.as_ref());
        }
        table.sync_with_data();

        let page_before = (table.page_index(), table.page_size());
        let mut events = FrameEvents::default();

        let response = egui::Frame::NONE
            .stroke(style.border)
            .corner_radius(6.0)
            .show(ui, |ui| {
                let mut scroll_area = ScrollArea::horizontal()
                    .id_salt(state_id.with("__scroll_area"))
                    .auto_shrink([false, true]);
                if let Some(offset) = scroll_offset_x {
                    scroll_area = scroll_area.horizontal_scroll_offset(offset);
                }
                scroll_area
                    .show_viewport(ui, |ui, viewport| {
                        let mut painter = GridPainter {
                            table: &mut table,
                            options: &options,
                            style: &style,
                            state_id,
                            origin: ui.max_rect().min,
                            viewport,
                            events: &mut events,
                        };
                        painter.paint(ui);
                    });
            })
            .response;

        if pagination {
            ui.add_space(PAGINATION_GAP);
            Pagination::new().id_salt(id_salt).show(ui, &mut table);
        }

        let page_changed = page_before != (table.page_index(), table.page_size());

        DataGridOutput {
            response,
            selection_changed: events.selection_changed,
            resized_column: events.resized_column,
            page_changed,
        }
    }
}

// ----------------------------------------------------------------------------

#[derive(Default)]
struct FrameEvents {
    selection_changed: bool,
    resized_column: Option<(ColumnId, f32)>,
}

/// Where one column lands on screen this frame.
struct ColumnLayout<'a, R> {
    def: &'a ColumnDef<R>,
    pinned: Option<PinSide>,

    /// Screen-space left edge, already adjusted for sticky columns.
    left: f32,
    width: f32,
}

impl<R> ColumnLayout<'_, R> {
    fn x_range(&self) -> egui::Rangef {
        egui::Rangef::new(self.left, self.left + self.width)
    }
}

struct GridPainter<'t, 'a, R> {
    table: &'t mut DataTable<'a, R>,
    options: &'t GridOptions,
    style: &'t ResolvedStyle,
    state_id: Id,

    /// Screen position of the content's top-left corner (moves when scrolling).
    origin: egui::Pos2,

    /// Visible part of the content, in content coordinates.
    viewport: Rect,

    events: &'t mut FrameEvents,
}

impl<'a, R> GridPainter<'_, 'a, R> {
    fn paint(&mut self, ui: &mut Ui) {
        let columns = self.layout_columns();
        let content_width = self.table.total_size().max(self.viewport.width());
        let view_left = self.origin.x + self.viewport.min.x;
        let view_right = self.origin.x + self.viewport.max.x;

        let clip_rect = ui.clip_rect();
        let scrolling_clip_rect = Rect::from_x_y_ranges(
            (view_left + self.table.left_total_size())..=(view_right - self.table.right_total_size()),
            clip_rect.y_range(),
        )
        .intersect(clip_rect);

        let header_top = self.origin.y;
        let header_bottom = header_top + self.options.header_height;
        self.paint_header(ui, &columns, header_top, clip_rect, scrolling_clip_rect);

        let rows = self.table.page_rows();
        let body_top = header_bottom;
        let body_bottom = if rows.is_empty() {
            self.paint_empty(ui, body_top, content_width, clip_rect);
            body_top + self.options.empty_row_height
        } else {
            let mut top = body_top;
            for row in &rows {
                self.paint_row(ui, &columns, row, top, clip_rect, scrolling_clip_rect);
                top += self.options.row_height;
            }
            top
        };

        self.resize_handles(ui, &columns, header_top, body_bottom, clip_rect, scrolling_clip_rect);

        // Tells the scroll area how large the content is.
        ui.expand_to_include_rect(Rect::from_min_size(
            self.origin,
            vec2(content_width, body_bottom - self.origin.y),
        ));
    }

    fn layout_columns(&self) -> Vec<ColumnLayout<'a, R>> {
        let view_left = self.origin.x + self.viewport.min.x;
        let view_right = self.origin.x + self.viewport.max.x;

        let mut natural = self.origin.x;
        let mut columns = Vec::new();
        for def in self.table.visible_columns() {
            let id = def.id();
            let width = self.table.column_size(id);
            let pinned = self.table.pin_side(id);
            let left = match pinned {
                Some(PinSide::Left) => {
                    let start = self.table.column_start(id).unwrap_or(0.0);
                    natural.max(view_left + start)
                }
                Some(PinSide::Right) => {
                    let after = self.table.column_after(id).unwrap_or(0.0);
                    natural.min(view_right - after - width)
                }
                None => natural,
            };
            columns.push(ColumnLayout {
                def,
                pinned,
                left,
                width,
            });
            natural += width;
        }
        columns
    }

    fn paint_header(
        &mut self,
        ui: &mut Ui,
        columns: &[ColumnLayout<'a, R>],
        top: f32,
        clip_rect: Rect,
        scrolling_clip_rect: Rect,
    ) {
        let height = self.options.header_height;
        let multi = self.options.selection_mode == RowSelectionMode::Multi;
        let all_selected = self.table.is_all_page_rows_selected();
        let some_selected = self.table.is_some_page_rows_selected();
        let mut toggle_all = false;

        // Scrolling cells first, pinned cells on top of them.
        for pinned_pass in [false, true] {
            for column in columns.iter().filter(|c| c.pinned.is_some() == pinned_pass) {
                let rect = Rect::from_x_y_ranges(column.x_range(), top..=top + height);
                let clip = if pinned_pass {
                    clip_rect
                } else {
                    scrolling_clip_rect
                };
                let hovered = self.table.resize_drag().is_none()
                    && ui.rect_contains_pointer(rect.intersect(clip));
                let painter = ui.painter().with_clip_rect(clip);
                for fill in header_fills(self.style, pinned_pass, hovered) {
                    painter.rect_filled(rect, 0.0, fill);
                }

                let mut ctx = HeaderContext::new(column.def.id(), multi, all_selected, some_selected);
                show_cell(
                    ui,
                    rect,
                    clip,
                    self.options.cell_padding,
                    ("__header", column.def.id().as_str()),
                    |ui| column.def.show_header(ui, &mut ctx),
                );
                toggle_all |= ctx.wants_toggle_all_page_rows();
            }
        }

        let bottom = top + height;
        ui.painter().with_clip_rect(clip_rect).hline(
            clip_rect.x_range(),
            bottom,
            self.style.border,
        );

        if toggle_all && multi {
            self.table.toggle_all_page_rows_selected();
            self.events.selection_changed = true;
        }
    }

    fn paint_row(
        &mut self,
        ui: &mut Ui,
        columns: &[ColumnLayout<'a, R>],
        row: &RowRef<'a, R>,
        top: f32,
        clip_rect: Rect,
        scrolling_clip_rect: Rect,
    ) {
        let height = self.options.row_height;
        let y_range = egui::Rangef::new(top, top + height);
        let row_rect = Rect::from_x_y_ranges(
            self.origin.x..=self.origin.x + self.table.total_size().max(self.viewport.width()),
            y_range,
        );

        // Registered before the cells, so widgets inside cells get their clicks first.
        let row_response = ui.interact(
            row_rect.intersect(clip_rect),
            self.state_id.with("__row").with(&row.id),
            Sense::click(),
        );

        let selected = self.table.is_row_selected(&row.id);
        let highlight = if selected {
            Some(self.style.selection_bg)
        } else if row_response.contains_pointer() {
            Some(self.style.hovered_bg)
        } else {
            None
        };
        if let Some(highlight) = highlight {
            ui.painter()
                .with_clip_rect(clip_rect)
                .rect_filled(row_rect, 0.0, highlight);
        }

        let mut toggle = row_response.clicked();
        for pinned_pass in [false, true] {
            for column in columns.iter().filter(|c| c.pinned.is_some() == pinned_pass) {
                let rect = Rect::from_x_y_ranges(column.x_range(), y_range);
                let clip = if pinned_pass {
                    let painter = ui.painter().with_clip_rect(clip_rect);
                    painter.rect_filled(rect, 0.0, self.style.pinned_bg);
                    if let Some(highlight) = highlight {
                        painter.rect_filled(rect, 0.0, highlight);
                    }
                    clip_rect
                } else {
                    scrolling_clip_rect
                };

                let mut ctx =
                    CellContext::new(row.data, &row.id, row.index, column.def.id(), selected);
                show_cell(
                    ui,
                    rect,
                    clip,
                    self.options.cell_padding,
                    ("__cell", &row.id, column.def.id().as_str()),
                    |ui| column.def.show_cell(ui, &mut ctx),
                );
                toggle |= ctx.wants_toggle_selected();
            }
        }

        ui.painter().with_clip_rect(clip_rect).hline(
            row_rect.x_range(),
            y_range.max,
            self.style.border,
        );

        if toggle {
            self.table.toggle_row_selected(&row.id);
            self.events.selection_changed = true;
        }
    }

    fn paint_empty(&self, ui: &mut Ui, top: f32, content_width: f32, clip_rect: Rect) {
        let rect = Rect::from_min_size(
            pos2(self.origin.x, top),
            vec2(content_width, self.options.empty_row_height),
        );
        // Center the text in the visible part of the row.
        let visible = rect.intersect(clip_rect);
        if !visible.is_positive() {
            return;
        }
        let mut empty_ui = ui.new_child(
            UiBuilder::new()
                .id_salt("__empty")
                .max_rect(visible)
                .layout(Layout::centered_and_justified(egui::Direction::TopDown)),
        );
        empty_ui.set_clip_rect(visible);
        empty_ui.style_mut().interaction.selectable_labels = false;
        empty_ui.label(RichText::new(EMPTY_TEXT).color(self.style.empty_text));
    }

    fn resize_handles(
        &mut self,
        ui: &mut Ui,
        columns: &[ColumnLayout<'a, R>],
        header_top: f32,
        grid_bottom: f32,
        clip_rect: Rect,
        scrolling_clip_rect: Rect,
    ) {
        let header_bottom = header_top + self.options.header_height;
        let grab_radius = ui.style().interaction.resize_grab_radius_side;

        for column in columns {
            let id = column.def.id();
            if !self.table.can_resize(id) {
                continue;
            }

            let x = column.left + column.width;
            let handle_rect = Rect::from_min_max(pos2(x, header_top), pos2(x, header_bottom))
                .expand2(vec2(grab_radius, 0.0));
            let valid_rect = handle_rect.intersect(if column.pinned.is_some() {
                clip_rect
            } else {
                scrolling_clip_rect
            });
            if !valid_rect.is_positive() && !self.table.is_resizing(id) {
                continue;
            }

            let response = ui.interact(
                valid_rect,
                self.state_id.with("resize_column").with(id.as_str()),
                Sense::click_and_drag(),
            );

            if response.double_clicked() {
                self.table.reset_column_size(id);
            }
            if response.drag_started() {
                let start = ui.input(|i| i.pointer.press_origin());
                if let Some(start) = start.or_else(|| response.interact_pointer_pos()) {
                    self.table.begin_resize(id, start.x);
                }
            }
            if response.dragged()
                && self.table.is_resizing(id)
                && let Some(pointer) = response.interact_pointer_pos()
            {
                self.table.drag_resize(pointer.x);
            }
            if response.drag_stopped() && self.table.is_resizing(id) {
                self.events.resized_column = self.table.finish_resize();
            }

            let active = self.table.is_resizing(id);
            let dragging_something_else =
                !active && ui.input(|i| i.pointer.any_down() || i.pointer.any_pressed());
            let hovered = response.hovered() && !dragging_something_else;
            if hovered || active {
                ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn);
            }

            let offset = match self.options.resize_mode {
                ColumnResizeMode::Deferred => self.table.resize_delta(id),
                ColumnResizeMode::Live => 0.0,
            };
            let handle_x = x + offset;
            let (stroke, bottom) = if active {
                // While dragging, the guide runs through the whole grid.
                (self.style.handle_active, grid_bottom)
            } else if hovered {
                (self.style.handle_hovered, header_bottom)
            } else {
                (self.style.handle_idle, header_bottom)
            };
            let painter = ui.painter().with_clip_rect(clip_rect);
            painter.line_segment(
                [pos2(handle_x, header_top), pos2(handle_x, bottom)],
                stroke,
            );
        }
    }
}

/// Background layers of a header cell, bottom first.
fn header_fills(style: &ResolvedStyle, pinned: bool, hovered: bool) -> Vec<egui::Color32> {
    let base = match (style.header_bg, pinned) {
        (Some(bg), _) => Some(bg),
        (None, true) => Some(style.pinned_bg),
        (None, false) => None,
    };
    base.into_iter()
        .chain(hovered.then_some(style.hovered_bg))
        .collect()
}

/// Add the contents of one cell inside `rect`, clipped to `clip_rect`.
fn show_cell(
    ui: &mut Ui,
    rect: Rect,
    clip_rect: Rect,
    padding: f32,
    id_salt: impl Hash,
    add_contents: impl FnOnce(&mut Ui),
) {
    let clip_rect = clip_rect.intersect(rect);
    if !clip_rect.is_positive() {
        return;
    }
    let mut cell_ui = ui.new_child(
        UiBuilder::new()
            .id_salt(id_salt)
            .max_rect(rect.shrink2(vec2(padding, 0.0)))
            .layout(Layout::left_to_right(Align::Center)),
    );
    cell_ui.set_clip_rect(clip_rect);
    let style = cell_ui.style_mut();
    style.interaction.selectable_labels = false;
    style.wrap_mode = Some(TextWrapMode::Truncate);
    add_contents(&mut cell_ui);
}
