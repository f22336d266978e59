//! A paginated data grid for [`egui`].
//!
//! The grid renders a header row and one page of body rows. Rows can be selected
//! by clicking them (one at a time by default), columns can be pinned to the left
//! or right edge so they stay put during horizontal scrolling, and columns can be
//! resized by dragging the handle on the trailing edge of their header cell.
//!
//! All layout decisions come from a small headless model ([`DataTable`]) that can
//! also be used on its own, e.g. to drive a custom renderer or in tests.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! use egui_data_grid::{ColumnDef, DataGrid};
//!
//! struct Task {
//!     id: u32,
//!     title: &'static str,
//! }
//!
//! let columns = vec![
//!     ColumnDef::selection(),
//!     ColumnDef::accessor("id", "Task", |task: &Task| format!("TASK-{}", task.id)).size(100.0),
//!     ColumnDef::accessor("title", "Title", |task: &Task| task.title.to_owned()),
//! ];
//! let tasks = [Task { id: 1, title: "Write docs" }, Task { id: 2, title: "Ship it" }];
//!
//! DataGrid::new("tasks", &columns, &tasks).show(ui);
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod column;
mod grid;
mod pager;
mod pagination;
mod pinning;
mod row;
mod selection;
mod sizing;
mod state;
mod style;
mod table;

pub use crate::{
    column::{CellContext, ColumnDef, ColumnId, HeaderContext, ID_COLUMN_ID, SELECT_COLUMN_ID},
    grid::{DataGrid, DataGridOutput},
    pager::Pagination,
    pagination::PaginationState,
    pinning::{ColumnPinningState, PinSide},
    row::{RowId, RowRef},
    selection::{RowSelectionMode, RowSelectionState},
    sizing::{ColumnResizeMode, ColumnSizingState, ResizeDrag},
    state::{GridOptions, GridState},
    style::GridStyle,
    table::DataTable,
};

/// Panic in debug builds, log otherwise.
macro_rules! log_or_panic {
    ($fmt: literal) => {$crate::log_or_panic!($fmt,)};
    ($fmt: literal, $($arg: tt)*) => {{
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            log::warn!($fmt, $($arg)*);
        }
    }};
}
pub(crate) use log_or_panic;
