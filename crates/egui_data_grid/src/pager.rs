use std::hash::Hash;

use egui::{Align, Button, ComboBox, Id, Layout, Ui};

use crate::table::DataTable;

/// Page controls for a [`DataTable`]: selected row count, page size chooser,
/// current page and first / previous / next / last buttons.
///
/// [`crate::DataGrid`] shows this below the grid unless
/// [`crate::DataGrid::pagination`] is turned off.
#[derive(Clone, Debug)]
pub struct Pagination {
    id_salt: Id,
    show_selected_count: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            id_salt: Id::new("pagination"),
            show_selected_count: true,
        }
    }

    /// Needed if there are several paginations in the same [`Ui`].
    #[inline]
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Show "N of M row(s) selected." on the left (default: `true`).
    #[inline]
    pub fn show_selected_count(mut self, show: bool) -> Self {
        self.show_selected_count = show;
        self
    }

    pub fn show<R>(self, ui: &mut Ui, table: &mut DataTable<'_, R>) {
        profiling::function_scope!();

        ui.horizontal(|ui| {
            if self.show_selected_count {
                ui.weak(format!(
                    "{} of {} row(s) selected.",
                    table.selected_row_count(),
                    table.row_count()
                ));
            }

            // Right to left: the last button is added first.
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add_enabled(table.can_next_page(), Button::new("»"))
                    .on_hover_text("Go to last page")
                    .clicked()
                {
                    table.last_page();
                }
                if ui
                    .add_enabled(table.can_next_page(), Button::new("›"))
                    .on_hover_text("Go to next page")
                    .clicked()
                {
                    table.next_page();
                }
                if ui
                    .add_enabled(table.can_previous_page(), Button::new("‹"))
                    .on_hover_text("Go to previous page")
                    .clicked()
                {
                    table.previous_page();
                }
                if ui
                    .add_enabled(table.can_previous_page(), Button::new("«"))
                    .on_hover_text("Go to first page")
                    .clicked()
                {
                    table.first_page();
                }

                ui.add_space(8.0);
                ui.label(format!(
                    "Page {} of {}",
                    table.page_index() + 1,
                    table.page_count()
                ));
                ui.add_space(8.0);

                let mut page_size = table.page_size();
                ComboBox::from_id_salt(self.id_salt.with("page_size"))
                    .selected_text(page_size.to_string())
                    .width(64.0)
                    .show_ui(ui, |ui| {
                        for &option in &table.options().page_size_options {
                            ui.selectable_value(&mut page_size, option, option.to_string());
                        }
                    });
                if page_size != table.page_size() {
                    table.set_page_size(page_size);
                }
                ui.label("Rows per page");
            });
        });
    }
}
