//! Drives a [`DataGrid`] through egui_kittest: selection by clicking rows,
//! the empty state, and paging through the data.

use egui_data_grid::{ColumnDef, DataGrid, GridOptions, GridState, RowId};
use egui_kittest::Harness;
use kittest::Queryable;

struct Task {
    number: usize,
}

struct Fixture {
    columns: Vec<ColumnDef<Task>>,
    tasks: Vec<Task>,
    state: GridState,
}

impl Fixture {
    fn with_tasks(count: usize) -> Self {
        Self {
            columns: vec![
                ColumnDef::selection(),
                ColumnDef::accessor("id", "Task", |t: &Task| format!("TASK-{}", t.number)),
                ColumnDef::accessor("title", "Title", |t: &Task| format!("Write report {}", t.number)),
            ],
            tasks: (1..=count).map(|number| Task { number }).collect(),
            state: GridOptions::default().initial_state(),
        }
    }
}

fn harness<'a>(fixture: Fixture) -> Harness<'a, Fixture> {
    Harness::new_ui_state(
        |ui, fixture: &mut Fixture| {
            DataGrid::new("tasks", &fixture.columns, &fixture.tasks)
                .show_with_state(ui, &mut fixture.state);
        },
        fixture,
    )
}

#[test]
fn test_empty_data_shows_no_results() {
    let mut harness = harness(Fixture::with_tasks(0));
    harness.run();

    assert!(harness.query_by_label("No results.").is_some());
    assert!(harness.query_by_label("Task").is_some(), "header should still render");
    assert!(harness.query_by_label("Page 1 of 1").is_some());
    assert!(harness.query_by_label("0 of 0 row(s) selected.").is_some());
}

#[test]
fn test_only_the_first_page_is_rendered() {
    let mut harness = harness(Fixture::with_tasks(25));
    harness.run();

    assert!(harness.query_by_label("TASK-1").is_some());
    assert!(harness.query_by_label("TASK-10").is_some());
    assert!(
        harness.query_by_label("TASK-11").is_none(),
        "rows beyond the page size must not render"
    );
    assert!(harness.query_by_label("No results.").is_none());
    assert!(harness.query_by_label("Page 1 of 3").is_some());
}

#[test]
fn test_clicking_a_row_selects_only_that_row() {
    let mut harness = harness(Fixture::with_tasks(25));
    harness.run();

    harness.get_by_label("TASK-3").click();
    harness.run();

    let selection = &harness.state().state.row_selection;
    assert!(selection.is_selected(&RowId::from(2)));
    assert_eq!(selection.len(), 1);
    assert!(harness.query_by_label("1 of 25 row(s) selected.").is_some());

    harness.get_by_label("Write report 5").click();
    harness.run();

    let selection = &harness.state().state.row_selection;
    assert!(selection.is_selected(&RowId::from(4)));
    assert!(!selection.is_selected(&RowId::from(2)), "single selection clears the previous row");
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_clicking_a_selected_row_deselects_it() {
    let mut harness = harness(Fixture::with_tasks(5));
    harness.run();

    harness.get_by_label("TASK-2").click();
    harness.run();
    assert_eq!(harness.state().state.row_selection.len(), 1);

    harness.get_by_label("TASK-2").click();
    harness.run();
    assert!(harness.state().state.row_selection.is_empty());
}

#[test]
fn test_next_and_previous_page_buttons() {
    let mut harness = harness(Fixture::with_tasks(25));
    harness.run();

    harness.get_by_label("›").click();
    harness.run();

    assert_eq!(harness.state().state.pagination.page_index(), 1);
    assert!(harness.query_by_label("Page 2 of 3").is_some());
    assert!(harness.query_by_label("TASK-11").is_some());
    assert!(harness.query_by_label("TASK-20").is_some());
    assert!(harness.query_by_label("TASK-21").is_none());
    assert!(harness.query_by_label("TASK-1").is_none());

    harness.get_by_label("»").click();
    harness.run();
    assert!(harness.query_by_label("Page 3 of 3").is_some());
    assert!(harness.query_by_label("TASK-25").is_some());

    harness.get_by_label("‹").click();
    harness.run();
    assert_eq!(harness.state().state.pagination.page_index(), 1);
}

#[test]
fn test_page_is_clamped_when_rows_disappear() {
    let mut harness = harness(Fixture::with_tasks(25));
    harness.run();
    harness.get_by_label("»").click();
    harness.run();
    assert_eq!(harness.state().state.pagination.page_index(), 2);

    harness.state_mut().tasks.truncate(12);
    harness.run();

    assert_eq!(harness.state().state.pagination.page_index(), 1);
    assert!(harness.query_by_label("Page 2 of 2").is_some());
    assert!(harness.query_by_label("TASK-12").is_some());
}

#[test]
fn test_selected_count_ignores_rows_that_disappeared() {
    let mut harness = harness(Fixture::with_tasks(5));
    harness.run();

    harness.get_by_label("TASK-5").click();
    harness.run();
    assert!(harness.query_by_label("1 of 5 row(s) selected.").is_some());

    harness.state_mut().tasks.truncate(3);
    harness.run();
    assert!(harness.query_by_label("0 of 3 row(s) selected.").is_some());

    harness.state_mut().tasks.clear();
    harness.run();
    assert!(harness.query_by_label("0 of 0 row(s) selected.").is_some());
}

#[test]
fn test_selection_follows_custom_row_ids_across_pages() {
    let fixture = Fixture::with_tasks(25);
    let mut harness = Harness::new_ui_state(
        |ui, fixture: &mut Fixture| {
            DataGrid::new("tasks", &fixture.columns, &fixture.tasks)
                .row_id(|task: &Task, _| RowId::new(format!("task-{}", task.number)))
                .show_with_state(ui, &mut fixture.state);
        },
        fixture,
    );
    harness.run();

    harness.get_by_label("TASK-4").click();
    harness.run();
    harness.get_by_label("›").click();
    harness.run();

    let selection = &harness.state().state.row_selection;
    assert!(selection.is_selected(&RowId::new("task-4")));
    assert!(harness.query_by_label("1 of 25 row(s) selected.").is_some());
}
