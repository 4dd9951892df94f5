//! Tests for the display-only pagination descriptor and the table footer.

use std::sync::{Arc, Mutex};

use joist::events::{EventResult, WidgetEvents};
use joist::keys::{Key, KeyCombo};
use joist::widgets::{Column, DataTable, Pagination};

#[derive(Clone, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
}

fn user(id: u32, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
    }
}

fn page_of_users() -> Vec<User> {
    vec![user(3, "Eve"), user(4, "Dan")]
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.into()),
        Column::new("name", "Name", |u: &User| u.name.as_str().into()),
    ]
}

fn page_log(pagination: Pagination) -> (Pagination, Arc<Mutex<Vec<(usize, usize)>>>) {
    let log: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let pagination = pagination.with_on_change(move |page, size| {
        sink.lock().unwrap().push((page, size));
    });
    (pagination, log)
}

// -----------------------------------------------------------------------------
// Descriptor arithmetic
// -----------------------------------------------------------------------------

#[test]
fn test_summary_counts_partial_last_page() {
    let pagination = Pagination::new(2, 2, 5);

    assert_eq!(pagination.start(), 3);
    assert_eq!(pagination.end(), 4);
    assert_eq!(pagination.summary(), "Showing 3 to 4 of 5 results");
    assert!(pagination.has_prev());
    assert!(pagination.has_next());
}

#[test]
fn test_first_page_has_no_previous() {
    let pagination = Pagination::new(1, 2, 5);

    assert!(!pagination.has_prev());
    assert!(pagination.has_next());
    assert_eq!(pagination.summary(), "Showing 1 to 2 of 5 results");
}

#[test]
fn test_last_page_clips_end_to_total() {
    let pagination = Pagination::new(3, 2, 5);

    assert!(pagination.has_prev());
    assert!(!pagination.has_next());
    assert_eq!(pagination.summary(), "Showing 5 to 5 of 5 results");
}

#[test]
fn test_exact_page_boundary_has_no_next() {
    let pagination = Pagination::new(2, 2, 4);

    assert_eq!(pagination.end(), 4);
    assert!(!pagination.has_next());
}

#[test]
fn test_new_clamps_zero_inputs() {
    let pagination = Pagination::new(0, 0, 5);

    assert_eq!(pagination.current(), 1);
    assert_eq!(pagination.page_size(), 1);
    assert_eq!(pagination.summary(), "Showing 1 to 1 of 5 results");
}

#[test]
fn test_page_label() {
    assert_eq!(Pagination::new(2, 10, 45).page_label(), "Page 2");
}

// -----------------------------------------------------------------------------
// Page requests through the table
// -----------------------------------------------------------------------------

#[test]
fn test_page_next_reports_requested_page() {
    let (pagination, log) = page_log(Pagination::new(2, 2, 5));
    let table = DataTable::with_rows(user_columns(), page_of_users()).with_pagination(pagination);

    assert!(table.page_next());
    assert!(table.page_prev());
    assert_eq!(*log.lock().unwrap(), vec![(3, 2), (1, 2)]);
}

#[test]
fn test_page_requests_respect_guards() {
    let (first, first_log) = page_log(Pagination::new(1, 2, 5));
    let table = DataTable::with_rows(user_columns(), page_of_users()).with_pagination(first);

    assert!(!table.page_prev());
    assert!(first_log.lock().unwrap().is_empty());

    let (last, last_log) = page_log(Pagination::new(3, 2, 5));
    table.set_pagination(Some(last));

    assert!(!table.page_next());
    assert!(last_log.lock().unwrap().is_empty());
}

#[test]
fn test_page_requests_without_pagination_are_ignored() {
    let table = DataTable::with_rows(user_columns(), page_of_users());

    assert!(!table.page_prev());
    assert!(!table.page_next());
}

#[test]
fn test_paging_leaves_table_state_alone() {
    let (pagination, _log) = page_log(Pagination::new(2, 2, 5));
    let table = DataTable::with_rows(user_columns(), page_of_users()).with_pagination(pagination);
    table.clear_dirty();

    table.page_next();

    // Still on the owner-supplied page until a new descriptor arrives
    assert_eq!(table.pagination().map(|p| p.current()), Some(2));
    assert_eq!(table.rows().len(), 2);
    assert!(!table.is_dirty());
}

// -----------------------------------------------------------------------------
// Footer rendering
// -----------------------------------------------------------------------------

#[test]
fn test_footer_renders_summary_and_controls() {
    let table = DataTable::with_rows(user_columns(), page_of_users())
        .with_pagination(Pagination::new(2, 2, 5));
    let view = table.view(false);

    assert!(view.contains_text("Showing 3 to 4 of 5 results"));
    assert!(view.contains_text("Page 2"));
    assert!(view.contains_text("← Previous"));
    assert!(view.contains_text("Next →"));
}

#[test]
fn test_no_footer_without_pagination() {
    let table = DataTable::with_rows(user_columns(), page_of_users());
    let view = table.view(false);

    assert!(!view.contains_text("Previous"));
    assert!(!view.contains_text("Showing"));
}

// -----------------------------------------------------------------------------
// Keyboard paging
// -----------------------------------------------------------------------------

#[test]
fn test_keyboard_left_right_drive_paging() {
    let (pagination, log) = page_log(Pagination::new(1, 2, 5));
    let table = DataTable::with_rows(user_columns(), page_of_users()).with_pagination(pagination);

    // No previous page to ask for
    assert_eq!(table.on_key(&KeyCombo::key(Key::Left)), EventResult::Ignored);
    assert!(log.lock().unwrap().is_empty());

    assert_eq!(
        table.on_key(&KeyCombo::key(Key::Right)),
        EventResult::Consumed
    );
    assert_eq!(*log.lock().unwrap(), vec![(2, 2)]);
}
