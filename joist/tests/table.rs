//! Tests for DataTable sorting, rendering and navigation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use joist::events::{EventResult, WidgetEvents};
use joist::keys::{Key, KeyCombo};
use joist::node::Node;
use joist::selection::SelectionMode;
use joist::widgets::{Column, DataTable, RowKey, SortDirection};

#[derive(Clone, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    age: u32,
}

fn user(id: u32, name: &str, age: u32) -> User {
    User {
        id,
        name: name.to_string(),
        age,
    }
}

fn sample_users() -> Vec<User> {
    vec![
        user(1, "Bob", 32),
        user(2, "Ann", 28),
        user(3, "Eve", 45),
        user(4, "Dan", 28),
    ]
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.into()).width(4),
        Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
        Column::new("age", "Age", |u: &User| u.age.into()).sortable(),
    ]
}

fn sorted_names(table: &DataTable<User>) -> Vec<String> {
    table.sorted_rows().into_iter().map(|u| u.name).collect()
}

#[test]
fn test_toggle_sort_cycles_direction() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    assert_eq!(
        table.toggle_sort("name"),
        Some(("name".to_string(), SortDirection::Ascending))
    );
    assert_eq!(
        table.toggle_sort("name"),
        Some(("name".to_string(), SortDirection::Descending))
    );
    assert_eq!(
        table.toggle_sort("name"),
        Some(("name".to_string(), SortDirection::Ascending))
    );
}

#[test]
fn test_toggle_sort_different_column_resets_to_ascending() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    table.toggle_sort("name");
    table.toggle_sort("name");
    assert_eq!(
        table.sort(),
        Some(("name".to_string(), SortDirection::Descending))
    );

    assert_eq!(
        table.toggle_sort("age"),
        Some(("age".to_string(), SortDirection::Ascending))
    );
}

#[test]
fn test_toggle_sort_ignores_unknown_and_unsortable_columns() {
    let table = DataTable::with_rows(user_columns(), sample_users());
    let before = sorted_names(&table);

    // "id" exists but is not sortable; "missing" does not exist
    assert_eq!(table.toggle_sort("id"), None);
    assert_eq!(table.toggle_sort("missing"), None);
    assert_eq!(table.sort(), None);
    assert_eq!(sorted_names(&table), before);
}

#[test]
fn test_sorted_view_ascending_and_descending() {
    let rows = vec![user(1, "Bob", 30), user(2, "Ann", 25)];
    let table = DataTable::with_rows(user_columns(), rows);

    table.toggle_sort("name");
    assert_eq!(sorted_names(&table), vec!["Ann", "Bob"]);

    table.toggle_sort("name");
    assert_eq!(sorted_names(&table), vec!["Bob", "Ann"]);
}

#[test]
fn test_sort_is_stable_for_equal_values() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    // Ann and Dan share an age; Ann comes first in caller order
    table.toggle_sort("age");
    assert_eq!(sorted_names(&table), vec!["Ann", "Dan", "Bob", "Eve"]);

    // Descending reverses the comparator, not the ties
    table.toggle_sort("age");
    assert_eq!(sorted_names(&table), vec!["Eve", "Bob", "Ann", "Dan"]);
}

#[test]
fn test_sort_never_mutates_caller_rows() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    table.toggle_sort("name");
    let _ = table.sorted_rows();

    let names: Vec<String> = table.rows().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Bob", "Ann", "Eve", "Dan"]);
}

#[test]
fn test_sorted_order_is_identity_without_sort() {
    let table = DataTable::with_rows(user_columns(), sample_users());
    assert_eq!(table.sorted_order(), vec![0, 1, 2, 3]);
}

#[test]
fn test_clear_sort_restores_caller_order() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    table.toggle_sort("name");
    table.clear_sort();
    assert_eq!(sorted_names(&table), vec!["Bob", "Ann", "Eve", "Dan"]);
}

#[test]
fn test_set_columns_drops_stale_sort() {
    let table = DataTable::with_rows(user_columns(), sample_users());
    table.toggle_sort("name");

    table.set_columns(vec![Column::new("id", "ID", |u: &User| u.id.into())]);
    assert_eq!(table.sort(), None);
}

// -----------------------------------------------------------------------------
// Row keys
// -----------------------------------------------------------------------------

#[test]
fn test_default_row_key_reads_id_column() {
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_selection_mode(SelectionMode::Multiple);

    table.toggle_row(1);
    assert_eq!(table.selected_keys(), vec!["2"]);
}

#[test]
fn test_row_key_falls_back_to_position_without_id_column() {
    let columns = vec![Column::new("name", "Name", |u: &User| u.name.as_str().into())];
    let table = DataTable::with_rows(columns, sample_users())
        .with_selection_mode(SelectionMode::Multiple);

    table.toggle_row(2);
    assert_eq!(table.selected_keys(), vec!["2"]);
}

#[test]
fn test_row_key_index_strategy() {
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_row_key(RowKey::Index)
        .with_selection_mode(SelectionMode::Multiple);

    table.toggle_row(0);
    assert_eq!(table.selected_keys(), vec!["0"]);
}

#[test]
fn test_row_key_derived_strategy() {
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_row_key(RowKey::derived(|u: &User, _| u.name.to_lowercase()))
        .with_selection_mode(SelectionMode::Multiple);

    table.toggle_row(1);
    assert_eq!(table.selected_keys(), vec!["ann"]);
}

#[test]
fn test_keys_follow_rows_across_sorting() {
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_selection_mode(SelectionMode::Multiple);

    // Sorted view index 0 is Ann after an ascending name sort
    table.toggle_sort("name");
    table.toggle_row(0);
    assert_eq!(table.selected_keys(), vec!["2"]);
    assert_eq!(table.selected_rows()[0].name, "Ann");
}

// -----------------------------------------------------------------------------
// Activation
// -----------------------------------------------------------------------------

#[test]
fn test_activate_row_reports_sorted_position() {
    let clicked: Arc<Mutex<Vec<(String, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&clicked);
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_on_row_click(move |row: &User, index| {
            sink.lock().unwrap().push((row.name.clone(), index));
        });

    table.toggle_sort("name");
    table.activate_row(0);

    assert_eq!(*clicked.lock().unwrap(), vec![("Ann".to_string(), 0)]);
}

#[test]
fn test_activate_row_out_of_range_is_ignored() {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_on_row_click(move |_, _| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

    table.activate_row(99);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

// -----------------------------------------------------------------------------
// Cursor
// -----------------------------------------------------------------------------

#[test]
fn test_cursor_moves_over_sorted_view() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    assert_eq!(table.cursor(), None);
    assert_eq!(table.cursor_down(), Some(0));
    assert_eq!(table.cursor_down(), Some(1));
    assert_eq!(table.cursor_up(), Some(0));
    assert_eq!(table.cursor_up(), Some(0));
    assert_eq!(table.cursor_last(), Some(3));
    assert_eq!(table.cursor_down(), Some(3));
    assert_eq!(table.cursor_first(), Some(0));
}

#[test]
fn test_cursor_clamps_when_rows_shrink() {
    let table = DataTable::with_rows(user_columns(), sample_users());
    table.cursor_last();

    table.set_rows(vec![user(1, "Bob", 32), user(2, "Ann", 28)]);
    assert_eq!(table.cursor(), Some(1));

    table.set_rows(Vec::new());
    assert_eq!(table.cursor(), None);
}

#[test]
fn test_cursor_row_follows_sort() {
    let table = DataTable::with_rows(user_columns(), sample_users());
    table.toggle_sort("name");
    table.cursor_first();

    assert_eq!(table.cursor_row().map(|u| u.name), Some("Ann".to_string()));
}

// -----------------------------------------------------------------------------
// Loading and empty states
// -----------------------------------------------------------------------------

#[test]
fn test_loading_takes_precedence_over_data() {
    let table = DataTable::with_rows(user_columns(), sample_users()).with_loading(true);

    let view = table.view(false);
    assert!(view.contains_text("Loading..."));
    assert!(!view.contains_text("Name"));
    assert!(!view.contains_text("Ann"));
}

#[test]
fn test_custom_loading_text() {
    let table = DataTable::<User>::new(user_columns())
        .with_loading(true)
        .with_loading_text("Fetching users...");

    assert!(table.view(false).contains_text("Fetching users..."));
}

#[test]
fn test_empty_state_renders_both_lines() {
    let table = DataTable::<User>::new(user_columns());

    let view = table.view(false);
    assert!(view.contains_text("No data available"));
    assert!(view.contains_text("There are no records to display"));
}

#[test]
fn test_custom_empty_text_keeps_detail_line() {
    let table = DataTable::<User>::new(user_columns()).with_empty_text("No users found");

    let view = table.view(false);
    assert!(view.contains_text("No users found"));
    assert!(view.contains_text("There are no records to display"));
}

#[test]
fn test_loading_wins_over_empty() {
    let table = DataTable::<User>::new(user_columns()).with_loading(true);

    let view = table.view(false);
    assert!(view.contains_text("Loading..."));
    assert!(!view.contains_text("No data available"));
}

// -----------------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------------

#[test]
fn test_view_renders_headers_and_rows() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    let view = table.view(false);
    assert!(view.contains_text("Name"));
    assert!(view.contains_text("Age"));
    assert!(view.contains_text("Ann"));
    assert!(view.contains_text("Eve"));
}

#[test]
fn test_view_shows_sort_indicator() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    table.toggle_sort("name");
    assert!(table.view(false).contains_text("▲"));

    table.toggle_sort("name");
    let view = table.view(false);
    assert!(view.contains_text("▼"));
    assert!(!view.contains_text("▲"));
}

#[test]
fn test_view_with_empty_columns_does_not_panic() {
    let table = DataTable::with_rows(Vec::<Column<User>>::new(), sample_users());
    let _ = table.view(false);
}

#[test]
fn test_missing_values_render_as_empty_string() {
    let columns = vec![
        Column::new("name", "Name", |u: &User| u.name.as_str().into()),
        Column::new("nickname", "Nickname", |_: &User| None::<&str>.into()),
    ];
    let table = DataTable::with_rows(columns, vec![user(1, "Bob", 32)]);

    let view = table.view(false);
    assert!(view.contains_text("Bob"));
    // The nickname column renders but contributes no value text
    assert!(view.contains_text("Nickname"));
}

#[test]
fn test_custom_renderer_receives_sorted_position() {
    let columns = vec![
        Column::new("id", "ID", |u: &User| u.id.into()),
        Column::new("name", "Name", |u: &User| u.name.as_str().into())
            .sortable()
            .render_with(|value, _, index| Node::text(format!("{index}:{value}"))),
    ];
    let table = DataTable::with_rows(columns, sample_users());

    table.toggle_sort("name");
    table.toggle_sort("name");

    let view = table.view(false);
    assert!(view.contains_text("0:Eve"));
    assert!(view.contains_text("3:Ann"));
}

// -----------------------------------------------------------------------------
// Keyboard
// -----------------------------------------------------------------------------

#[test]
fn test_keyboard_moves_cursor() {
    let table = DataTable::with_rows(user_columns(), sample_users());

    assert_eq!(table.on_key(&KeyCombo::key(Key::Down)), EventResult::Consumed);
    assert_eq!(table.cursor(), Some(0));
    assert_eq!(table.on_key(&KeyCombo::key(Key::End)), EventResult::Consumed);
    assert_eq!(table.cursor(), Some(3));
    assert_eq!(table.on_key(&KeyCombo::key(Key::Home)), EventResult::Consumed);
    assert_eq!(table.cursor(), Some(0));
}

#[test]
fn test_keyboard_space_toggles_cursor_row() {
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_selection_mode(SelectionMode::Multiple);

    // No cursor yet, nothing to toggle
    assert_eq!(
        table.on_key(&KeyCombo::key(Key::Char(' '))),
        EventResult::Ignored
    );

    table.cursor_down();
    assert_eq!(
        table.on_key(&KeyCombo::key(Key::Char(' '))),
        EventResult::Consumed
    );
    assert_eq!(table.selected_keys(), vec!["1"]);
}

#[test]
fn test_keyboard_enter_activates_cursor_row() {
    let clicked: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&clicked);
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_on_row_click(move |row: &User, _| {
            sink.lock().unwrap().push(row.name.clone());
        });

    table.cursor_down();
    assert_eq!(table.on_key(&KeyCombo::key(Key::Enter)), EventResult::Consumed);
    assert_eq!(*clicked.lock().unwrap(), vec!["Bob".to_string()]);
}

#[test]
fn test_keyboard_ctrl_a_selects_all_in_multiple_mode() {
    let table = DataTable::with_rows(user_columns(), sample_users())
        .with_selection_mode(SelectionMode::Multiple);

    let combo = KeyCombo::key(Key::Char('a')).ctrl();
    assert_eq!(table.on_key(&combo), EventResult::Consumed);
    assert_eq!(table.selected_count(), 4);

    let single = DataTable::with_rows(user_columns(), sample_users())
        .with_selection_mode(SelectionMode::Single);
    assert_eq!(single.on_key(&combo), EventResult::Ignored);
}

#[test]
fn test_keyboard_ignored_while_loading() {
    let table = DataTable::with_rows(user_columns(), sample_users()).with_loading(true);

    assert_eq!(table.on_key(&KeyCombo::key(Key::Down)), EventResult::Ignored);
}
