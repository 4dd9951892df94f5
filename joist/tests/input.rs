//! Tests for the InputField controlled mirror, affordances and keyboard
//! handling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use joist::events::{EventResult, WidgetEvents};
use joist::keys::{Key, KeyCombo};
use joist::validation::ErrorDisplay;
use joist::widgets::{InputField, InputKind};

fn change_log(field: InputField) -> (InputField, Arc<Mutex<Vec<String>>>) {
    let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let field = field.with_on_change(move |value| {
        sink.lock().unwrap().push(value.to_string());
    });
    (field, log)
}

fn type_str(field: &InputField, text: &str) {
    for c in text.chars() {
        field.insert_char(c);
    }
}

// -----------------------------------------------------------------------------
// Controlled mirror
// -----------------------------------------------------------------------------

#[test]
fn test_typing_fires_on_change_per_keystroke() {
    let (field, log) = change_log(InputField::new());

    type_str(&field, "abc");

    assert_eq!(field.value(), "abc");
    assert_eq!(*log.lock().unwrap(), vec!["a", "ab", "abc"]);
}

#[test]
fn test_set_value_resyncs_without_firing() {
    let (field, log) = change_log(InputField::new());

    type_str(&field, "local");
    field.set_value("from owner");

    // The owner's value wins and no change event is produced for it
    assert_eq!(field.value(), "from owner");
    assert_eq!(log.lock().unwrap().len(), 5);
}

#[test]
fn test_backspace_and_delete_fire_on_change() {
    let (field, log) = change_log(InputField::with_value("abc"));

    field.delete_char_before();
    assert_eq!(field.value(), "ab");

    field.cursor_home();
    field.delete_char_at();
    assert_eq!(field.value(), "b");

    assert_eq!(*log.lock().unwrap(), vec!["ab", "b"]);
}

#[test]
fn test_deletes_at_boundaries_do_nothing() {
    let (field, log) = change_log(InputField::with_value("a"));

    field.cursor_end();
    field.delete_char_at();
    field.cursor_home();
    field.delete_char_before();

    assert_eq!(field.value(), "a");
    assert!(log.lock().unwrap().is_empty());
}

// -----------------------------------------------------------------------------
// Clear affordance
// -----------------------------------------------------------------------------

#[test]
fn test_clear_fires_once_with_empty_string() {
    let (field, log) = change_log(InputField::with_value("draft").with_clear_button());

    field.clear();
    assert_eq!(field.value(), "");
    assert_eq!(*log.lock().unwrap(), vec![""]);

    // Already empty, nothing more to report
    field.clear();
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_clear_visible_rules() {
    let field = InputField::with_value("text").with_clear_button();
    assert!(field.clear_visible());

    field.set_value("");
    assert!(!field.clear_visible());

    field.set_value("text");
    field.set_disabled(true);
    assert!(!field.clear_visible());

    // Not configured at all
    let plain = InputField::with_value("text");
    assert!(!plain.clear_visible());
}

#[test]
fn test_ctrl_u_clears_only_with_visible_affordance() {
    let (field, log) = change_log(InputField::with_value("draft").with_clear_button());
    let combo = KeyCombo::key(Key::Char('u')).ctrl();

    assert_eq!(field.on_key(&combo), EventResult::Consumed);
    assert_eq!(field.value(), "");
    assert_eq!(*log.lock().unwrap(), vec![""]);

    // Affordance gone once empty
    assert_eq!(field.on_key(&combo), EventResult::Ignored);

    let without = InputField::with_value("draft");
    assert_eq!(without.on_key(&combo), EventResult::Ignored);
    assert_eq!(without.value(), "draft");
}

// -----------------------------------------------------------------------------
// Password visibility
// -----------------------------------------------------------------------------

#[test]
fn test_password_masked_by_default() {
    let field = InputField::with_value("secret").with_kind(InputKind::Password);

    assert!(!field.is_value_visible());
    assert_eq!(field.display_value(), "••••••");
    assert_eq!(field.value(), "secret");
}

#[test]
fn test_toggle_visibility_is_display_only() {
    let (field, log) = change_log(InputField::with_value("secret").with_kind(InputKind::Password));

    field.toggle_visibility();
    assert_eq!(field.display_value(), "secret");

    field.toggle_visibility();
    assert_eq!(field.display_value(), "••••••");

    assert_eq!(field.value(), "secret");
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_ctrl_t_toggles_only_for_password_kind() {
    let password = InputField::with_value("pw").with_kind(InputKind::Password);
    let combo = KeyCombo::key(Key::Char('t')).ctrl();

    assert_eq!(password.on_key(&combo), EventResult::Consumed);
    assert!(password.is_value_visible());

    let text = InputField::with_value("pw");
    assert_eq!(text.on_key(&combo), EventResult::Ignored);
    assert!(!text.is_value_visible());
}

// -----------------------------------------------------------------------------
// Edit rejection
// -----------------------------------------------------------------------------

#[test]
fn test_max_length_rejects_insertions() {
    let (field, log) = change_log(InputField::new().with_max_length(3));

    type_str(&field, "abcdef");

    assert_eq!(field.value(), "abc");
    assert_eq!(log.lock().unwrap().len(), 3);
}

#[test]
fn test_disabled_rejects_edits_and_keys() {
    let (field, log) = change_log(InputField::with_value("keep").with_disabled(true));

    field.insert_char('x');
    field.delete_char_before();
    field.clear();
    assert_eq!(field.value(), "keep");
    assert!(log.lock().unwrap().is_empty());

    assert_eq!(
        field.on_key(&KeyCombo::key(Key::Char('x'))),
        EventResult::Ignored
    );
}

#[test]
fn test_read_only_rejects_edits_but_consumes_keys() {
    let (field, log) = change_log(InputField::with_value("keep").with_read_only(true));

    assert_eq!(
        field.on_key(&KeyCombo::key(Key::Char('x'))),
        EventResult::Consumed
    );
    assert_eq!(field.value(), "keep");
    assert!(log.lock().unwrap().is_empty());

    // Cursor movement still works
    assert_eq!(field.on_key(&KeyCombo::key(Key::Home)), EventResult::Consumed);
    assert_eq!(field.cursor(), 0);
}

// -----------------------------------------------------------------------------
// Cursor
// -----------------------------------------------------------------------------

#[test]
fn test_cursor_ops_are_char_boundary_safe() {
    let field = InputField::with_value("né");

    field.cursor_left();
    assert_eq!(field.cursor(), 1);
    field.cursor_left();
    assert_eq!(field.cursor(), 0);

    field.cursor_right();
    assert_eq!(field.cursor(), 1);
    // Past the two-byte character
    field.cursor_right();
    assert_eq!(field.cursor(), 3);
}

#[test]
fn test_mid_string_insert_and_delete() {
    let field = InputField::with_value("hllo");

    field.cursor_home();
    field.cursor_right();
    field.insert_char('e');
    assert_eq!(field.value(), "hello");
    assert_eq!(field.cursor(), 2);

    field.delete_char_before();
    assert_eq!(field.value(), "hllo");
}

#[test]
fn test_backspace_removes_multibyte_characters() {
    let field = InputField::with_value("né");

    field.delete_char_before();
    assert_eq!(field.value(), "n");
    assert_eq!(field.cursor(), 1);
}

// -----------------------------------------------------------------------------
// Identity
// -----------------------------------------------------------------------------

#[test]
fn test_id_fallback_chain() {
    let explicit = InputField::new()
        .with_name("email")
        .with_field_id("signup-email");
    assert_eq!(explicit.id_string(), "signup-email");

    let named = InputField::new().with_name("email");
    assert_eq!(named.id_string(), "email");

    let generated = InputField::new();
    assert!(generated.id_string().starts_with("__input_"));
}

#[test]
fn test_help_id_derives_from_field_id() {
    let field = InputField::new().with_field_id("signup-email");
    assert_eq!(field.help_id(), "signup-email-help");
}

#[test]
fn test_clones_share_state() {
    let field = InputField::new();
    let handle = field.clone();

    handle.insert_char('x');
    assert_eq!(field.value(), "x");
    assert_eq!(field.id(), handle.id());
}

// -----------------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------------

#[test]
fn test_required_label_gets_marker() {
    let field = InputField::new().with_label("Email").with_required(true);
    assert!(field.view(false).contains_text("Email *"));

    let optional = InputField::new().with_label("Email");
    assert!(!optional.view(false).contains_text("Email *"));
}

#[test]
fn test_error_supersedes_helper() {
    let field = InputField::new()
        .with_helper_text("We never share it")
        .with_error_message("Email is required");

    let view = field.view(false);
    assert!(view.contains_text("Email is required"));
    assert!(!view.contains_text("We never share it"));
}

#[test]
fn test_helper_renders_without_error() {
    let field = InputField::new().with_helper_text("We never share it");
    assert!(field.view(false).contains_text("We never share it"));
}

#[test]
fn test_error_display_none_hides_message() {
    let field = InputField::new().with_error_message("nope");
    field.set_error_display(ErrorDisplay::None);

    assert!(!field.view(false).contains_text("nope"));
}

#[test]
fn test_placeholder_renders_while_empty() {
    let field = InputField::with_placeholder("Search stories");
    assert!(field.view(false).contains_text("Search stories"));

    field.set_value("tables");
    let view = field.view(false);
    assert!(view.contains_text("tables"));
    assert!(!view.contains_text("Search stories"));
}

#[test]
fn test_masked_value_renders_in_view() {
    let field = InputField::with_value("secret").with_kind(InputKind::Password);
    let view = field.view(false);

    assert!(view.contains_text("••••••"));
    assert!(!view.contains_text("secret"));
}

#[test]
fn test_is_error_state_from_flag_or_message() {
    let flagged = InputField::new().with_invalid(true);
    assert!(flagged.is_error_state());

    let messaged = InputField::new().with_error_message("bad");
    assert!(messaged.is_error_state());

    let clean = InputField::new();
    assert!(!clean.is_error_state());
}

// -----------------------------------------------------------------------------
// Change counting
// -----------------------------------------------------------------------------

#[test]
fn test_rejected_edits_fire_nothing() {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    let field = InputField::new()
        .with_max_length(1)
        .with_on_change(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

    field.insert_char('a');
    field.insert_char('b');
    field.insert_char('c');

    assert_eq!(field.value(), "a");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
