use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::{ErrorDisplay, FieldBuilder, ValidationResult, Validator};

/// Callback invoked with the new text after every accepted edit.
pub type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

// =============================================================================
// Configuration enums
// =============================================================================

/// Semantic kind of the field, mirroring the usual form input types.
///
/// The kind only affects presentation (password masking, the visibility
/// affordance) and which validation rules a host typically attaches. The
/// widget never rejects characters based on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
}

/// Visual variant of the field chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Solid surface background.
    Filled,
    /// Underlined field on the terminal background.
    #[default]
    Outlined,
    /// No chrome at all until focused.
    Ghost,
}

/// Size preset controlling padding and minimum field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

// =============================================================================
// Identity
// =============================================================================

/// Unique identifier for an InputField widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputFieldId(usize);

impl InputFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

// =============================================================================
// State
// =============================================================================

/// Internal state for an InputField widget
struct InputFieldInner {
    /// Current text value (the controlled mirror)
    value: String,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Placeholder text shown while the value is empty
    placeholder: String,
    /// Label rendered above the field
    label: Option<String>,
    /// Helper text rendered below the field
    helper_text: Option<String>,
    /// Error message; supersedes the helper text when present
    error_message: Option<String>,
    /// Where the error message renders
    error_display: ErrorDisplay,
    kind: InputKind,
    variant: InputVariant,
    size: InputSize,
    disabled: bool,
    /// Error styling without a message
    invalid: bool,
    read_only: bool,
    required: bool,
    /// Whether the clear affordance is configured at all
    show_clear_button: bool,
    /// Password kind only: false renders the value masked
    value_visible: bool,
    /// Maximum value length in characters; insertions beyond it are rejected
    max_length: Option<usize>,
    /// Minimum length constraint, consumed by host-side validation
    min_length: Option<usize>,
    /// Regex constraint, consumed by host-side validation
    pattern: Option<String>,
    auto_focus: bool,
    /// Form name; used as the field id when no explicit id is set
    name: Option<String>,
    /// Explicit field id; wins over `name`
    field_id: Option<String>,
    on_change: Option<ChangeHandler>,
}

impl Default for InputFieldInner {
    fn default() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: String::new(),
            label: None,
            helper_text: None,
            error_message: None,
            error_display: ErrorDisplay::default(),
            kind: InputKind::default(),
            variant: InputVariant::default(),
            size: InputSize::default(),
            disabled: false,
            invalid: false,
            read_only: false,
            required: false,
            show_clear_button: false,
            value_visible: false,
            max_length: None,
            min_length: None,
            pattern: None,
            auto_focus: false,
            name: None,
            field_id: None,
            on_change: None,
        }
    }
}

/// A single-line text field with a controlled value mirror.
///
/// `InputField` keeps an internal copy of the text. The owner stays in
/// charge of the canonical value: [`set_value`](InputField::set_value)
/// re-synchronizes the mirror without firing `on_change`, while every
/// accepted edit updates the mirror and invokes `on_change` synchronously
/// with the new text.
///
/// # Example
///
/// ```ignore
/// let field = InputField::new()
///     .with_label("Email")
///     .with_kind(InputKind::Email)
///     .with_placeholder("you@example.com")
///     .with_on_change(|value| println!("changed: {value}"));
///
/// field.insert_char('a');
/// assert_eq!(field.value(), "a");
/// ```
pub struct InputField {
    /// Unique identifier for this field instance
    id: InputFieldId,
    /// Internal state
    inner: Arc<RwLock<InputFieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl InputField {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            id: InputFieldId::new(),
            inner: Arc::new(RwLock::new(InputFieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a field with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            id: InputFieldId::new(),
            inner: Arc::new(RwLock::new(InputFieldInner {
                value,
                cursor,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a field with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            id: InputFieldId::new(),
            inner: Arc::new(RwLock::new(InputFieldInner {
                placeholder: placeholder.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Set the label rendered above the field
    pub fn with_label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
        }
        self
    }

    /// Set the helper text rendered below the field
    pub fn with_helper_text(self, text: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper_text = Some(text.into());
        }
        self
    }

    /// Set the error message; supersedes the helper text
    pub fn with_error_message(self, message: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(message.into());
        }
        self
    }

    /// Set the semantic kind
    pub fn with_kind(self, kind: InputKind) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.kind = kind;
        }
        self
    }

    /// Set the visual variant
    pub fn with_variant(self, variant: InputVariant) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
        }
        self
    }

    /// Set the size preset
    pub fn with_size(self, size: InputSize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.size = size;
        }
        self
    }

    /// Mark the field disabled
    pub fn with_disabled(self, disabled: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self
    }

    /// Force error styling without an error message
    pub fn with_invalid(self, invalid: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = invalid;
        }
        self
    }

    /// Mark the field read-only; edits are rejected, cursor movement works
    pub fn with_read_only(self, read_only: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.read_only = read_only;
        }
        self
    }

    /// Mark the field required; appends `*` to the label
    pub fn with_required(self, required: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.required = required;
        }
        self
    }

    /// Enable the clear affordance
    pub fn with_clear_button(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.show_clear_button = true;
        }
        self
    }

    /// Limit the value to `max` characters
    pub fn with_max_length(self, max: usize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.max_length = Some(max);
        }
        self
    }

    /// Record a minimum-length constraint for host-side validation
    pub fn with_min_length(self, min: usize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.min_length = Some(min);
        }
        self
    }

    /// Record a regex constraint for host-side validation
    pub fn with_pattern(self, pattern: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.pattern = Some(pattern.into());
        }
        self
    }

    /// Request focus on mount; hosts read this once when building a screen
    pub fn with_auto_focus(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.auto_focus = true;
        }
        self
    }

    /// Set the form name; doubles as the field id when no explicit id is set
    pub fn with_name(self, name: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.name = Some(name.into());
        }
        self
    }

    /// Set an explicit field id; wins over `name`
    pub fn with_field_id(self, id: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.field_id = Some(id.into());
        }
        self
    }

    /// Set the change handler
    pub fn with_on_change(self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(handler));
        }
        self
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Get the unique instance ID for this field
    pub fn id(&self) -> InputFieldId {
        self.id
    }

    /// Effective field id: explicit id, else the form name, else `__input_N`
    pub fn id_string(&self) -> String {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.field_id.clone().or_else(|| guard.name.clone()))
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Id of the helper/error row below the field
    pub fn help_id(&self) -> String {
        format!("{}-help", self.id_string())
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// The value as it should be displayed, masked for hidden passwords
    pub fn display_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| {
                if guard.kind == InputKind::Password && !guard.value_visible {
                    "•".repeat(guard.value.chars().count())
                } else {
                    guard.value.clone()
                }
            })
            .unwrap_or_default()
    }

    /// Get the placeholder text
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the cursor position (byte offset)
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the length of the current value in bytes
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.len())
            .unwrap_or(0)
    }

    /// Get the label
    pub fn label(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or(None)
    }

    /// Get the helper text
    pub fn helper_text(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.helper_text.clone())
            .unwrap_or(None)
    }

    /// Get the error message
    pub fn error_message(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error_message.clone())
            .unwrap_or(None)
    }

    /// Get the semantic kind
    pub fn kind(&self) -> InputKind {
        self.inner
            .read()
            .map(|guard| guard.kind)
            .unwrap_or_default()
    }

    /// Get the visual variant
    pub fn variant(&self) -> InputVariant {
        self.inner
            .read()
            .map(|guard| guard.variant)
            .unwrap_or_default()
    }

    /// Get the size preset
    pub fn size(&self) -> InputSize {
        self.inner
            .read()
            .map(|guard| guard.size)
            .unwrap_or_default()
    }

    /// Check if the field is disabled
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Check if the field is read-only
    pub fn is_read_only(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.read_only)
            .unwrap_or(false)
    }

    /// Check if the field is required
    pub fn is_required(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.required)
            .unwrap_or(false)
    }

    /// Error styling applies when `invalid` is set or a message is present
    pub fn is_error_state(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.invalid || guard.error_message.is_some())
            .unwrap_or(false)
    }

    /// Check if the masked value is currently revealed
    pub fn is_value_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value_visible)
            .unwrap_or(false)
    }

    /// The clear affordance renders only when configured, enabled and non-empty
    pub fn clear_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_clear_button && !guard.disabled && !guard.value.is_empty())
            .unwrap_or(false)
    }

    /// Get the maximum length in characters, if any
    pub fn max_length(&self) -> Option<usize> {
        self.inner
            .read()
            .map(|guard| guard.max_length)
            .unwrap_or(None)
    }

    /// Get the minimum-length constraint, if any
    pub fn min_length(&self) -> Option<usize> {
        self.inner
            .read()
            .map(|guard| guard.min_length)
            .unwrap_or(None)
    }

    /// Get the regex constraint, if any
    pub fn pattern(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.pattern.clone())
            .unwrap_or(None)
    }

    /// Check if the field requested focus on mount
    pub fn auto_focus(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.auto_focus)
            .unwrap_or(false)
    }

    /// Get the form name
    pub fn name(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.name.clone())
            .unwrap_or(None)
    }

    // -------------------------------------------------------------------------
    // Owner synchronization
    // -------------------------------------------------------------------------

    /// Re-synchronize the mirror from the owner.
    ///
    /// The supplied value wins over anything typed locally. Does not fire
    /// `on_change`; the owner already knows this value.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the placeholder text
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set or clear the disabled flag
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set or clear error styling without a message
    pub fn set_invalid(&self, invalid: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = invalid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set or clear the read-only flag
    pub fn set_read_only(&self, read_only: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.read_only = read_only;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the cursor position, clamped to the value length
    pub fn set_cursor(&self, position: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = position.min(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Text manipulation (called by the host on key events)
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position.
    ///
    /// Rejected while disabled or read-only, and when the value already
    /// holds `max_length` characters. Fires `on_change` when accepted.
    pub fn insert_char(&self, c: char) {
        let mut changed = None;
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled || guard.read_only {
                return;
            }
            if let Some(max) = guard.max_length
                && guard.value.chars().count() >= max
            {
                return;
            }
            let cursor = guard.cursor;
            guard.value.insert(cursor, c);
            guard.cursor += c.len_utf8();
            changed = Some(guard.value.clone());
            self.dirty.store(true, Ordering::SeqCst);
        }
        if let Some(value) = changed {
            self.emit_change(&value);
        }
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before(&self) {
        let mut changed = None;
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled || guard.read_only || guard.cursor == 0 {
                return;
            }
            // Find the previous character boundary
            let prev_cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.value.remove(prev_cursor);
            guard.cursor = prev_cursor;
            changed = Some(guard.value.clone());
            self.dirty.store(true, Ordering::SeqCst);
        }
        if let Some(value) = changed {
            self.emit_change(&value);
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete_char_at(&self) {
        let mut changed = None;
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled || guard.read_only {
                return;
            }
            let cursor = guard.cursor;
            if cursor < guard.value.len() {
                guard.value.remove(cursor);
                changed = Some(guard.value.clone());
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if let Some(value) = changed {
            self.emit_change(&value);
        }
    }

    /// Empty the mirror and fire `on_change` with the empty string.
    ///
    /// Equivalent to deleting all text by hand; a no-op while disabled,
    /// read-only or already empty.
    pub fn clear(&self) {
        let mut changed = false;
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled || guard.read_only || guard.value.is_empty() {
                return;
            }
            guard.value.clear();
            guard.cursor = 0;
            changed = true;
            self.dirty.store(true, Ordering::SeqCst);
        }
        if changed {
            self.emit_change("");
        }
    }

    /// Flip masked display on or off without touching the value.
    ///
    /// Display-only; never fires `on_change`.
    pub fn toggle_visibility(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_visible = !guard.value_visible;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Cursor movement
    // -------------------------------------------------------------------------

    /// Move cursor left
    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            guard.cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor right
    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor < guard.value.len()
        {
            guard.cursor = guard.value[guard.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.cursor + i)
                .unwrap_or(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor != 0
        {
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to end
    pub fn cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.value.len();
            if guard.cursor != end {
                guard.cursor = end;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set the error message; supersedes the helper text.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the error message.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error_message.is_some()
        {
            guard.error_message = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if an error message is set.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error_message.is_some())
            .unwrap_or(false)
    }

    /// Get the error display mode.
    pub fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    /// Set the error display mode.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Build a validator from this field's own constraints.
    ///
    /// Rules derive from `required`, `min_length`, `max_length`, `pattern`
    /// and the `Email` kind, in that order. Further rules can be chained
    /// before calling `validate()`.
    pub fn validator(&self) -> FieldBuilder<InputField> {
        let mut builder = Validator::new().field(self, self.id_string());
        if self.is_required() {
            builder = builder.required("This field is required");
        }
        if let Some(min) = self.min_length() {
            builder = builder.min_length(min, format!("Must be at least {min} characters"));
        }
        if let Some(max) = self.max_length() {
            builder = builder.max_length(max, format!("Must be at most {max} characters"));
        }
        if let Some(pattern) = self.pattern() {
            builder = builder.pattern(&pattern, "Invalid format");
        }
        if self.kind() == InputKind::Email {
            builder = builder.email("Please enter a valid email address");
        }
        builder
    }

    /// Run this field's own constraints, storing the first failure as the
    /// error message and clearing it on success.
    pub fn validate(&self) -> ValidationResult {
        self.validator().validate()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Invoke the change handler outside the lock so it can read the widget.
    fn emit_change(&self, value: &str) {
        let handler = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.on_change.clone());
        if let Some(handler) = handler {
            handler(value);
        }
    }
}

impl Clone for InputField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

use crate::validation::Validatable;

impl Validatable for InputField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        InputField::set_error(self, msg)
    }

    fn clear_error(&self) {
        InputField::clear_error(self)
    }

    fn has_error(&self) -> bool {
        InputField::has_error(self)
    }

    fn error(&self) -> Option<String> {
        self.error_message()
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }

    fn error_display(&self) -> ErrorDisplay {
        InputField::error_display(self)
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        InputField::set_error_display(self, display)
    }
}
