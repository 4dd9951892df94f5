//! InputField stories.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use joist::events::{EventResult, WidgetEvents};
use joist::keys::{Key, KeyCombo};
use joist::node::{Layout, Node};
use joist::style::Style;
use joist::widgets::{InputField, InputKind, InputSize, InputVariant};

use super::{StoryRegistration, StoryView};

/// A single input field with a change counter in the status line.
struct InputStory {
    field: InputField,
    changes: Arc<AtomicUsize>,
}

impl InputStory {
    fn new(field: InputField) -> Box<dyn StoryView> {
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&changes);
        let field = field.with_on_change(move |value| {
            log::debug!("input changed: {value:?}");
            counter.fetch_add(1, Ordering::SeqCst);
        });
        Box::new(Self { field, changes })
    }
}

impl StoryView for InputStory {
    fn view(&self, focused: bool) -> Node {
        self.field.view(focused)
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        self.field.on_key(key)
    }

    fn status(&self) -> Option<String> {
        let value = self.field.value();
        let changes = self.changes.load(Ordering::SeqCst);
        Some(format!("Value: {value:?} ({changes} changes)"))
    }
}

/// Several fields stacked; Tab cycles which one receives keys.
struct InputGroupStory {
    fields: Vec<InputField>,
    focused: AtomicUsize,
}

impl InputGroupStory {
    fn new(fields: Vec<InputField>) -> Box<dyn StoryView> {
        Box::new(Self {
            fields,
            focused: AtomicUsize::new(0),
        })
    }
}

impl StoryView for InputGroupStory {
    fn view(&self, focused: bool) -> Node {
        let active = self.focused.load(Ordering::SeqCst);
        Node::column_styled(
            self.fields
                .iter()
                .enumerate()
                .map(|(i, field)| field.view(focused && i == active))
                .collect(),
            Style::new(),
            Layout::gap(1),
        )
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        if key.key == Key::Tab && key.modifiers.none() && !self.fields.is_empty() {
            let next = (self.focused.load(Ordering::SeqCst) + 1) % self.fields.len();
            self.focused.store(next, Ordering::SeqCst);
            return EventResult::Consumed;
        }
        let active = self.focused.load(Ordering::SeqCst);
        match self.fields.get(active) {
            Some(field) => field.on_key(key),
            None => EventResult::Ignored,
        }
    }

    fn status(&self) -> Option<String> {
        Some("Tab cycles between the fields".to_string())
    }
}

inventory::submit! {
    StoryRegistration::new("InputField", "Default", "Label, placeholder and helper text", || {
        InputStory::new(
            InputField::with_placeholder("Enter your full name")
                .with_label("Full Name")
                .with_helper_text("This is helper text"),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "WithValue", "Pre-filled email field", || {
        InputStory::new({
            let field = InputField::with_value("john.doe@example.com")
                .with_label("Email")
                .with_kind(InputKind::Email);
            field.set_placeholder("Enter your email");
            field
        })
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "Password", "Masked value, Ctrl+T reveals", || {
        InputStory::new(
            InputField::with_placeholder("Enter your password")
                .with_label("Password")
                .with_kind(InputKind::Password)
                .with_helper_text("Password must be at least 8 characters"),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "WithClearButton", "Clear affordance, Ctrl+U empties", || {
        InputStory::new({
            let field = InputField::with_value("Search term")
                .with_label("Search")
                .with_clear_button();
            field.set_placeholder("Search...");
            field
        })
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "Error", "Invalid state with an error message", || {
        InputStory::new({
            let field = InputField::with_value("invalid-email")
                .with_label("Email")
                .with_invalid(true)
                .with_error_message("Please enter a valid email address");
            field.set_placeholder("Enter your email");
            field
        })
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "Disabled", "Rejects all edits", || {
        InputStory::new({
            let field = InputField::with_value("Cannot edit this")
                .with_label("Disabled Input")
                .with_disabled(true);
            field.set_placeholder("This is disabled");
            field
        })
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "Required", "Label carries the required marker", || {
        InputStory::new(
            InputField::with_placeholder("This field is required")
                .with_label("Required Field")
                .with_required(true)
                .with_helper_text("This field must be filled"),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "FilledVariant", "Solid surface background", || {
        InputStory::new(
            InputField::with_placeholder("This is a filled input")
                .with_label("Filled Input")
                .with_variant(InputVariant::Filled),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "GhostVariant", "No chrome until focused", || {
        InputStory::new(
            InputField::with_placeholder("This is a ghost input")
                .with_label("Ghost Input")
                .with_variant(InputVariant::Ghost),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "SmallSize", "Compact padding and width", || {
        InputStory::new(
            InputField::with_placeholder("Small size")
                .with_label("Small Input")
                .with_size(InputSize::Sm),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "LargeSize", "Generous padding and width", || {
        InputStory::new(
            InputField::with_placeholder("Large size")
                .with_label("Large Input")
                .with_size(InputSize::Lg),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "EmailType", "Email kind for host-side validation", || {
        InputStory::new(
            InputField::with_placeholder("Enter your email")
                .with_label("Email Address")
                .with_kind(InputKind::Email),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "AllVariants", "Outlined, filled and ghost side by side", || {
        InputGroupStory::new(vec![
            InputField::with_placeholder("Outlined variant")
                .with_label("Outlined (Default)")
                .with_variant(InputVariant::Outlined),
            InputField::with_placeholder("Filled variant")
                .with_label("Filled")
                .with_variant(InputVariant::Filled),
            InputField::with_placeholder("Ghost variant")
                .with_label("Ghost")
                .with_variant(InputVariant::Ghost),
        ])
    })
}

inventory::submit! {
    StoryRegistration::new("InputField", "States", "Default, helper, error, disabled, required", || {
        InputGroupStory::new(vec![
            InputField::with_placeholder("Default state").with_label("Default"),
            InputField::with_placeholder("With helper text")
                .with_label("With Helper Text")
                .with_helper_text("This is helper text"),
            InputField::with_placeholder("Error state")
                .with_label("Error State")
                .with_invalid(true)
                .with_error_message("This field has an error"),
            {
                let field = InputField::with_value("Disabled value")
                    .with_label("Disabled")
                    .with_disabled(true);
                field.set_placeholder("Disabled state");
                field
            },
            InputField::with_placeholder("Required field")
                .with_label("Required")
                .with_required(true)
                .with_helper_text("This field is required"),
        ])
    })
}
