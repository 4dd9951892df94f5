//! Event handling for the InputField widget.

use crate::events::{EventResult, WidgetEvents};
use crate::keys::{Key, KeyCombo};

use super::{InputField, InputKind};

impl WidgetEvents for InputField {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        // A disabled field swallows nothing
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        // Ctrl shortcuts drive the clear and visibility affordances; they
        // only respond while the matching affordance is present
        if key.modifiers.ctrl {
            return match key.key {
                Key::Char('u') if self.clear_visible() => {
                    self.clear();
                    EventResult::Consumed
                }
                Key::Char('t') if self.kind() == InputKind::Password => {
                    self.toggle_visibility();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }
        if key.modifiers.alt {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Backspace => {
                self.delete_char_before();
                EventResult::Consumed
            }
            Key::Delete => {
                self.delete_char_at();
                EventResult::Consumed
            }
            Key::Left => {
                self.cursor_left();
                EventResult::Consumed
            }
            Key::Right => {
                self.cursor_right();
                EventResult::Consumed
            }
            Key::Home => {
                self.cursor_home();
                EventResult::Consumed
            }
            Key::End => {
                self.cursor_end();
                EventResult::Consumed
            }
            Key::Char(c) => {
                // Read-only rejects the edit in the state layer; the key is
                // still ours, not the host's
                self.insert_char(c);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
