//! Event handling for the DataTable widget.

use crate::events::{EventResult, WidgetEvents};
use crate::keys::{Key, KeyCombo};
use crate::selection::SelectionMode;

use super::DataTable;

impl<T: Clone + Send + Sync> WidgetEvents for DataTable<T> {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        // The loading and empty states take no input
        if self.is_loading() || self.is_empty() {
            return EventResult::Ignored;
        }

        if key.modifiers.ctrl {
            return match key.key {
                Key::Char('a') if self.selection_mode() == SelectionMode::Multiple => {
                    self.toggle_select_all();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }
        if key.modifiers.alt {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Up => {
                self.cursor_up();
                EventResult::Consumed
            }
            Key::Down => {
                self.cursor_down();
                EventResult::Consumed
            }
            Key::Home => {
                self.cursor_first();
                EventResult::Consumed
            }
            Key::End => {
                self.cursor_last();
                EventResult::Consumed
            }
            Key::Char(' ') => {
                if self.selection_mode() == SelectionMode::None {
                    return EventResult::Ignored;
                }
                match self.cursor() {
                    Some(cursor) => {
                        self.toggle_row(cursor);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
            Key::Enter => match self.cursor() {
                Some(cursor) => {
                    self.activate_row(cursor);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            // Paging keys respect the footer's disabled guards
            Key::Left => {
                if self.page_prev() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Right => {
                if self.page_next() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }
}
