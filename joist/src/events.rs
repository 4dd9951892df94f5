//! Widget event handling types and traits.
//!
//! Widgets react to keyboard input through [`WidgetEvents::on_key`] and
//! notify their owner through the callbacks stored on the widget itself.

use crate::keys::KeyCombo;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for widgets that handle key events.
///
/// The host loop feeds the focused widget through this trait; a widget
/// returns `Consumed` for keys it acted on so the host can fall through to
/// its own bindings otherwise. The default implementation ignores everything,
/// so widgets only implement the events they care about.
pub trait WidgetEvents {
    /// Handle a key event while this widget is focused.
    fn on_key(&self, _key: &KeyCombo) -> EventResult {
        EventResult::Ignored
    }
}
