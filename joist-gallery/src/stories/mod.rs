//! Story catalog.
//!
//! Each story is a named, self-contained widget configuration. Stories
//! register themselves through `inventory::submit!` in the per-component
//! modules and the catalog screen lists whatever was collected.

mod input;
mod table;

use joist::events::EventResult;
use joist::keys::KeyCombo;
use joist::node::Node;

/// A live story instance: something the story screen can draw and feed keys.
pub trait StoryView: Send + Sync {
    /// Render the story's widget tree.
    fn view(&self, focused: bool) -> Node;

    /// Handle a key while the story has focus.
    fn on_key(&self, key: &KeyCombo) -> EventResult;

    /// One-line live status shown under the widget, if the story has one.
    fn status(&self) -> Option<String> {
        None
    }
}

/// Story registration entry for inventory.
pub struct StoryRegistration {
    /// Component the story belongs to.
    pub component: &'static str,
    /// Story name within the component.
    pub name: &'static str,
    /// One-line description shown in the catalog.
    pub description: &'static str,
    /// Factory building a fresh instance of the story.
    pub build: fn() -> Box<dyn StoryView>,
}

impl StoryRegistration {
    /// Create a new story registration.
    pub const fn new(
        component: &'static str,
        name: &'static str,
        description: &'static str,
        build: fn() -> Box<dyn StoryView>,
    ) -> Self {
        Self {
            component,
            name,
            description,
            build,
        }
    }

    /// Catalog key, unique across components.
    pub fn key(&self) -> String {
        format!("{}/{}", self.component, self.name)
    }
}

inventory::collect!(StoryRegistration);

/// All registered stories, grouped by component and sorted by name.
pub fn registered_stories() -> Vec<&'static StoryRegistration> {
    let mut stories: Vec<&'static StoryRegistration> =
        inventory::iter::<StoryRegistration>().collect();
    stories.sort_by_key(|s| (s.component, s.name));
    stories
}
