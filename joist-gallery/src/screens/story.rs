//! Single-story screen.

use joist::error::{BoundaryErrorKind, catch};
use joist::events::EventResult;
use joist::keys::{Key, KeyCombo};
use joist::node::{Layout, Node};
use joist::style::Style;

use crate::stories::{StoryRegistration, StoryView};

/// What the story screen wants the host loop to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryAction {
    /// Return to the catalog.
    Back,
    /// Nothing to do.
    Continue,
}

/// Shows one story with its title, description and status line.
///
/// Keys go to the story itself; Escape backs out and `r` rebuilds the
/// story from its registration. A panicking story callback lands in a
/// fallback card instead of tearing the gallery down.
pub struct StoryScreen {
    registration: &'static StoryRegistration,
    story: Box<dyn StoryView>,
    failure: Option<String>,
}

impl StoryScreen {
    pub fn new(registration: &'static StoryRegistration) -> Self {
        Self {
            registration,
            story: (registration.build)(),
            failure: None,
        }
    }

    fn rebuild(&mut self) {
        self.story = (self.registration.build)();
        self.failure = None;
    }

    pub fn on_key(&mut self, key: &KeyCombo) -> StoryAction {
        if key.key == Key::Escape && key.modifiers.none() {
            return StoryAction::Back;
        }
        if self.failure.is_some() {
            if key.key == Key::Char('r') && key.modifiers.none() {
                self.rebuild();
            }
            return StoryAction::Continue;
        }

        match catch(BoundaryErrorKind::Handler, || self.story.on_key(key)) {
            Ok(EventResult::Consumed) => {}
            // A story that ignores `r` lets it mean reload
            Ok(EventResult::Ignored) => {
                if key.key == Key::Char('r') && key.modifiers.none() {
                    self.rebuild();
                }
            }
            Err(err) => self.failure = Some(err.message),
        }

        StoryAction::Continue
    }

    pub fn view(&self) -> Node {
        let title = format!("{} / {}", self.registration.component, self.registration.name);
        let header = Node::column(vec![
            Node::text_styled(title, Style::new().bold().fg_named("primary")),
            Node::text_styled(self.registration.description, Style::new().fg_named("muted")),
        ]);

        let body = match &self.failure {
            Some(message) => failure_card(message),
            None => self.story.view(true),
        };

        let status = match self.story.status() {
            Some(text) if self.failure.is_none() => {
                Node::text_styled(text, Style::new().fg_named("muted").italic())
            }
            _ => Node::empty(),
        };

        let footer = Node::row_styled(
            vec![hint("esc", "back"), hint("r", "reload")],
            Style::new(),
            Layout::gap(3),
        );

        Node::column_styled(
            vec![header, body, status, footer],
            Style::new(),
            Layout {
                gap: 1,
                padding: 1,
                ..Layout::default()
            },
        )
    }
}

fn failure_card(message: &str) -> Node {
    Node::column(vec![
        Node::text_styled("Something went wrong", Style::new().bold().fg_named("error")),
        Node::text_styled(message, Style::new().fg_named("muted")),
        Node::text("Press r to reload the story."),
    ])
}

fn hint(key: &str, action: &str) -> Node {
    Node::row_styled(
        vec![
            Node::text_styled(key, Style::new().fg_named("primary")),
            Node::text_styled(action, Style::new().fg_named("muted")),
        ],
        Style::new(),
        Layout::gap(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::registered_stories;

    fn registration(key: &str) -> &'static StoryRegistration {
        registered_stories()
            .into_iter()
            .find(|reg| reg.key() == key)
            .unwrap()
    }

    #[test]
    fn escape_backs_out() {
        let mut screen = StoryScreen::new(registration("InputField/Default"));
        assert_eq!(screen.on_key(&KeyCombo::key(Key::Escape)), StoryAction::Back);
    }

    #[test]
    fn view_names_the_story() {
        let screen = StoryScreen::new(registration("InputField/Default"));
        let node = screen.view();
        assert!(node.contains_text("InputField / Default"));
    }

    #[test]
    fn typed_keys_reach_the_story() {
        let mut screen = StoryScreen::new(registration("InputField/Default"));
        assert_eq!(
            screen.on_key(&KeyCombo::key(Key::Char('h'))),
            StoryAction::Continue
        );
        assert!(screen.view().contains_text("h"));
    }

    #[test]
    fn reload_rebuilds_the_story() {
        let mut screen = StoryScreen::new(registration("InputField/Default"));
        screen.on_key(&KeyCombo::key(Key::Char('h')));
        screen.on_key(&KeyCombo::key(Key::Char('i')));
        // `r` types into a focused input, so reload must not fire here
        screen.on_key(&KeyCombo::key(Key::Char('r')));
        assert!(screen.view().contains_text("hir"));
    }
}
