//! Gallery screens and the host event loop.

mod catalog;
mod demo;
mod story;

use std::time::Duration;

use joist::error::{BoundaryErrorKind, catch};
use joist::keys::Key;
use joist::node::{Layout, Node};
use joist::style::Style;
use joist::theme::{DefaultTheme, Theme};

use crate::error::GalleryError;
use crate::stories;
use crate::term::Terminal;

pub use catalog::{CatalogAction, CatalogScreen};
pub use demo::{DemoAction, DemoScreen};
pub use story::{StoryAction, StoryScreen};

enum Screen {
    Catalog,
    Story(StoryScreen),
    Demo(DemoScreen),
    Failed(String),
}

/// Run the gallery until the user quits.
///
/// `initial_story` skips the catalog and opens the story with that
/// `Component/Name` key directly.
pub fn run(initial_story: Option<String>) -> Result<(), GalleryError> {
    let mut terminal = Terminal::new()?;
    let mut catalog = CatalogScreen::new();
    let mut screen = Screen::Catalog;
    let mut dark = true;

    if let Some(wanted) = initial_story {
        match stories::registered_stories()
            .into_iter()
            .find(|reg| reg.key() == wanted)
        {
            Some(reg) => screen = Screen::Story(StoryScreen::new(reg)),
            None => log::warn!("no story named {wanted:?}, starting at the catalog"),
        }
    }

    loop {
        if let Screen::Demo(demo) = &mut screen {
            demo.tick();
        }

        let theme: Box<dyn Theme> = if dark {
            Box::new(DefaultTheme::dark())
        } else {
            Box::new(DefaultTheme::light())
        };

        // A panicking view falls back to the failure screen instead of
        // leaving the terminal in raw mode
        let view = catch(BoundaryErrorKind::Render, || match &screen {
            Screen::Catalog => catalog.view(),
            Screen::Story(story) => story.view(),
            Screen::Demo(demo) => demo.view(),
            Screen::Failed(message) => failed_view(message),
        });
        match view {
            Ok(node) => terminal.draw(&node, theme.as_ref())?,
            Err(err) => {
                let node = failed_view(&err.message);
                terminal.draw(&node, theme.as_ref())?;
                screen = Screen::Failed(err.message);
            }
        }

        let timeout = match &screen {
            Screen::Demo(demo) => demo.poll_timeout(),
            _ => Duration::from_millis(250),
        };
        let Some(key) = terminal.poll(timeout)? else {
            continue;
        };

        if key.key == Key::F(5) && key.modifiers.none() {
            dark = !dark;
            continue;
        }

        match &mut screen {
            Screen::Catalog => match catalog.on_key(&key) {
                CatalogAction::Open(reg) => screen = Screen::Story(StoryScreen::new(reg)),
                CatalogAction::OpenDemo => screen = Screen::Demo(DemoScreen::new()),
                CatalogAction::Quit => break,
                CatalogAction::Continue => {}
            },
            Screen::Story(story) => {
                if story.on_key(&key) == StoryAction::Back {
                    screen = Screen::Catalog;
                }
            }
            Screen::Demo(demo) => {
                if demo.on_key(&key) == DemoAction::Back {
                    screen = Screen::Catalog;
                }
            }
            Screen::Failed(_) => match key.key {
                Key::Char('r') if key.modifiers.none() => {
                    catalog = CatalogScreen::new();
                    screen = Screen::Catalog;
                }
                Key::Escape => break,
                _ => {}
            },
        }
    }

    Ok(())
}

fn failed_view(message: &str) -> Node {
    Node::column_styled(
        vec![
            Node::text_styled("Something went wrong", Style::new().bold().fg_named("error")),
            Node::text_styled(message, Style::new().fg_named("muted")),
            Node::text("Press r to return to the catalog, Esc to quit."),
        ],
        Style::new(),
        Layout {
            gap: 1,
            padding: 1,
            ..Layout::default()
        },
    )
}
